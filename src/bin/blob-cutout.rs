use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blob_cutout::classify::{DEFAULT_BRIGHT_THRESHOLD, DEFAULT_DARK_THRESHOLD};
use blob_cutout::select::DEFAULT_SECONDARY_RATIO;
use blob_cutout::{
    default_output_path, process_directory, process_file, ExtractOptions, ProcessResult,
    Thresholds,
};

/// Exit status when every file was written but at least one had no subject.
const EXIT_NO_SUBJECT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "blob-cutout",
    about = "Cut a dark/bright subject out of a flat-color background",
    version,
    after_help = "Simple usage: blob-cutout <image>  (writes <image>_transparent.png)\n\n\
                  Exit status: 0 on success, 1 on read/write failure, \
                  2 if no foreground subject was found."
)]
struct Cli {
    /// Input image file or directory
    input: String,

    /// Output file or directory (default: {name}_transparent.png)
    #[arg(short, long)]
    output: Option<String>,

    /// Pixels with all of R, G, B below this value are kept
    #[arg(long, default_value_t = DEFAULT_DARK_THRESHOLD)]
    dark: u8,

    /// Pixels with all of R, G, B above this value are kept
    #[arg(long, default_value_t = DEFAULT_BRIGHT_THRESHOLD)]
    bright: u8,

    /// Restore the second largest blob if larger than this fraction of the main blob
    #[arg(long, default_value_t = DEFAULT_SECONDARY_RATIO)]
    secondary_ratio: f32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "blob_cutout=debug"
    } else {
        "blob_cutout=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let opts = ExtractOptions {
        thresholds: Thresholds {
            dark: cli.dark,
            bright: cli.bright,
        },
        secondary_ratio: cli.secondary_ratio,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    if let Err(e) = opts.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let input_path = Path::new(&cli.input);
    if !input_path.exists() {
        eprintln!("Error: Input path does not exist: {}", cli.input);
        process::exit(1);
    }

    let results = if input_path.is_dir() {
        let output_dir = if let Some(o) = &cli.output {
            PathBuf::from(o)
        } else {
            eprintln!("Error: Output directory is required for batch processing");
            eprintln!("Usage: blob-cutout <input_dir> -o <output_dir>");
            process::exit(1);
        };
        match process_directory(input_path, &output_dir, &opts) {
            Ok(results) => results,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else {
        let output_path = match &cli.output {
            Some(o) => PathBuf::from(o),
            None => default_output_path(input_path),
        };
        vec![process_file(input_path, &output_path, &opts)]
    };

    let mut success_count = 0u32;
    let mut empty_count = 0u32;
    let mut fail_count = 0u32;

    for r in &results {
        print_result(r, &opts);
        if !r.success {
            fail_count += 1;
        } else if r.no_subject() {
            empty_count += 1;
        } else {
            success_count += 1;
        }
    }

    if results.len() > 1 && !opts.quiet {
        println!();
        print!("[Summary] Extracted: {success_count}");
        if empty_count > 0 {
            print!(", No subject: {empty_count}");
        }
        if fail_count > 0 {
            print!(", Failed: {fail_count}");
        }
        println!(" (Total: {})", results.len());
    }

    if fail_count > 0 {
        process::exit(1);
    }
    if empty_count > 0 {
        process::exit(EXIT_NO_SUBJECT);
    }
}

fn print_result(result: &ProcessResult, opts: &ExtractOptions) {
    let filename = result.path.file_name().map_or_else(
        || result.path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    );

    if !result.success {
        eprintln!("[FAIL] {filename}: {}", result.message);
        return;
    }
    if opts.quiet {
        return;
    }

    let report = &result.report;
    if report.subject_found() {
        println!(
            "Found {} disconnected parts. Keeping largest with {} pixels.",
            report.blob_count, report.main_blob_size
        );
        if let Some(size) = report.secondary_blob_size {
            println!("Restoring detached part with {size} pixels.");
        }
    } else {
        println!("No subject found!");
    }

    if opts.verbose {
        println!(
            "  -> {filename}: {}x{}, {} kept, {} selected",
            report.width, report.height, report.kept_pixels, report.selected_pixels
        );
    }
    println!("Cleaned image saved to {}", result.output.display());
}
