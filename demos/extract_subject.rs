//! Cut the subject out of a single image.
//!
//! Usage:
//! ```sh
//! cargo run --example extract_subject -- input.png output.png
//! ```

use std::env;
use std::process;

use blob_cutout::{extract_file, ExtractOptions};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input> <output>", args[0]);
        process::exit(1);
    }

    let input = &args[1];
    let output = &args[2];

    match extract_file(input.as_ref(), output.as_ref(), &ExtractOptions::default()) {
        Ok(report) if report.subject_found() => {
            println!(
                "Done: kept {} of {} blobs ({} pixels)",
                1 + usize::from(report.secondary_blob_size.is_some()),
                report.blob_count,
                report.selected_pixels
            );
        }
        Ok(_) => {
            println!("No subject found, wrote a transparent image");
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
