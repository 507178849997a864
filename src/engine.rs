//! Pipeline orchestration and file-level processing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::classify::{classify, Thresholds};
use crate::error::{Error, Result};
use crate::label::label_components;
use crate::reconstruct::reconstruct;
use crate::select::{select, DEFAULT_SECONDARY_RATIO};

/// Options controlling subject extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Brightness thresholds used to classify foreground pixels.
    pub thresholds: Thresholds,
    /// A second blob is restored when larger than this fraction of the main blob.
    pub secondary_ratio: f32,
    /// Enable verbose logging.
    pub verbose: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            secondary_ratio: DEFAULT_SECONDARY_RATIO,
            verbose: false,
            quiet: false,
        }
    }
}

impl ExtractOptions {
    /// Check that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRatio`] if `secondary_ratio` is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.secondary_ratio.is_finite() || self.secondary_ratio < 0.0 {
            return Err(Error::InvalidRatio(self.secondary_ratio));
        }
        Ok(())
    }
}

/// Summary of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixels that passed the brightness thresholds.
    pub kept_pixels: usize,
    /// Number of disconnected blobs among the kept pixels.
    pub blob_count: usize,
    /// Size of the largest blob.
    pub main_blob_size: usize,
    /// Size of the restored second blob, if one qualified.
    pub secondary_blob_size: Option<usize>,
    /// Pixels copied into the output.
    pub selected_pixels: usize,
}

impl ExtractReport {
    /// Whether any foreground subject was found.
    #[must_use]
    pub fn subject_found(&self) -> bool {
        self.blob_count > 0
    }
}

/// Result of processing a single image file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the processed file.
    pub path: PathBuf,
    /// Path the output was (or would have been) written to.
    pub output: PathBuf,
    /// Whether decoding and encoding succeeded.
    pub success: bool,
    /// Counts gathered during extraction; default when processing failed early.
    pub report: ExtractReport,
    /// Human-readable status message.
    pub message: String,
}

impl ProcessResult {
    /// Whether the file was written but contained no foreground subject.
    #[must_use]
    pub fn no_subject(&self) -> bool {
        self.success && !self.report.subject_found()
    }
}

/// Run the in-memory pipeline: classify, label, select, reconstruct.
///
/// Never fails; an image with no kept pixels produces a fully transparent
/// output and a report whose [`ExtractReport::subject_found`] is `false`.
#[must_use]
pub fn extract(image: &RgbaImage, opts: &ExtractOptions) -> (RgbaImage, ExtractReport) {
    let (width, height) = image.dimensions();
    let membership = classify(image, &opts.thresholds);
    let kept_pixels = membership.len();

    let blobs = label_components(&membership);
    let selection = select(blobs, width, height, opts.secondary_ratio);
    let output = reconstruct(image, selection.mask());

    let report = ExtractReport {
        width,
        height,
        kept_pixels,
        blob_count: selection.blob_count(),
        main_blob_size: selection.main_size(),
        secondary_blob_size: selection.secondary_size(),
        selected_pixels: selection.mask().len(),
    };

    if !report.subject_found() {
        tracing::warn!(width, height, "no foreground subject detected");
    }

    (output, report)
}

/// Decode `input`, extract its subject, and write the result to `output` as PNG.
///
/// Missing parent directories of `output` are created.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the input cannot be read, [`Error::CreateDir`]
/// if the destination directory cannot be created, and [`Error::Encode`] if
/// the PNG cannot be written. Nothing is written when decoding fails.
pub fn extract_file(input: &Path, output: &Path, opts: &ExtractOptions) -> Result<ExtractReport> {
    let image = load_image(input)?;
    let (result, report) = extract(&image, opts);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    save_png(&result, output)?;

    tracing::debug!(output = %output.display(), "wrote output image");
    Ok(report)
}

/// Process a single image file, capturing the outcome as a [`ProcessResult`].
#[must_use]
pub fn process_file(input: &Path, output: &Path, opts: &ExtractOptions) -> ProcessResult {
    let mut result = ProcessResult {
        path: input.to_path_buf(),
        output: output.to_path_buf(),
        success: false,
        report: ExtractReport::default(),
        message: String::new(),
    };

    match extract_file(input, output, opts) {
        Ok(report) => {
            result.success = true;
            result.message = if report.subject_found() {
                "Subject extracted".to_string()
            } else {
                "No subject found".to_string()
            };
            result.report = report;
        }
        Err(e) => {
            tracing::error!(input = %input.display(), error = %e, "processing failed");
            result.message = e.to_string();
        }
    }

    result
}

/// Process all supported images in a directory into `output_dir`.
///
/// Each output is named `{stem}.png`. Inputs whose stems map to the same
/// output (`logo.png` and `logo.bmp`) are all reported as failed and none of
/// them is written. Uses parallel iteration when the `cli` feature is enabled
/// (via rayon).
///
/// # Errors
///
/// Returns [`Error::ReadDir`] if `input_dir` cannot be listed, or
/// [`Error::CreateDir`] if `output_dir` cannot be created. Per-file failures
/// are reported in the returned results instead.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    opts: &ExtractOptions,
) -> Result<Vec<ProcessResult>> {
    let read_dir = std::fs::read_dir(input_dir).map_err(|source| Error::ReadDir {
        path: input_dir.to_path_buf(),
        source,
    })?;
    let mut inputs: Vec<PathBuf> = read_dir
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| is_supported_image(p))
        .collect();
    inputs.sort();

    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;
    }

    tracing::debug!(
        input = %input_dir.display(),
        files = inputs.len(),
        "processing directory"
    );

    let jobs: Vec<(PathBuf, PathBuf)> = inputs
        .into_iter()
        .map(|input| {
            let stem = input.file_stem().unwrap_or_default().to_string_lossy();
            let output = output_dir.join(format!("{stem}.png"));
            (input, output)
        })
        .collect();

    let mut claims: HashMap<&Path, Vec<&Path>> = HashMap::new();
    for (input, output) in &jobs {
        claims.entry(output.as_path()).or_default().push(input.as_path());
    }

    let run = |(input, output): &(PathBuf, PathBuf)| {
        let claimants = &claims[output.as_path()];
        if claimants.len() > 1 {
            return collision_result(input, output, claimants);
        }
        process_file(input, output, opts)
    };

    #[cfg(feature = "cli")]
    {
        use rayon::prelude::*;
        Ok(jobs.par_iter().map(run).collect())
    }

    #[cfg(not(feature = "cli"))]
    {
        Ok(jobs.iter().map(run).collect())
    }
}

/// Failed result for an input whose output path is shared with other inputs.
///
/// None of the colliding inputs is written.
fn collision_result(input: &Path, output: &Path, claimants: &[&Path]) -> ProcessResult {
    let others: Vec<String> = claimants
        .iter()
        .filter(|p| **p != input)
        .map(|p| {
            p.file_name()
                .map_or_else(|| p.display().to_string(), |f| f.to_string_lossy().to_string())
        })
        .collect();
    tracing::error!(
        input = %input.display(),
        output = %output.display(),
        "output name collides with another input"
    );
    ProcessResult {
        path: input.to_path_buf(),
        output: output.to_path_buf(),
        success: false,
        report: ExtractReport::default(),
        message: format!(
            "output name {} collides with {}",
            output.display(),
            others.join(", ")
        ),
    }
}

/// Decode an image file into RGBA.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file is missing or in an unsupported format.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Save an RGBA image as PNG, regardless of the path's extension.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the file cannot be created or written.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Check if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "webp" | "bmp"
        ),
        None => false,
    }
}

/// Generate a default output path from an input path.
///
/// Example: `"bird.jpg"` becomes `"bird_transparent.png"`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}_transparent.png"))
}
