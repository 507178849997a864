//! Cut a foreground subject out of a flat-color background.
//!
//! Pixels are classified as foreground when they are clearly dark or clearly
//! bright; everything else (a saturated backdrop, mid-gray) is background.
//! The kept pixels are split into 4-connected blobs, the largest blob is
//! kept, and a second blob is restored if it is large enough relative to the
//! first. The result is a same-size RGBA image where everything else is
//! fully transparent.
//!
//! # Quick Start
//!
//! ```no_run
//! use blob_cutout::{extract, ExtractOptions};
//!
//! let img = image::open("logo.png").unwrap().to_rgba8();
//! let (cutout, report) = extract(&img, &ExtractOptions::default());
//! println!("{} blobs, main blob {} px", report.blob_count, report.main_blob_size);
//! cutout.save("logo_transparent.png").unwrap();
//! ```
//!
//! # Stages
//!
//! Each stage is usable on its own:
//!
//! ```
//! use blob_cutout::{classify, label_components, reconstruct, select, Thresholds};
//! use image::{Rgba, RgbaImage};
//!
//! let mut img = RgbaImage::from_pixel(5, 5, Rgba([255, 255, 0, 255]));
//! img.put_pixel(2, 2, Rgba([0, 0, 0, 255]));
//!
//! let membership = classify(&img, &Thresholds::default());
//! let blobs = label_components(&membership);
//! let selection = select(blobs, img.width(), img.height(), 0.05);
//! let out = reconstruct(&img, selection.mask());
//! assert_eq!(out.get_pixel(2, 2), &Rgba([0, 0, 0, 255]));
//! assert_eq!(out.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
//! ```

#![deny(missing_docs)]

pub mod classify;
mod engine;
pub mod error;
pub mod label;
pub mod mask;
pub mod reconstruct;
pub mod select;

pub use classify::{classify, Thresholds};
pub use engine::{
    default_output_path, extract, extract_file, is_supported_image, load_image,
    process_directory, process_file, save_png, ExtractOptions, ExtractReport, ProcessResult,
};
pub use error::{Error, Result};
pub use label::{label_components, Blob, BoundingBox};
pub use mask::{PixelMask, Point};
pub use reconstruct::reconstruct;
pub use select::{select, Selection};
