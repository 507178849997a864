//! Size-ranked blob selection.
//!
//! The largest blob is always kept. The second largest is restored too when
//! it holds strictly more than `secondary_ratio` times the main blob's
//! pixel count; this catches parts of the subject (an eye, a highlight)
//! that are separated from the body by discarded pixels.

use std::cmp::Reverse;

use crate::label::Blob;
use crate::mask::PixelMask;

/// Default relative size a second blob must exceed to be restored.
pub const DEFAULT_SECONDARY_RATIO: f32 = 0.05;

/// The pixels chosen for the output, plus what the choice was based on.
#[derive(Debug, Clone)]
pub struct Selection {
    mask: PixelMask,
    blob_count: usize,
    main_size: usize,
    secondary_size: Option<usize>,
}

impl Selection {
    /// Union of the chosen blobs.
    #[must_use]
    pub fn mask(&self) -> &PixelMask {
        &self.mask
    }

    /// Number of blobs that were ranked.
    #[must_use]
    pub fn blob_count(&self) -> usize {
        self.blob_count
    }

    /// Pixel count of the main blob; 0 when nothing was found.
    #[must_use]
    pub fn main_size(&self) -> usize {
        self.main_size
    }

    /// Pixel count of the restored second blob, if any.
    #[must_use]
    pub fn secondary_size(&self) -> Option<usize> {
        self.secondary_size
    }

    /// Whether any foreground blob was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }
}

/// Rank `blobs` by size and keep the main blob and, conditionally, the
/// runner-up.
///
/// `width` and `height` size the resulting mask and must match the mask the
/// blobs were labeled from. Among equal-size blobs the one that comes first
/// in `blobs` wins, so the result is reproducible for a fixed labeling order.
///
/// # Panics
///
/// Panics if a selected blob has a pixel outside `width` x `height`.
#[must_use]
pub fn select(mut blobs: Vec<Blob>, width: u32, height: u32, secondary_ratio: f32) -> Selection {
    let blob_count = blobs.len();
    let mut mask = PixelMask::new(width, height);

    // Stable, so ties keep discovery order.
    blobs.sort_by_key(|b| Reverse(b.len()));

    let Some(main) = blobs.first() else {
        return Selection {
            mask,
            blob_count,
            main_size: 0,
            secondary_size: None,
        };
    };

    let main_size = main.len();
    for p in main.pixels() {
        mask.insert(p.x, p.y);
    }
    if let Some(bbox) = main.bounding_box() {
        tracing::debug!(size = main_size, ?bbox, "selected main blob");
    }

    #[allow(clippy::cast_precision_loss)]
    let min_secondary = main_size as f64 * f64::from(secondary_ratio);
    let secondary_size = blobs.get(1).and_then(|second| {
        #[allow(clippy::cast_precision_loss)]
        let qualifies = second.len() as f64 > min_secondary;
        if !qualifies {
            return None;
        }
        for p in second.pixels() {
            mask.insert(p.x, p.y);
        }
        tracing::info!(
            size = second.len(),
            main = main_size,
            bbox = ?second.bounding_box(),
            "restored detached secondary blob"
        );
        Some(second.len())
    });

    Selection {
        mask,
        blob_count,
        main_size,
        secondary_size,
    }
}
