//! Pixel classification by per-channel brightness thresholds.
//!
//! A pixel is kept when it is either dark (all of R, G, B strictly below
//! [`Thresholds::dark`]) or bright (all of R, G, B strictly above
//! [`Thresholds::bright`]). Alpha is ignored. Everything in between is
//! treated as background.

use image::{Rgba, RgbaImage};

use crate::mask::PixelMask;

/// Default dark threshold: channels must all be below this to count as dark.
pub const DEFAULT_DARK_THRESHOLD: u8 = 90;

/// Default bright threshold: channels must all be above this to count as bright.
pub const DEFAULT_BRIGHT_THRESHOLD: u8 = 200;

/// Brightness thresholds used to classify pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Exclusive upper bound for dark pixels.
    pub dark: u8,
    /// Exclusive lower bound for bright pixels.
    pub bright: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            dark: DEFAULT_DARK_THRESHOLD,
            bright: DEFAULT_BRIGHT_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Whether a pixel belongs to the foreground.
    #[must_use]
    #[inline]
    pub fn is_kept(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        let dark = r < self.dark && g < self.dark && b < self.dark;
        let bright = r > self.bright && g > self.bright && b > self.bright;
        dark || bright
    }
}

/// Build the membership mask of kept pixels.
///
/// An empty image yields an empty mask.
#[must_use]
pub fn classify(image: &RgbaImage, thresholds: &Thresholds) -> PixelMask {
    let mut mask = PixelMask::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        if thresholds.is_kept(pixel) {
            mask.insert(x, y);
        }
    }

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        kept = mask.len(),
        dark = thresholds.dark,
        bright = thresholds.bright,
        "classified pixels"
    );
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_bright_pixels_are_kept() {
        let t = Thresholds::default();
        assert!(t.is_kept(&Rgba([0, 0, 0, 255])));
        assert!(t.is_kept(&Rgba([89, 89, 89, 255])));
        assert!(t.is_kept(&Rgba([255, 255, 255, 255])));
        assert!(t.is_kept(&Rgba([201, 201, 201, 0])));
    }

    #[test]
    fn threshold_values_are_exclusive() {
        let t = Thresholds::default();
        assert!(!t.is_kept(&Rgba([90, 90, 90, 255])));
        assert!(!t.is_kept(&Rgba([200, 200, 200, 255])));
        assert!(!t.is_kept(&Rgba([89, 89, 90, 255])));
        assert!(!t.is_kept(&Rgba([201, 200, 201, 255])));
    }

    #[test]
    fn saturated_colors_are_discarded() {
        let t = Thresholds::default();
        // Yellow background: bright in R and G but not B.
        assert!(!t.is_kept(&Rgba([255, 255, 0, 255])));
        assert!(!t.is_kept(&Rgba([0, 0, 255, 255])));
        assert!(!t.is_kept(&Rgba([128, 128, 128, 255])));
    }

    #[test]
    fn alpha_does_not_affect_classification() {
        let t = Thresholds::default();
        assert!(t.is_kept(&Rgba([10, 10, 10, 0])));
        assert!(!t.is_kept(&Rgba([128, 128, 128, 0])));
    }

    #[test]
    fn custom_thresholds_are_honored() {
        let t = Thresholds { dark: 10, bright: 250 };
        assert!(!t.is_kept(&Rgba([20, 20, 20, 255])));
        assert!(!t.is_kept(&Rgba([240, 240, 240, 255])));
        assert!(t.is_kept(&Rgba([5, 5, 5, 255])));
        assert!(t.is_kept(&Rgba([251, 251, 251, 255])));
    }

    #[test]
    fn classify_marks_exactly_kept_coordinates() {
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 0, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(2, 1, Rgba([255, 255, 255, 128]));

        let mask = classify(&img, &Thresholds::default());
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(0, 0));
        assert!(mask.contains(2, 1));
        assert!(!mask.contains(1, 0));
    }

    #[test]
    fn classify_empty_image_is_empty() {
        let img = RgbaImage::new(0, 0);
        let mask = classify(&img, &Thresholds::default());
        assert!(mask.is_empty());
    }
}
