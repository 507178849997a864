//! Output image reconstruction.

use image::{Rgba, RgbaImage};

use crate::mask::PixelMask;

/// The fully transparent pixel written for every unselected coordinate.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Build a new image of the same size where selected pixels are copied
/// verbatim (alpha included) and every other pixel is [`TRANSPARENT`].
///
/// `selection` must have the same dimensions as `image`.
#[must_use]
pub fn reconstruct(image: &RgbaImage, selection: &PixelMask) -> RgbaImage {
    debug_assert_eq!(image.width(), selection.width());
    debug_assert_eq!(image.height(), selection.height());

    let mut output = RgbaImage::from_pixel(image.width(), image.height(), TRANSPARENT);
    for p in selection.iter() {
        output.put_pixel(p.x, p.y, *image.get_pixel(p.x, p.y));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_pixels_become_transparent() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 0, 255]));
        let out = reconstruct(&img, &PixelMask::new(3, 3));
        assert_eq!(out.dimensions(), (3, 3));
        assert!(out.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn selected_pixels_keep_color_and_alpha() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 0, 255]));
        img.put_pixel(1, 0, Rgba([10, 20, 30, 77]));
        let mut sel = PixelMask::new(2, 2);
        sel.insert(1, 0);

        let out = reconstruct(&img, &sel);
        assert_eq!(*out.get_pixel(1, 0), Rgba([10, 20, 30, 77]));
        assert_eq!(*out.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*out.get_pixel(1, 1), TRANSPARENT);
    }

    #[test]
    fn empty_image_reconstructs_to_empty() {
        let out = reconstruct(&RgbaImage::new(0, 0), &PixelMask::new(0, 0));
        assert_eq!(out.dimensions(), (0, 0));
    }
}
