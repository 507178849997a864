//! Connected-component labeling over a membership mask.
//!
//! Partitions the kept pixels into maximal 4-connected regions ("blobs")
//! using an explicit-stack flood fill, so arbitrarily large regions never
//! grow the call stack.

use crate::mask::{PixelMask, Point};

/// Inclusive pixel extent of a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Leftmost column.
    pub min_x: u32,
    /// Topmost row.
    pub min_y: u32,
    /// Rightmost column.
    pub max_x: u32,
    /// Bottom row.
    pub max_y: u32,
}

impl BoundingBox {
    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// One maximal 4-connected region of kept pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pixels: Vec<Point>,
}

impl Blob {
    /// Number of pixels in the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always `false` for blobs produced by [`label_components`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixels in discovery order; the first one is the seed.
    #[must_use]
    pub fn pixels(&self) -> &[Point] {
        &self.pixels
    }

    /// Inclusive extent of the blob, or `None` if it is empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.pixels.first()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(self.pixels.iter().fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }
}

/// Split the mask into its 4-connected components.
///
/// Seeds are taken in row-major order, so the output order is deterministic
/// for a given mask. An empty mask yields no blobs.
#[must_use]
pub fn label_components(mask: &PixelMask) -> Vec<Blob> {
    let mut visited = vec![false; mask.width() as usize * mask.height() as usize];
    let mut stack: Vec<Point> = Vec::new();
    let mut blobs = Vec::new();

    for seed in mask.iter() {
        let seed_idx = mask.index(seed.x, seed.y);
        if visited[seed_idx] {
            continue;
        }
        visited[seed_idx] = true;
        stack.push(seed);

        let mut pixels = vec![seed];
        while let Some(current) = stack.pop() {
            for next in neighbors(current) {
                if !mask.contains(next.x, next.y) {
                    continue;
                }
                let idx = mask.index(next.x, next.y);
                if !visited[idx] {
                    visited[idx] = true;
                    pixels.push(next);
                    stack.push(next);
                }
            }
        }

        blobs.push(Blob { pixels });
    }

    tracing::debug!(kept = mask.len(), blobs = blobs.len(), "labeled components");
    blobs
}

/// The up-to-four axis-aligned neighbors of `p` that do not underflow.
///
/// Overflow past the far edge is left to the caller's bounds check.
#[inline]
fn neighbors(p: Point) -> impl Iterator<Item = Point> {
    [
        p.x.checked_sub(1).map(|x| Point::new(x, p.y)),
        p.x.checked_add(1).map(|x| Point::new(x, p.y)),
        p.y.checked_sub(1).map(|y| Point::new(p.x, y)),
        p.y.checked_add(1).map(|y| Point::new(p.x, y)),
    ]
    .into_iter()
    .flatten()
}
