//! Dimension-sized boolean grid used for pixel membership.
//!
//! Both the set of kept pixels produced by classification and the final
//! selection handed to reconstruction are stored as a [`PixelMask`]: one
//! `bool` per pixel in row-major order, so membership tests and inserts are
//! plain index operations.

/// A pixel coordinate inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column, in `[0, width)`.
    pub x: u32,
    /// Row, in `[0, height)`.
    pub y: u32,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A set of in-bounds pixel coordinates backed by a `width * height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    count: usize,
}

impl PixelMask {
    /// Create an empty mask for an image of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
            count: 0,
        }
    }

    /// Mask width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of coordinates in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Whether the set holds no coordinates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `(x, y)` lies inside the mask bounds.
    #[must_use]
    pub const fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Whether `(x, y)` is a member. Out-of-bounds coordinates never are.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)]
    }

    /// Add `(x, y)` to the set. Returns `false` if it was already present.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn insert(&mut self, x: u32, y: u32) -> bool {
        assert!(
            self.in_bounds(x, y),
            "({x}, {y}) outside {}x{} mask",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        if self.cells[idx] {
            return false;
        }
        self.cells[idx] = true;
        self.count += 1;
        true
    }

    /// Iterate over members in row-major order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &kept)| kept)
            .map(move |(idx, _)| Point::new((idx % width) as u32, (idx / width) as u32))
    }

    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_counts_distinct_members() {
        let mut mask = PixelMask::new(3, 2);
        assert!(mask.is_empty());
        assert!(mask.insert(2, 1));
        assert!(mask.insert(0, 0));
        assert!(!mask.insert(2, 1));
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(2, 1));
        assert!(!mask.contains(1, 1));
    }

    #[test]
    fn contains_is_false_out_of_bounds() {
        let mut mask = PixelMask::new(2, 2);
        mask.insert(1, 1);
        assert!(!mask.contains(2, 1));
        assert!(!mask.contains(1, 2));
        assert!(!mask.contains(u32::MAX, 0));
    }

    #[test]
    fn iter_yields_row_major_order() {
        let mut mask = PixelMask::new(3, 3);
        mask.insert(2, 2);
        mask.insert(1, 0);
        mask.insert(0, 1);
        let points: Vec<_> = mask.iter().collect();
        assert_eq!(
            points,
            vec![Point::new(1, 0), Point::new(0, 1), Point::new(2, 2)]
        );
    }

    #[test]
    fn empty_dimensions_are_allowed() {
        let mask = PixelMask::new(0, 0);
        assert!(mask.is_empty());
        assert_eq!(mask.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 mask")]
    fn insert_out_of_bounds_panics() {
        let mut mask = PixelMask::new(2, 2);
        mask.insert(2, 0);
    }
}
