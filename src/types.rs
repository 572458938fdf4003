//! Shared types used across ASWCOMIC.
//! Includes raster `Orientation`, the comic strip `ComicLayout` and the
//! directional `CropRect` produced by the crop geometry.
use clap::ValueEnum;

/// Which way a raster leans. Decides the axis batches are shifted along.
///
/// Within a batch, slot `j` steps by one square on both axes, so the squares
/// sit on a diagonal starting at the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Orientation {
    /// width >= height; batches shift the diagonal to the right
    Wide,
    /// width < height; batches shift the diagonal down
    Tall,
}

impl Orientation {
    pub fn of(width: u32, height: u32) -> Self {
        if width >= height {
            Orientation::Wide
        } else {
            Orientation::Tall
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Wide => write!(f, "Wide"),
            Orientation::Tall => write!(f, "Tall"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ComicLayout {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for ComicLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComicLayout::Horizontal => "horizontal",
            ComicLayout::Vertical => "vertical",
        };
        write!(f, "{}", s)
    }
}

/// Crop bounds as `(left, upper, right, lower)`.
///
/// The bounds are kept exactly as computed, so `left > right` or
/// `upper > lower` is possible. Consumers normalise with [`CropRect::origin`]
/// and [`CropRect::size`] at the point of use.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRect {
    pub left: i64,
    pub upper: i64,
    pub right: i64,
    pub lower: i64,
}

impl CropRect {
    pub fn new(left: i64, upper: i64, right: i64, lower: i64) -> Self {
        Self {
            left,
            upper,
            right,
            lower,
        }
    }

    /// Top-left corner after normalising the bounds.
    pub fn origin(&self) -> (i64, i64) {
        (self.left.min(self.right), self.upper.min(self.lower))
    }

    /// Width and height after normalising the bounds.
    pub fn size(&self) -> (u32, u32) {
        (
            self.left.abs_diff(self.right) as u32,
            self.upper.abs_diff(self.lower) as u32,
        )
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (x0, y0) = self.origin();
        let (w, h) = self.size();
        x >= x0 && x < x0 + i64::from(w) && y >= y0 && y < y0 + i64::from(h)
    }
}
