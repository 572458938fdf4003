//! Crop geometry for the square grid.
//!
//! A batch `i` shifts the whole grid along the scan axis by `padding * i`,
//! where `padding = (larger_side - square_size * num_squares) / num_batches`.
//! Slot `j` is the `j`-th square of that grid. Every bound is truncated to an
//! integer on its own, so neighbouring rectangles may differ by one pixel in
//! size once normalised.
use tracing::debug;

use crate::core::params::LayoutParams;
use crate::error::{Error, Result};
use crate::types::{CropRect, Orientation};

/// `(square_size, slot, offset) -> rect`
pub type CropFn = fn(u32, u32, f64) -> CropRect;

/// Crop for a wide raster. Bounds come out swapped (`left > right`,
/// `upper > lower`); they are kept that way and normalised on use.
pub fn wide_crop(square_size: u32, slot: u32, offset: f64) -> CropRect {
    let size = f64::from(square_size);
    let slot = f64::from(slot);
    CropRect::new(
        (size * (slot + 1.0) + offset) as i64,
        (size * (slot + 1.0)) as i64,
        (size * slot + offset) as i64,
        (size * slot) as i64,
    )
}

/// Crop for a tall raster.
pub fn tall_crop(square_size: u32, slot: u32, offset: f64) -> CropRect {
    let size = f64::from(square_size);
    let slot = f64::from(slot);
    CropRect::new(
        (size * slot) as i64,
        (size * slot + offset) as i64,
        (size * (slot + 1.0)) as i64,
        (size * (slot + 1.0) + offset) as i64,
    )
}

impl Orientation {
    pub fn crop_fn(self) -> CropFn {
        match self {
            Orientation::Wide => wide_crop,
            Orientation::Tall => tall_crop,
        }
    }
}

/// Shift between consecutive batches along the scan axis.
pub fn batch_padding(larger_side: u32, params: &LayoutParams) -> f64 {
    (f64::from(larger_side) - f64::from(params.grid_span())) / f64::from(params.num_batches)
}

/// One square of one batch.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    pub batch: u32,
    pub slot: u32,
    pub rect: CropRect,
}

/// Grid geometry resolved against a concrete raster size.
#[derive(Copy, Clone, Debug)]
pub struct Layout {
    params: LayoutParams,
    orientation: Orientation,
    padding: f64,
    crop: CropFn,
}

impl Layout {
    /// Resolve the grid for a `width` x `height` raster.
    ///
    /// Fails when the larger side cannot hold `num_squares` squares, which
    /// would make the batch padding negative.
    pub fn new(params: &LayoutParams, width: u32, height: u32) -> Result<Self> {
        params.validate()?;
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }

        let larger = width.max(height);
        let required = params.grid_span();
        if larger < required {
            return Err(Error::ImageTooSmall { larger, required });
        }

        let orientation = Orientation::of(width, height);
        let padding = batch_padding(larger, params);
        debug!(
            "Layout {}x{}: orientation={}, batch padding={:.2}",
            width, height, orientation, padding
        );

        Ok(Self {
            params: *params,
            orientation,
            padding,
            crop: orientation.crop_fn(),
        })
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn offset(&self, batch: u32) -> f64 {
        self.padding * f64::from(batch)
    }

    pub fn crop_rect(&self, batch: u32, slot: u32) -> CropRect {
        (self.crop)(self.params.square_size, slot, self.offset(batch))
    }

    /// Squares of a single batch, in slot order.
    pub fn batch_placements(
        &self,
        batch: u32,
    ) -> impl Iterator<Item = Placement> + Clone + use<> {
        let layout = *self;
        (0..layout.params.num_squares).map(move |slot| Placement {
            batch,
            slot,
            rect: layout.crop_rect(batch, slot),
        })
    }

    /// Every `(batch, slot)` pair, batch-major. Cloning the iterator restarts it.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + Clone + use<> {
        let layout = *self;
        (0..layout.params.num_batches).flat_map(move |batch| layout.batch_placements(batch))
    }
}
