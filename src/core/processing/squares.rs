//! Square extraction: every placement of the layout is cropped, framed with
//! a black border and written to its batch directory.
use std::path::PathBuf;

use image::RgbImage;
use tracing::{debug, info};

use crate::core::processing::geometry::{Layout, Placement};
use crate::core::processing::ops::{BLACK, crop, expand_border};
use crate::error::Result;
use crate::io::fs::{SourcePaths, create_batch_dir};
use crate::io::writers::raster::save_rgb_image;

/// Bordered square for one placement, not yet written anywhere.
pub fn bordered_square(img: &RgbImage, placement: &Placement, border: u32) -> RgbImage {
    expand_border(&crop(img, &placement.rect), border, BLACK)
}

/// Write all bordered squares, one directory per batch.
///
/// Batch directories must not exist yet; run the cleanup first.
pub fn store_square_batches(
    img: &RgbImage,
    layout: &Layout,
    paths: &SourcePaths,
) -> Result<Vec<PathBuf>> {
    let params = layout.params();
    let mut written = Vec::with_capacity((params.num_batches * params.num_squares) as usize);

    for batch in 0..params.num_batches {
        let batch_dir = paths.batch_dir(batch);
        create_batch_dir(&batch_dir)?;
        debug!("Batch {} offset {:.2}", batch, layout.offset(batch));

        for placement in layout.batch_placements(batch) {
            let square = bordered_square(img, &placement, params.border_size);
            let output = paths.square_path(batch, placement.slot);
            save_rgb_image(&square, &output)?;
            written.push(output);
        }
    }

    info!(
        "Stored {} squares in {} batch directories",
        written.len(),
        params.num_batches
    );
    Ok(written)
}
