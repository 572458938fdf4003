//! High-level, ergonomic library API: run the whole slicing pipeline on one
//! source image, or resize/lay out an in-memory raster. Prefer using these
//! entrypoints over the low-level processing modules when embedding ASWCOMIC.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::core::params::LayoutParams;
use crate::core::processing::comic::create_comics;
use crate::core::processing::geometry::Layout;
use crate::core::processing::resize::resize_to_grid;
use crate::core::processing::slides::store_slides;
use crate::core::processing::squares::store_square_batches;
use crate::error::Result;
use crate::io::fs::{SourcePaths, clean_batch_dirs};
use crate::io::loader::load_image;
use crate::io::writers::raster::save_rgb_image;
use crate::types::ComicLayout;

/// Everything a pipeline run removed and wrote.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Stale batch directories deleted before processing
    pub removed: Vec<PathBuf>,
    pub resized: PathBuf,
    pub resized_dimensions: (u32, u32),
    pub squares: Vec<PathBuf>,
    pub comics: Vec<PathBuf>,
    pub slides: Vec<PathBuf>,
}

/// Resize a raster to the grid and resolve its layout (no disk I/O).
pub fn prepare_raster(img: &RgbImage, params: &LayoutParams) -> Result<(RgbImage, Layout)> {
    params.validate()?;
    let resized = resize_to_grid(img, params)?;
    let layout = Layout::new(params, resized.width(), resized.height())?;
    Ok((resized, layout))
}

/// Run the full pipeline for `input`.
///
/// Order: load, clean stale batch directories, resize and save the resized
/// copy, store bordered squares, optionally build comic strips, store
/// highlight slides. All outputs are written next to `input`.
pub fn process_image(
    input: &Path,
    params: &LayoutParams,
    comic: Option<ComicLayout>,
) -> Result<RunReport> {
    params.validate()?;
    let paths = SourcePaths::from_input(input)?;

    let img = load_image(input)?;
    let removed = clean_batch_dirs(&paths.dir)?;

    let (resized, layout) = prepare_raster(&img, params)?;
    drop(img);
    let resized_path = paths.resized_path();
    save_rgb_image(&resized, &resized_path)?;
    info!(
        "Resized copy {:?}: {}x{}, {} orientation, batch padding {:.2}",
        resized_path,
        resized.width(),
        resized.height(),
        layout.orientation(),
        layout.padding()
    );

    let squares = store_square_batches(&resized, &layout, &paths)?;

    let comics = match comic {
        Some(strip_layout) => create_comics(&paths, params, strip_layout)?,
        None => Vec::new(),
    };

    let slides = store_slides(&resized, &layout, &paths)?;

    Ok(RunReport {
        removed,
        resized: resized_path,
        resized_dimensions: resized.dimensions(),
        squares,
        comics,
        slides,
    })
}
