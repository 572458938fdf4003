//! Comic strips assembled from the square batches already on disk.
//!
//! Horizontal layout, with `b` the border and `pad` the panel gap:
//!
//! ```text
//! | pad b    b pad b    b pad b    b pad |
//! | pad b sq b pad b sq b pad b sq b pad |
//! | pad b    b pad b    b pad b    b pad |
//! ```
//!
//! The vertical layout is the same strip turned on its side.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{debug, info};

use crate::core::params::LayoutParams;
use crate::core::processing::ops::{WHITE, new_canvas, paste_at};
use crate::error::Result;
use crate::io::fs::{SourcePaths, list_batch_dirs, list_files_sorted};
use crate::io::loader::load_image;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::types::ComicLayout;

/// Distance between the top-left corners of neighbouring panels.
pub fn block_size(params: &LayoutParams) -> u32 {
    params.bordered_size() + params.padding
}

/// `(width, height)` of a strip holding `num_squares` panels.
pub fn canvas_size(params: &LayoutParams, layout: ComicLayout) -> (u32, u32) {
    let along = block_size(params) * params.num_squares + params.padding;
    let across = params.bordered_size() + 2 * params.padding;
    match layout {
        ComicLayout::Horizontal => (along, across),
        ComicLayout::Vertical => (across, along),
    }
}

/// Top-left corner of panel `index`.
pub fn panel_position(params: &LayoutParams, layout: ComicLayout, index: u32) -> (u32, u32) {
    let along = params.padding + block_size(params) * index;
    match layout {
        ComicLayout::Horizontal => (along, params.padding),
        ComicLayout::Vertical => (params.padding, along),
    }
}

/// Lay `panels` out on a white strip.
pub fn compose_strip(panels: &[RgbImage], params: &LayoutParams, layout: ComicLayout) -> RgbImage {
    let (width, height) = canvas_size(params, layout);
    let mut strip = new_canvas(width, height, WHITE);
    for (index, panel) in (0u32..).zip(panels) {
        let (x, y) = panel_position(params, layout, index);
        paste_at(&mut strip, panel, x, y);
    }
    strip
}

fn load_batch(batch_dir: &Path) -> Result<Vec<RgbImage>> {
    list_files_sorted(batch_dir)?
        .iter()
        .map(load_image)
        .collect()
}

/// Build one strip per batch directory found next to the source image.
///
/// Batch directories and the squares inside them are taken in name order;
/// the strip index is the position in that order.
pub fn create_comics(
    paths: &SourcePaths,
    params: &LayoutParams,
    layout: ComicLayout,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (index, batch_dir) in list_batch_dirs(&paths.dir)?.iter().enumerate() {
        let panels = load_batch(batch_dir)?;
        debug!("Batch {:?}: {} panels", batch_dir, panels.len());

        let strip = compose_strip(&panels, params, layout);
        let output = paths.comic_path(index, layout);
        write_rgb_jpeg(&output, &strip)?;
        written.push(output);
    }
    info!("Stored {} {} comic strips", written.len(), layout);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::ops::BLACK;
    use image::Rgb;

    #[test]
    fn test_default_canvas_sizes() {
        let params = LayoutParams::default();
        assert_eq!(block_size(&params), 260);
        assert_eq!(canvas_size(&params, ComicLayout::Horizontal), (810, 290));
        assert_eq!(canvas_size(&params, ComicLayout::Vertical), (290, 810));
        assert_eq!(panel_position(&params, ComicLayout::Horizontal, 2), (550, 30));
        assert_eq!(panel_position(&params, ComicLayout::Vertical, 1), (30, 290));
    }

    #[test]
    fn test_compose_strip_places_panels() {
        let params = LayoutParams {
            square_size: 4,
            border_size: 1,
            padding: 2,
            num_batches: 1,
            num_squares: 3,
            ..LayoutParams::default()
        };
        let panels = vec![RgbImage::from_pixel(6, 6, BLACK); 3];
        let strip = compose_strip(&panels, &params, ComicLayout::Horizontal);

        // block = 6 + 2 = 8, width = 8 * 3 + 2 = 26, height = 6 + 4 = 10
        assert_eq!(strip.dimensions(), (26, 10));
        assert_eq!(*strip.get_pixel(0, 0), WHITE);
        assert_eq!(*strip.get_pixel(2, 2), BLACK);
        assert_eq!(*strip.get_pixel(7, 7), BLACK);
        assert_eq!(*strip.get_pixel(8, 5), WHITE);
        assert_eq!(*strip.get_pixel(18, 2), BLACK);
        assert_eq!(*strip.get_pixel(25, 9), WHITE);
    }

    #[test]
    fn test_create_comics_from_batches() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SourcePaths::from_input(&dir.path().join("pic.png")).unwrap();
        let params = LayoutParams {
            square_size: 4,
            border_size: 1,
            padding: 2,
            num_batches: 2,
            num_squares: 2,
            ..LayoutParams::default()
        };
        for batch in 0..2 {
            std::fs::create_dir(paths.batch_dir(batch)).unwrap();
            for slot in 0..2 {
                RgbImage::from_pixel(6, 6, Rgb([0, 0, 255]))
                    .save(paths.square_path(batch, slot))
                    .unwrap();
            }
        }

        let written = create_comics(&paths, &params, ComicLayout::Vertical).unwrap();
        assert_eq!(written.len(), 2);
        let strip = image::open(dir.path().join("asw1_vertical.jpeg")).unwrap();
        assert_eq!((strip.width(), strip.height()), (10, 18));
    }
}
