//! Highlight slides: a muted copy of the raster with one batch's squares
//! restored to their original colours.
use std::path::PathBuf;

use image::RgbImage;
use tracing::info;

use crate::core::processing::enhance::mute;
use crate::core::processing::geometry::Layout;
use crate::core::processing::ops::{crop, paste};
use crate::error::Result;
use crate::io::fs::SourcePaths;
use crate::io::writers::jpeg::write_rgb_jpeg;

/// Compose the slide for `batch` in memory.
pub fn compose_slide(img: &RgbImage, layout: &Layout, batch: u32) -> RgbImage {
    let params = layout.params();
    let mut background = mute(img, params.saturation, params.contrast);
    for placement in layout.batch_placements(batch) {
        let square = crop(img, &placement.rect);
        paste(&mut background, &square, &placement.rect);
    }
    background
}

/// Write `demo{i}.jpeg` for every batch.
pub fn store_slides(img: &RgbImage, layout: &Layout, paths: &SourcePaths) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(layout.params().num_batches as usize);
    for batch in 0..layout.params().num_batches {
        let slide = compose_slide(img, layout, batch);
        let output = paths.slide_path(batch);
        write_rgb_jpeg(&output, &slide)?;
        written.push(output);
    }
    info!("Stored {} highlight slides", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::LayoutParams;
    use image::Rgb;

    fn params() -> LayoutParams {
        LayoutParams {
            square_size: 4,
            border_size: 1,
            padding: 2,
            num_batches: 3,
            num_squares: 2,
            ..LayoutParams::default()
        }
    }

    fn photo(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 17 % 256) as u8, (y * 29 % 256) as u8, ((x * y) % 256) as u8])
        })
    }

    fn check_highlight(width: u32, height: u32) {
        let params = params();
        let img = photo(width, height);
        let layout = Layout::new(&params, width, height).unwrap();
        let muted = mute(&img, params.saturation, params.contrast);

        for batch in 0..params.num_batches {
            let slide = compose_slide(&img, &layout, batch);
            assert_eq!(slide.dimensions(), img.dimensions());
            let rects: Vec<_> = layout.batch_placements(batch).map(|p| p.rect).collect();
            for (x, y, pixel) in slide.enumerate_pixels() {
                let inside = rects.iter().any(|r| r.contains(i64::from(x), i64::from(y)));
                let expected = if inside {
                    img.get_pixel(x, y)
                } else {
                    muted.get_pixel(x, y)
                };
                assert_eq!(pixel, expected, "batch {batch} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_wide_highlight_restores_squares_only() {
        check_highlight(14, 8);
    }

    #[test]
    fn test_tall_highlight_restores_squares_only() {
        check_highlight(8, 15);
    }

    #[test]
    fn test_store_slides_names() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SourcePaths::from_input(&dir.path().join("pic.png")).unwrap();
        let img = photo(14, 8);
        let layout = Layout::new(&params(), 14, 8).unwrap();

        let written = store_slides(&img, &layout, &paths).unwrap();
        assert_eq!(written.len(), 3);
        for batch in 0..3 {
            assert!(dir.path().join(format!("demo{batch}.jpeg")).is_file());
        }
    }
}
