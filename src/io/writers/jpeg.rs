use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// Extension of the fixed-format outputs (slides and comic strips).
pub const JPEG_EXTENSION: &str = "jpeg";

pub const JPEG_QUALITY: u8 = 95;

/// Encode `img` as baseline JPEG. Each side must fit in a `u16`.
pub fn write_rgb_jpeg(output: &Path, img: &RgbImage) -> Result<()> {
    let (cols, rows) = img.dimensions();
    let (Ok(cols16), Ok(rows16)) = (u16::try_from(cols), u16::try_from(rows)) else {
        return Err(Error::JpegTooLarge {
            path: output.to_path_buf(),
            width: cols,
            height: rows,
        });
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder
        .encode(img.as_raw(), cols16, rows16, ColorType::Rgb)
        .map_err(|source| Error::Jpeg {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush()?;
    debug!("Wrote {:?} ({}x{})", output, cols, rows);
    Ok(())
}
