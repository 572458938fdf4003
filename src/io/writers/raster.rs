use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Save with the format implied by the file extension.
pub fn save_rgb_image(img: &RgbImage, output: &Path) -> Result<()> {
    img.save(output).map_err(|source| Error::ImageSave {
        path: output.to_path_buf(),
        source,
    })?;
    debug!("Wrote {:?} ({}x{})", output, img.width(), img.height());
    Ok(())
}
