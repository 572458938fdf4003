use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};

/// Decode any format the `image` crate understands into 8-bit RGB.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn test_load_converts_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 128]))
            .save(&path)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(*img.get_pixel(5, 3), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
