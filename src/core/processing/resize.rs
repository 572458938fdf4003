use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::info;

use crate::core::params::LayoutParams;
use crate::error::{Error, Result};

/// Uniform scale factor that makes the smaller side exactly hold the square grid.
pub fn resize_ratio(width: u32, height: u32, params: &LayoutParams) -> f64 {
    let size = f64::from(params.square_size);
    let count = f64::from(params.num_squares);
    (size / f64::from(width) * count).max(size / f64::from(height) * count)
}

pub fn calculate_resize_dimensions(
    width: u32,
    height: u32,
    params: &LayoutParams,
) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }

    let ratio = resize_ratio(width, height, params);
    let new_width = (f64::from(width) * ratio).round() as u32;
    let new_height = (f64::from(height) * ratio).round() as u32;

    info!(
        "Original size: {}x{}, ratio: {:.4}, New size: {}x{}",
        width, height, ratio, new_width, new_height
    );

    Ok((new_width, new_height))
}

pub fn resize_rgb_image(
    img: &RgbImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbImage> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        img.width(),
        img.height(),
        img.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Resize(format!(
            "resized buffer does not match {}x{}",
            target_width, target_height
        ))
    })
}

/// Scale `img` so the square grid fits its smaller side exactly.
pub fn resize_to_grid(img: &RgbImage, params: &LayoutParams) -> Result<RgbImage> {
    let (new_width, new_height) = calculate_resize_dimensions(img.width(), img.height(), params)?;
    if (new_width, new_height) == img.dimensions() {
        return Ok(img.clone());
    }
    resize_rgb_image(img, new_width, new_height)
}
