//! Colour enhancement used for the highlight background.
//!
//! Both adjustments blend the image against a "degenerate" version of itself:
//! `out = degenerate + factor * (pixel - degenerate)`. A factor of 1.0 keeps
//! the image, 0.0 yields the degenerate image. For saturation the degenerate
//! image is the luma copy; for contrast it is flat grey at the mean luma.
use image::{Rgb, RgbImage};

/// ITU-R 601-2 luma in 16-bit fixed point, rounded.
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

#[inline]
fn blend_channel(degenerate: u8, value: u8, factor: f32) -> u8 {
    let mixed = f32::from(degenerate) + factor * (f32::from(value) - f32::from(degenerate));
    mixed.clamp(0.0, 255.0) as u8
}

/// Scale colour saturation by `factor`.
pub fn adjust_saturation(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let gray = luma(pixel);
        for channel in pixel.0.iter_mut() {
            *channel = blend_channel(gray, *channel, factor);
        }
    }
    out
}

/// Mean luma of the image, rounded to the nearest level.
pub fn mean_luma(img: &RgbImage) -> u8 {
    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return 0;
    }
    let sum: u64 = img.pixels().map(|p| u64::from(luma(p))).sum();
    (sum as f64 / count as f64 + 0.5) as u8
}

/// Scale contrast around the mean luma by `factor`.
pub fn adjust_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_luma(img);
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            *channel = blend_channel(mean, *channel, factor);
        }
    }
    out
}

/// Washed-out copy for the slide background: saturation first, then contrast.
pub fn mute(img: &RgbImage, saturation: f32, contrast: f32) -> RgbImage {
    adjust_contrast(&adjust_saturation(img, saturation), contrast)
}
