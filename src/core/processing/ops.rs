use image::{Rgb, RgbImage, imageops};

use crate::types::CropRect;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Blank canvas filled with `fill`
pub fn new_canvas(width: u32, height: u32, fill: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, fill)
}

/// Copy the region under `rect` out of `img`.
///
/// Swapped bounds are normalised here. Any part of the rectangle that falls
/// outside `img` comes back black.
pub fn crop(img: &RgbImage, rect: &CropRect) -> RgbImage {
    let (x, y) = rect.origin();
    let (width, height) = rect.size();
    let mut out = new_canvas(width, height, BLACK);
    imageops::replace(&mut out, img, -x, -y);
    out
}

/// Surround `img` with a `border` px frame of `fill`.
pub fn expand_border(img: &RgbImage, border: u32, fill: Rgb<u8>) -> RgbImage {
    let mut out = new_canvas(img.width() + 2 * border, img.height() + 2 * border, fill);
    imageops::replace(&mut out, img, i64::from(border), i64::from(border));
    out
}

/// Overwrite `canvas` with `patch` at the normalised origin of `rect`.
pub fn paste(canvas: &mut RgbImage, patch: &RgbImage, rect: &CropRect) {
    let (x, y) = rect.origin();
    imageops::replace(canvas, patch, x, y);
}

/// Overwrite `canvas` with `patch`, top-left corner at `(x, y)`.
pub fn paste_at(canvas: &mut RgbImage, patch: &RgbImage, x: u32, y: u32) {
    imageops::replace(canvas, patch, i64::from(x), i64::from(y));
}
