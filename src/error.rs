//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec and resampling errors, and provides semantic
//! variants for argument validation and layout failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode JPEG {path}: {source}")]
    Jpeg {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    #[error("JPEG {path} too large: {width}x{height}, each side must fit in 65535px")]
    JpegTooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Image too small for the square grid: larger side {larger}px, need at least {required}px")]
    ImageTooSmall { larger: u32, required: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Batch directory already exists: {path}")]
    BatchDirExists { path: PathBuf },
}
