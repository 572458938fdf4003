//! I/O layer: source image loading, output writers (extension-inferred and
//! fixed JPEG), and the filesystem helpers that name, list, create and clean
//! the per-batch output directories.
pub mod fs;
pub use fs::{BATCH_DIR_PREFIX, SourcePaths, clean_batch_dirs, list_batch_dirs};

pub mod loader;
pub use loader::load_image;

pub mod writers;
