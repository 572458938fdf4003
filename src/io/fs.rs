//! Output naming and batch-directory housekeeping.
//!
//! All outputs live next to the source image. Batch directories are named
//! `squares_batch{i}`; anything in the source directory whose name contains
//! that prefix is considered a leftover from an earlier run.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::io::writers::jpeg::JPEG_EXTENSION;
use crate::types::ComicLayout;

pub const BATCH_DIR_PREFIX: &str = "squares_batch";

/// Source image split into the parts every output name is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePaths {
    /// Absolute directory holding the source image
    pub dir: PathBuf,
    /// File name without extension
    pub stem: String,
    /// Extension including the leading dot, or empty
    pub extension: String,
}

impl SourcePaths {
    pub fn from_input(input: &Path) -> Result<Self> {
        let absolute = std::path::absolute(input)?;
        let dir = absolute
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::InvalidArgument {
                arg: "--img",
                value: input.display().to_string(),
            })?;
        let stem = absolute
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidArgument {
                arg: "--img",
                value: input.display().to_string(),
            })?;
        let extension = absolute
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        Ok(Self {
            dir,
            stem,
            extension,
        })
    }

    pub fn resized_path(&self) -> PathBuf {
        self.dir.join(format!("{}_resized{}", self.stem, self.extension))
    }

    pub fn batch_dir(&self, batch: u32) -> PathBuf {
        self.dir.join(format!("{}{}", BATCH_DIR_PREFIX, batch))
    }

    pub fn square_path(&self, batch: u32, slot: u32) -> PathBuf {
        self.batch_dir(batch)
            .join(format!("{}_square{}{}", self.stem, slot, self.extension))
    }

    pub fn slide_path(&self, batch: u32) -> PathBuf {
        self.dir.join(format!("demo{}.{}", batch, JPEG_EXTENSION))
    }

    pub fn comic_path(&self, index: usize, layout: ComicLayout) -> PathBuf {
        self.dir.join(format!("asw{}_{}.{}", index, layout, JPEG_EXTENSION))
    }
}

fn is_batch_dir(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().contains(BATCH_DIR_PREFIX))
}

/// Batch directories inside `dir`, sorted by name.
pub fn list_batch_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_batch_dir(&path) {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Regular files inside `dir`, sorted by name.
pub fn list_files_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Remove every batch directory left in `dir` by an earlier run.
pub fn clean_batch_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let stale = list_batch_dirs(dir)?;
    for path in &stale {
        info!("Removing stale batch directory: {:?}", path);
        fs::remove_dir_all(path)?;
    }
    Ok(stale)
}

/// Create a fresh batch directory. An existing one is an error.
pub fn create_batch_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::BatchDirExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_paths_naming() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.jpg");
        let paths = SourcePaths::from_input(&input).unwrap();

        assert_eq!(paths.dir, dir.path());
        assert_eq!(paths.stem, "photo");
        assert_eq!(paths.extension, ".jpg");
        assert_eq!(paths.resized_path(), dir.path().join("photo_resized.jpg"));
        assert_eq!(
            paths.square_path(2, 1),
            dir.path().join("squares_batch2").join("photo_square1.jpg")
        );
        assert_eq!(paths.slide_path(3), dir.path().join("demo3.jpeg"));
        assert_eq!(
            paths.comic_path(0, ComicLayout::Vertical),
            dir.path().join("asw0_vertical.jpeg")
        );
    }

    #[test]
    fn test_clean_removes_only_batch_dirs_in_scanned_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("squares_batch0")).unwrap();
        fs::write(dir.path().join("squares_batch0").join("a.png"), b"x").unwrap();
        fs::create_dir(dir.path().join("old_squares_batch7")).unwrap();
        fs::create_dir(dir.path().join("keep")).unwrap();
        fs::write(dir.path().join("squares_batch_notes.txt"), b"x").unwrap();

        let removed = clean_batch_dirs(dir.path()).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(!dir.path().join("squares_batch0").exists());
        assert!(!dir.path().join("old_squares_batch7").exists());
        assert!(dir.path().join("keep").is_dir());
        assert!(dir.path().join("squares_batch_notes.txt").is_file());
    }

    #[test]
    fn test_list_batch_dirs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["squares_batch2", "squares_batch0", "squares_batch1"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        let names: Vec<String> = list_batch_dirs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["squares_batch0", "squares_batch1", "squares_batch2"]);
    }

    #[test]
    fn test_create_batch_dir_collision() {
        let dir = tempfile::tempdir().unwrap();
        let batch = dir.path().join("squares_batch0");
        create_batch_dir(&batch).unwrap();
        assert!(matches!(
            create_batch_dir(&batch),
            Err(Error::BatchDirExists { .. })
        ));
    }
}
