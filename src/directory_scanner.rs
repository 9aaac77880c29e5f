// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding the photos to reconcile.
//!
//! This module scans a single directory (not recursively) for JPEG files and
//! sorts them by file name, the order in which they are processed.

use crate::config::defaults::PHOTO_EXTENSIONS;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// The JPEG files of one directory, in processing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoList {
    photos: Vec<PathBuf>,
}

impl PhotoList {
    /// Scans `directory` for JPEG files and sorts them by name.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let read_error = |e: std::io::Error| Error::Filesystem {
            path: directory.display().to_string(),
            message: e.to_string(),
        };

        let mut photos = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && is_jpeg_file(&path) {
                photos.push(path);
            }
        }

        photos.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        tracing::debug!(directory = %directory.display(), photos = photos.len(), "scanned");

        Ok(Self { photos })
    }

    /// Returns the photos in processing order.
    pub fn photos(&self) -> &[PathBuf] {
        &self.photos
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.photos.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// Returns `true` for a `.jpg` or `.jpeg` extension in any case.
pub fn is_jpeg_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn scan_directory_finds_only_jpegs() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "a.jpg");
        create_test_file(temp_dir.path(), "b.JPEG");
        create_test_file(temp_dir.path(), "c.png");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "track.gpx");

        let list = PhotoList::scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn scan_directory_sorts_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let c = create_test_file(temp_dir.path(), "IMG_0003.jpg");
        let a = create_test_file(temp_dir.path(), "IMG_0001.jpg");
        let b = create_test_file(temp_dir.path(), "IMG_0002.jpeg");

        let list = PhotoList::scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(list.photos(), &[a, b, c]);
    }

    #[test]
    fn scan_directory_skips_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("nested.jpg")).expect("mkdir");
        create_test_file(temp_dir.path(), "photo.jpg");

        let list = PhotoList::scan_directory(temp_dir.path()).expect("scan failed");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn scan_directory_handles_empty_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let list = PhotoList::scan_directory(temp_dir.path()).expect("scan failed");
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn scan_missing_directory_is_filesystem_error() {
        let err = PhotoList::scan_directory(Path::new("/nonexistent/photos")).unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
    }

    #[test]
    fn is_jpeg_file_ignores_case() {
        assert!(is_jpeg_file(Path::new("photo.jpg")));
        assert!(is_jpeg_file(Path::new("photo.JPG")));
        assert!(is_jpeg_file(Path::new("photo.JpEg")));
        assert!(!is_jpeg_file(Path::new("photo.png")));
        assert!(!is_jpeg_file(Path::new("jpg")));
        assert!(!is_jpeg_file(Path::new("photo.jpg.bak")));
    }
}
