// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! and provides in-memory port implementations plus a minimal EXIF JPEG builder.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::{MetadataError, MetadataReader, MetadataWriter, ZoneResolver};
use crate::domain::metadata::{ExifField, FieldValue};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// =============================================================================
// MemoryCodec
// =============================================================================

/// Metadata port backed by a map, keyed by path and field.
#[derive(Debug, Default)]
pub struct MemoryCodec {
    fields: Mutex<HashMap<(PathBuf, ExifField), FieldValue>>,
    without_exif: Mutex<HashSet<PathBuf>>,
    failing_writes: Mutex<HashSet<ExifField>>,
}

impl MemoryCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, path: &Path, field: ExifField, value: impl Into<FieldValue>) {
        self.fields
            .lock()
            .unwrap()
            .insert((path.to_path_buf(), field), value.into());
    }

    /// Stores the three capture-time fields; `None` leaves a field absent.
    pub fn set_capture_time(
        &self,
        path: &Path,
        date_time: &str,
        sub_second: Option<&str>,
        offset: Option<&str>,
    ) {
        self.set(path, ExifField::DateTimeOriginal, date_time);
        for (field, value) in [
            (ExifField::SubSecTimeOriginal, sub_second),
            (ExifField::OffsetTimeOriginal, offset),
        ] {
            match value {
                Some(value) => self.set(path, field, value),
                None => {
                    self.fields
                        .lock()
                        .unwrap()
                        .remove(&(path.to_path_buf(), field));
                }
            }
        }
    }

    /// Makes every read of `path` fail as if the file had no EXIF block.
    pub fn mark_without_exif(&self, path: &Path) {
        self.without_exif.lock().unwrap().insert(path.to_path_buf());
    }

    /// Makes every write of `field` fail.
    pub fn fail_writes_to(&self, field: ExifField) {
        self.failing_writes.lock().unwrap().insert(field);
    }
}

impl MetadataReader for MemoryCodec {
    fn read_field(&self, path: &Path, field: ExifField) -> Result<FieldValue, MetadataError> {
        if self.without_exif.lock().unwrap().contains(path) {
            return Err(MetadataError::NoExif);
        }
        self.fields
            .lock()
            .unwrap()
            .get(&(path.to_path_buf(), field))
            .cloned()
            .ok_or(MetadataError::FieldNotFound(field))
    }
}

impl MetadataWriter for MemoryCodec {
    fn write_field(
        &self,
        path: &Path,
        field: ExifField,
        value: &FieldValue,
    ) -> Result<(), MetadataError> {
        if self.failing_writes.lock().unwrap().contains(&field) {
            return Err(MetadataError::WriteFailed(format!("{field} is read-only")));
        }
        self.set(path, field, value.clone());
        Ok(())
    }
}

// =============================================================================
// FixedZone
// =============================================================================

/// Zone resolver that returns the same answer for every position.
#[derive(Debug, Clone)]
pub struct FixedZone(Option<String>);

impl FixedZone {
    pub fn named(name: &str) -> Self {
        Self(Some(name.to_string()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl ZoneResolver for FixedZone {
    fn zone_name(&self, _latitude: f64, _longitude: f64) -> Option<String> {
        self.0.clone()
    }
}

// =============================================================================
// JPEG builders
// =============================================================================

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_OFFSET_TIME_ORIGINAL: u16 = 0x9011;
const TAG_SUB_SEC_TIME_ORIGINAL: u16 = 0x9291;

/// JPEG start, a JFIF APP0 segment.
fn jpeg_header() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    bytes.extend_from_slice(b"JFIF\0");
    bytes.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    bytes
}

/// An empty scan followed by end-of-image.
fn jpeg_trailer() -> Vec<u8> {
    vec![
        0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFF, 0xD9,
    ]
}

/// A JPEG with no APP1 segment.
pub fn jpeg_without_exif() -> Vec<u8> {
    let mut bytes = jpeg_header();
    bytes.extend(jpeg_trailer());
    bytes
}

/// A JPEG whose Exif IFD holds the given capture-time fields.
pub fn jpeg_with_exif(date_time: &str, offset: Option<&str>, sub_second: Option<&str>) -> Vec<u8> {
    let mut entries = vec![(TAG_DATE_TIME_ORIGINAL, date_time)];
    if let Some(offset) = offset {
        entries.push((TAG_OFFSET_TIME_ORIGINAL, offset));
    }
    if let Some(sub_second) = sub_second {
        entries.push((TAG_SUB_SEC_TIME_ORIGINAL, sub_second));
    }

    // Big-endian TIFF: header, IFD0 with one pointer entry, then the Exif IFD
    // followed by its out-of-line ASCII data.
    let ifd0_offset = 8_u32;
    let exif_ifd_offset = ifd0_offset + 2 + 12 + 4;
    let entry_count = u16::try_from(entries.len()).unwrap();
    let mut data_offset = exif_ifd_offset + 2 + 12 * u32::from(entry_count) + 4;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\0\x2A");
    tiff.extend_from_slice(&ifd0_offset.to_be_bytes());

    tiff.extend_from_slice(&1_u16.to_be_bytes());
    tiff.extend_from_slice(&TAG_EXIF_IFD_POINTER.to_be_bytes());
    tiff.extend_from_slice(&TYPE_LONG.to_be_bytes());
    tiff.extend_from_slice(&1_u32.to_be_bytes());
    tiff.extend_from_slice(&exif_ifd_offset.to_be_bytes());
    tiff.extend_from_slice(&0_u32.to_be_bytes());

    let mut data = Vec::new();
    tiff.extend_from_slice(&entry_count.to_be_bytes());
    for (tag, text) in entries {
        let mut value = text.as_bytes().to_vec();
        value.push(0);
        let count = u32::try_from(value.len()).unwrap();

        tiff.extend_from_slice(&tag.to_be_bytes());
        tiff.extend_from_slice(&TYPE_ASCII.to_be_bytes());
        tiff.extend_from_slice(&count.to_be_bytes());
        if value.len() <= 4 {
            value.resize(4, 0);
            tiff.extend_from_slice(&value);
        } else {
            tiff.extend_from_slice(&data_offset.to_be_bytes());
            data_offset += count;
            data.extend_from_slice(&value);
        }
    }
    tiff.extend_from_slice(&0_u32.to_be_bytes());
    tiff.extend(data);

    let segment_length = u16::try_from(2 + 6 + tiff.len()).unwrap();
    let mut bytes = jpeg_header();
    bytes.extend_from_slice(&[0xFF, 0xE1]);
    bytes.extend_from_slice(&segment_length.to_be_bytes());
    bytes.extend_from_slice(b"Exif\0\0");
    bytes.extend(tiff);
    bytes.extend(jpeg_trailer());
    bytes
}
