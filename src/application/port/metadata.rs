// SPDX-License-Identifier: MPL-2.0
//! Metadata reading and writing port definitions.
//!
//! This module defines traits for reading and writing individual EXIF fields.
//! Infrastructure adapters implement these traits using `kamadak-exif` for
//! reading and `little_exif` for writing.
//!
//! Fields are addressed one at a time so the reconciler can tell a missing
//! field apart from a missing EXIF block.

use crate::domain::metadata::{ExifField, FieldValue};
use std::fmt;
use std::path::Path;

// =============================================================================
// MetadataError
// =============================================================================

/// Errors that can occur during metadata operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataError {
    /// The requested field is absent from an otherwise readable EXIF block.
    FieldNotFound(ExifField),

    /// The file has no EXIF block at all.
    NoExif,

    /// The field exists but holds a value of the wrong shape.
    UnexpectedValue { field: ExifField, found: String },

    /// Failed to read metadata from file.
    ReadFailed(String),

    /// Failed to write metadata to file.
    WriteFailed(String),

    /// The file could not be accessed.
    IoError(String),
}

impl MetadataError {
    /// Returns `true` for a missing field, the only error the planner tolerates.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, MetadataError::FieldNotFound(_))
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::FieldNotFound(field) => {
                write!(f, "Metadata field not found: {}/{field}", field.group())
            }
            MetadataError::NoExif => write!(f, "File has no EXIF data"),
            MetadataError::UnexpectedValue { field, found } => {
                write!(f, "Unexpected value for {field}: {found}")
            }
            MetadataError::ReadFailed(msg) => write!(f, "Failed to read metadata: {msg}"),
            MetadataError::WriteFailed(msg) => write!(f, "Failed to write metadata: {msg}"),
            MetadataError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MetadataError {}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::IoError(err.to_string())
    }
}

// =============================================================================
// MetadataReader Trait
// =============================================================================

/// Port for reading EXIF fields from photo files.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for concurrent reading.
pub trait MetadataReader: Send + Sync {
    /// Reads a single field.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::FieldNotFound`] when the field is absent and
    /// another [`MetadataError`] if the file cannot be read.
    fn read_field(&self, path: &Path, field: ExifField) -> Result<FieldValue, MetadataError>;

    /// Reads an ASCII field as text.
    ///
    /// # Errors
    ///
    /// As [`read_field`](Self::read_field), plus
    /// [`MetadataError::UnexpectedValue`] for non-text values.
    fn read_text(&self, path: &Path, field: ExifField) -> Result<String, MetadataError> {
        match self.read_field(path, field)? {
            FieldValue::Ascii(text) => Ok(text),
            other => Err(MetadataError::UnexpectedValue {
                field,
                found: other.kind().to_string(),
            }),
        }
    }
}

// =============================================================================
// MetadataWriter Trait
// =============================================================================

/// Port for writing EXIF fields to photo files.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for concurrent writing.
pub trait MetadataWriter: Send + Sync {
    /// Writes a single field, preserving all other metadata in the file.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] if writing fails.
    fn write_field(
        &self,
        path: &Path,
        field: ExifField,
        value: &FieldValue,
    ) -> Result<(), MetadataError>;
}

/// A reader and writer for the same files.
pub trait MetadataCodec: MetadataReader + MetadataWriter {}

impl<T: MetadataReader + MetadataWriter> MetadataCodec for T {}
