// SPDX-License-Identifier: MPL-2.0
//! Deriving a photo's UTC capture instant from its stored local time.

use crate::application::port::{MetadataError, MetadataReader};
use crate::domain::metadata::ExifField;
use crate::domain::time;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Reads a text field, mapping a missing field to `None`.
fn read_optional<R: MetadataReader + ?Sized>(
    reader: &R,
    path: &Path,
    field: ExifField,
) -> Result<Option<String>> {
    match reader.read_text(path, field) {
        Ok(text) => Ok(Some(text)),
        Err(MetadataError::FieldNotFound(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Combines `DateTimeOriginal`, `SubSecTimeOriginal` and
/// `OffsetTimeOriginal` into the instant the photo was taken.
///
/// Without an offset the stored time is taken to be UTC.
///
/// # Errors
///
/// - [`Error::MissingTimestamp`] if the date/time is absent or unparseable,
///   or the sub-second field holds something other than digits
/// - [`Error::MalformedOffset`] if an offset is present but not `±HH:MM`
/// - [`Error::Metadata`] if the file cannot be read at all
pub fn read_capture_time<R: MetadataReader + ?Sized>(
    reader: &R,
    path: &Path,
) -> Result<DateTime<Utc>> {
    let local = read_optional(reader, path, ExifField::DateTimeOriginal)?
        .as_deref()
        .and_then(time::parse_date_time)
        .ok_or(Error::MissingTimestamp)?;

    let sub_second = match read_optional(reader, path, ExifField::SubSecTimeOriginal)? {
        Some(text) => time::parse_sub_second(&text).ok_or(Error::MissingTimestamp)?,
        None => 0,
    };

    let offset = match read_optional(reader, path, ExifField::OffsetTimeOriginal)? {
        Some(text) => {
            Some(time::parse_offset(&text).ok_or_else(|| Error::MalformedOffset(text.clone()))?)
        }
        None => None,
    };

    let instant = time::capture_instant(local, sub_second, offset);
    tracing::trace!(photo = %path.display(), %instant, "capture time");
    Ok(instant)
}
