// SPDX-License-Identifier: MPL-2.0
//! EXIF field reading for photo files.
//!
//! [`ExifCodec`] is the file-backed metadata adapter. This module implements
//! the read side with `kamadak-exif`; writing lives in
//! [`metadata_writer`](super::metadata_writer).

use crate::application::port::{MetadataError, MetadataReader};
use crate::domain::metadata::{ExifField, FieldValue, Rational};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads and writes EXIF fields directly in image files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifCodec;

impl ExifCodec {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Maps a field to its `kamadak-exif` tag.
pub(crate) fn exif_tag(field: ExifField) -> exif::Tag {
    match field {
        ExifField::DateTimeOriginal => exif::Tag::DateTimeOriginal,
        ExifField::OffsetTimeOriginal => exif::Tag::OffsetTimeOriginal,
        ExifField::SubSecTimeOriginal => exif::Tag::SubSecTimeOriginal,
        ExifField::GpsLatitude => exif::Tag::GPSLatitude,
        ExifField::GpsLatitudeRef => exif::Tag::GPSLatitudeRef,
        ExifField::GpsLongitude => exif::Tag::GPSLongitude,
        ExifField::GpsLongitudeRef => exif::Tag::GPSLongitudeRef,
        ExifField::GpsAltitude => exif::Tag::GPSAltitude,
    }
}

impl MetadataReader for ExifCodec {
    fn read_field(&self, path: &Path, field: ExifField) -> Result<FieldValue, MetadataError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let exif = exif::Reader::new()
            .read_from_container(&mut reader)
            .map_err(|e| match e {
                exif::Error::NotFound(_) => MetadataError::NoExif,
                exif::Error::Io(io) => MetadataError::IoError(io.to_string()),
                other => MetadataError::ReadFailed(format!("{}: {other}", path.display())),
            })?;

        let entry = exif
            .get_field(exif_tag(field), exif::In::PRIMARY)
            .ok_or(MetadataError::FieldNotFound(field))?;

        convert_value(field, &entry.value)
    }
}

/// Converts a raw EXIF value into the closed [`FieldValue`] shape.
fn convert_value(field: ExifField, value: &exif::Value) -> Result<FieldValue, MetadataError> {
    match value {
        exif::Value::Ascii(parts) => {
            // Multiple NUL-separated strings are legal but unused by these tags.
            let text = parts
                .first()
                .map(|bytes| String::from_utf8_lossy(bytes).trim_end().to_string())
                .unwrap_or_default();
            Ok(FieldValue::Ascii(text))
        }
        exif::Value::Rational(rationals) => match rationals.as_slice() {
            [single] => Ok(FieldValue::Rational(Rational::new(single.num, single.denom))),
            [a, b, c] => Ok(FieldValue::RationalTriple([
                Rational::new(a.num, a.denom),
                Rational::new(b.num, b.denom),
                Rational::new(c.num, c.denom),
            ])),
            other => Err(MetadataError::UnexpectedValue {
                field,
                found: format!("{} rationals", other.len()),
            }),
        },
        other => Err(MetadataError::UnexpectedValue {
            field,
            found: format!("{other:?}"),
        }),
    }
}
