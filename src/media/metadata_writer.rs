// SPDX-License-Identifier: MPL-2.0
//! EXIF field writing for photo files.
//!
//! This module implements the write side of [`ExifCodec`] using the
//! `little_exif` crate. Each call loads the file's existing metadata, replaces
//! one tag and writes everything back, so unrelated tags are preserved.

use super::metadata::ExifCodec;
use crate::application::port::{MetadataError, MetadataWriter};
use crate::domain::metadata::{ExifField, FieldValue, Rational};
use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;
use std::path::Path;

impl MetadataWriter for ExifCodec {
    fn write_field(
        &self,
        path: &Path,
        field: ExifField,
        value: &FieldValue,
    ) -> Result<(), MetadataError> {
        let tag = to_exif_tag(field, value)?;

        // little_exif cannot add an EXIF block to a file without one, so a
        // failed load is reported rather than replaced by empty metadata.
        let mut metadata = Metadata::new_from_path(path).map_err(|e| {
            MetadataError::WriteFailed(format!(
                "could not load EXIF from '{}': {e}",
                path.display()
            ))
        })?;

        metadata.set_tag(tag);
        metadata.write_to_file(path).map_err(|e| {
            MetadataError::WriteFailed(format!(
                "could not write {field} to '{}': {e}",
                path.display()
            ))
        })
    }
}

fn to_u_r64(rational: Rational) -> uR64 {
    uR64 {
        nominator: rational.numerator,
        denominator: rational.denominator,
    }
}

/// Builds the `little_exif` tag for a field, checking the value shape.
fn to_exif_tag(field: ExifField, value: &FieldValue) -> Result<ExifTag, MetadataError> {
    let mismatch = || MetadataError::WriteFailed(format!("{field} cannot hold a {} value", value.kind()));

    let tag = match (field, value) {
        (ExifField::DateTimeOriginal, FieldValue::Ascii(text)) => {
            ExifTag::DateTimeOriginal(text.clone())
        }
        (ExifField::OffsetTimeOriginal, FieldValue::Ascii(text)) => {
            ExifTag::OffsetTimeOriginal(text.clone())
        }
        (ExifField::SubSecTimeOriginal, FieldValue::Ascii(text)) => {
            ExifTag::SubSecTimeOriginal(text.clone())
        }
        (ExifField::GpsLatitudeRef, FieldValue::Ascii(text)) => {
            ExifTag::GPSLatitudeRef(text.clone())
        }
        (ExifField::GpsLongitudeRef, FieldValue::Ascii(text)) => {
            ExifTag::GPSLongitudeRef(text.clone())
        }
        (ExifField::GpsLatitude, FieldValue::RationalTriple(dms)) => {
            ExifTag::GPSLatitude(dms.iter().copied().map(to_u_r64).collect())
        }
        (ExifField::GpsLongitude, FieldValue::RationalTriple(dms)) => {
            ExifTag::GPSLongitude(dms.iter().copied().map(to_u_r64).collect())
        }
        (ExifField::GpsAltitude, FieldValue::Rational(altitude)) => {
            ExifTag::GPSAltitude(vec![to_u_r64(*altitude)])
        }
        _ => return Err(mismatch()),
    };
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MetadataReader;
    use crate::application::service::{read_capture_time, Planner};
    use crate::domain::track::TrackIndex;
    use crate::test_utils::{jpeg_with_exif, FixedZone};
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    #[test]
    fn text_fields_map_to_string_tags() {
        let tag = to_exif_tag(ExifField::OffsetTimeOriginal, &FieldValue::from("+01:00"))
            .expect("offset tag");
        assert!(matches!(tag, ExifTag::OffsetTimeOriginal(ref s) if s == "+01:00"));

        let tag = to_exif_tag(ExifField::GpsLongitudeRef, &FieldValue::from("W"))
            .expect("ref tag");
        assert!(matches!(tag, ExifTag::GPSLongitudeRef(ref s) if s == "W"));
    }

    #[test]
    fn coordinates_map_to_three_rationals() {
        let value = FieldValue::RationalTriple([
            Rational::new(51, 1),
            Rational::new(34, 1),
            Rational::new(242, 100),
        ]);
        let tag = to_exif_tag(ExifField::GpsLatitude, &value).expect("latitude tag");
        match tag {
            ExifTag::GPSLatitude(parts) => {
                assert_eq!(parts.len(), 3);
                assert_eq!(parts[2].nominator, 242);
                assert_eq!(parts[2].denominator, 100);
            }
            other => panic!("unexpected tag {other:?}"),
        }
    }

    #[test]
    fn altitude_maps_to_single_rational() {
        let tag = to_exif_tag(
            ExifField::GpsAltitude,
            &FieldValue::Rational(Rational::new(151, 2)),
        )
        .expect("altitude tag");
        assert!(matches!(tag, ExifTag::GPSAltitude(ref v) if v.len() == 1 && v[0].nominator == 151));
    }

    #[test]
    fn mismatched_shape_is_rejected() {
        let err = to_exif_tag(ExifField::GpsLatitude, &FieldValue::from("51.5")).unwrap_err();
        assert!(matches!(err, MetadataError::WriteFailed(ref msg) if msg.contains("GPSLatitude")));

        let err = to_exif_tag(
            ExifField::DateTimeOriginal,
            &FieldValue::Rational(Rational::new(1, 1)),
        )
        .unwrap_err();
        assert!(matches!(err, MetadataError::WriteFailed(_)));
    }

    #[test]
    fn missing_file_fails_to_write() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing.jpg");
        let err = ExifCodec::new()
            .write_field(&path, ExifField::GpsLatitudeRef, &FieldValue::from("N"))
            .unwrap_err();
        assert!(matches!(err, MetadataError::WriteFailed(_)));
    }

    #[test]
    fn written_fields_read_back_from_jpeg() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("IMG_0001.jpg");
        std::fs::write(&path, jpeg_with_exif("2022:08:03 17:57:55", None, None))
            .expect("write jpeg");

        let codec = ExifCodec::new();
        assert!(codec
            .read_field(&path, ExifField::GpsLatitude)
            .unwrap_err()
            .is_not_found());

        let fields = [
            (
                ExifField::GpsLatitude,
                FieldValue::RationalTriple([
                    Rational::new(51, 1),
                    Rational::new(34, 1),
                    Rational::new(242, 100),
                ]),
            ),
            (ExifField::GpsLatitudeRef, FieldValue::from("N")),
            (
                ExifField::GpsLongitude,
                FieldValue::RationalTriple([
                    Rational::new(0, 1),
                    Rational::new(8, 1),
                    Rational::new(1835, 100),
                ]),
            ),
            (ExifField::GpsLongitudeRef, FieldValue::from("W")),
            (ExifField::GpsAltitude, FieldValue::Rational(Rational::new(75, 1))),
            (ExifField::DateTimeOriginal, FieldValue::from("2022:08:03 18:57:55")),
            (ExifField::OffsetTimeOriginal, FieldValue::from("+01:00")),
            (ExifField::SubSecTimeOriginal, FieldValue::from("000")),
        ];
        for (field, value) in &fields {
            codec.write_field(&path, *field, value).expect("write field");
        }

        for (field, value) in &fields {
            assert_eq!(codec.read_field(&path, *field).as_ref(), Ok(value), "{field}");
        }
        assert_eq!(
            read_capture_time(&codec, &path).expect("capture time"),
            Utc.with_ymd_and_hms(2022, 8, 3, 17, 57, 55).unwrap()
        );

        // Location is now present, so no GPS operation is planned again.
        let track = TrackIndex::default();
        let zones = FixedZone::named("Europe/London");
        let planner = Planner::new(&codec, &zones, &track);
        assert_eq!(planner.check_gps(&path).expect("check"), None);
    }
}
