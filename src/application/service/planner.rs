// SPDX-License-Identifier: MPL-2.0
//! The three per-photo checks that decide which corrections are needed.
//!
//! Each check compares what the photo currently stores with what the track
//! says it should store and yields at most one [`Operation`]. Checks only
//! read; nothing is written until the operations reach the
//! [`Executor`](super::Executor).

use super::capture_time::read_capture_time;
use super::local_time::derive_expected_local_time;
use crate::application::port::{MetadataCodec, ZoneResolver};
use crate::config::defaults::ALTITUDE_MAX_DENOMINATOR;
use crate::domain::metadata::{
    best_rational, degrees_to_dms, ExifField, FieldGroup, FieldValue, Rational,
};
use crate::domain::reconcile::Operation;
use crate::domain::time;
use crate::domain::track::TrackIndex;
use crate::error::Result;
use crate::media::file_times;
use std::collections::BTreeMap;
use std::path::Path;

pub const GPS_MISSING_REASON: &str = "GPS data not found in EXIF";
pub const LOCAL_TIME_REASON: &str = "DateTimeOriginal data was not in local time";
pub const MOD_TIME_REASON: &str = "modification time does not match capture time";

/// Plans corrections for photos against one loaded track.
pub struct Planner<'a, C: ?Sized, Z: ?Sized> {
    codec: &'a C,
    zones: &'a Z,
    track: &'a TrackIndex,
}

impl<'a, C, Z> Planner<'a, C, Z>
where
    C: MetadataCodec + ?Sized,
    Z: ZoneResolver + ?Sized,
{
    pub fn new(codec: &'a C, zones: &'a Z, track: &'a TrackIndex) -> Self {
        Self {
            codec,
            zones,
            track,
        }
    }

    /// Plans GPS tags for a photo that has none.
    ///
    /// A photo with any stored latitude is left alone, so the check never
    /// overwrites location data and a second run plans nothing.
    pub fn check_gps(&self, path: &Path) -> Result<Option<Operation>> {
        match self.codec.read_field(path, ExifField::GpsLatitude) {
            Ok(_) => return Ok(None),
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let instant = read_capture_time(self.codec, path)?;
        let point = self.track.resolve(instant)?;
        let position = point.position();

        let altitude = point.elevation().map_or(Rational::new(0, 1), |elevation| {
            best_rational(elevation.abs(), ALTITUDE_MAX_DENOMINATOR)
        });

        let fields = BTreeMap::from([
            (
                ExifField::GpsLatitude,
                FieldValue::RationalTriple(degrees_to_dms(position.latitude())),
            ),
            (
                ExifField::GpsLatitudeRef,
                FieldValue::from(position.latitude_ref()),
            ),
            (
                ExifField::GpsLongitude,
                FieldValue::RationalTriple(degrees_to_dms(position.longitude())),
            ),
            (
                ExifField::GpsLongitudeRef,
                FieldValue::from(position.longitude_ref()),
            ),
            (ExifField::GpsAltitude, FieldValue::Rational(altitude)),
        ]);

        Ok(Some(Operation::set_fields(
            GPS_MISSING_REASON,
            FieldGroup::GpsInfo,
            fields,
        )))
    }

    /// Plans updates to whichever local-time fields differ from the time at
    /// the photo's position.
    pub fn check_local_time(&self, path: &Path) -> Result<Option<Operation>> {
        let instant = read_capture_time(self.codec, path)?;
        let point = self.track.resolve(instant)?;
        let expected = derive_expected_local_time(self.zones, instant, point.position())?;

        let current_date_time = self.codec.read_text(path, ExifField::DateTimeOriginal)?;
        // Unreadable offset or sub-second counts as empty and gets rewritten.
        let current_offset = self
            .codec
            .read_text(path, ExifField::OffsetTimeOriginal)
            .unwrap_or_default();
        let current_sub_second = self
            .codec
            .read_text(path, ExifField::SubSecTimeOriginal)
            .unwrap_or_default();

        let mut fields = BTreeMap::new();
        for (field, current, wanted) in [
            (
                ExifField::DateTimeOriginal,
                current_date_time,
                expected.date_time,
            ),
            (ExifField::OffsetTimeOriginal, current_offset, expected.offset),
            (
                ExifField::SubSecTimeOriginal,
                current_sub_second,
                expected.sub_second,
            ),
        ] {
            if current.trim() != wanted {
                fields.insert(field, FieldValue::Ascii(wanted));
            }
        }

        if fields.is_empty() {
            return Ok(None);
        }
        Ok(Some(Operation::set_fields(
            LOCAL_TIME_REASON,
            FieldGroup::Exif,
            fields,
        )))
    }

    /// Plans a file-time update when the file's modification minute differs
    /// from the capture minute.
    pub fn check_mod_time(&self, path: &Path) -> Result<Option<Operation>> {
        let instant = read_capture_time(self.codec, path)?;
        let modified = file_times::modified_utc(path)?;

        if time::same_minute(modified, instant) {
            return Ok(None);
        }
        tracing::debug!(photo = %path.display(), %modified, %instant, "modification time differs");
        Ok(Some(Operation::sync_file_times(MOD_TIME_REASON)))
    }
}
