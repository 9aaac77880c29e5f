// SPDX-License-Identifier: MPL-2.0
//! Expected local wall-clock time for a position and instant.

use crate::application::port::ZoneResolver;
use crate::domain::metadata::GpsCoordinates;
use crate::domain::time::{self, DerivedLocalTime};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Resolves the zone covering `position` and expresses `instant` in it.
///
/// # Errors
///
/// Returns [`Error::ZoneResolution`] if no zone covers the position or the
/// resolver returns a name unknown to the tz database.
pub fn derive_expected_local_time<Z: ZoneResolver + ?Sized>(
    zones: &Z,
    instant: DateTime<Utc>,
    position: GpsCoordinates,
) -> Result<DerivedLocalTime> {
    let name = zones
        .zone_name(position.latitude(), position.longitude())
        .ok_or_else(|| Error::ZoneResolution(format!("no time zone at {}", position.format())))?;

    let zone: Tz = name
        .parse()
        .map_err(|e| Error::ZoneResolution(format!("unknown time zone {name:?}: {e}")))?;

    Ok(time::derive_local_time(instant, &zone))
}
