// SPDX-License-Identifier: MPL-2.0
//! Time-zone lookup port.

/// Maps a geographic position to an IANA time-zone name.
pub trait ZoneResolver: Send + Sync {
    /// Returns the zone name (`Europe/London`) for the given position, or
    /// `None` when no zone covers it.
    fn zone_name(&self, latitude: f64, longitude: f64) -> Option<String>;
}
