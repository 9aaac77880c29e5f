// SPDX-License-Identifier: MPL-2.0
use crate::domain::metadata::GpsCoordinates;
use chrono::{DateTime, Utc};

/// A single GPS fix from a recorded track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    timestamp: DateTime<Utc>,
    position: GpsCoordinates,
    elevation: Option<f64>,
}

impl TrackPoint {
    #[must_use]
    pub fn new(
        timestamp: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        elevation: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            position: GpsCoordinates::new(latitude, longitude),
            elevation,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn position(&self) -> GpsCoordinates {
        self.position
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.position.latitude()
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.position.longitude()
    }

    /// Elevation in meters, if the fix recorded one.
    #[must_use]
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }
}
