// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure domain types for media metadata with no external dependencies.

// =============================================================================
// GpsCoordinates
// =============================================================================

/// GPS coordinates in decimal degrees.
///
/// This type represents geographic coordinates using the WGS84 coordinate
/// system (latitude and longitude in decimal degrees).
///
/// # Example
///
/// ```ignore
/// let coords = GpsCoordinates::new(51.56734, -0.13843);
/// assert_eq!(coords.latitude_ref(), "N");
/// assert_eq!(coords.longitude_ref(), "W");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    longitude: f64,
}

impl GpsCoordinates {
    /// Creates new GPS coordinates.
    ///
    /// Values outside valid ranges will be clamped:
    /// - Latitude: -90.0 to 90.0
    /// - Longitude: -180.0 to 180.0
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: longitude.clamp(-180.0, 180.0),
        }
    }

    /// Returns the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// EXIF `GPSLatitudeRef` letter: `N` above the equator, `S` otherwise.
    #[must_use]
    pub fn latitude_ref(&self) -> &'static str {
        if self.latitude > 0.0 {
            "N"
        } else {
            "S"
        }
    }

    /// EXIF `GPSLongitudeRef` letter: `E` east of the meridian, `W` otherwise.
    #[must_use]
    pub fn longitude_ref(&self) -> &'static str {
        if self.longitude > 0.0 {
            "E"
        } else {
            "W"
        }
    }

    /// Formats the coordinates as a human-readable string.
    ///
    /// Format: "51.567340° N, 0.138430° W"
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            self.latitude_ref(),
            self.longitude.abs(),
            self.longitude_ref()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
