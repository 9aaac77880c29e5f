// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Track matching**: Boundary tolerance around the loaded track
//! - **Rationals**: Denominators used when encoding coordinates and altitude
//! - **Files**: Config file location and environment overrides

// ==========================================================================
// Track Matching Defaults
// ==========================================================================

/// How far outside the track's time range a photo may be and still be
/// matched to the nearest endpoint.
pub const BOUNDARY_TOLERANCE_HOURS: i64 = crate::domain::track::BOUNDARY_TOLERANCE_HOURS;

// ==========================================================================
// Rational Encoding Defaults
// ==========================================================================

/// Denominator of the seconds component of a GPS coordinate.
pub const DMS_SECONDS_DENOMINATOR: u32 = crate::domain::metadata::DMS_SECONDS_DENOMINATOR;

/// Largest denominator used when approximating altitude as a rational.
pub const ALTITUDE_MAX_DENOMINATOR: u32 = 10_000;

/// Layout of the EXIF `DateTimeOriginal` field.
pub const EXIF_DATE_TIME_FORMAT: &str = crate::domain::time::EXIF_DATE_TIME_FORMAT;

// ==========================================================================
// File Defaults
// ==========================================================================

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "gpxif";

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GPXIF_CONFIG_DIR";

/// Extensions (compared case-insensitively) of photos to reconcile.
pub const PHOTO_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(BOUNDARY_TOLERANCE_HOURS > 0);
    assert!(DMS_SECONDS_DENOMINATOR > 0);
    // Hundredths of a second fit well inside u32 for 60 seconds.
    assert!(DMS_SECONDS_DENOMINATOR <= 1_000_000);
    assert!(ALTITUDE_MAX_DENOMINATOR > 0);
    assert!(!CONFIG_FILE.is_empty());
};
