// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! This module provides pure domain types for the EXIF fields the reconciler
//! reads and writes:
//! - [`GpsCoordinates`]: decimal-degree location
//! - [`FieldValue`]: closed set of value shapes a field can hold
//! - [`ExifField`] / [`FieldGroup`]: the fields this crate touches, and the IFD they live in
//! - [`degrees_to_dms`] / [`best_rational`]: conversions into EXIF rationals

mod field;
mod rational;
mod types;

pub use field::{ExifField, FieldGroup, FieldValue, Rational};
pub use rational::{best_rational, degrees_to_dms, DMS_SECONDS_DENOMINATOR};
pub use types::GpsCoordinates;
