// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core reconciliation logic.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Apart from `chrono` for time arithmetic it has no dependencies on external
//! crates, so everything here is testable without files or the network.
//!
//! # Modules
//!
//! - [`metadata`]: EXIF field identities and values ([`ExifField`](metadata::ExifField),
//!   [`FieldValue`](metadata::FieldValue), [`GpsCoordinates`](metadata::GpsCoordinates))
//! - [`reconcile`]: Planned corrections ([`Operation`](reconcile::Operation))
//! - [`time`]: EXIF capture-time parsing and local-time derivation
//! - [`track`]: GPS track points and time lookup ([`TrackIndex`](track::TrackIndex))

pub mod metadata;
pub mod reconcile;
pub mod time;
pub mod track;
