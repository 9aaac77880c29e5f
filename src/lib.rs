// SPDX-License-Identifier: MPL-2.0
//! `gpxif` reconciles the location and local-time metadata of photos with a
//! recorded GPX track.
//!
//! For each JPEG in a directory it derives the UTC capture instant, finds the
//! nearest track point, and then:
//!
//! - adds GPS tags when the photo has none
//! - rewrites the local date/time, offset and sub-second fields to match the
//!   time zone at that point
//! - sets the file's modification time to the capture instant
//!
//! Changes are computed as [`Operation`](domain::reconcile::Operation)s first
//! and only written outside a dry run, so a second run finds nothing to do.

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;

#[cfg(test)]
pub mod test_utils;
