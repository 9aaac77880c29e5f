// SPDX-License-Identifier: MPL-2.0
//! Photo and track file handling.
//!
//! This module holds everything that touches file formats or the network:
//! EXIF reading and writing for JPEG photos, GPX parsing and download, and
//! filesystem timestamps.

pub mod file_times;
pub mod gpx;
pub mod metadata;
pub mod metadata_writer;
pub mod track_fetch;

// Re-export commonly used types
pub use gpx::{load_track_index, parse_gpx};
pub use metadata::ExifCodec;
pub use track_fetch::{expand_url_template, fetch_track};
