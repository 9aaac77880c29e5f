// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port` that wrap external datasets or services.
//!
//! # Available Adapters
//!
//! - [`timezone`]: Offline time-zone lookup via `tzf-rs` (implements [`ZoneResolver`])
//!
//! The EXIF adapter ([`ExifCodec`]) lives in [`crate::media`] next to the
//! other photo file handling.
//!
//! [`ZoneResolver`]: crate::application::port::ZoneResolver
//! [`ExifCodec`]: crate::media::ExifCodec

pub mod timezone;

// Re-export main types for convenience
pub use timezone::TzfZoneResolver;
