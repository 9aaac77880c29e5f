// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`metadata`]: EXIF field reading and writing
//! - [`zone`]: Position to time-zone lookup
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `exif` or `little_exif` types)
//! - Traits are `Send + Sync`
//! - Methods return `Result` with domain error types

pub mod metadata;
pub mod zone;

// Re-export main types for convenience
pub use metadata::{MetadataCodec, MetadataError, MetadataReader, MetadataWriter};
pub use zone::ZoneResolver;
