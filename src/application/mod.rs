// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`service`]: Reconciliation use cases built on the ports
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure and media adapters implement application layer ports
//! - The CLI wires adapters into the services
//!
//! # Example
//!
//! ```ignore
//! use gpxif::application::service::Reconciler;
//! use gpxif::infrastructure::TzfZoneResolver;
//! use gpxif::media::ExifCodec;
//!
//! let codec = ExifCodec::new();
//! let zones = TzfZoneResolver::new();
//! let reconciler = Reconciler::new(&codec, &zones, &track);
//! let planned = reconciler.reconcile(path, true)?;
//! ```

pub mod port;
pub mod service;
