// SPDX-License-Identifier: MPL-2.0
//! Application services (use cases).
//!
//! # Available Services
//!
//! - [`capture_time`]: UTC capture instant of a photo
//! - [`local_time`]: Expected local time at a track position
//! - [`planner`]: GPS, local-time and modification-time checks
//! - [`executor`]: Applying planned operations
//! - [`reconciler`]: The per-photo pipeline tying planner and executor together
//! - [`track_source`]: Loading track data from files or the configured endpoint

pub mod capture_time;
pub mod executor;
pub mod local_time;
pub mod planner;
pub mod reconciler;
pub mod track_source;

// Re-export main types
pub use capture_time::read_capture_time;
pub use executor::Executor;
pub use local_time::derive_expected_local_time;
pub use planner::Planner;
pub use reconciler::Reconciler;
pub use track_source::{determine_time_range, load_track, TrackSource};
