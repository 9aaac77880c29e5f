// SPDX-License-Identifier: MPL-2.0
//! GPS track domain: time-ordered fixes and nearest-time resolution.
//!
//! - [`TrackPoint`]: one immutable GPS fix
//! - [`TrackIndex`]: merged, time-sorted fixes with [`TrackIndex::resolve`]
//! - [`ResolveError`]: why an instant could not be matched

mod index;
mod point;

pub use index::{ResolveError, TrackIndex, BOUNDARY_TOLERANCE_HOURS};
pub use point::TrackPoint;
