// SPDX-License-Identifier: MPL-2.0
//! `tzf-rs` adapter implementing the [`ZoneResolver`] port trait.
//!
//! The finder carries the embedded zone-boundary dataset, so it is built once
//! per run and shared by every lookup.
//!
//! [`ZoneResolver`]: crate::application::port::ZoneResolver

use crate::application::port::ZoneResolver;
use tzf_rs::DefaultFinder;

/// Offline position to IANA zone lookup.
pub struct TzfZoneResolver {
    finder: DefaultFinder,
}

impl TzfZoneResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TzfZoneResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TzfZoneResolver").finish_non_exhaustive()
    }
}

impl ZoneResolver for TzfZoneResolver {
    fn zone_name(&self, latitude: f64, longitude: f64) -> Option<String> {
        // tzf takes longitude first.
        let name = self.finder.get_tz_name(longitude, latitude);
        (!name.is_empty()).then(|| name.to_string())
    }
}
