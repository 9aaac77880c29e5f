// SPDX-License-Identifier: MPL-2.0
//! Steps of a single photo's reconciliation, used for error context.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    GpsCheck,
    LocalTimeCheck,
    ModTimeCheck,
    Apply,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::GpsCheck => "GPS check",
            Stage::LocalTimeCheck => "local time check",
            Stage::ModTimeCheck => "modification time check",
            Stage::Apply => "apply",
        })
    }
}
