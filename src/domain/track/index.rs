// SPDX-License-Identifier: MPL-2.0
//! Time-sorted track index and nearest-time resolution.

use super::point::TrackPoint;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// How far outside the track's covered range an instant may fall and still
/// clamp to the nearest endpoint (exclusive bound).
pub const BOUNDARY_TOLERANCE_HOURS: i64 = 24;

/// Why [`TrackIndex::resolve`] could not produce a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The index holds no points at all.
    EmptyTrack,

    /// The instant lies at least [`BOUNDARY_TOLERANCE_HOURS`] outside the covered range.
    OutOfRange {
        instant: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::EmptyTrack => write!(f, "no points in track data"),
            ResolveError::OutOfRange {
                instant,
                start,
                end,
            } => write!(
                f,
                "{} is out of range of loaded track data ({} to {})",
                instant.to_rfc3339(),
                start.to_rfc3339(),
                end.to_rfc3339()
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Every loaded track point, sorted ascending by timestamp.
///
/// Built once and never mutated afterwards. Points sharing a timestamp keep
/// the order in which their sources were merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackIndex {
    points: Vec<TrackPoint>,
}

impl TrackIndex {
    /// Builds an index from points in any order.
    #[must_use]
    pub fn new(mut points: Vec<TrackPoint>) -> Self {
        // Stable: equal timestamps stay in merge order.
        points.sort_by_key(TrackPoint::timestamp);
        Self { points }
    }

    /// Merges several parsed sources, in the order given, into one index.
    #[must_use]
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Vec<TrackPoint>>,
    {
        Self::new(sources.into_iter().flatten().collect())
    }

    #[must_use]
    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last timestamps, or `None` for an empty index.
    #[must_use]
    pub fn coverage(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.timestamp(), last.timestamp())),
            _ => None,
        }
    }

    /// Returns true if `instant` lies within the covered range (inclusive).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.coverage()
            .is_some_and(|(start, end)| start <= instant && instant <= end)
    }

    /// Finds the track point to use for `instant`.
    ///
    /// Inside the covered range this is the point with the smallest absolute
    /// time distance; on a tie the earliest point in the index wins. Just
    /// outside the range the first or last point is returned, provided the gap
    /// is under [`BOUNDARY_TOLERANCE_HOURS`].
    ///
    /// # Errors
    ///
    /// [`ResolveError::EmptyTrack`] for an empty index, [`ResolveError::OutOfRange`]
    /// when the instant is too far outside the covered range.
    pub fn resolve(&self, instant: DateTime<Utc>) -> Result<TrackPoint, ResolveError> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Err(ResolveError::EmptyTrack);
        };
        let (start, end) = (first.timestamp(), last.timestamp());
        let tolerance = TimeDelta::hours(BOUNDARY_TOLERANCE_HOURS);
        let out_of_range = || ResolveError::OutOfRange {
            instant,
            start,
            end,
        };

        if instant < start {
            return if start - instant < tolerance {
                Ok(*first)
            } else {
                Err(out_of_range())
            };
        }
        if instant > end {
            return if instant - end < tolerance {
                Ok(*last)
            } else {
                Err(out_of_range())
            };
        }

        // Linear scan: only a strictly smaller distance replaces the candidate.
        let mut closest = first;
        let mut min_diff = (first.timestamp() - instant).abs();
        for point in &self.points[1..] {
            let diff = (point.timestamp() - instant).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = point;
            }
        }
        Ok(*closest)
    }
}
