// SPDX-License-Identifier: MPL-2.0
//! Building the track index from local files or the configured endpoint.

use super::capture_time::read_capture_time;
use crate::application::port::MetadataReader;
use crate::config::Config;
use crate::domain::track::TrackIndex;
use crate::error::{Error, Result};
use crate::media::{gpx, track_fetch};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Where track data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSource {
    /// One or more local GPX files.
    Files(Vec<PathBuf>),
    /// The `[track_source]` endpoint, queried for the photos' date range.
    Fetch,
}

/// Returns the earliest and latest capture instants among `photos`.
///
/// # Errors
///
/// Fails if any photo's capture time cannot be read, or with
/// [`Error::SourceUnavailable`] when `photos` is empty.
pub fn determine_time_range<R, P>(reader: &R, photos: &[P]) -> Result<(DateTime<Utc>, DateTime<Utc>)>
where
    R: MetadataReader + ?Sized,
    P: AsRef<Path>,
{
    let mut range: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
    for photo in photos {
        let instant = read_capture_time(reader, photo.as_ref())?;
        range = Some(match range {
            None => (instant, instant),
            Some((start, end)) => (start.min(instant), end.max(instant)),
        });
    }
    range.ok_or_else(|| {
        Error::SourceUnavailable("no photos with capture times to fetch track data for".into())
    })
}

/// Loads the track for a run.
///
/// # Errors
///
/// Returns [`Error::Config`] when fetching without a configured track source,
/// and otherwise whatever reading the photos or the track data fails with.
pub fn load_track<R, P>(
    reader: &R,
    source: &TrackSource,
    config: &Config,
    photos: &[P],
) -> Result<TrackIndex>
where
    R: MetadataReader + ?Sized,
    P: AsRef<Path>,
{
    match source {
        TrackSource::Files(paths) => gpx::load_track_index(paths.as_slice()),
        TrackSource::Fetch => {
            let endpoint = config.track_source.as_ref().ok_or_else(|| {
                Error::Config("--fetch needs a [track_source] section in the config file".into())
            })?;
            let (from, to) = determine_time_range(reader, photos)?;
            let points = track_fetch::fetch_track(endpoint, from, to)?;
            let index = TrackIndex::from_sources([points]);
            tracing::info!(points = index.len(), "loaded fetched track data");
            Ok(index)
        }
    }
}
