// SPDX-License-Identifier: MPL-2.0
//! Command-line application: wires adapters into the reconciliation services
//! and drives them over a directory of photos.

pub mod cli;
pub mod paths;

pub use cli::{parse_args, Command, TagOptions, USAGE};

use crate::application::port::{MetadataCodec, ZoneResolver};
use crate::application::service::{load_track, Reconciler, TrackSource};
use crate::config::{self, Config};
use crate::directory_scanner::PhotoList;
use crate::error::Result;
use crate::infrastructure::TzfZoneResolver;
use crate::media::ExifCodec;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Photos reconciled without error.
    pub processed: usize,
    /// Photos skipped because their capture time is outside the track.
    pub skipped: usize,
    /// Operations planned across all photos.
    pub planned: usize,
    /// Operations written; zero in a dry run.
    pub applied: usize,
}

/// Runs `tag` with the file-backed EXIF codec and offline zone lookup.
pub fn run(options: &TagOptions) -> Result<RunSummary> {
    let codec = ExifCodec::new();
    let zones = TzfZoneResolver::new();
    run_with(&codec, &zones, options)
}

/// Runs `tag` with the given adapters.
///
/// Photos are processed one at a time in name order. A photo whose capture
/// time is outside the track is skipped; any other error stops the run.
pub fn run_with<C, Z>(codec: &C, zones: &Z, options: &TagOptions) -> Result<RunSummary>
where
    C: MetadataCodec + ?Sized,
    Z: ZoneResolver + ?Sized,
{
    let photos = PhotoList::scan_directory(&options.images)?;
    tracing::info!(
        directory = %options.images.display(),
        photos = photos.len(),
        dry_run = options.dry_run,
        "starting"
    );

    let config = match options.source {
        TrackSource::Fetch => load_config(options)?,
        TrackSource::Files(_) => Config::default(),
    };
    let track = load_track(codec, &options.source, &config, photos.photos())?;
    if let Some((start, end)) = track.coverage() {
        tracing::info!(%start, %end, points = track.len(), "track coverage");
    }

    let reconciler = Reconciler::new(codec, zones, &track);
    let mut summary = RunSummary::default();

    for photo in photos.iter() {
        match reconciler.reconcile(photo, options.dry_run) {
            Ok(operations) => {
                summary.processed += 1;
                summary.planned += operations.len();
                if options.dry_run {
                    for operation in &operations {
                        tracing::info!(photo = %photo.display(), "would apply: {operation}");
                    }
                } else {
                    summary.applied += operations.len();
                }
            }
            Err(err) if err.is_out_of_range() => {
                tracing::warn!("skipping {err}");
                summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        processed = summary.processed,
        skipped = summary.skipped,
        planned = summary.planned,
        applied = summary.applied,
        "finished"
    );
    Ok(summary)
}

fn load_config(options: &TagOptions) -> Result<Config> {
    match &options.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
}
