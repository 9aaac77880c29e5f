// SPDX-License-Identifier: MPL-2.0
//! Per-photo pipeline: plan, apply, then plan and apply the file-time sync.

use super::executor::Executor;
use super::planner::Planner;
use crate::application::port::{MetadataCodec, ZoneResolver};
use crate::domain::reconcile::{Operation, Stage};
use crate::domain::track::TrackIndex;
use crate::error::{Error, Result};
use std::path::Path;

pub struct Reconciler<'a, C: ?Sized, Z: ?Sized> {
    planner: Planner<'a, C, Z>,
    executor: Executor<'a, C>,
}

impl<'a, C, Z> Reconciler<'a, C, Z>
where
    C: MetadataCodec + ?Sized,
    Z: ZoneResolver + ?Sized,
{
    pub fn new(codec: &'a C, zones: &'a Z, track: &'a TrackIndex) -> Self {
        Self {
            planner: Planner::new(codec, zones, track),
            executor: Executor::new(codec),
        }
    }

    /// Brings one photo in line with the track and returns the operations
    /// planned for it.
    ///
    /// In a dry run all three checks read the photo as it is and nothing is
    /// written. Otherwise GPS and local-time corrections are written first
    /// and the modification-time check runs against the corrected metadata.
    ///
    /// Errors carry the photo name and the failing stage.
    pub fn reconcile(&self, path: &Path, dry_run: bool) -> Result<Vec<Operation>> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let at = |stage: Stage| {
            let name = name.as_str();
            move |err: Error| err.in_photo(name, stage)
        };

        let mut operations = Vec::new();
        operations.extend(self.planner.check_gps(path).map_err(at(Stage::GpsCheck))?);
        operations.extend(
            self.planner
                .check_local_time(path)
                .map_err(at(Stage::LocalTimeCheck))?,
        );

        if dry_run {
            operations.extend(
                self.planner
                    .check_mod_time(path)
                    .map_err(at(Stage::ModTimeCheck))?,
            );
            return Ok(operations);
        }

        self.executor
            .apply(path, &operations)
            .map_err(at(Stage::Apply))?;

        if let Some(sync) = self
            .planner
            .check_mod_time(path)
            .map_err(at(Stage::ModTimeCheck))?
        {
            self.executor
                .apply(path, std::slice::from_ref(&sync))
                .map_err(at(Stage::Apply))?;
            operations.push(sync);
        }

        Ok(operations)
    }
}
