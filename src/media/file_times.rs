// SPDX-License-Identifier: MPL-2.0
//! Filesystem access and modification times.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::fs::{self, File, FileTimes};
use std::path::Path;
use std::time::SystemTime;

fn filesystem_error(path: &Path, err: &std::io::Error) -> Error {
    Error::Filesystem {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Returns the file's modification time.
pub fn modified_utc(path: &Path) -> Result<DateTime<Utc>> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| filesystem_error(path, &e))?;
    Ok(DateTime::<Utc>::from(modified))
}

/// Sets both access and modification time of the file to `instant`.
pub fn set_file_times(path: &Path, instant: DateTime<Utc>) -> Result<()> {
    let time = SystemTime::from(instant);
    let times = FileTimes::new().set_accessed(time).set_modified(time);
    File::options()
        .write(true)
        .open(path)
        .and_then(|file| file.set_times(times))
        .map_err(|e| filesystem_error(path, &e))
}
