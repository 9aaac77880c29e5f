// SPDX-License-Identifier: MPL-2.0
//! Applying planned operations to a photo file.

use super::capture_time::read_capture_time;
use crate::application::port::MetadataCodec;
use crate::domain::reconcile::{Operation, OperationKind};
use crate::error::{Error, Result};
use crate::media::file_times;
use std::path::Path;

/// Writes operations to photo files in order.
///
/// Writes are not transactional: a failure stops at the failing field and
/// leaves earlier fields written.
pub struct Executor<'a, C: ?Sized> {
    codec: &'a C,
}

impl<'a, C: MetadataCodec + ?Sized> Executor<'a, C> {
    pub fn new(codec: &'a C) -> Self {
        Self { codec }
    }

    /// Applies `operations` in list order.
    pub fn apply(&self, path: &Path, operations: &[Operation]) -> Result<()> {
        for operation in operations {
            self.apply_one(path, operation)?;
        }
        Ok(())
    }

    fn apply_one(&self, path: &Path, operation: &Operation) -> Result<()> {
        tracing::info!(photo = %path.display(), "{operation}");
        match operation.kind() {
            OperationKind::SetFields { fields, .. } => {
                for (field, value) in fields {
                    self.codec
                        .write_field(path, *field, value)
                        .map_err(|source| Error::FieldWrite {
                            field: *field,
                            source,
                        })?;
                }
            }
            OperationKind::SyncFileTimes => {
                // Capture time may have just been corrected.
                let instant = read_capture_time(self.codec, path)?;
                file_times::set_file_times(path, instant)?;
            }
        }
        Ok(())
    }
}
