// SPDX-License-Identifier: MPL-2.0
//! A planned correction: the reason it is needed and what it changes.

use crate::domain::metadata::{ExifField, FieldGroup, FieldValue};
use std::collections::BTreeMap;
use std::fmt;

/// What an [`Operation`] changes when executed.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationKind {
    /// Write each field in `fields` inside `group`.
    SetFields {
        group: FieldGroup,
        fields: BTreeMap<ExifField, FieldValue>,
    },
    /// Set the file's access and modification times to the capture instant.
    SyncFileTimes,
}

/// A single planned correction for one photo.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    reason: String,
    kind: OperationKind,
}

impl Operation {
    /// Creates a metadata update. Every field must belong to `group`.
    #[must_use]
    pub fn set_fields(
        reason: impl Into<String>,
        group: FieldGroup,
        fields: BTreeMap<ExifField, FieldValue>,
    ) -> Self {
        debug_assert!(fields.keys().all(|field| field.group() == group));
        Self {
            reason: reason.into(),
            kind: OperationKind::SetFields { group, fields },
        }
    }

    /// Creates a filesystem-time update.
    #[must_use]
    pub fn sync_file_times(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            kind: OperationKind::SyncFileTimes,
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    #[must_use]
    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    /// Group written by this operation, if it touches metadata.
    #[must_use]
    pub fn target_group(&self) -> Option<FieldGroup> {
        match &self.kind {
            OperationKind::SetFields { group, .. } => Some(*group),
            OperationKind::SyncFileTimes => None,
        }
    }

    /// Desired field values; empty for filesystem-time updates.
    #[must_use]
    pub fn desired_fields(&self) -> Option<&BTreeMap<ExifField, FieldValue>> {
        match &self.kind {
            OperationKind::SetFields { fields, .. } => Some(fields),
            OperationKind::SyncFileTimes => None,
        }
    }

    #[must_use]
    pub fn is_filesystem_time_update(&self) -> bool {
        matches!(self.kind, OperationKind::SyncFileTimes)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            OperationKind::SetFields { group, fields } => {
                write!(f, "{}: set {group}", self.reason)?;
                for (field, value) in fields {
                    write!(f, " {field}={value}")?;
                }
                Ok(())
            }
            OperationKind::SyncFileTimes => {
                write!(f, "{}: set file times to capture time", self.reason)
            }
        }
    }
}
