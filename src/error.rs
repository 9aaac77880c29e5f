// SPDX-License-Identifier: MPL-2.0
use crate::application::port::MetadataError;
use crate::domain::metadata::ExifField;
use crate::domain::reconcile::Stage;
use crate::domain::track::ResolveError;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("no points in track data")]
    EmptyTrack,

    #[error("{instant} is out of range of loaded track data ({start} - {end})")]
    OutOfRange {
        instant: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("DateTimeOriginal is missing or unreadable")]
    MissingTimestamp,

    #[error("malformed UTC offset: {0:?}")]
    MalformedOffset(String),

    #[error("Zone Error: {0}")]
    ZoneResolution(String),

    #[error("failed to write {field}: {source}")]
    FieldWrite {
        field: ExifField,
        #[source]
        source: MetadataError,
    },

    #[error("Filesystem Error: {path}: {message}")]
    Filesystem { path: String, message: String },

    #[error("Track Source Error: {0}")]
    SourceUnavailable(String),

    #[error("Metadata Error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Usage Error: {0}")]
    Usage(String),

    #[error("{photo}: {stage} failed: {source}")]
    Photo {
        photo: String,
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Adds photo and stage context to an error.
    #[must_use]
    pub fn in_photo(self, photo: impl Into<String>, stage: Stage) -> Self {
        Error::Photo {
            photo: photo.into(),
            stage,
            source: Box::new(self),
        }
    }

    /// Returns `true` if the underlying cause is a capture instant outside
    /// the loaded track, looking through photo context.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::OutOfRange { .. } => true,
            Error::Photo { source, .. } => source.is_out_of_range(),
            _ => false,
        }
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::EmptyTrack => Error::EmptyTrack,
            ResolveError::OutOfRange { instant, start, end } => {
                Error::OutOfRange { instant, start, end }
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
