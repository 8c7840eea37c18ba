//! Core error types for timetally-core.
//!
//! Parse failures are deliberately not here: a malformed line is data
//! (see [`crate::parse::ParseErrorKind`]), never an `Err`. The storage layer
//! is the only part of the core that touches the filesystem, so its errors
//! are the only ones a caller can receive.

use std::path::PathBuf;
use thiserror::Error;

/// Template-store errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create the data directory
    #[error("Failed to create data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the template slot
    #[error("Failed to read template slot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the template slot
    #[error("Failed to write template slot at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Slot file exists but is not valid TOML
    #[error("Failed to parse template slot: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Slot could not be serialized
    #[error("Failed to serialize template slot: {0}")]
    SerializeFailed(#[from] toml::ser::Error),
}
