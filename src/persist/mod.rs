//! Stream-level I/O: opening sources, writing documents to sinks.

/// Source opening and line reading.
pub mod reader;
/// Document serialization to sinks.
pub mod writer;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Stream-level failure. Field-level noise never lands here.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The source file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },
    /// Reading failed partway through the source.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
    /// The source is not valid UTF-8.
    #[error("line {line} is not valid UTF-8")]
    Decode {
        /// One-based physical line number.
        line: usize,
    },
    /// The output file could not be created.
    #[error("cannot create {}: {source}", path.display())]
    Create {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },
    /// The sink rejected a write or flush.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),
}

/// Result alias for stream-level operations.
pub type PersistResult<T> = Result<T, PersistError>;
