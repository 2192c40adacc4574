//! Error types of the drivers.
//!
//! Feeding bytes never fails: only the byte sources can.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the drivers.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors occurring while reading the input.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying reader, passed through unmodified.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The input file could not be opened or mapped.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the underlying I/O error.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Io(err) => err,
            Self::Open { source, .. } => source,
        }
    }
}
