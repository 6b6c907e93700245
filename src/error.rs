//! Crate-wide error type for disposal operations and configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by disposal strategies and configuration loading.
///
/// Filesystem errors pass through unmodified so callers can inspect the
/// underlying [`io::ErrorKind`] and decide whether a failure is fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem error surfaced from the storage capability.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A disposal path without a file name component.
    #[error("Path has no file name component: {0}")]
    InvalidPath(PathBuf),

    /// Unrecognized cleaner name in configuration.
    #[error("Unknown cleaner mode '{0}' (expected delete, archive or delayed)")]
    UnknownMode(String),

    /// Configuration loading failed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl Error {
    /// True if this error is a filesystem not-found error.
    ///
    /// Disposing an already-removed path is not unusual for a storage engine
    /// recovering from a crash mid-cleanup; callers typically treat this case
    /// as benign.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.is_not_found());

        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        assert!(!err.is_not_found());

        let err = Error::InvalidPath(PathBuf::from("/"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_io_error_passes_through_unmodified() {
        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }
}
