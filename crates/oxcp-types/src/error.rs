//! Error types and handling for oxcp
//!
//! Every failure the pipeline can produce is represented here as a structured
//! variant carrying the offending path(s). Per-item errors are aggregated by
//! the executor and reported at the end of a run; only an invalid destination
//! aborts a run outright.

use std::path::PathBuf;

/// Main error type for oxcp operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// A source path does not exist
    #[error("source not found: {path}")]
    SourceNotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// A directory source was given without recursive mode
    #[error("{path} is a directory (use --recursive to copy it)")]
    IsADirectory {
        /// The directory that was skipped
        path: PathBuf,
    },

    /// The destination cannot receive the requested sources
    #[error("invalid destination '{path}': {reason}")]
    InvalidDestination {
        /// The destination path
        path: PathBuf,
        /// Why the destination was rejected
        reason: String,
    },

    /// A directory would be copied into itself or one of its descendants
    #[error("cannot copy directory '{source}' into itself: '{destination}'")]
    RecursiveCopy {
        /// The source directory
        r#source: PathBuf,
        /// The offending destination inside it
        destination: PathBuf,
    },

    /// The destination already exists and overwriting was not requested
    #[error("destination already exists: {path} (use --force to overwrite)")]
    DestinationExists {
        /// The existing destination path
        path: PathBuf,
    },

    /// Permission denied
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// Path with insufficient permissions
        path: PathBuf,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing source path
    SourceNotFound,
    /// Directory source without recursive mode
    IsADirectory,
    /// Unusable destination
    InvalidDestination,
    /// Directory copied into itself
    RecursiveCopy,
    /// Destination exists without force
    DestinationExists,
    /// I/O related errors
    Io,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            Self::IsADirectory { .. } => ErrorKind::IsADirectory,
            Self::InvalidDestination { .. } => ErrorKind::InvalidDestination,
            Self::RecursiveCopy { .. } => ErrorKind::RecursiveCopy,
            Self::DestinationExists { .. } => ErrorKind::DestinationExists,
            Self::PermissionDenied { .. } | Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Check whether this error aborts the whole run
    ///
    /// Per-item errors are reported and the batch continues with the next
    /// item. An unusable destination is the one case where no plan exists at
    /// all, so nothing can continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidDestination { .. })
    }

    /// Create a new I/O error with a custom message
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an invalid-destination error
    pub fn invalid_destination<P: Into<PathBuf>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::InvalidDestination {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Convert an `std::io::Error` for `path` into a typed error
    ///
    /// Maps the not-found and permission-denied kinds onto their structured
    /// variants so batch reports keep the offending path.
    pub fn from_io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        let path = path.into();
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::SourceNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io {
                message: format!("{}: {}", path.display(), error),
            },
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
