//! Core data types for oxcp
//!
//! Statistics for a copy run and the classification of paths the planner
//! works from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transfer rate in bytes per second
pub type TransferRate = f64;

/// File copy statistics
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of directories created
    pub directories_created: u64,
    /// Number of symbolic links recreated
    pub symlinks_created: u64,
    /// Number of files skipped because the destination was up to date
    pub files_skipped: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Number of errors encountered
    pub errors: u64,
    /// Total duration of the operation
    pub duration: Duration,
}

impl CopyStats {
    /// Create a new empty statistics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of items materialized in the destination
    pub fn items_copied(&self) -> u64 {
        self.files_copied + self.directories_created + self.symlinks_created
    }

    /// Calculate the overall transfer rate
    pub fn transfer_rate(&self) -> TransferRate {
        if self.duration.as_secs_f64() > 0.0 {
            self.bytes_copied as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Merge statistics from another instance
    pub fn merge(&mut self, other: &CopyStats) {
        self.files_copied += other.files_copied;
        self.directories_created += other.directories_created;
        self.symlinks_created += other.symlinks_created;
        self.files_skipped += other.files_skipped;
        self.bytes_copied += other.bytes_copied;
        self.errors += other.errors;
        self.duration += other.duration;
    }
}

/// Classification of a path on the local filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileKind {
    /// A regular file
    File,
    /// A directory
    Directory,
    /// A symbolic link (when not dereferencing)
    Symlink,
    /// The path does not exist
    Missing,
}

impl FileKind {
    /// Check if the path exists at all
    pub fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Check if the path is a directory
    pub fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}
