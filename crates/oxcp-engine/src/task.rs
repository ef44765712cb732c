//! Copy requests and planned tasks

use oxcp_types::{BufferSize, Error};
use std::path::{Path, PathBuf};

/// What a planned task materializes in the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Copy a regular file's contents
    CopyFile,
    /// Create a directory
    CreateDir,
    /// Recreate a symbolic link with its original target
    CopySymlink,
}

/// One planned (source, destination) operation
///
/// Created by the planner, immutable, consumed once by the executor. The
/// plan order guarantees a directory task precedes every task beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTask {
    /// Source path
    pub source: PathBuf,
    /// Destination path
    pub destination: PathBuf,
    /// What this task materializes
    pub kind: TaskKind,
}

impl CopyTask {
    /// Create a file-copy task
    pub fn file<P: Into<PathBuf>, Q: Into<PathBuf>>(source: P, destination: Q) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind: TaskKind::CopyFile,
        }
    }

    /// Create a directory-creation task
    pub fn dir<P: Into<PathBuf>, Q: Into<PathBuf>>(source: P, destination: Q) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind: TaskKind::CreateDir,
        }
    }

    /// Create a symlink-recreation task
    pub fn symlink<P: Into<PathBuf>, Q: Into<PathBuf>>(source: P, destination: Q) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            kind: TaskKind::CopySymlink,
        }
    }
}

/// Copy request containing all parameters for one run
///
/// Parsed once from the command line and read-only afterwards.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// Source paths, in command-line order
    pub sources: Vec<PathBuf>,
    /// Destination path
    pub destination: PathBuf,
    /// Copy directories recursively
    pub recursive: bool,
    /// Overwrite existing destination files
    pub force: bool,
    /// Print each copy operation
    pub verbose: bool,
    /// Restore timestamps on copied files
    pub preserve: bool,
    /// Follow symlinks instead of recreating them
    pub dereference: bool,
    /// Skip files whose destination is at least as new as the source
    pub update: bool,
    /// Turn all-zero blocks into holes in the destination
    pub sparse: bool,
    /// Chunk size for file contents
    pub buffer_size: BufferSize,
}

impl CopyRequest {
    /// Create a new copy request with default settings
    pub fn new<P: Into<PathBuf>>(sources: Vec<PathBuf>, destination: P) -> Self {
        Self {
            sources,
            destination: destination.into(),
            recursive: false,
            force: false,
            verbose: false,
            preserve: false,
            dereference: false,
            update: false,
            sparse: false,
            buffer_size: BufferSize::default(),
        }
    }

    /// Enable recursive directory copying
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Enable overwriting of existing destinations
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Enable per-operation reporting
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable timestamp preservation
    pub fn preserve(mut self, preserve: bool) -> Self {
        self.preserve = preserve;
        self
    }

    /// Follow symlinks instead of recreating them
    pub fn dereference(mut self, dereference: bool) -> Self {
        self.dereference = dereference;
        self
    }

    /// Only copy over destinations older than their source
    pub fn update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Write all-zero blocks as holes
    pub fn sparse(mut self, sparse: bool) -> Self {
        self.sparse = sparse;
        self
    }

    /// Set the I/O chunk size
    pub fn buffer_size(mut self, buffer_size: BufferSize) -> Self {
        self.buffer_size = buffer_size;
        self
    }
}

/// A failed item: the offending path and what went wrong
#[derive(Debug)]
pub struct Failure {
    /// The path the failure is about
    pub path: PathBuf,
    /// The error that occurred
    pub error: Error,
}

impl Failure {
    /// Create a new failure record
    pub fn new<P: Into<PathBuf>>(path: P, error: Error) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Base name of a source path, for joining under a directory destination
pub(crate) fn base_name(path: &Path) -> Option<&std::ffi::OsStr> {
    path.file_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_request_builder() {
        let request = CopyRequest::new(vec![PathBuf::from("src")], "dst")
            .recursive(true)
            .force(true)
            .verbose(true)
            .preserve(true)
            .buffer_size(BufferSize::new(4096).unwrap());

        assert!(request.recursive);
        assert!(request.force);
        assert!(request.verbose);
        assert!(request.preserve);
        assert!(!request.dereference);
        assert_eq!(request.buffer_size.get(), 4096);
    }

    #[test]
    fn test_task_constructors() {
        let task = CopyTask::file("a", "b");
        assert_eq!(task.kind, TaskKind::CopyFile);

        let task = CopyTask::dir("a", "b");
        assert_eq!(task.kind, TaskKind::CreateDir);

        let task = CopyTask::symlink("a", "b");
        assert_eq!(task.kind, TaskKind::CopySymlink);
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("dir/file.txt")).unwrap(), "file.txt");
        assert!(base_name(Path::new("..")).is_none());
    }
}
