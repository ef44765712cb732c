//! Path classification
//!
//! Read-only stat calls that tell the planner what each argument actually
//! is: file, directory, symlink, or nothing at all.

use oxcp_types::{Error, FileKind, Result};
use std::path::Path;

/// Classify a path without following a trailing symlink
///
/// With `dereference` set, symlinks are classified as their targets; a
/// broken symlink then classifies as [`FileKind::Missing`].
pub fn classify<P: AsRef<Path>>(path: P, dereference: bool) -> Result<FileKind> {
    let path = path.as_ref();
    let metadata = if dereference {
        std::fs::metadata(path)
    } else {
        std::fs::symlink_metadata(path)
    };

    match metadata {
        Ok(metadata) => {
            let file_type = metadata.file_type();
            if file_type.is_symlink() {
                Ok(FileKind::Symlink)
            } else if file_type.is_dir() {
                Ok(FileKind::Directory)
            } else {
                Ok(FileKind::File)
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileKind::Missing),
        Err(e) => Err(Error::from_io(path, e)),
    }
}

/// Classify the destination of a run
///
/// Destinations are always dereferenced: copying into a symlink that points
/// at a directory means copying into that directory, matching the standard
/// tool.
pub fn classify_destination<P: AsRef<Path>>(path: P) -> Result<FileKind> {
    classify(path, true)
}
