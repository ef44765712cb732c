//! Copy planning
//!
//! Turns classified sources and a destination into an ordered list of
//! [`CopyTask`]s. Directory trees are enumerated depth-first with entries
//! sorted lexicographically by file name, parents before their contents, so
//! plans are deterministic and every directory task precedes the tasks
//! beneath it.

use crate::classify::{classify, classify_destination};
use crate::task::{base_name, CopyRequest, CopyTask, Failure};
use oxcp_types::{Error, FileKind, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// The ordered tasks of a run plus the sources that could not be planned
#[derive(Debug, Default)]
pub struct CopyPlan {
    /// Tasks in execution order
    pub tasks: Vec<CopyTask>,
    /// Sources that failed planning (missing, non-recursive directory, ...)
    pub failures: Vec<Failure>,
}

/// Check the destination against the number of sources
///
/// More than one source requires an existing directory destination; there is
/// no way to continue without one, so this is the run's one fatal error.
pub fn validate_destination(request: &CopyRequest) -> Result<FileKind> {
    let kind = classify_destination(&request.destination)?;

    if request.sources.len() > 1 && !kind.is_dir() {
        return Err(Error::invalid_destination(
            &request.destination,
            "destination must be an existing directory when copying multiple sources",
        ));
    }

    Ok(kind)
}

/// Plan a whole request: every source, in command-line order
pub fn plan(request: &CopyRequest) -> Result<CopyPlan> {
    let destination_kind = validate_destination(request)?;

    let mut plan = CopyPlan::default();
    for source in &request.sources {
        match plan_source(source, request, destination_kind) {
            Ok(tasks) => plan.tasks.extend(tasks),
            Err(error) => plan.failures.push(Failure::new(source, error)),
        }
    }

    debug!(
        "planned {} tasks ({} sources failed planning)",
        plan.tasks.len(),
        plan.failures.len()
    );
    Ok(plan)
}

/// Plan the tasks for a single source
///
/// `destination_kind` is the classification of the request's destination,
/// from [`validate_destination`].
pub fn plan_source(
    source: &Path,
    request: &CopyRequest,
    destination_kind: FileKind,
) -> Result<Vec<CopyTask>> {
    match classify(source, request.dereference)? {
        FileKind::Missing => Err(Error::SourceNotFound {
            path: source.to_path_buf(),
        }),
        FileKind::Directory => plan_directory(source, request, destination_kind),
        FileKind::File => Ok(vec![CopyTask::file(
            source,
            resolve_destination(source, request, destination_kind)?,
        )]),
        FileKind::Symlink => Ok(vec![CopyTask::symlink(
            source,
            resolve_destination(source, request, destination_kind)?,
        )]),
    }
}

/// Final destination path for a non-directory source
fn resolve_destination(
    source: &Path,
    request: &CopyRequest,
    destination_kind: FileKind,
) -> Result<PathBuf> {
    if destination_kind.is_dir() {
        let name = base_name(source).ok_or_else(|| {
            Error::io(format!(
                "cannot determine a file name for '{}'",
                source.display()
            ))
        })?;
        Ok(request.destination.join(name))
    } else {
        Ok(request.destination.clone())
    }
}

/// Plan the tasks for a directory source
fn plan_directory(
    source: &Path,
    request: &CopyRequest,
    destination_kind: FileKind,
) -> Result<Vec<CopyTask>> {
    if !request.recursive {
        return Err(Error::IsADirectory {
            path: source.to_path_buf(),
        });
    }

    let root = match destination_kind {
        FileKind::Directory => {
            let name = base_name(source).ok_or_else(|| {
                Error::io(format!(
                    "cannot determine a directory name for '{}'",
                    source.display()
                ))
            })?;
            request.destination.join(name)
        }
        FileKind::Missing => request.destination.clone(),
        FileKind::File | FileKind::Symlink => {
            return Err(Error::io(format!(
                "cannot overwrite non-directory '{}' with directory '{}'",
                request.destination.display(),
                source.display()
            )));
        }
    };

    if copies_into_itself(source, &root)? {
        return Err(Error::RecursiveCopy {
            source: source.to_path_buf(),
            destination: root,
        });
    }

    let mut tasks = vec![CopyTask::dir(source, &root)];

    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(request.dereference)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            Error::io(format!("failed to walk '{}': {}", source.display(), e))
        })?;
        let relative = entry.path().strip_prefix(source).map_err(|e| {
            Error::io(format!(
                "entry '{}' escapes its root: {}",
                entry.path().display(),
                e
            ))
        })?;
        let destination = root.join(relative);

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            tasks.push(CopyTask::symlink(entry.path(), destination));
        } else if file_type.is_dir() {
            tasks.push(CopyTask::dir(entry.path(), destination));
        } else {
            tasks.push(CopyTask::file(entry.path(), destination));
        }
    }

    Ok(tasks)
}

/// Detect a directory being copied into itself or one of its descendants
///
/// The source must exist, so it canonicalizes directly. The destination root
/// usually does not exist yet; it is resolved against its nearest existing
/// ancestor and compared lexically below that.
fn copies_into_itself(source: &Path, destination_root: &Path) -> Result<bool> {
    let source = std::fs::canonicalize(source).map_err(|e| Error::from_io(source, e))?;
    let resolved = resolve_against_existing_ancestor(destination_root);
    Ok(resolved == source || resolved.starts_with(&source))
}

/// Resolve a possibly-not-yet-existing path to an absolute form
fn resolve_against_existing_ancestor(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut ancestor = absolute.as_path();
    let mut tail: Vec<&std::ffi::OsStr> = Vec::new();
    loop {
        match std::fs::canonicalize(ancestor) {
            Ok(mut resolved) => {
                for component in tail.iter().rev() {
                    resolved.push(component);
                }
                return resolved;
            }
            Err(_) => match (ancestor.parent(), ancestor.file_name()) {
                (Some(parent), Some(name)) => {
                    tail.push(name);
                    ancestor = parent;
                }
                _ => return absolute.clone(),
            },
        }
    }
}
