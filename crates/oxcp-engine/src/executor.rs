//! Task execution
//!
//! Runs planned tasks in order against the local filesystem. Failures are
//! per-item: the failing item is recorded and reported, and execution
//! continues with the next task.

use crate::report::Reporter;
use crate::task::{CopyRequest, CopyTask, Failure, TaskKind};
use oxcp_io::{FileCopier, FileCopyOptions};
use oxcp_types::{CopyStats, Error, Result};
use std::path::Path;
use tracing::debug;

/// Outcome of executing a list of tasks
#[derive(Debug, Default)]
pub struct ExecutionOutcome {
    /// Aggregated statistics
    pub stats: CopyStats,
    /// Items that failed, in execution order
    pub failures: Vec<Failure>,
}

/// What happened to one task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    /// The task ran and materialized its destination
    Done,
    /// The destination was already up to date
    Skipped,
}

/// Executes planned tasks sequentially
///
/// Holds the run's file copier so its buffer is reused across every file of
/// the batch.
#[derive(Debug)]
pub struct TaskExecutor {
    copier: FileCopier,
    force: bool,
    update: bool,
}

impl TaskExecutor {
    /// Create an executor configured from a request
    pub fn new(request: &CopyRequest) -> Self {
        let copier = FileCopier::with_options(FileCopyOptions {
            buffer_size: request.buffer_size,
            // Update mode replaces destinations that are older than their
            // source, so it needs the overwriting open path too.
            overwrite: request.force || request.update,
            preserve_timestamps: request.preserve,
            sparse: request.sparse,
        });
        Self {
            copier,
            force: request.force,
            update: request.update,
        }
    }

    /// Execute tasks in order, reporting each item as it finishes
    pub fn execute(&mut self, tasks: &[CopyTask], reporter: &mut dyn Reporter) -> ExecutionOutcome {
        let mut outcome = ExecutionOutcome::default();

        for task in tasks {
            match self.execute_task(task, &mut outcome.stats) {
                Ok(Disposition::Done) => reporter.task_completed(task),
                Ok(Disposition::Skipped) => reporter.task_skipped(task),
                Err(error) => {
                    reporter.item_failed(&task.source, &error);
                    outcome.stats.errors += 1;
                    outcome.failures.push(Failure::new(&task.source, error));
                }
            }
        }

        outcome
    }

    /// Execute one task, updating `stats` on success
    fn execute_task(&mut self, task: &CopyTask, stats: &mut CopyStats) -> Result<Disposition> {
        debug!(
            "executing {:?}: {} -> {}",
            task.kind,
            task.source.display(),
            task.destination.display()
        );

        match task.kind {
            TaskKind::CreateDir => {
                if self.ensure_directory(&task.destination)? {
                    stats.directories_created += 1;
                }
            }
            TaskKind::CopyFile => {
                if self.update && is_up_to_date(&task.source, &task.destination)? {
                    stats.files_skipped += 1;
                    return Ok(Disposition::Skipped);
                }
                self.ensure_parent(&task.destination)?;
                let bytes = self.copier.copy_file(&task.source, &task.destination)?;
                stats.files_copied += 1;
                stats.bytes_copied += bytes;
            }
            TaskKind::CopySymlink => {
                self.ensure_parent(&task.destination)?;
                self.recreate_symlink(&task.source, &task.destination)?;
                stats.symlinks_created += 1;
            }
        }

        Ok(Disposition::Done)
    }

    /// Create a directory if needed, returning whether it was created
    ///
    /// An already-existing directory is merged into, like the standard tool.
    /// An existing non-directory blocks the task unless force is set.
    fn ensure_directory(&self, path: &Path) -> Result<bool> {
        match std::fs::symlink_metadata(path) {
            Ok(metadata) if metadata.is_dir() => Ok(false),
            Ok(_) if !self.force => Err(Error::DestinationExists {
                path: path.to_path_buf(),
            }),
            Ok(_) => {
                std::fs::remove_file(path).map_err(|e| Error::from_io(path, e))?;
                std::fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))?;
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                std::fs::create_dir_all(path).map_err(|e| Error::from_io(path, e))?;
                Ok(true)
            }
            Err(e) => Err(Error::from_io(path, e)),
        }
    }

    /// Make sure a task destination's parent directory exists
    fn ensure_parent(&self, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| Error::from_io(parent, e))?;
            }
        }
        Ok(())
    }

    /// Recreate a symbolic link with the original's target
    #[cfg(unix)]
    fn recreate_symlink(&self, source: &Path, destination: &Path) -> Result<()> {
        let target = std::fs::read_link(source).map_err(|e| Error::from_io(source, e))?;

        match std::fs::symlink_metadata(destination) {
            Ok(_) if !self.force => {
                return Err(Error::DestinationExists {
                    path: destination.to_path_buf(),
                });
            }
            Ok(_) => {
                std::fs::remove_file(destination)
                    .map_err(|e| Error::from_io(destination, e))?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::from_io(destination, e)),
        }

        std::os::unix::fs::symlink(&target, destination)
            .map_err(|e| Error::from_io(destination, e))
    }

    /// Recreate a symbolic link with the original's target
    #[cfg(not(unix))]
    fn recreate_symlink(&self, source: &Path, _destination: &Path) -> Result<()> {
        Err(Error::io(format!(
            "cannot recreate symbolic link '{}' on this platform",
            source.display()
        )))
    }
}

/// Check whether the destination is at least as new as the source
///
/// A missing destination is never up to date. Filesystems without usable
/// modification times fall back to copying.
fn is_up_to_date(source: &Path, destination: &Path) -> Result<bool> {
    let destination_metadata = match std::fs::metadata(destination) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(Error::from_io(destination, e)),
    };
    let source_metadata =
        std::fs::metadata(source).map_err(|e| Error::from_io(source, e))?;

    match (source_metadata.modified(), destination_metadata.modified()) {
        (Ok(source_mtime), Ok(destination_mtime)) => Ok(destination_mtime >= source_mtime),
        _ => Ok(false),
    }
}
