//! Per-item reporting hooks
//!
//! The executor calls back here for every item it finishes or fails. The
//! hooks have no effect on control flow.

use crate::task::CopyTask;
use oxcp_types::Error;
use std::path::Path;

/// Observer for per-item progress
pub trait Reporter {
    /// Called after a task completed successfully
    fn task_completed(&mut self, task: &CopyTask);

    /// Called when a task was skipped because its destination is up to date
    fn task_skipped(&mut self, _task: &CopyTask) {}

    /// Called when an item failed; execution continues with the next item
    fn item_failed(&mut self, path: &Path, error: &Error);
}

/// Reporter that prints to the standard streams
///
/// Completed tasks go to stdout as one "SOURCE -> DESTINATION" line each,
/// only in verbose mode. Failing items always go to stderr.
#[derive(Debug)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a console reporter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn task_completed(&mut self, task: &CopyTask) {
        if self.verbose {
            println!(
                "{} -> {}",
                task.source.display(),
                task.destination.display()
            );
        }
    }

    fn task_skipped(&mut self, task: &CopyTask) {
        if self.verbose {
            println!(
                "skipped {} (destination is newer)",
                task.source.display()
            );
        }
    }

    fn item_failed(&mut self, _path: &Path, error: &Error) {
        eprintln!("oxcp: {}", error);
    }
}

/// Reporter that swallows everything, for library callers and tests
#[derive(Debug, Default)]
pub struct DiscardReporter;

impl Reporter for DiscardReporter {
    fn task_completed(&mut self, _task: &CopyTask) {}

    fn item_failed(&mut self, _path: &Path, _error: &Error) {}
}
