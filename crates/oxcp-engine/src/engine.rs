//! The copy engine facade
//!
//! Ties the pipeline together: classify the destination once, then per
//! source plan and execute, merging statistics and collecting failures.

use crate::executor::TaskExecutor;
use crate::planner::{self, CopyPlan};
use crate::report::Reporter;
use crate::task::{CopyRequest, Failure};
use oxcp_types::{CopyStats, Result};
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Aggregated statistics across every source
    pub stats: CopyStats,
    /// Every failed item, planning and execution alike
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Check whether every item succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates classify, plan, and execute for a request
///
/// Execution is strictly sequential: one task at a time, in plan order, with
/// per-item failures reported and the batch carrying on.
#[derive(Debug, Default)]
pub struct CopyEngine;

impl CopyEngine {
    /// Create a new copy engine
    pub fn new() -> Self {
        Self
    }

    /// Plan a request without touching the destination
    ///
    /// This is the dry-run surface: the returned plan lists every task the
    /// run would execute.
    pub fn plan(&self, request: &CopyRequest) -> Result<CopyPlan> {
        planner::plan(request)
    }

    /// Execute a request, reporting each item through `reporter`
    ///
    /// Returns `Err` only for a fatal error (an unusable destination);
    /// everything else lands in the report's failure list.
    pub fn execute(
        &self,
        request: &CopyRequest,
        reporter: &mut dyn Reporter,
    ) -> Result<BatchReport> {
        let start = Instant::now();
        let destination_kind = planner::validate_destination(request)?;

        debug!(
            "starting copy of {} source(s) -> {}",
            request.sources.len(),
            request.destination.display()
        );

        let mut executor = TaskExecutor::new(request);
        let mut report = BatchReport::default();

        for source in &request.sources {
            match planner::plan_source(source, request, destination_kind) {
                Ok(tasks) => {
                    let outcome = executor.execute(&tasks, reporter);
                    report.stats.merge(&outcome.stats);
                    report.failures.extend(outcome.failures);
                }
                Err(error) => {
                    reporter.item_failed(source, &error);
                    report.stats.errors += 1;
                    report.failures.push(Failure::new(source, error));
                }
            }
        }

        report.stats.duration = start.elapsed();

        info!(
            "copy finished: {} item(s), {} byte(s), {} failure(s)",
            report.stats.items_copied(),
            report.stats.bytes_copied,
            report.failures.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DiscardReporter;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_recursive_subtree_copy() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("srcdir");
        std::fs::create_dir_all(source.join("sub")).unwrap();
        std::fs::write(source.join("a.txt"), b"alpha").unwrap();
        std::fs::write(source.join("sub/b.txt"), b"beta").unwrap();

        let destination = temp_dir.path().join("destdir");
        let request =
            CopyRequest::new(vec![source], destination.clone()).recursive(true);

        let report = CopyEngine::new()
            .execute(&request, &mut DiscardReporter)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.stats.files_copied, 2);
        assert_eq!(report.stats.directories_created, 2);
        assert_eq!(
            std::fs::read(destination.join("a.txt")).unwrap(),
            b"alpha"
        );
        assert_eq!(
            std::fs::read(destination.join("sub/b.txt")).unwrap(),
            b"beta"
        );
    }

    #[test]
    fn test_mixed_batch_continues_and_reports() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        let missing = temp_dir.path().join("missing.txt");
        let dest_dir = temp_dir.path().join("out");
        std::fs::write(&good, b"fine").unwrap();
        std::fs::create_dir(&dest_dir).unwrap();

        let request = CopyRequest::new(vec![missing, good], dest_dir.clone());
        let report = CopyEngine::new()
            .execute(&request, &mut DiscardReporter)
            .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.stats.files_copied, 1);
        assert_eq!(std::fs::read(dest_dir.join("good.txt")).unwrap(), b"fine");
    }

    #[test]
    fn test_fatal_destination_error() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        std::fs::write(&a, b"x").unwrap();
        std::fs::write(&b, b"y").unwrap();

        let request = CopyRequest::new(
            vec![a, b],
            temp_dir.path().join("nonexistent-dir"),
        );
        let error = CopyEngine::new()
            .execute(&request, &mut DiscardReporter)
            .unwrap_err();
        assert!(error.is_fatal());
    }

    #[test]
    fn test_plan_does_not_touch_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("srcdir");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("a.txt"), b"x").unwrap();

        let destination = temp_dir.path().join("destdir");
        let request = CopyRequest::new(vec![source], destination.clone()).recursive(true);

        let plan = CopyEngine::new().plan(&request).unwrap();
        assert_eq!(plan.tasks.len(), 2);
        assert!(!destination.exists());
    }

    #[test]
    fn test_self_copy_leaves_tree_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("srcdir");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("a.txt"), b"x").unwrap();

        let request = CopyRequest::new(
            vec![source.clone()],
            source.join("nested"),
        )
        .recursive(true);

        let report = CopyEngine::new()
            .execute(&request, &mut DiscardReporter)
            .unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].error.kind(),
            oxcp_types::ErrorKind::RecursiveCopy
        );
        // No partial copy happened
        assert!(!source.join("nested").exists());
        let entries: Vec<PathBuf> = std::fs::read_dir(&source)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries, vec![source.join("a.txt")]);
    }
}
