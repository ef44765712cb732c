//! Copy planning and execution engine for oxcp
//!
//! This crate turns command-line shaped requests into filesystem changes in
//! three steps:
//!
//! - **Classify**: read-only stat calls determine what each path is
//! - **Plan**: destination rules and (when recursive) a deterministic
//!   lexicographic walk produce an ordered list of tasks
//! - **Execute**: tasks run sequentially with per-item error handling;
//!   failures are aggregated, never aborting the rest of the batch
//!
//! # Examples
//!
//! ```rust,no_run
//! use oxcp_engine::{CopyEngine, CopyRequest, DiscardReporter};
//!
//! # fn example() -> oxcp_types::Result<()> {
//! let request = CopyRequest::new(vec!["src".into()], "dst").recursive(true);
//! let report = CopyEngine::new().execute(&request, &mut DiscardReporter)?;
//! println!("copied {} bytes", report.stats.bytes_copied);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod engine;
pub mod executor;
pub mod planner;
pub mod report;
pub mod task;

pub use classify::{classify, classify_destination};
pub use engine::{BatchReport, CopyEngine};
pub use executor::{ExecutionOutcome, TaskExecutor};
pub use planner::{plan, plan_source, validate_destination, CopyPlan};
pub use report::{ConsoleReporter, DiscardReporter, Reporter};
pub use task::{CopyRequest, CopyTask, Failure, TaskKind};
