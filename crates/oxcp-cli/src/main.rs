//! oxcp - a fast, predictable file copying tool
//!
//! Copies files and directory trees like the standard Unix tool: the last
//! path is the destination, everything before it is a source. Failures are
//! reported per item and never abort the rest of the batch.

use anyhow::Result;
use clap::Parser;
use oxcp_engine::{ConsoleReporter, CopyEngine, CopyRequest};
use oxcp_types::BufferSize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

mod display;

/// oxcp - copy files and directory trees
#[derive(Parser)]
#[command(
    name = "oxcp",
    version = env!("CARGO_PKG_VERSION"),
    about = "Copy files and directory trees",
    long_about = "oxcp copies files and directory trees like the standard Unix tool.\n\
                  The last path is the destination; every path before it is a source.\n\
                  Per-item failures are reported on stderr and the batch continues."
)]
struct Cli {
    /// Source path(s) followed by the destination
    #[arg(required = true, num_args = 2.., value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Copy directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Overwrite existing destination files
    #[arg(short, long)]
    force: bool,

    /// Print each copy operation
    #[arg(short, long)]
    verbose: bool,

    /// Also preserve modification and access times
    #[arg(short, long)]
    preserve: bool,

    /// Follow symlinks instead of copying them as links
    #[arg(short = 'L', long)]
    dereference: bool,

    /// Copy only when the source is newer than the destination
    #[arg(short, long)]
    update: bool,

    /// Write all-zero blocks as holes in the destination
    #[arg(long)]
    sparse: bool,

    /// Print what would be copied without copying anything
    #[arg(long)]
    dry_run: bool,

    /// I/O chunk size in bytes (power of two, 4KB..64MB)
    #[arg(long, value_name = "BYTES")]
    buffer_size: Option<BufferSize>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.debug, cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("oxcp: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Run the requested copy; `Ok(false)` means some items failed
fn run(cli: Cli) -> Result<bool> {
    let mut paths = cli.paths;
    // clap enforces at least two paths; the last one is the destination
    let destination = paths
        .pop()
        .ok_or_else(|| anyhow::anyhow!("missing destination operand"))?;

    let request = CopyRequest::new(paths, destination)
        .recursive(cli.recursive)
        .force(cli.force)
        .verbose(cli.verbose)
        .preserve(cli.preserve)
        .dereference(cli.dereference)
        .update(cli.update)
        .sparse(cli.sparse)
        .buffer_size(cli.buffer_size.unwrap_or_default());

    info!(
        "oxcp v{} copying {} source(s)",
        env!("CARGO_PKG_VERSION"),
        request.sources.len()
    );

    let engine = CopyEngine::new();

    if cli.dry_run {
        let plan = engine.plan(&request)?;
        display::print_plan(&plan);
        for failure in &plan.failures {
            eprintln!("oxcp: {failure}");
        }
        return Ok(plan.failures.is_empty());
    }

    let mut reporter = ConsoleReporter::new(request.verbose);
    let report = engine.execute(&request, &mut reporter)?;

    if request.verbose {
        display::print_summary(&report.stats);
    }

    Ok(report.is_success())
}

/// Initialize tracing, honoring `RUST_LOG` when set
fn init_logging(debug: bool, verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
