//! Styled terminal output for copy summaries

use console::style;
use oxcp_engine::CopyPlan;
use oxcp_types::CopyStats;
use std::time::Duration;

/// Print the end-of-run statistics block
pub fn print_summary(stats: &CopyStats) {
    println!();
    println!("{}", style("Copy Statistics:").bold().underlined());
    println!("  Files copied: {}", style(stats.files_copied).green());
    println!(
        "  Directories created: {}",
        style(stats.directories_created).green()
    );
    if stats.symlinks_created > 0 {
        println!(
            "  Symlinks created: {}",
            style(stats.symlinks_created).green()
        );
    }
    if stats.files_skipped > 0 {
        println!("  Files skipped: {}", style(stats.files_skipped).yellow());
    }
    println!(
        "  Bytes copied: {}",
        style(format_bytes(stats.bytes_copied)).green()
    );
    println!(
        "  Errors: {}",
        if stats.errors > 0 {
            style(stats.errors).red()
        } else {
            style(stats.errors).green()
        }
    );
    println!(
        "  Duration: {}",
        style(format_duration(stats.duration)).blue()
    );
    println!(
        "  Transfer rate: {}",
        style(format!(
            "{:.2} MB/s",
            stats.transfer_rate() / 1024.0 / 1024.0
        ))
        .blue()
    );
}

/// Print the tasks a dry run would execute
pub fn print_plan(plan: &CopyPlan) {
    for task in &plan.tasks {
        println!(
            "{} -> {}",
            task.source.display(),
            task.destination.display()
        );
    }
}

/// Human-readable byte count
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Human-readable duration
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{:.2}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
