//! Core type system and error handling for oxcp
//!
//! This crate provides the foundational types shared by the oxcp crates:
//!
//! - **Error handling**: structured error variants with path context and a
//!   per-item vs. fatal distinction
//! - **Core types**: copy statistics and path classification
//! - **Configuration**: validated configuration newtypes
//!
//! # Examples
//!
//! ```rust
//! use oxcp_types::{CopyStats, Result};
//!
//! fn example_operation() -> Result<CopyStats> {
//!     let mut stats = CopyStats::new();
//!     stats.files_copied = 10;
//!     stats.bytes_copied = 1024 * 1024; // 1MB
//!     Ok(stats)
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;
pub mod types;

// Re-export commonly used types
pub use config::BufferSize;
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_stats_roundtrip() {
        let mut stats = CopyStats::new();
        stats.files_copied = 2;
        stats.bytes_copied = 64;

        let mut total = CopyStats::new();
        total.merge(&stats);
        assert_eq!(total.files_copied, 2);
        assert_eq!(total.bytes_copied, 64);
    }

    #[test]
    fn test_error_fatality() {
        let per_item = Error::DestinationExists {
            path: "out.txt".into(),
        };
        assert!(!per_item.is_fatal());

        let fatal = Error::invalid_destination("dest", "not a directory");
        assert!(fatal.is_fatal());
    }
}
