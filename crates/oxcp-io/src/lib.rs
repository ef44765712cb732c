//! Synchronous chunked file I/O for oxcp
//!
//! This crate moves file contents around for the copy engine:
//!
//! - **Bounded buffering**: contents stream through a reusable fixed-size
//!   buffer, never whole-file-in-memory
//! - **Byte accounting**: readers and writers track progress for statistics
//! - **Metadata**: best-effort mode-bit preservation, optional timestamp
//!   restoration
//!
//! # Examples
//!
//! ```rust,no_run
//! use oxcp_io::FileCopier;
//!
//! # fn example() -> oxcp_types::Result<()> {
//! let mut copier = FileCopier::new();
//! let bytes = copier.copy_file("source.txt", "destination.txt")?;
//! println!("copied {} bytes", bytes);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod copy;
pub mod reader;
pub mod writer;

pub use buffer::CopyBuffer;
pub use copy::{FileCopier, FileCopyOptions};
pub use reader::FileReader;
pub use writer::FileWriter;
