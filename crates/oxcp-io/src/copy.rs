//! Chunked file copying

use crate::{CopyBuffer, FileReader, FileWriter};
use oxcp_types::{BufferSize, Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Zero chunks at least this large become holes in sparse mode
const SPARSE_ZERO_BLOCK: usize = 4096;

/// Options customizing how a single file is copied
#[derive(Debug, Clone)]
pub struct FileCopyOptions {
    /// Chunk size for the copy loop
    pub buffer_size: BufferSize,
    /// Whether an existing destination may be truncated and replaced
    pub overwrite: bool,
    /// Whether to restore the source's modification and access times
    pub preserve_timestamps: bool,
    /// Whether to turn all-zero blocks into holes instead of writing them
    pub sparse: bool,
}

impl Default for FileCopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: BufferSize::default(),
            overwrite: false,
            preserve_timestamps: false,
            sparse: false,
        }
    }
}

/// Copies regular files chunk by chunk through a reusable buffer
///
/// The buffer is allocated once and shared across every file of a run, so a
/// copy never holds more than one chunk of file content in memory.
#[derive(Debug)]
pub struct FileCopier {
    buffer: CopyBuffer,
    options: FileCopyOptions,
}

impl FileCopier {
    /// Create a file copier with default options
    pub fn new() -> Self {
        Self::with_options(FileCopyOptions::default())
    }

    /// Create a file copier with custom options
    pub fn with_options(options: FileCopyOptions) -> Self {
        Self {
            buffer: CopyBuffer::with_size(options.buffer_size),
            options,
        }
    }

    /// Copy a single regular file, returning the number of bytes copied
    ///
    /// Without `overwrite`, an existing destination fails with
    /// [`Error::DestinationExists`] and is left untouched. Mode bits are
    /// restored best-effort after the contents are written.
    pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        source: P,
        destination: Q,
    ) -> Result<u64> {
        let source = source.as_ref();
        let destination = destination.as_ref();

        debug!(
            "copying file: {} -> {}",
            source.display(),
            destination.display()
        );

        let source_metadata =
            std::fs::metadata(source).map_err(|e| Error::from_io(source, e))?;
        if source_metadata.is_dir() {
            return Err(Error::IsADirectory {
                path: source.to_path_buf(),
            });
        }

        let mut reader = FileReader::open(source)?;
        let mut writer = if self.options.overwrite {
            FileWriter::create(destination)?
        } else {
            FileWriter::create_new(destination)?
        };

        loop {
            let bytes_read = reader.read(self.buffer.as_mut_slice())?;
            if bytes_read == 0 {
                break;
            }
            let chunk = &self.buffer.as_slice()[..bytes_read];
            if self.options.sparse && bytes_read >= SPARSE_ZERO_BLOCK && is_all_zero(chunk) {
                writer.write_hole(bytes_read as u64)?;
            } else {
                writer.write_all(chunk)?;
            }
        }

        writer.finish()?;
        let bytes_copied = writer.bytes_written();
        drop(writer);

        self.restore_metadata(&source_metadata, source, destination);

        debug!(
            "copy finished: {} ({} bytes)",
            destination.display(),
            bytes_copied
        );
        Ok(bytes_copied)
    }

    /// Restore mode bits and, when requested, timestamps
    ///
    /// Both are best-effort: a failure is logged and the copy still counts as
    /// successful, since the contents already arrived intact.
    fn restore_metadata(
        &self,
        source_metadata: &std::fs::Metadata,
        source: &Path,
        destination: &Path,
    ) {
        #[cfg(unix)]
        {
            let permissions = source_metadata.permissions();
            if let Err(e) = std::fs::set_permissions(destination, permissions) {
                warn!(
                    "failed to set permissions on '{}': {}",
                    destination.display(),
                    e
                );
            }
        }

        if self.options.preserve_timestamps {
            let accessed = source_metadata
                .accessed()
                .unwrap_or_else(|_| std::time::SystemTime::now());
            let modified = source_metadata
                .modified()
                .unwrap_or_else(|_| std::time::SystemTime::now());

            if let Err(e) = filetime::set_file_times(
                destination,
                filetime::FileTime::from_system_time(accessed),
                filetime::FileTime::from_system_time(modified),
            ) {
                warn!(
                    "failed to set file times on '{}' (source '{}'): {}",
                    destination.display(),
                    source.display(),
                    e
                );
            }
        }
    }
}

impl Default for FileCopier {
    fn default() -> Self {
        Self::new()
    }
}

fn is_all_zero(chunk: &[u8]) -> bool {
    chunk.iter().all(|&b| b == 0)
}
