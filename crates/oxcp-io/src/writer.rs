//! File writer with byte accounting

use oxcp_types::{Error, Result};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

/// Buffered file writer that tracks how much has been written
#[derive(Debug)]
pub struct FileWriter {
    writer: std::io::BufWriter<std::fs::File>,
    bytes_written: u64,
}

impl FileWriter {
    /// Create a file for writing, truncating it if it exists
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::Io {
            message: format!("failed to create file '{}': {}", path.display(), e),
        })?;

        debug!("created file for writing: {}", path.display());

        Ok(Self {
            writer: std::io::BufWriter::new(file),
            bytes_written: 0,
        })
    }

    /// Create a file for writing, failing if it already exists
    pub fn create_new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::options()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    Error::DestinationExists {
                        path: path.to_path_buf(),
                    }
                } else {
                    Error::Io {
                        message: format!("failed to create file '{}': {}", path.display(), e),
                    }
                }
            })?;

        debug!("created new file for writing: {}", path.display());

        Ok(Self {
            writer: std::io::BufWriter::new(file),
            bytes_written: 0,
        })
    }

    /// Write all data from a byte slice
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data).map_err(|e| Error::Io {
            message: format!("failed to write to file: {}", e),
        })?;

        self.bytes_written += data.len() as u64;
        Ok(())
    }

    /// Skip `len` bytes instead of writing them, leaving a hole
    ///
    /// On filesystems that support sparse files the skipped range occupies no
    /// disk space; reading it back yields zeros either way. The skipped bytes
    /// count as written for accounting purposes.
    pub fn write_hole(&mut self, len: u64) -> Result<()> {
        self.writer
            .seek(SeekFrom::Current(len as i64))
            .map_err(|e| Error::Io {
                message: format!("failed to seek past hole: {}", e),
            })?;

        self.bytes_written += len;
        Ok(())
    }

    /// Truncate or extend the file to the number of bytes written
    ///
    /// Needed after [`write_hole`](Self::write_hole): a hole at the end of the
    /// file does not extend its length on its own.
    pub fn finish(&mut self) -> Result<()> {
        self.flush()?;
        self.writer
            .get_mut()
            .set_len(self.bytes_written)
            .map_err(|e| Error::Io {
                message: format!("failed to set file length: {}", e),
            })?;
        Ok(())
    }

    /// Flush the writer to ensure all data is written
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::Io {
            message: format!("failed to flush writer: {}", e),
        })?;
        Ok(())
    }

    /// Sync all data to disk
    pub fn sync_all(&mut self) -> Result<()> {
        self.writer.get_mut().sync_all().map_err(|e| Error::Io {
            message: format!("failed to sync to disk: {}", e),
        })?;
        Ok(())
    }

    /// Get the number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
