//! File reader with byte accounting

use oxcp_types::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// File reader that tracks how much of the file has been consumed
#[derive(Debug)]
pub struct FileReader {
    file: std::fs::File,
    file_size: u64,
    bytes_read: u64,
}

impl FileReader {
    /// Open a file for reading
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::from_io(path, e))?;

        let metadata = file.metadata().map_err(|e| Error::Io {
            message: format!("failed to read metadata for '{}': {}", path.display(), e),
        })?;

        let file_size = metadata.len();

        debug!(
            "opened file for reading: {} ({} bytes)",
            path.display(),
            file_size
        );

        Ok(Self {
            file,
            file_size,
            bytes_read: 0,
        })
    }

    /// Read the next chunk into `buf`, returning the number of bytes read
    ///
    /// A return of zero means end of file.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let bytes_read = self.file.read(buf).map_err(|e| Error::Io {
            message: format!("failed to read from file: {}", e),
        })?;

        self.bytes_read += bytes_read as u64;
        Ok(bytes_read)
    }

    /// Get the total file size
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Get the number of bytes read so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Check if we've reached the end of the file
    pub fn is_eof(&self) -> bool {
        self.bytes_read >= self.file_size
    }
}
