//! Reusable copy buffer

use bytes::BytesMut;
use oxcp_types::BufferSize;

/// Fixed-size scratch buffer shared across the files of a copy run
///
/// File contents stream through this buffer chunk by chunk, so memory use is
/// bounded by the configured [`BufferSize`] no matter how large the files
/// are.
#[derive(Debug)]
pub struct CopyBuffer {
    chunk: BytesMut,
}

impl CopyBuffer {
    /// Create a buffer with the default chunk size
    pub fn new() -> Self {
        Self::with_size(BufferSize::default())
    }

    /// Create a buffer with a custom chunk size
    pub fn with_size(size: BufferSize) -> Self {
        Self {
            chunk: BytesMut::zeroed(size.get()),
        }
    }

    /// Get the chunk capacity
    pub fn capacity(&self) -> usize {
        self.chunk.len()
    }

    /// Get the chunk as a mutable slice for reading into
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.chunk
    }

    /// Get the chunk as an immutable slice
    pub fn as_slice(&self) -> &[u8] {
        &self.chunk
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_capacity() {
        let buffer = CopyBuffer::new();
        assert_eq!(buffer.capacity(), BufferSize::DEFAULT);

        let small = CopyBuffer::with_size(BufferSize::new(4096).unwrap());
        assert_eq!(small.capacity(), 4096);
    }

    #[test]
    fn test_buffer_slices() {
        let mut buffer = CopyBuffer::with_size(BufferSize::new(4096).unwrap());
        buffer.as_mut_slice()[0] = 0xAB;
        assert_eq!(buffer.as_slice()[0], 0xAB);
        assert_eq!(buffer.as_slice().len(), 4096);
    }
}
