//! Configuration of the drivers.

pub const DEFAULT_CHUNK_SIZE: usize = 1 << 16;

/// Builder for the options of [`FastaReader`](crate::parser::FastaReader).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    chunk_size: usize,
    buffer_capacity: usize,
}

impl Default for ParserOptions {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl ParserOptions {
    /// Creates the default options: chunks of 64 KiB and a buffer allocated on demand.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            buffer_capacity: 0,
        }
    }

    /// Number of bytes read from the input at once.
    #[inline(always)]
    pub const fn get_chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Initial size of the parser buffer.
    #[inline(always)]
    pub const fn get_buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    /// Set the number of bytes read at once (at least 1).
    #[inline(always)]
    pub const fn chunk_size(self, chunk_size: usize) -> Self {
        Self {
            chunk_size: if chunk_size == 0 { 1 } else { chunk_size },
            ..self
        }
    }

    /// Preallocate the parser buffer, useful when the length of the records is known.
    #[inline(always)]
    pub const fn buffer_capacity(self, buffer_capacity: usize) -> Self {
        Self {
            buffer_capacity,
            ..self
        }
    }
}
