//! Input formats and helpers.

use crate::config::*;
use crate::error::{Error, Result};

use deko::read::AnyDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, ErrorKind, Read, Stdin, stdin};
use std::path::Path;
use tracing::{debug, trace};

/// A source of byte chunks.
pub trait InputData {
    /// Get a reference to the current chunk.
    ///
    /// Chunks can have any length, including zero. The current chunk is empty before the first
    /// call to [`advance`](Self::advance).
    fn current_chunk(&self) -> &[u8];

    /// Load the next chunk, returns `false` at the end of the input.
    ///
    /// Errors come from the underlying reader and leave the input at the same position.
    fn advance(&mut self) -> io::Result<bool>;

    /// Returns the type of compression format detected.
    ///
    /// This is only available for reader-based implementations.
    #[inline(always)]
    fn compression_format(&mut self) -> io::Result<Option<deko::Format>> {
        Ok(None)
    }

    /// Returns `true` if compression has been detected.
    #[inline(always)]
    fn is_compressed(&mut self) -> io::Result<bool> {
        Ok(self.compression_format()?.is_some())
    }
}

pub trait FromInputData<I: InputData>: Sized {
    /// Build the struct from a type implementing [`InputData`] with the given options.
    fn from_input_with(input: I, options: ParserOptions) -> Self;

    /// Build the struct from a type implementing [`InputData`].
    #[inline(always)]
    fn from_input(input: I) -> Self {
        Self::from_input_with(input, ParserOptions::default())
    }
}

/// Fixed-size windows over a slice.
#[derive(Debug, Clone, Copy)]
struct Windows {
    chunk_size: usize,
    start: usize,
    end: usize,
}

impl Windows {
    const fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: if chunk_size == 0 { 1 } else { chunk_size },
            start: 0,
            end: 0,
        }
    }

    #[inline(always)]
    fn advance(&mut self, len: usize) -> bool {
        self.start = self.end;
        if self.end >= len {
            return false;
        }
        self.end = (self.end + self.chunk_size).min(len);
        true
    }
}

/// Slice input.
pub struct SliceInput<'a> {
    data: &'a [u8],
    windows: Windows,
}

impl<'a> SliceInput<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_chunk_size(data, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            windows: Windows::new(chunk_size),
        }
    }
}

impl InputData for SliceInput<'_> {
    #[inline(always)]
    fn current_chunk(&self) -> &[u8] {
        &self.data[self.windows.start..self.windows.end]
    }

    #[inline(always)]
    fn advance(&mut self) -> io::Result<bool> {
        Ok(self.windows.advance(self.data.len()))
    }
}

pub trait FromSlice<'a>: FromInputData<SliceInput<'a>> {
    /// Build the struct from a slice.
    #[inline(always)]
    fn from_slice(data: &'a [u8]) -> Self {
        Self::from_slice_with(data, ParserOptions::default())
    }

    /// Build the struct from a slice, read in chunks of `options.get_chunk_size()` bytes.
    #[inline(always)]
    fn from_slice_with(data: &'a [u8], options: ParserOptions) -> Self {
        let input = SliceInput::with_chunk_size(data, options.get_chunk_size());
        Self::from_input_with(input, options)
    }
}

impl<'a, F: FromInputData<SliceInput<'a>>> FromSlice<'a> for F {}

/// Memory mapped file.
/// It does not support transparent decompression.
pub struct MmapInput {
    // `None` for empty files, which cannot be mapped on every platform
    mmap: Option<Mmap>,
    windows: Windows,
}

impl MmapInput {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_chunk_size(path, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let open = |source| Error::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open)?;
        let len = file.metadata().map_err(open)?.len();
        let mmap = if len == 0 {
            None
        } else {
            // Unsafe: the file must not be modified while it is mapped.
            Some(unsafe { Mmap::map(&file) }.map_err(open)?)
        };
        debug!(path = %path.display(), len, "mapped file");
        Ok(Self {
            mmap,
            windows: Windows::new(chunk_size),
        })
    }

    /// Get a reference to the complete slice of data.
    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or_default()
    }
}

impl InputData for MmapInput {
    #[inline(always)]
    fn current_chunk(&self) -> &[u8] {
        &self.data()[self.windows.start..self.windows.end]
    }

    #[inline(always)]
    fn advance(&mut self) -> io::Result<bool> {
        let len = self.data().len();
        Ok(self.windows.advance(len))
    }
}

pub trait FromMmap: FromInputData<MmapInput> {
    /// Build the struct from a memory mapped file.
    #[inline(always)]
    fn from_file_mmap<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_mmap_with(path, ParserOptions::default())
    }

    #[inline(always)]
    fn from_file_mmap_with<P: AsRef<Path>>(path: P, options: ParserOptions) -> Result<Self> {
        let input = MmapInput::with_chunk_size(path, options.get_chunk_size())?;
        Ok(Self::from_input_with(input, options))
    }
}

impl<F: FromInputData<MmapInput>> FromMmap for F {}

/// Reader input.
/// It supports transparent decompression.
pub struct ReaderInput<R: Read + Send> {
    data: Vec<u8>,
    len: usize,
    decoder: AnyDecoder<R>,
}

impl<R: Read + Send> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            data: vec![0; chunk_size.max(1)],
            len: 0,
            decoder: AnyDecoder::new(reader),
        }
    }
}

impl<R: Read + Send> InputData for ReaderInput<R> {
    #[inline(always)]
    fn current_chunk(&self) -> &[u8] {
        &self.data[..self.len]
    }

    fn advance(&mut self) -> io::Result<bool> {
        loop {
            match self.decoder.read(&mut self.data) {
                Ok(n) => {
                    trace!(len = n, "read chunk");
                    self.len = n;
                    return Ok(n != 0);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    #[inline(always)]
    fn compression_format(&mut self) -> io::Result<Option<deko::Format>> {
        let format = self.decoder.kind()?;
        if format == deko::Format::Verbatim {
            Ok(None)
        } else {
            Ok(Some(format))
        }
    }
}

pub trait FromReader<R: Read + Send>: FromInputData<ReaderInput<R>> {
    /// Build the struct from a reader.
    /// It supports transparent decompression.
    #[inline(always)]
    fn from_reader(reader: R) -> Self {
        Self::from_reader_with(reader, ParserOptions::default())
    }

    #[inline(always)]
    fn from_reader_with(reader: R, options: ParserOptions) -> Self {
        let input = ReaderInput::with_chunk_size(reader, options.get_chunk_size());
        Self::from_input_with(input, options)
    }
}

impl<R: Read + Send, F: FromInputData<ReaderInput<R>>> FromReader<R> for F {}

/// File input.
/// It supports transparent decompression.
pub type FileInput = ReaderInput<File>;

impl FileInput {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_chunk_size(path, DEFAULT_CHUNK_SIZE)
    }

    pub fn open_with_chunk_size<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened file");
        Ok(Self::with_chunk_size(file, chunk_size))
    }
}

pub trait FromFile: FromInputData<FileInput> {
    /// Build the struct from a file.
    /// It supports transparent decompression.
    #[inline(always)]
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, ParserOptions::default())
    }

    #[inline(always)]
    fn from_file_with<P: AsRef<Path>>(path: P, options: ParserOptions) -> Result<Self> {
        let input = FileInput::open_with_chunk_size(path, options.get_chunk_size())?;
        Ok(Self::from_input_with(input, options))
    }
}

impl<F: FromInputData<FileInput>> FromFile for F {}

/// Stdin input.
/// It supports transparent decompression.
pub type StdinInput = ReaderInput<Stdin>;

pub trait FromStdin: FromInputData<StdinInput> {
    /// Build the struct from stdin.
    /// It supports transparent decompression.
    #[inline(always)]
    fn from_stdin() -> Self {
        Self::from_stdin_with(ParserOptions::default())
    }

    #[inline(always)]
    fn from_stdin_with(options: ParserOptions) -> Self {
        let input = StdinInput::with_chunk_size(stdin(), options.get_chunk_size());
        Self::from_input_with(input, options)
    }
}

impl<F: FromInputData<StdinInput>> FromStdin for F {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_chunks(input: &mut impl InputData) -> Vec<Vec<u8>> {
        let mut res = Vec::new();
        while input.advance().unwrap() {
            res.push(input.current_chunk().to_vec());
        }
        res
    }

    #[test]
    fn test_slice_chunks() {
        let mut input = SliceInput::with_chunk_size(b">abc\nACGT", 4);
        assert!(input.current_chunk().is_empty());
        assert_eq!(
            collect_chunks(&mut input),
            vec![b">abc".to_vec(), b"\nACG".to_vec(), b"T".to_vec()]
        );
        assert!(!input.advance().unwrap());
        assert!(input.current_chunk().is_empty());
    }

    #[test]
    fn test_empty_slice() {
        let mut input = SliceInput::new(b"");
        assert!(collect_chunks(&mut input).is_empty());
    }

    #[test]
    fn test_reader_chunks() {
        let data: &[u8] = b">r\nACGTACGT\n";
        let mut input = ReaderInput::with_chunk_size(data, 5);
        let chunks = collect_chunks(&mut input);
        assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= 5));
        assert_eq!(chunks.concat(), data);
        assert!(!input.is_compressed().unwrap());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("fastafeed-missing-input.fa");
        match FileInput::open(&path) {
            Err(Error::Open { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            _ => panic!("expected an open error"),
        }
        assert!(matches!(MmapInput::new(&path), Err(Error::Open { .. })));
    }

    #[test]
    fn test_mmap_chunks() {
        let path = std::env::temp_dir().join(format!("fastafeed-mmap-{}.fa", std::process::id()));
        std::fs::write(&path, b">m\nKLMN\n").unwrap();
        let mut input = MmapInput::with_chunk_size(&path, 3).unwrap();
        assert_eq!(input.data(), b">m\nKLMN\n");
        assert_eq!(collect_chunks(&mut input).concat(), b">m\nKLMN\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_mmap_empty_file() {
        let path = std::env::temp_dir().join(format!("fastafeed-empty-{}.fa", std::process::id()));
        std::fs::write(&path, b"").unwrap();
        let mut input = MmapInput::new(&path).unwrap();
        assert!(input.data().is_empty());
        assert!(!input.advance().unwrap());
        std::fs::remove_file(&path).unwrap();
    }
}
