use super::*;
use crate::config::*;
use crate::error::Result;
use crate::input::*;

use tracing::{debug, trace};

/// Iterator over the records of an input.
///
/// ```
/// use fastafeed::input::FromSlice;
/// use fastafeed::parser::FastaReader;
///
/// let reader = FastaReader::from_slice(b">a\nACGT\n>b\nTT\n");
/// let headers: Vec<String> = reader.map(|r| r.unwrap().header).collect();
/// assert_eq!(headers, ["a", "b"]);
/// ```
pub struct FastaReader<I: InputData> {
    input: I,
    parser: FastaParser,
    pos: usize,
    finished: bool,
    count: usize,
}

impl<I: InputData> FromInputData<I> for FastaReader<I> {
    fn from_input_with(input: I, options: ParserOptions) -> Self {
        Self {
            input,
            parser: FastaParser::with_capacity(options.get_buffer_capacity()),
            pos: 0,
            finished: false,
            count: 0,
        }
    }
}

impl<I: InputData> FastaReader<I> {
    /// Get a reference to the input.
    #[inline(always)]
    pub fn input(&mut self) -> &mut I {
        &mut self.input
    }

    /// Number of records returned so far.
    #[inline(always)]
    pub const fn records_read(&self) -> usize {
        self.count
    }

    #[inline(always)]
    fn emit(&mut self) -> Record {
        self.count += 1;
        let record = self.parser.finish();
        trace!(index = self.count, len = record.len(), "record complete");
        record
    }
}

impl<I: InputData> Iterator for FastaReader<I> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let chunk = &self.input.current_chunk()[self.pos..];
            if !chunk.is_empty() {
                let len = chunk.len();
                match self.parser.feed(chunk) {
                    Feed::Done(rest) => {
                        self.pos += len - rest.len();
                        return Some(Ok(self.emit()));
                    }
                    Feed::Pending => self.pos += len,
                }
                continue;
            }
            if self.finished {
                return None;
            }
            match self.input.advance() {
                Ok(true) => self.pos = 0,
                Ok(false) => {
                    self.finished = true;
                    self.pos = 0;
                    debug!(records = self.count, "end of input");
                    if self.parser.has_record() {
                        return Some(Ok(self.emit()));
                    }
                    return None;
                }
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Parses the first record of an input.
///
/// Returns `None` if the input holds no record.
pub fn parse_one<I: InputData>(input: I) -> Result<Option<Record>> {
    FastaReader::from_input(input).next().transpose()
}

/// Parses all the records of an input.
pub fn parse_all<I: InputData>(input: I) -> Result<Vec<Record>> {
    FastaReader::from_input(input).collect()
}
