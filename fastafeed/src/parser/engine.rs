use super::*;
use crate::lexer::*;

/// Outcome of [`FastaParser::feed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed<'a> {
    /// The chunk was consumed entirely, the record is still open.
    Pending,
    /// A new record starts in the chunk.
    ///
    /// The leftover begins with the byte that opened the next record and must be fed
    /// to the parser after calling [`finish`](FastaParser::finish).
    Done(&'a [u8]),
}

impl<'a> Feed<'a> {
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns the unconsumed part of the chunk, if any.
    #[inline(always)]
    pub const fn leftover(&self) -> Option<&'a [u8]> {
        match *self {
            Self::Pending => None,
            Self::Done(rest) => Some(rest),
        }
    }
}

/// An incremental parser for one record at a time.
///
/// Bytes can be fed in chunks of any size: splitting the input differently never changes the
/// result. Once [`feed`](Self::feed) returns [`Feed::Done`], or once the input is exhausted,
/// [`finish`](Self::finish) extracts the record and resets the parser for the next one.
///
/// ```
/// use fastafeed::parser::{FastaParser, Feed};
///
/// let mut parser = FastaParser::new();
/// let Feed::Done(rest) = parser.feed(b">a\nAC\n>b\nGT") else { unreachable!() };
/// assert_eq!(parser.finish().header, "a");
/// assert_eq!(parser.feed(rest), Feed::Pending);
/// assert_eq!(parser.finish().header, "b");
/// ```
#[derive(Debug, Clone)]
pub struct FastaParser {
    state: State,
    buf: Vec<u8>,
    i: usize,
    header: String,
}

impl Default for FastaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FastaParser {
    pub const fn new() -> Self {
        Self {
            state: State::BeforeRecord,
            buf: Vec::new(),
            i: 0,
            header: String::new(),
        }
    }

    /// Creates a parser whose buffer can hold `capacity` bytes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity],
            ..Self::new()
        }
    }

    /// Current resting state of the automaton.
    #[inline(always)]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns `false` if nothing but blank lines and comments was fed since the last reset.
    #[inline(always)]
    pub const fn has_record(&self) -> bool {
        !matches!(self.state, State::BeforeRecord | State::InComment)
    }

    /// Returns the header of the current record if its header line is complete.
    #[inline(always)]
    pub fn header(&self) -> Option<&str> {
        match self.state {
            State::BeforeRecord | State::InComment | State::InHeader => None,
            _ => Some(self.header.as_str()),
        }
    }

    /// Returns the symbols read so far in the body of the current record.
    #[inline(always)]
    pub fn body(&self) -> &[Symbol] {
        match self.state {
            State::BeforeRecord | State::InComment | State::InHeader => &[],
            _ => &self.buf[..self.i],
        }
    }

    #[inline(always)]
    fn grow_buffer(&mut self, i: usize) {
        self.buf.resize(2 * (i + 128), 0);
    }

    #[inline(always)]
    fn push(&mut self, i: &mut usize, byte: u8) {
        if *i >= self.buf.len() {
            self.grow_buffer(*i);
        }
        self.buf[*i] = byte;
        *i += 1;
    }

    /// Consumes `data` until the end of the current record.
    pub fn feed<'a>(&mut self, data: &'a [u8]) -> Feed<'a> {
        let mut state = self.state;
        let mut i = self.i;

        for (k, &byte) in data.iter().enumerate() {
            let class = classify_class(byte);
            let prev = state;
            state = transition(state, class);
            if state == State::HeaderDone {
                self.header = header_text(&self.buf[..i]);
                i = 0;
                state = transition(State::AfterHeader, class);
            }
            match state {
                // a comment collapses to a single line terminator
                State::InComment if prev != State::InComment => self.push(&mut i, b'\n'),
                State::InHeader => self.push(&mut i, byte),
                State::InSequence => self.push(&mut i, classify_symbol(byte)),
                State::RecordDone => {
                    self.state = prev;
                    self.i = i;
                    return Feed::Done(&data[k..]);
                }
                _ => {}
            }
        }

        self.state = state;
        self.i = i;
        Feed::Pending
    }

    /// Extracts the current record, complete or not, and resets the parser.
    ///
    /// The record does not borrow from the parser.
    pub fn finish(&mut self) -> Record {
        let mut i = self.i;
        let header = match self.state {
            State::BeforeRecord | State::InComment | State::InHeader => {
                let header = header_text(&self.buf[..i]);
                i = 0;
                header
            }
            _ => core::mem::take(&mut self.header),
        };
        let body = self.buf[..i].to_vec();

        self.state = State::BeforeRecord;
        self.i = 0;
        self.header.clear();
        Record { header, body }
    }
}

/// Materializes a header from the raw bytes accumulated before it.
///
/// Comment markers come first, then the `>` line.
fn header_text(raw: &[u8]) -> String {
    let start = raw.iter().position(|&b| b != b'\n').unwrap_or(raw.len());
    let line = &raw[start..];
    let line = line.strip_prefix(b">").unwrap_or(line);
    String::from_utf8_lossy(line.trim_ascii()).into_owned()
}
