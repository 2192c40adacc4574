use crate::lexer::*;

use std::fmt::{self, Write};

/// Number of residues per line when formatting a record.
pub const LINE_WIDTH: usize = 70;

/// A parsed FASTA record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    /// Text of the `>` line, without the marker and surrounding whitespace.
    pub header: String,
    /// Residues of the record, see [`symbols`].
    pub body: Vec<Symbol>,
}

impl Record {
    pub fn new(header: impl Into<String>, body: Vec<Symbol>) -> Self {
        Self {
            header: header.into(),
            body,
        }
    }

    /// Number of symbols in the body.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the body as uppercase ASCII.
    pub fn residues(&self) -> Vec<u8> {
        self.body.iter().map(|&s| symbol_to_char(s)).collect()
    }

    /// Writes the record as FASTA text with `width` residues per line.
    ///
    /// The body is terminated by `*`.
    pub fn write_wrapped<W: Write>(&self, w: &mut W, width: usize) -> fmt::Result {
        let width = width.max(1);
        write!(w, "> {}", self.header)?;
        w.write_char('\n')?;
        for (k, &s) in self.body.iter().enumerate() {
            if k != 0 && k % width == 0 {
                w.write_char('\n')?;
            }
            w.write_char(symbol_to_char(s) as char)?;
        }
        w.write_str("*\n")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_wrapped(f, LINE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{FastaParser, Feed};
    use crate::lexer::symbols::*;
    use proptest::prelude::*;

    fn reparse(text: &str) -> Record {
        let mut p = FastaParser::new();
        assert_eq!(p.feed(text.as_bytes()), Feed::Pending);
        p.finish()
    }

    #[test]
    fn test_format() {
        let r = Record::new("dav", vec![A, B, C, GAP, INVALID_CHARACTER, Z]);
        assert_eq!(r.to_string(), "> dav\nABC- Z*\n");
    }

    #[test]
    fn test_format_empty_body() {
        let r = Record::new("nothing", vec![]);
        assert_eq!(r.to_string(), "> nothing\n*\n");
        assert_eq!(reparse(&r.to_string()), r);
    }

    #[test]
    fn test_line_wrapping() {
        let r = Record::new("w", vec![K; 2 * LINE_WIDTH + 1]);
        let text = r.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "> w");
        assert_eq!(lines[1].len(), LINE_WIDTH);
        assert_eq!(lines[2].len(), LINE_WIDTH);
        assert_eq!(lines[3], "K*");
    }

    #[test]
    fn test_exact_multiple_of_width() {
        let r = Record::new("w", vec![A; LINE_WIDTH]);
        let expected = format!("> w\n{}*\n", "A".repeat(LINE_WIDTH));
        assert_eq!(r.to_string(), expected);
    }

    #[test]
    fn test_custom_width() {
        let r = Record::new("h", vec![A, C, G, T, N]);
        let mut s = String::new();
        r.write_wrapped(&mut s, 2).unwrap();
        assert_eq!(s, "> h\nAC\nGT\nN*\n");
    }

    #[test]
    fn test_residues() {
        let r = Record::new("h", vec![A, GAP, Y]);
        assert_eq!(r.residues(), b"A-Y");
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
    }

    proptest! {
        #[test]
        fn prop_format_round_trip(
            header in "[A-Za-z0-9_|.:]([A-Za-z0-9_|.: ]{0,30}[A-Za-z0-9_|.:])?",
            body in proptest::collection::vec(0..=GAP, 0..300),
        ) {
            let r = Record::new(header, body);
            prop_assert_eq!(reparse(&r.to_string()), r);
        }
    }
}
