//! Incremental parser for FASTA files.
//!
//! [`FastaParser`] is a small automaton fed with chunks of bytes of any size, it needs neither the
//! whole input in memory nor chunks aligned on lines. [`FastaReader`] drives it over slices, files,
//! memory mapped files or any reader, with transparent decompression.

pub mod config;
pub mod error;
pub mod input;
pub mod lexer;
pub mod parser;

pub use config::ParserOptions;
pub use error::{Error, Result};
pub use lexer::{Class, State, Symbol, classify_class, classify_symbol, symbol_to_char, symbols};
pub use parser::{FastaParser, FastaReader, Feed, Record, parse_all, parse_one};
