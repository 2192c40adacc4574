use fastafeed::input::*;
use fastafeed::*;

use std::io::{Write, stdout};

// read from stdin with small chunks, to show that chunk boundaries do not matter
const OPTIONS: ParserOptions = ParserOptions::new().chunk_size(1024);

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let width: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => parser::LINE_WIDTH,
    };

    let mut out = stdout().lock();
    let mut text = String::new();
    for record in FastaReader::from_stdin_with(OPTIONS) {
        text.clear();
        record?.write_wrapped(&mut text, width)?;
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}
