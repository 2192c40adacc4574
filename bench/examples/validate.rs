use fastafeed::input::*;
use fastafeed::*;
use needletail::parse_fastx_file;

fn check_mismatch(left: &[u8], right: &[u8]) -> Option<usize> {
    let len = left.len().min(right.len());
    (0..len).find(|&i| left[i] != right[i]).or({
        if left.len() != right.len() {
            Some(len)
        } else {
            None
        }
    })
}

fn get_scope(slice: &[u8], pos: usize) -> String {
    let start = pos.saturating_sub(10);
    let stop = (pos + 5).min(slice.len());
    String::from_utf8_lossy(&slice[start.min(stop)..stop]).into_owned()
}

/// Sequence as `fastafeed` stores it: uppercase letters and gaps only.
fn canonical(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| classify_symbol(b))
        .filter(|&s| s != symbols::INVALID_CHARACTER)
        .map(symbol_to_char)
        .collect()
}

fn main() {
    let path = std::env::args().nth(1).expect("No input file given");
    let mut reader = parse_fastx_file(&path).expect("Cannot open file");
    let mut parser = FastaReader::from_file(&path).expect("Cannot open file");
    while let Some(r) = reader.next() {
        let record = r.expect("Invalid record");
        let line = record.start_line_number();
        let Some(parsed) = parser.next() else {
            eprintln!("Missing record line {line}");
            return;
        };
        let parsed = parsed.expect("Cannot read file");

        let (left, right) = (record.id().trim_ascii(), parsed.header.as_bytes());
        if let Some(pos) = check_mismatch(left, right) {
            eprintln!("Header mismatch line {line} pos {pos}");
            eprintln!("Needletail: \t{}", get_scope(left, pos));
            eprintln!("Fastafeed: \t{}", get_scope(right, pos));
            eprintln!("----------------");
            return;
        }

        let (left, right) = (canonical(&record.seq()), parsed.residues());
        if let Some(pos) = check_mismatch(&left, &right) {
            eprintln!("Seq mismatch line {line} pos {pos}");
            eprintln!("Needletail: \t{}", get_scope(&left, pos));
            eprintln!("Fastafeed: \t{}", get_scope(&right, pos));
            eprintln!("----------------");
            return;
        }
    }
    if parser.next().is_some() {
        eprintln!("Extra records after {} records", parser.records_read());
        return;
    }
    println!("OK: {} records", parser.records_read());
}
