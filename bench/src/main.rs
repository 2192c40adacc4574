use fastafeed::input::*;
use fastafeed::*;

use needletail::{parse_fastx_file, parse_fastx_reader};
use regex::bytes::RegexBuilder;

use std::env::args;
use std::fs::read;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

struct Setup<'a, P: AsRef<Path>> {
    path: P,
    data: &'a [u8],
    size: u64,
    rep: u64,
    compressed: bool,
}

fn report(label: &str, size: u64, rep: u64, now: Instant) {
    println!(
        "{label}:\t {:5.2} GB/s",
        (size * rep) as f64 / 1e9 / now.elapsed().as_secs_f64()
    );
}

fn bench_options<P: AsRef<Path>>(label: &str, options: ParserOptions, s: &Setup<P>) {
    let now = Instant::now();
    for _ in 0..s.rep {
        let reader = FastaReader::from_file_with(&s.path, options).expect("Cannot open file");
        reader.for_each(|r| {
            black_box(r.expect("Cannot read file"));
        });
    }
    report(&format!("{label} (file)"), s.size, s.rep, now);

    if !s.compressed {
        let now = Instant::now();
        for _ in 0..s.rep {
            let reader = FastaReader::from_file_mmap_with(&s.path, options).unwrap();
            reader.for_each(|r| {
                black_box(r.unwrap());
            });
        }
        report(&format!("{label} (mmap)"), s.size, s.rep, now);

        let now = Instant::now();
        for _ in 0..s.rep {
            let reader = FastaReader::from_slice_with(s.data, options);
            reader.for_each(|r| {
                black_box(r.unwrap());
            });
        }
        report(&format!("{label} (slice)"), s.size, s.rep, now);
    } else {
        let now = Instant::now();
        for _ in 0..s.rep {
            let reader = FastaReader::from_reader_with(s.data, options);
            reader.for_each(|r| {
                black_box(r.unwrap());
            });
        }
        report(&format!("{label} (reader)"), s.size, s.rep, now);
    }
}

fn main() {
    let path = args().nth(1).expect("No input file given");
    let content = read(&path).expect("Cannot open file");
    let data = content.as_slice();
    let size = data.len() as u64;
    let mut input_file = FileInput::open(&path).expect("Cannot open file");
    let compressed = input_file.is_compressed().unwrap();
    let rep = 3;

    let s = Setup {
        path: &path,
        data,
        size,
        compressed,
        rep,
    };

    if !compressed {
        let match_header = RegexBuilder::new(r"(>[^\n]*\n)").build().unwrap();
        let now = Instant::now();
        for _ in 0..rep {
            match_header.find_iter(data).for_each(|m| {
                black_box(m);
            });
        }
        report("Regex header (slice)", size, rep, now);
    }

    let now = Instant::now();
    for _ in 0..rep {
        let mut reader = parse_fastx_file(&path).expect("invalid file");
        while let Some(r) = reader.next() {
            let record = r.expect("invalid record");
            black_box(record.seq());
        }
    }
    report("Needletail (file)", size, rep, now);

    let now = Instant::now();
    for _ in 0..rep {
        let mut reader = parse_fastx_reader(data).expect("invalid reader");
        while let Some(r) = reader.next() {
            let record = r.expect("invalid record");
            black_box(record.seq());
        }
    }
    report("Needletail (reader)", size, rep, now);

    println!("---");

    bench_options("Chunks 64 KiB", ParserOptions::new(), &s);
    bench_options("Chunks 1 KiB", ParserOptions::new().chunk_size(1 << 10), &s);
    bench_options(
        "Chunks 64 KiB, 1 MiB buffer",
        ParserOptions::new().buffer_capacity(1 << 20),
        &s,
    );

    // a single parser fed by hand, without the iterator
    if !compressed {
        let now = Instant::now();
        for _ in 0..rep {
            let mut parser = FastaParser::new();
            let mut chunk = data;
            let mut len = 0;
            while let Feed::Done(rest) = parser.feed(chunk) {
                len += parser.finish().len();
                chunk = rest;
            }
            len += parser.finish().len();
            black_box(len);
        }
        report("Feed (slice)", size, rep, now);
    }
}
