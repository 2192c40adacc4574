use fastafeed::input::*;
use fastafeed::*;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).expect("No input file given");

    // records are parsed one at a time, the file is read in chunks
    for record in FastaReader::from_file(&path)? {
        let record = record?;

        // the header, without the leading `>`
        let header = &record.header;

        // the residues as symbols, see `fastafeed::symbols`
        let seq = &record.body;

        println!("{header}\t{}", seq.len());
    }
    Ok(())
}
