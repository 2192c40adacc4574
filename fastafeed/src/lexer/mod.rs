//! Byte classification and the FASTA automaton.

mod alphabet;
mod automaton;

pub use alphabet::*;
pub use automaton::*;
