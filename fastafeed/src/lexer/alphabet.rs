//! Residue alphabet and byte classification.
//!
//! Both tables are computed at compile time and cover all 256 byte values.

/// Compact code of one residue, stored as a single byte in sequences.
pub type Symbol = u8;

pub mod symbols {
    //! Symbol values, numbered contiguously from `A` (the letter `J` is skipped).

    use super::Symbol;

    pub const A: Symbol = 0;
    pub const B: Symbol = 1;
    pub const C: Symbol = 2;
    pub const D: Symbol = 3;
    pub const E: Symbol = 4;
    pub const F: Symbol = 5;
    pub const G: Symbol = 6;
    pub const H: Symbol = 7;
    pub const I: Symbol = 8;
    pub const K: Symbol = 9;
    pub const L: Symbol = 10;
    pub const M: Symbol = 11;
    pub const N: Symbol = 12;
    pub const O: Symbol = 13;
    pub const P: Symbol = 14;
    pub const Q: Symbol = 15;
    pub const R: Symbol = 16;
    pub const S: Symbol = 17;
    pub const T: Symbol = 18;
    pub const U: Symbol = 19;
    pub const V: Symbol = 20;
    pub const W: Symbol = 21;
    pub const X: Symbol = 22;
    pub const Y: Symbol = 23;
    pub const Z: Symbol = 24;
    pub const GAP: Symbol = 25;
    pub const INVALID_CHARACTER: Symbol = 26;

    /// Number of symbols mapped from a letter.
    pub const LETTERS: usize = 25;
}

use symbols::*;

/// Coarse category of a byte, used to drive the automaton.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    /// Alphabet character or gap marker.
    Ch = 0,
    /// Record start (`>`).
    St = 1,
    /// Comment start (`;`).
    Cm = 2,
    /// Anything else.
    Et = 3,
    /// Line terminator (`\n` or `\r`).
    Nl = 4,
}

impl Class {
    pub const COUNT: usize = 5;
}

const fn symbol_of(byte: u8) -> Symbol {
    match byte.to_ascii_uppercase() {
        b'J' => INVALID_CHARACTER,
        c @ b'A'..=b'I' => c - b'A',
        c @ b'K'..=b'Z' => c - b'A' - 1,
        b'-' | b'.' => GAP,
        _ => INVALID_CHARACTER,
    }
}

const fn class_of(byte: u8) -> Class {
    match byte {
        b'>' => Class::St,
        b';' => Class::Cm,
        b'\n' | b'\r' => Class::Nl,
        _ if symbol_of(byte) != INVALID_CHARACTER => Class::Ch,
        _ => Class::Et,
    }
}

const SYMBOL_TABLE: [Symbol; 256] = {
    let mut table = [INVALID_CHARACTER; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = symbol_of(i as u8);
        i += 1;
    }
    table
};

const CLASS_TABLE: [Class; 256] = {
    let mut table = [Class::Et; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = class_of(i as u8);
        i += 1;
    }
    table
};

/// Returns the class of a byte.
#[inline(always)]
pub const fn classify_class(byte: u8) -> Class {
    CLASS_TABLE[byte as usize]
}

/// Returns the symbol of a byte, or [`INVALID_CHARACTER`] if the byte is not of class [`Class::Ch`].
///
/// Upper and lower case letters map to the same symbol.
#[inline(always)]
pub const fn classify_symbol(byte: u8) -> Symbol {
    SYMBOL_TABLE[byte as usize]
}

/// Returns the canonical (uppercase) character of a symbol.
///
/// [`GAP`] is rendered as `-` and any value from [`INVALID_CHARACTER`] upwards as a space.
#[inline(always)]
pub const fn symbol_to_char(symbol: Symbol) -> u8 {
    match symbol {
        s if s < K => s + b'A',
        s if s < GAP => s + b'A' + 1,
        GAP => b'-',
        _ => b' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_byte_has_one_class() {
        let mut counts = [0usize; Class::COUNT];
        for b in 0..=255u8 {
            counts[classify_class(b) as usize] += 1;
        }
        assert_eq!(counts.iter().sum::<usize>(), 256);
        // 25 letters in both cases, plus `-` and `.`
        assert_eq!(counts[Class::Ch as usize], 52);
        assert_eq!(counts[Class::St as usize], 1);
        assert_eq!(counts[Class::Cm as usize], 1);
        assert_eq!(counts[Class::Nl as usize], 2);
    }

    #[test]
    fn test_non_alphabet_is_invalid() {
        for b in 0..=255u8 {
            if classify_class(b) != Class::Ch {
                assert_eq!(classify_symbol(b), INVALID_CHARACTER, "byte {b:#04x}");
            } else {
                assert!(classify_symbol(b) < INVALID_CHARACTER, "byte {b:#04x}");
            }
        }
    }

    #[test]
    fn test_structural_bytes() {
        assert_eq!(classify_class(b'>'), Class::St);
        assert_eq!(classify_class(b';'), Class::Cm);
        assert_eq!(classify_class(b'\n'), Class::Nl);
        assert_eq!(classify_class(b'\r'), Class::Nl);
        for b in [b' ', b'\t', b'*', b':', b',', b'0', b'J', b'j', 0x80, 0xff] {
            assert_eq!(classify_class(b), Class::Et, "byte {b:#04x}");
        }
    }

    #[test]
    fn test_letter_round_trip() {
        for s in 0..LETTERS as Symbol {
            let c = symbol_to_char(s);
            assert!(c.is_ascii_uppercase());
            assert_eq!(classify_symbol(c), s);
            assert_eq!(classify_symbol(c.to_ascii_lowercase()), s);
        }
        assert_eq!(symbol_to_char(I), b'I');
        assert_eq!(symbol_to_char(K), b'K');
        assert_eq!(symbol_to_char(Z), b'Z');
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(classify_symbol(b'-'), GAP);
        assert_eq!(classify_symbol(b'.'), GAP);
        assert_eq!(symbol_to_char(GAP), b'-');
        assert_eq!(symbol_to_char(INVALID_CHARACTER), b' ');
        assert_eq!(symbol_to_char(u8::MAX), b' ');
    }
}
