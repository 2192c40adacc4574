//! The FASTA grammar as a deterministic automaton over byte classes.

use super::alphabet::Class;

/// State of the automaton.
///
/// The first six variants are resting states. [`HeaderDone`](State::HeaderDone) and
/// [`RecordDone`](State::RecordDone) are exit signals: the engine acts on them and never rests there.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Start of stream, or between records.
    BeforeRecord = 0,
    /// At the start of a line of the record body.
    AfterHeader,
    /// Inside a `;` comment line.
    InComment,
    /// Inside the `>` header line.
    InHeader,
    /// Skipping non-residue bytes in the middle of a body line.
    InGap,
    /// Reading residues.
    InSequence,
    /// The header line just ended.
    HeaderDone,
    /// A new record starts, the current one is complete.
    RecordDone,
}

impl State {
    pub const RESTING: usize = 6;

    /// Returns `true` for the exit signals.
    #[inline(always)]
    pub const fn is_signal(self) -> bool {
        self as usize >= Self::RESTING
    }
}

use State::*;

#[rustfmt::skip]
const TRANSITIONS: [[State; Class::COUNT]; State::RESTING] = [
    //                Ch           St           Cm           Et            Nl
    /* BeforeRecord */ [HeaderDone, InHeader,   InComment,   BeforeRecord, BeforeRecord],
    /* AfterHeader  */ [InSequence, RecordDone, RecordDone,  InGap,        AfterHeader],
    /* InComment    */ [InComment,  InComment,  InComment,   InComment,    BeforeRecord],
    /* InHeader     */ [InHeader,   InHeader,   InHeader,    InHeader,     HeaderDone],
    /* InGap        */ [InSequence, RecordDone, InGap,       InGap,        AfterHeader],
    /* InSequence   */ [InSequence, RecordDone, InGap,       InGap,        AfterHeader],
];

/// Returns the state reached from `state` on a byte of class `class`.
///
/// `state` must be a resting state.
#[inline(always)]
pub const fn transition(state: State, class: Class) -> State {
    debug_assert!(!state.is_signal());
    TRANSITIONS[state as usize][class as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTING: [State; State::RESTING] =
        [BeforeRecord, AfterHeader, InComment, InHeader, InGap, InSequence];
    const CLASSES: [Class; Class::COUNT] = [Class::Ch, Class::St, Class::Cm, Class::Et, Class::Nl];

    #[test]
    fn test_table_order() {
        for (i, s) in RESTING.iter().enumerate() {
            assert_eq!(*s as usize, i);
            assert!(!s.is_signal());
        }
        assert!(HeaderDone.is_signal());
        assert!(RecordDone.is_signal());
    }

    #[test]
    fn test_line_terminators_never_signal_done() {
        for s in RESTING {
            assert_ne!(transition(s, Class::Nl), RecordDone);
        }
    }

    #[test]
    fn test_record_start() {
        assert_eq!(transition(BeforeRecord, Class::St), InHeader);
        assert_eq!(transition(BeforeRecord, Class::Cm), InComment);
        assert_eq!(transition(BeforeRecord, Class::Nl), BeforeRecord);
        assert_eq!(transition(BeforeRecord, Class::Et), BeforeRecord);
        // headerless sequence data
        assert_eq!(transition(BeforeRecord, Class::Ch), HeaderDone);
    }

    #[test]
    fn test_fresh_record_cannot_end_immediately() {
        for c in CLASSES {
            assert_ne!(transition(BeforeRecord, c), RecordDone);
        }
    }

    #[test]
    fn test_body_boundaries() {
        for s in [AfterHeader, InGap, InSequence] {
            assert_eq!(transition(s, Class::St), RecordDone);
            assert_eq!(transition(s, Class::Ch), InSequence);
            assert_eq!(transition(s, Class::Nl), AfterHeader);
        }
        // `;` only starts a new record at the start of a line
        assert_eq!(transition(AfterHeader, Class::Cm), RecordDone);
        assert_eq!(transition(InSequence, Class::Cm), InGap);
    }

    #[test]
    fn test_text_lines() {
        for c in [Class::Ch, Class::St, Class::Cm, Class::Et] {
            assert_eq!(transition(InHeader, c), InHeader);
            assert_eq!(transition(InComment, c), InComment);
        }
        assert_eq!(transition(InHeader, Class::Nl), HeaderDone);
        assert_eq!(transition(InComment, Class::Nl), BeforeRecord);
    }
}
