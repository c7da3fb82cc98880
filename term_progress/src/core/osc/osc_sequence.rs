// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Formatting of OSC 9;4 progress sequences. No I/O happens here, see
//! [`super::ProgressEncoder`] for that.

use std::fmt::{self, Display, Write as _};

use strum_macros::{Display as StrumDisplay, EnumIter};

use super::{ProgressState,
            osc_codes::{BELL_TERMINATOR, DELIMITER, END, START}};
use crate::InlineString;

/// Which byte sequence ends an OSC sequence.
#[derive(Debug, StrumDisplay, EnumIter, Clone, Copy, PartialEq, Eq, Default)]
pub enum OscTerminator {
    /// BEL (0x07). Understood by every terminal that supports OSC 9;4.
    #[default]
    Bell,
    /// ESC \\ (String Terminator). The ECMA-48 form.
    StringTerminator,
}

impl OscTerminator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OscTerminator::Bell => BELL_TERMINATOR,
            OscTerminator::StringTerminator => END,
        }
    }
}

/// A single OSC 9;4 sequence, ready to be written to the terminal. The [`Display`] impl
/// produces the exact bytes:
///
/// ```text
/// ESC ] 9 ; 4 ; <state-code> [ ; <percent> ] <terminator>
/// ```
///
/// The `;<percent>` segment is left out entirely when [`ProgressState::percent()`] is
/// [`None`].
///
/// # Example
///
/// ```
/// use r3bl_term_progress::{OscProgressSequence, OscTerminator, ProgressState};
///
/// let it = OscProgressSequence::new(ProgressState::Set(50), OscTerminator::Bell);
/// assert_eq!(it.to_string(), "\x1b]9;4;1;50\x07");
///
/// let it = OscProgressSequence::new(ProgressState::Paused(None), OscTerminator::Bell);
/// assert_eq!(it.to_string(), "\x1b]9;4;4\x07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OscProgressSequence {
    pub state: ProgressState,
    pub terminator: OscTerminator,
}

impl OscProgressSequence {
    #[must_use]
    pub fn new(state: ProgressState, terminator: OscTerminator) -> Self {
        Self { state, terminator }
    }
}

impl Display for OscProgressSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{START}{}", self.state.state_code())?;
        if let Some(percent) = self.state.percent() {
            write!(f, "{DELIMITER}{percent}")?;
        }
        f.write_str(self.terminator.as_str())
    }
}

/// Formats the sequence for `state` into a stack allocated [`InlineString`], so the
/// encoder can hand it to the output device in a single write.
#[must_use]
pub fn format_progress_sequence(
    state: ProgressState,
    terminator: OscTerminator,
) -> InlineString {
    let mut acc = InlineString::new();
    // Writing into an in-memory string can't fail.
    let _ = write!(acc, "{}", OscProgressSequence::new(state, terminator));
    acc
}
