// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Progress states that can be reported to the terminal. See [`ProgressState`].

use strum_macros::{AsRefStr, Display, EnumIter};

use super::osc_codes::{STATE_CODE_ERROR, STATE_CODE_INDETERMINATE, STATE_CODE_PAUSED,
                       STATE_CODE_REMOVE, STATE_CODE_SET};

/// Represents the different progress states that can be sent using OSC 9;4.
///
/// This is a transient message. Build one per update and hand it to
/// [`ProgressEncoder::report()`]. The encoder keeps no history, so reporting
/// [`ProgressState::Remove`] always clears the indicator regardless of what was reported
/// before.
///
/// Percent values are expected to be in the range `0..=100`. Values outside that range
/// are passed through as is; how the terminal renders them is up to the terminal.
///
/// Iterating with [`strum::IntoEnumIterator`] yields each variant once, with its payload
/// set to the default (`Set(0)`, `Error(None)`, `Paused(None)`).
///
/// [`ProgressEncoder::report()`]: super::ProgressEncoder::report
#[derive(Debug, Display, AsRefStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ProgressState {
    /// Clear/remove the progress indicator (OSC 9;4 state 0).
    Remove,
    /// Set specific progress value 0-100% (OSC 9;4 state 1).
    Set(u8),
    /// Operation failed or is blocked (OSC 9;4 state 2). The terminal still shows a
    /// partial bar if a percent is given. `Some(0)` is a valid percent.
    Error(Option<u8>),
    /// Operation is running but there is no specific progress (OSC 9;4 state 3).
    Indeterminate,
    /// Operation is suspended (OSC 9;4 state 4). Same percent rules as
    /// [`ProgressState::Error`].
    Paused(Option<u8>),
}

impl ProgressState {
    /// Returns the OSC 9;4 state code for this variant.
    #[must_use]
    pub fn state_code(self) -> u8 {
        match self {
            ProgressState::Remove => STATE_CODE_REMOVE,
            ProgressState::Set(_) => STATE_CODE_SET,
            ProgressState::Error(_) => STATE_CODE_ERROR,
            ProgressState::Indeterminate => STATE_CODE_INDETERMINATE,
            ProgressState::Paused(_) => STATE_CODE_PAUSED,
        }
    }

    /// Returns the percent field that will be written to the terminal, if any.
    /// - Always present for [`ProgressState::Set`].
    /// - Present for [`ProgressState::Error`] and [`ProgressState::Paused`] only when
    ///   they carry a value.
    /// - Never present for [`ProgressState::Remove`] and
    ///   [`ProgressState::Indeterminate`].
    #[must_use]
    pub fn percent(self) -> Option<u8> {
        match self {
            ProgressState::Set(percent) => Some(percent),
            ProgressState::Error(maybe_percent) | ProgressState::Paused(maybe_percent) => {
                maybe_percent
            }
            ProgressState::Remove | ProgressState::Indeterminate => None,
        }
    }
}

/// Errors from rebuilding a [`ProgressState`] out of a decoded `(state code, percent)`
/// pair. See [`ProgressState::try_from()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ProgressStateParseError {
    #[error("Unknown OSC 9;4 state code {0}")]
    #[diagnostic(
        code(r3bl_term_progress::osc::unknown_state_code),
        help("Valid state codes are 0 (remove), 1 (set), 2 (error), 3 (indeterminate) and 4 (paused)")
    )]
    UnknownStateCode(u8),

    #[error("OSC 9;4 state code 1 (set) requires a percent")]
    #[diagnostic(code(r3bl_term_progress::osc::missing_percent))]
    MissingPercent,

    #[error("OSC 9;4 state code {state_code} does not take a percent, got {percent}")]
    #[diagnostic(code(r3bl_term_progress::osc::unexpected_percent))]
    UnexpectedPercent { state_code: u8, percent: u8 },
}

impl TryFrom<(u8, Option<u8>)> for ProgressState {
    type Error = ProgressStateParseError;

    fn try_from(
        (state_code, maybe_percent): (u8, Option<u8>),
    ) -> Result<Self, ProgressStateParseError> {
        match (state_code, maybe_percent) {
            (STATE_CODE_SET, Some(percent)) => Ok(ProgressState::Set(percent)),
            (STATE_CODE_SET, None) => Err(ProgressStateParseError::MissingPercent),
            (STATE_CODE_ERROR, it) => Ok(ProgressState::Error(it)),
            (STATE_CODE_PAUSED, it) => Ok(ProgressState::Paused(it)),
            (STATE_CODE_REMOVE, None) => Ok(ProgressState::Remove),
            (STATE_CODE_INDETERMINATE, None) => Ok(ProgressState::Indeterminate),
            (STATE_CODE_REMOVE | STATE_CODE_INDETERMINATE, Some(percent)) => {
                Err(ProgressStateParseError::UnexpectedPercent {
                    state_code,
                    percent,
                })
            }
            (unknown, _) => Err(ProgressStateParseError::UnknownStateCode(unknown)),
        }
    }
}
