// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operating System Command (OSC) codes for terminal progress reporting.
//!
//! OSC sequences provide communication between applications and the terminal emulator
//! for features that affect the terminal's operating system integration. This crate only
//! speaks one of them: OSC 9;4, which asks the terminal to show a progress indicator in
//! its tab or title bar.
//!
//! ## Structure
//! OSC sequences follow the pattern: `ESC ] code ; parameters ST`
//! - Start with ESC (0x1B) followed by `]`
//! - Numeric code identifying the command type (`9;4` for progress)
//! - Parameters separated by `;`
//! - End with BEL (0x07) or String Terminator (ESC \\)
//!
//! ## Examples
//! - `ESC]9;4;1;50 BEL` - Show progress at 50%
//! - `ESC]9;4;3 BEL` - Show a busy (indeterminate) indicator
//! - `ESC]9;4;0 BEL` - Remove the indicator

/// Escape character, the first byte of every introducer and of the String Terminator.
pub const ESC: char = '\x1b';

/// Generic OSC sequence start: ESC ]
pub const OSC_START: &str = "\x1b]";

/// OSC 9;4 sequence prefix: ESC ] 9 ; 4 ;
pub const START: &str = "\x1b]9;4;";

/// Sequence terminator: BEL character (0x07). This is what the progress encoder emits by
/// default.
pub const BELL_TERMINATOR: &str = "\x07";

/// Alternative terminator: ESC \\ (String Terminator).
pub const END: &str = "\x1b\\";

/// Parameter delimiter within OSC sequences.
pub const DELIMITER: char = ';';

/// Longest parameter string (`{state};{percent}`) the decoder waits on for a terminator.
/// Past this an introducer is treated as noise.
pub const MAX_PARAMS_LEN: usize = 16;

/// Largest percent value a terminal will render.
pub const MAX_PERCENT: u8 = 100;

// OSC 9;4 state codes. These must match byte for byte for terminal compatibility.

/// State code 0: remove the progress indicator.
pub const STATE_CODE_REMOVE: u8 = 0;

/// State code 1: set progress to a percentage.
pub const STATE_CODE_SET: u8 = 1;

/// State code 2: error state.
pub const STATE_CODE_ERROR: u8 = 2;

/// State code 3: indeterminate (busy) state.
pub const STATE_CODE_INDETERMINATE: u8 = 3;

/// State code 4: paused state.
pub const STATE_CODE_PAUSED: u8 = 4;
