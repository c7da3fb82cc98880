// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC (Operating System Command) 9;4 progress sequence formatting and parsing.
//!
//! This module provides support for:
//! - [`ProgressState`], the five states a terminal progress indicator can be in.
//! - [`ProgressEncoder`], which writes one sequence per report to an [`OutputDevice`],
//!   but only when that output is an interactive terminal.
//! - [`OscProgressSequence`] and [`format_progress_sequence()`] for pure formatting.
//! - [`OscProgressBuffer`], which parses sequences back out of captured output. It
//!   handles partial sequences split across buffer reads and gracefully ignores
//!   malformed input.
//!
//! [`OutputDevice`]: crate::OutputDevice

pub mod osc_buffer;
pub mod osc_codes;
pub mod osc_sequence;
pub mod progress_config;
pub mod progress_encoder;
pub mod progress_state;

// Re-export main types and functions for convenience
pub use osc_buffer::*;
pub use osc_sequence::*;
pub use progress_config::*;
pub use progress_encoder::*;
pub use progress_state::*;
