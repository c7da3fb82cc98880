// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Why use this crate
//!
//! Many terminal emulators (Ghostty, Windows Terminal, `ConEmu`, VTE based terminals, the
//! VS Code integrated terminal) can render a progress bar in the tab or title bar when
//! a process writes an OSC 9;4 sequence to its output. This crate encodes those
//! sequences for you and only emits them when the output is an interactive terminal, so
//! your log files and pipes stay clean.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Quick start](#quick-start)
//! - [Wire format](#wire-format)
//! - [Testing your own code](#testing-your-own-code)
//! - [Logging](#logging)
//!
//! <!-- /TOC -->
//!
//! # Quick start
//!
//! ```no_run
//! use r3bl_term_progress::{ProgressState, report_progress};
//!
//! report_progress(ProgressState::Indeterminate);
//! for percent in (0..=100).step_by(10) {
//!     report_progress(ProgressState::Set(percent));
//! }
//! report_progress(ProgressState::Remove);
//! ```
//!
//! [`report_progress()`] never fails and never panics. If stdout is redirected to a file
//! or a pipe, nothing is written.
//!
//! If you need a different destination, or you want to know about write failures, build
//! your own [`ProgressEncoder`] and use [`ProgressEncoder::try_report()`].
//!
//! # Wire format
//!
//! ```text
//! ESC ] 9 ; 4 ; <state-code> [ ; <percent> ] BEL
//! ```
//!
//! | [`ProgressState`]                | state-code | percent         |
//! | :------------------------------- | :--------- | :-------------- |
//! | [`ProgressState::Remove`]        | 0          | never           |
//! | [`ProgressState::Set`]           | 1          | always          |
//! | [`ProgressState::Error`]         | 2          | only if present |
//! | [`ProgressState::Indeterminate`] | 3          | never           |
//! | [`ProgressState::Paused`]        | 4          | only if present |
//!
//! The String Terminator (`ESC \`) can be used instead of BEL, see
//! [`ProgressConfigOption`].
//!
//! # Testing your own code
//!
//! The [`test_fixtures`] module provides [`StdoutMock`] (captures bytes) and
//! [`MockTerminal`] (forces the interactive check either way), so you can assert on the
//! exact bytes your code emits without a real terminal.
//!
//! ```
//! use r3bl_term_progress::{MockTerminal, OutputDevice, OutputDeviceExt,
//!                          ProgressConfig, ProgressEncoder, ProgressState};
//!
//! let (output_device, stdout_mock) = OutputDevice::new_mock();
//! let encoder = ProgressEncoder::new(
//!     output_device,
//!     MockTerminal::interactive(),
//!     ProgressConfig::default(),
//! );
//! encoder.report(ProgressState::Error(Some(37)));
//! assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x1b]9;4;2;37\x07");
//! ```
//!
//! # Logging
//!
//! The encoder logs skipped reports and swallowed I/O errors using [`tracing`]. Nothing
//! is logged unless you install a subscriber, for example with
//! [`try_initialize_logging_global()`]. Keep log output off stdout if you also report
//! progress there.
//!
//! [`test_fixtures`]: mod@crate::core::test_fixtures
//! [`tracing`]: tracing

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use core::*;
