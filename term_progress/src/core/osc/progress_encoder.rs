// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Encoder for sending OSC 9;4 progress sequences to the terminal.

use std::{fmt::{Debug, Formatter},
          sync::{LazyLock, OnceLock}};

use super::{ProgressConfig, ProgressState, TerminalCheckPolicy, format_progress_sequence};
use crate::{IsInteractiveOutput, OutputDevice, StreamTerminalCheck, TTYResult};

/// What [`ProgressEncoder::try_report()`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// One complete sequence was written and flushed.
    Emitted,
    /// The output is not an interactive terminal, so nothing was written.
    SkippedNotInteractive,
}

/// Maps a [`ProgressState`] to terminal output, or to nothing.
///
/// 1. **Gate**: ask the [`IsInteractiveOutput`] capability whether the destination is an
///    interactive terminal. If it isn't, stop. No bytes are written.
/// 2. **Encode**: format exactly one sequence (see [`OscProgressSequence`]) and write it
///    to the [`OutputDevice`] with a single `write_all` followed by a `flush`, both under
///    the device lock.
///
/// The encoder holds no progress history. Each report is independent of the ones before
/// it.
///
/// Encoders that share an [`OutputDevice`] (or clones of one) can be used from many
/// threads at once; sequences never interleave byte by byte.
///
/// [`OscProgressSequence`]: super::OscProgressSequence
pub struct ProgressEncoder {
    output_device: OutputDevice,
    terminal_check: Box<dyn IsInteractiveOutput>,
    config: ProgressConfig,
    /// Only filled in when the policy is [`TerminalCheckPolicy::Once`].
    cached_tty_result: OnceLock<TTYResult>,
}

impl Debug for ProgressEncoder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressEncoder")
            .field("output_device", &"<OutputDevice>")
            .field("terminal_check", &"<IsInteractiveOutput>")
            .field("config", &self.config)
            .field("cached_tty_result", &self.cached_tty_result.get())
            .finish()
    }
}

impl ProgressEncoder {
    /// Creates a new encoder. The `terminal_check` must describe the same stream that
    /// `output_device` writes to.
    #[must_use]
    pub fn new(
        output_device: OutputDevice,
        terminal_check: impl IsInteractiveOutput + 'static,
        config: impl Into<ProgressConfig>,
    ) -> Self {
        Self {
            output_device,
            terminal_check: Box::new(terminal_check),
            config: config.into(),
            cached_tty_result: OnceLock::new(),
        }
    }

    /// Writes to the process's stdout, if stdout is a terminal.
    #[must_use]
    pub fn new_stdout() -> Self {
        Self::new(
            OutputDevice::new_stdout(),
            StreamTerminalCheck::stdout(),
            ProgressConfig::default(),
        )
    }

    /// Writes to the process's stderr, if stderr is a terminal. Handy when stdout is
    /// piped into another program but the user is still watching the terminal.
    #[must_use]
    pub fn new_stderr() -> Self {
        Self::new(
            OutputDevice::new_stderr(),
            StreamTerminalCheck::stderr(),
            ProgressConfig::default(),
        )
    }

    #[must_use]
    pub fn get_config(&self) -> ProgressConfig { self.config }

    /// Report `state` to the terminal. This never fails and never panics. If the output
    /// is not a terminal, nothing happens. If the write fails (eg: broken pipe) the error
    /// is logged at `debug` level and dropped.
    pub fn report(&self, state: ProgressState) {
        if let Err(error) = self.try_report(state) {
            tracing::debug!(
                message = "Dropped progress report, write to output device failed",
                state = %state,
                error = %error
            );
        }
    }

    /// Same as [`Self::report()`], except that write and flush failures are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing the output device fails.
    pub fn try_report(&self, state: ProgressState) -> miette::Result<ReportOutcome> {
        if self.get_tty_result() == TTYResult::IsNotInteractive {
            tracing::trace!(
                message = "Skipped progress report, output is not an interactive terminal",
                state = %state
            );
            return Ok(ReportOutcome::SkippedNotInteractive);
        }

        let sequence = format_progress_sequence(state, self.config.terminator);
        self.output_device.write_all_and_flush(sequence.as_bytes())?;

        tracing::trace!(
            message = "Emitted progress report",
            state = %state,
            percent = ?state.percent()
        );
        Ok(ReportOutcome::Emitted)
    }

    fn get_tty_result(&self) -> TTYResult {
        match self.config.terminal_check_policy {
            TerminalCheckPolicy::EveryReport => self.terminal_check.is_interactive_output(),
            TerminalCheckPolicy::Once => *self
                .cached_tty_result
                .get_or_init(|| self.terminal_check.is_interactive_output()),
        }
    }
}

/// Process wide encoder bound to stdout. All callers of [`report_progress()`] share its
/// output device lock.
static GLOBAL_PROGRESS_ENCODER: LazyLock<ProgressEncoder> =
    LazyLock::new(ProgressEncoder::new_stdout);

/// Report `state` on stdout, if stdout is an interactive terminal. Fire and forget: this
/// never fails and never panics.
///
/// ```no_run
/// use r3bl_term_progress::{ProgressState, report_progress};
///
/// report_progress(ProgressState::Set(25));
/// report_progress(ProgressState::Error(None));
/// report_progress(ProgressState::Remove);
/// ```
pub fn report_progress(state: ProgressState) { GLOBAL_PROGRESS_ENCODER.report(state); }
