// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC buffer for accumulating and parsing OSC 9;4 progress sequences.

use super::{ProgressState,
            osc_codes::{self, MAX_PERCENT}};
use crate::InlineVec;

/// Buffer for accumulating and parsing OSC 9;4 progress sequences back into
/// [`ProgressState`] values.
///
/// Use it to observe what a child process (eg: one running in a PTY) reports, or to
/// assert on what a [`ProgressEncoder`] wrote to a [`StdoutMock`]. It handles partial
/// sequences that are split across multiple reads, skips any other text, and accepts
/// both the BEL and the ESC \\ terminators.
///
/// [`ProgressEncoder`]: super::ProgressEncoder
/// [`StdoutMock`]: crate::StdoutMock
#[derive(Debug, Default)]
pub struct OscProgressBuffer {
    /// Starts with a (possibly partial) introducer, or is shorter than one. Text that
    /// can't be part of a sequence is discarded as soon as it arrives.
    data: String,
    /// Leading bytes of a UTF-8 character whose remaining bytes haven't been read yet.
    incomplete_utf8_tail: InlineVec<u8>,
}

impl OscProgressBuffer {
    /// Creates a new empty OSC buffer.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Appends new bytes to the buffer and extracts any complete OSC 9;4 sequences.
    ///
    /// # Arguments
    /// * `buffer` - Raw bytes read from the PTY (or captured output)
    /// * `n` - Number of valid bytes in the buffer, clamped to `buffer.len()`
    ///
    /// # Returns
    /// The [`ProgressState`]s parsed from the complete sequences found, in order.
    /// Malformed sequences are dropped.
    pub fn append_and_extract(
        &mut self,
        buffer: &[u8],
        n: usize,
    ) -> InlineVec<ProgressState> {
        self.push_bytes(&buffer[..n.min(buffer.len())]);

        let mut acc = InlineVec::new();
        while let Some(maybe_state) = self.extract_next_sequence() {
            if let Some(state) = maybe_state {
                acc.push(state);
            }
        }
        acc
    }

    /// Decodes `bytes` into `data`. A character split across reads is held back until
    /// its last byte arrives. Invalid bytes become `U+FFFD`.
    fn push_bytes(&mut self, bytes: &[u8]) {
        let mut joined = std::mem::take(&mut self.incomplete_utf8_tail);
        joined.extend_from_slice(bytes);

        let mut rest: &[u8] = &joined;
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    self.data.push_str(valid);
                    break;
                }
                Err(error) => {
                    let (valid, after_valid) = rest.split_at(error.valid_up_to());
                    self.data
                        .push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match error.error_len() {
                        None => {
                            self.incomplete_utf8_tail.extend_from_slice(after_valid);
                            break;
                        }
                        Some(invalid_len) => {
                            self.data.push(char::REPLACEMENT_CHARACTER);
                            rest = &after_valid[invalid_len..];
                        }
                    }
                }
            }
        }
    }

    /// Drops text that holds no introducer. Only a trailing ESC (and what follows it)
    /// short enough to be the front of a split introducer is kept.
    fn discard_text(&mut self) {
        let mut cut = self
            .data
            .len()
            .saturating_sub(osc_codes::START.len() - 1);
        while !self.data.is_char_boundary(cut) {
            cut += 1;
        }
        match self.data[cut..].find(osc_codes::ESC) {
            Some(esc_idx) => {
                self.data.drain(..cut + esc_idx);
            }
            None => self.data.clear(),
        }
    }

    /// Extracts and parses the next complete OSC 9;4 sequence from the buffer.
    ///
    /// Looks for sequences in the format: `ESC]9;4;{state}[;{percent}]` followed by BEL
    /// or `ESC\`. Any text before the sequence is discarded.
    ///
    /// # Returns
    /// * `None` if no complete sequence is available. A partial sequence stays in the
    ///   buffer, waiting for more bytes.
    /// * `Some(None)` if a complete sequence was found but it was malformed, or if an
    ///   introducer went [`osc_codes::MAX_PARAMS_LEN`] bytes without a terminator. It is
    ///   removed from the buffer.
    /// * `Some(Some(state))` for a valid sequence. It is removed from the buffer.
    #[allow(clippy::option_option)]
    pub fn extract_next_sequence(&mut self) -> Option<Option<ProgressState>> {
        let Some(start_idx) = self.data.find(osc_codes::START) else {
            self.discard_text();
            return None;
        };
        self.data.drain(..start_idx);
        let after_start_idx = osc_codes::START.len();

        // Whichever terminator comes first ends the sequence.
        let rest = &self.data[after_start_idx..];
        let (end_idx, terminator_len) = match (
            rest.find(osc_codes::BELL_TERMINATOR),
            rest.find(osc_codes::END),
        ) {
            (Some(bel), Some(st)) if st < bel => (st, osc_codes::END.len()),
            (Some(bel), _) => (bel, osc_codes::BELL_TERMINATOR.len()),
            (None, Some(st)) => (st, osc_codes::END.len()),
            (None, None) if rest.len() > osc_codes::MAX_PARAMS_LEN => {
                tracing::trace!(
                    message = "Ignored unterminated OSC 9;4 sequence",
                    params_len = rest.len()
                );
                self.data.drain(..after_start_idx);
                return Some(None);
            }
            (None, None) => return None,
        };
        let params_end_idx = after_start_idx + end_idx;
        let sequence_end_idx = params_end_idx + terminator_len;

        let maybe_state = Self::parse_osc_params(&self.data[after_start_idx..params_end_idx]);

        // Remove processed portion from buffer (including everything up to sequence end).
        self.data.drain(0..sequence_end_idx);

        Some(maybe_state)
    }

    /// Parses OSC 9;4 parameters into a [`ProgressState`].
    ///
    /// # Arguments
    /// * `params` - The parameter string in format `{state}` or `{state};{percent}`
    ///
    /// # Returns
    /// * `Some(ProgressState)` if parameters were valid. Percent values above 100 are
    ///   clamped to 100.
    /// * `None` if parameters were malformed or the state was unknown.
    #[must_use]
    pub fn parse_osc_params(params: &str) -> Option<ProgressState> {
        let mut parts = params.split(osc_codes::DELIMITER);
        let state_code = parts.next()?.parse::<u8>().ok()?;
        let maybe_percent = match parts.next() {
            None => None,
            Some(percent) => {
                let percent = percent.parse::<u32>().ok()?.min(u32::from(MAX_PERCENT));
                Some(u8::try_from(percent).ok()?)
            }
        };
        if parts.next().is_some() {
            // Gracefully handle malformed sequences.
            return None;
        }

        match ProgressState::try_from((state_code, maybe_percent)) {
            Ok(state) => Some(state),
            Err(error) => {
                tracing::trace!(
                    message = "Ignored malformed OSC 9;4 sequence",
                    params = params,
                    error = %error
                );
                None
            }
        }
    }
}
