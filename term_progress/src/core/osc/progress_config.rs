// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Add, AddAssign};

use super::OscTerminator;

/// Configuration options that can be combined to build a [`ProgressConfig`].
///
/// These options combine using the `+` operator. The combination follows a "last write
/// wins per field" strategy - each option modifies only the field it cares about:
///
/// - `Bell` and `StringTerminator` only set `terminator`
/// - `CheckEveryReport` and `CheckOnce` only set `terminal_check_policy`
///
/// # Examples
///
/// ```rust
/// use r3bl_term_progress::{ProgressConfig, ProgressConfigOption, OscTerminator,
///                          TerminalCheckPolicy};
/// use ProgressConfigOption::*;
///
/// // Single option (automatically converts to ProgressConfig).
/// let config: ProgressConfig = StringTerminator.into();
/// assert_eq!(config.terminator, OscTerminator::StringTerminator);
///
/// // Combine multiple options.
/// let config = StringTerminator + CheckOnce;
/// assert_eq!(config.terminal_check_policy, TerminalCheckPolicy::Once);
///
/// // Last write wins.
/// let config = StringTerminator + CheckOnce + Bell;
/// assert_eq!(config.terminator, OscTerminator::Bell);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressConfigOption {
    /// End sequences with BEL (0x07). This is the default.
    Bell,
    /// End sequences with ESC \\ (String Terminator).
    StringTerminator,
    /// Ask the terminal check before every report. This is the default.
    CheckEveryReport,
    /// Ask the terminal check on the first report and reuse the answer.
    CheckOnce,
}

/// When the encoder asks whether its output is an interactive terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalCheckPolicy {
    /// Re-check before every emission. Correct even if the destination changes (eg:
    /// the fd is re-pointed with `dup2`).
    #[default]
    EveryReport,
    /// Check on the first report only and cache the result for the encoder's lifetime.
    Once,
}

/// Final configuration for a [`ProgressEncoder`].
///
/// This struct is built by combining [`ProgressConfigOption`] values using the `+`
/// operator, or taken from [`Default`].
///
/// [`ProgressEncoder`]: super::ProgressEncoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressConfig {
    pub terminator: OscTerminator,
    pub terminal_check_policy: TerminalCheckPolicy,
}

impl ProgressConfig {
    /// Apply a configuration option to this config. Uses "last write wins per field"
    /// strategy.
    fn apply(&mut self, option: ProgressConfigOption) {
        match option {
            ProgressConfigOption::Bell => self.terminator = OscTerminator::Bell,
            ProgressConfigOption::StringTerminator => {
                self.terminator = OscTerminator::StringTerminator;
            }
            ProgressConfigOption::CheckEveryReport => {
                self.terminal_check_policy = TerminalCheckPolicy::EveryReport;
            }
            ProgressConfigOption::CheckOnce => {
                self.terminal_check_policy = TerminalCheckPolicy::Once;
            }
        }
    }
}

/// Convert a single option into a complete [`ProgressConfig`].
impl From<ProgressConfigOption> for ProgressConfig {
    fn from(option: ProgressConfigOption) -> Self {
        let mut config = ProgressConfig::default();
        config.apply(option);
        config
    }
}

/// Combine two options to create a [`ProgressConfig`].
impl Add for ProgressConfigOption {
    type Output = ProgressConfig;

    fn add(self, rhs: Self) -> ProgressConfig {
        let mut config = ProgressConfig::from(self);
        config.apply(rhs);
        config
    }
}

/// Add an option to an existing config.
impl Add<ProgressConfigOption> for ProgressConfig {
    type Output = ProgressConfig;

    fn add(mut self, rhs: ProgressConfigOption) -> ProgressConfig {
        self.apply(rhs);
        self
    }
}

impl AddAssign<ProgressConfigOption> for ProgressConfig {
    fn add_assign(&mut self, rhs: ProgressConfigOption) { self.apply(rhs); }
}
