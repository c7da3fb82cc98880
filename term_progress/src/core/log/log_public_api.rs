// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Both entry points receive anything that implements [`Into<TracingConfig>`], so a bare
//! [`tracing::Level`], [`tracing_core::LevelFilter`], [`DisplayPreference`], or
//! [`WriterConfig`] works, as does a combination of them with `+`:
//!
//! ```no_run
//! use r3bl_term_progress::{DisplayPreference, TracingConfig, WriterConfig,
//!                          try_initialize_logging_global};
//!
//! let config: TracingConfig = TracingConfig::from(tracing::Level::TRACE)
//!     + DisplayPreference::Stderr.into()
//!     + WriterConfig::File("/tmp/term_progress.log".to_string()).into();
//!
//! try_initialize_logging_global(config).ok();
//! ```

use std::ops::Add;

use tracing::dispatcher;
use tracing_core::LevelFilter;

use crate::{TracingConfig, WriterConfig};

/// Install a global subscriber. Does nothing if the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let tracing_config: TracingConfig = options.into();

    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }

    tracing_config.install_global()
}

/// Install a subscriber for the current thread. Returns [`None`] if the level filter is
/// [`LevelFilter::OFF`]. Otherwise hold on to the guard for as long as logging is needed.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let tracing_config: TracingConfig = options.into();

    if tracing_config.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    tracing_config.install_thread_local().map(Some)
}

/// The more verbose level wins, and writers merge as described in
/// [`Add<WriterConfig>`](WriterConfig).
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// A display and a file combine into [`WriterConfig::DisplayAndFile`]. On a collision
/// the `rhs` wins, since it is the more specific of the two.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            (None, it) | (it, None) => it,
            (Display(display) | DisplayAndFile(display, _), File(file))
            | (File(file), Display(display)) => DisplayAndFile(display, file),
            (File(_) | DisplayAndFile(..), DisplayAndFile(display, file))
            | (DisplayAndFile(_, file), Display(display)) => DisplayAndFile(display, file),
            (Display(_), DisplayAndFile(display, file)) => DisplayAndFile(display, file),
            (Display(_), Display(display)) => Display(display),
            (File(_), File(file)) => File(file),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::DisplayPreference;

    #[test]
    fn test_add_writer_configs() {
        let file = || WriterConfig::File("log.txt".to_string());
        let other_file = || WriterConfig::File("other.txt".to_string());
        let stdout = || WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = || WriterConfig::Display(DisplayPreference::Stderr);
        let both = |display, name: &str| WriterConfig::DisplayAndFile(display, name.to_string());

        assert_eq!(WriterConfig::None + WriterConfig::None, WriterConfig::None);
        assert_eq!(WriterConfig::None + file(), file());
        assert_eq!(stdout() + WriterConfig::None, stdout());

        assert_eq!(stdout() + file(), both(DisplayPreference::Stdout, "log.txt"));
        assert_eq!(file() + stderr(), both(DisplayPreference::Stderr, "log.txt"));

        assert_eq!(stdout() + stderr(), stderr());
        assert_eq!(file() + other_file(), other_file());

        assert_eq!(
            both(DisplayPreference::Stdout, "log.txt") + stderr(),
            both(DisplayPreference::Stderr, "log.txt")
        );
        assert_eq!(
            both(DisplayPreference::Stdout, "log.txt") + other_file(),
            both(DisplayPreference::Stdout, "other.txt")
        );
        assert_eq!(
            stdout() + both(DisplayPreference::Stderr, "log.txt"),
            both(DisplayPreference::Stderr, "log.txt")
        );
        assert_eq!(
            file() + both(DisplayPreference::Stderr, "other.txt"),
            both(DisplayPreference::Stderr, "other.txt")
        );
    }

    #[test]
    fn test_add_tracing_configs_keeps_more_verbose_level() {
        let lhs: TracingConfig = LevelFilter::WARN.into();
        let rhs: TracingConfig = WriterConfig::File("log.txt".to_string()).into();
        let it = TracingConfig::from(LevelFilter::TRACE) + lhs + rhs;
        assert_eq!(it.level_filter, LevelFilter::TRACE);
        assert_eq!(
            it.writer_config,
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
        );
    }

    #[serial]
    #[test]
    fn test_thread_local_off_installs_nothing() {
        let it = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(it.is_none());
    }

    #[serial]
    #[test]
    fn test_thread_local_without_writer() {
        let it = try_initialize_logging_thread_local(WriterConfig::None).unwrap();
        assert!(it.is_some());
        tracing::info!(message = "goes nowhere");
    }

    #[serial]
    #[test]
    fn test_global_off_is_ok() {
        assert!(try_initialize_logging_global(LevelFilter::OFF).is_ok());
    }
}
