// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// Prefer [`DisplayPreference::Stderr`] (the default) when progress is reported on
/// stdout, so that log lines and progress sequences don't share a stream.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `tracing_log_file_path`: [String] is the path of the log file. Eg:
///   `/tmp/term_progress.log`.
/// - `DisplayPreference`: [`DisplayPreference`] is the preferred display to use for
///   logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* tracing_log_file_path */),
    DisplayAndFile(DisplayPreference, String /* tracing_log_file_path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::Display(DisplayPreference::default()),
            level_filter: LevelFilter::DEBUG,
        }
    }
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            ..Default::default()
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self::new_display(preferred_display)
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_logs_to_stderr() {
        let it = TracingConfig::default();
        assert_eq!(it.writer_config, WriterConfig::Display(DisplayPreference::Stderr));
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_conversions() {
        let it: TracingConfig = tracing::Level::TRACE.into();
        assert_eq!(it.level_filter, LevelFilter::TRACE);

        let it: TracingConfig = LevelFilter::OFF.into();
        assert_eq!(it.level_filter, LevelFilter::OFF);

        let it: TracingConfig = DisplayPreference::Stdout.into();
        assert_eq!(it.get_writer_config(), WriterConfig::Display(DisplayPreference::Stdout));

        let it: TracingConfig = WriterConfig::File("a.log".to_string()).into();
        assert_eq!(it.get_writer_config(), WriterConfig::File("a.log".to_string()));
    }

    #[test]
    fn test_new_file_default_name() {
        let it = TracingConfig::new_file(None);
        assert_eq!(
            it.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let it = TracingConfig::new_file_and_display(None, DisplayPreference::Stdout);
        assert_eq!(
            it.writer_config,
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
