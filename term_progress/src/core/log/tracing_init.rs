// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build the [`tracing_subscriber`] layers described by a [`TracingConfig`], and install
//! them either globally or for the current thread only.

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer. Escape
/// codes are only emitted for the display layer, never into log files.
macro_rules! create_fmt {
    ($with_ansi:expr) => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi($with_ansi)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

pub type DynLayers = Vec<Box<DynLayer<tracing_subscriber::Registry>>>;

impl TracingConfig {
    /// Install this configuration as the global default subscriber. Once set it can't be
    /// unset or changed, so this is meant for binaries.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| miette::miette!("Can't set global subscriber: {error}"))
    }

    /// Install this configuration for the current thread only. Logging reverts to the
    /// previous subscriber when the returned guard is dropped. This is meant for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

/// Returns the layers, without installing them. The level filter is always the first
/// layer, followed by the display layer and the file layer when configured.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(tracing_config: TracingConfig) -> miette::Result<DynLayers> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut return_it: DynLayers = vec![Box::new(level_filter)];

    if let Some(layer) = try_create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// [`None`] if `writer_config` doesn't include a display.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!(true);

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// This erases the concrete type of the writer, and returns a boxed layer. Returns
/// `Ok(None)` if `writer_config` doesn't include a file.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    match writer_config {
        WriterConfig::DisplayAndFile(_, tracing_log_file_path)
        | WriterConfig::File(tracing_log_file_path) => {
            let file = rolling_file_appender_impl::try_create(tracing_log_file_path)?;
            Ok(Some(Box::new(
                create_fmt!(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            )))
        }
        WriterConfig::None | WriterConfig::Display(_) => Ok(None),
    }
}
