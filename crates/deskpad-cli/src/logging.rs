//! Logging setup for the CLI
//!
//! Records go to stderr for the line-oriented commands. The terminal UI owns
//! the screen, so there they go to a file or nowhere.

use std::path::{Path, PathBuf};

use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{LogConfig, LogFormat, Verbosity};
use crate::error::{CliError, CliResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// No subscriber is installed
    Off,
}

impl LogTarget {
    /// Target for a line-oriented command
    #[must_use]
    pub fn for_command(config: &LogConfig) -> Self {
        config
            .file
            .clone()
            .map_or(Self::Stderr, Self::File)
    }

    /// Target while the terminal UI is running; `override_file` wins over config
    #[must_use]
    pub fn for_tui(config: &LogConfig, override_file: Option<&Path>) -> Self {
        override_file
            .map(Path::to_path_buf)
            .or_else(|| config.file.clone())
            .map_or(Self::Off, Self::File)
    }
}

/// Filter directive for the given verbosity
///
/// `-q` and `-v` flags pick a fixed level, otherwise the config level is used.
#[must_use]
pub fn level_directive(verbosity: Verbosity, config: &LogConfig) -> String {
    match verbosity {
        Verbosity::Quiet => "error".to_string(),
        Verbosity::Normal => config.level.clone(),
        Verbosity::Verbose => "debug".to_string(),
        Verbosity::Debug => "trace".to_string(),
    }
}

/// Builds the filter; `RUST_LOG` overrides the config level when no flag is given
pub fn build_filter(verbosity: Verbosity, config: &LogConfig) -> CliResult<EnvFilter> {
    if verbosity == Verbosity::Normal {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
    }
    let directive = level_directive(verbosity, config);
    EnvFilter::try_new(&directive)
        .map_err(|e| CliError::config(format!("invalid log level {directive:?}: {e}")))
}

fn format_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(true)
            .boxed(),
    }
}

/// Non-blocking writer appending to `path`; parent directories are created
///
/// Records are flushed when the returned guard is dropped.
pub fn file_writer(path: &Path) -> CliResult<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CliError::config(format!("log file {} has no file name", path.display())))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(|e| CliError::config(format!("cannot open log file {}: {e}", path.display())))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Installs the global subscriber
///
/// For file targets the returned guard must be kept alive until exit.
pub fn init_logging(
    config: &LogConfig,
    verbosity: Verbosity,
    target: &LogTarget,
    ansi: bool,
) -> CliResult<Option<WorkerGuard>> {
    let mut guard = None;
    let layer = match target {
        LogTarget::Off => return Ok(None),
        LogTarget::Stderr => format_layer(config.format, std::io::stderr, ansi),
        LogTarget::File(path) => {
            let (writer, file_guard) = file_writer(path)?;
            guard = Some(file_guard);
            format_layer(config.format, writer, false)
        }
    };
    let filter = build_filter(verbosity, config)?;

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .map_err(|e| CliError::config(format!("failed to initialize logging: {e}")))?;
    Ok(guard)
}
