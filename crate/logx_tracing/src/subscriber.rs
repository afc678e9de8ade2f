use std::{
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

use serde::Deserialize;
use tracing::{info, span, warn, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::TracingError;

static TRACING_SET: AtomicBool = AtomicBool::new(false);

/// Where and how the `tracing` subscriber behind [`crate::TracingBackend`]
/// writes.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Do not log to stdout
    pub no_log_to_stdout: bool,

    /// If set, logs will be written to the specified directory (first argument)
    /// using the specified file name (second argument): <name>.YYYY-MM-DD.
    /// It is a rolling file appender that creates a new log file every day.
    pub log_to_file: Option<(PathBuf, String)>,

    /// Filter directives, e.g. `info,logx=debug`.
    /// If it is not set, the value of the environment variable `RUST_LOG` will
    /// be used.
    pub rust_log: Option<String>,

    /// Colored stdout output. File output is never colored.
    pub with_ansi_colors: bool,
}

/// Keeps the non-blocking file writer alive. Drop it last.
#[derive(Default)]
pub struct LoggingGuards {
    rolling_appender_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

impl LoggingGuards {
    #[must_use]
    pub const fn writes_to_file(&self) -> bool {
        self.rolling_appender_guard.is_some()
    }
}

/// Install the global `tracing` subscriber
///
/// # Usage
///
/// ```rust-ignore
/// use logx_tracing::{new_adapter, tracing_init, TracingConfig};
///
/// let _guards = tracing_init(&TracingConfig {
///     rust_log: Some("debug".to_owned()),
///     ..Default::default()
/// });
/// let logger = new_adapter();
/// logx::info!(logger, "started", "pid", std::process::id());
/// ```
///
/// # Notes
/// - only the first call installs a subscriber; later calls warn and return
///   empty guards
/// - initialization failures are reported on stderr and never panic
#[must_use]
pub fn tracing_init(tracing_config: &TracingConfig) -> LoggingGuards {
    if TRACING_SET.swap(true, Ordering::Acquire) {
        let span = span!(tracing::Level::INFO, "tracing_init");
        let _guard = span.enter();
        warn!("Tracing already initialized or crashed");
        return LoggingGuards::default();
    }

    match tracing_init_(tracing_config) {
        Ok(guards) => {
            let span = span!(tracing::Level::INFO, "tracing_init");
            let _guard = span.enter();
            info!("Tracing initialized with config {tracing_config:#?}",);
            guards
        }
        Err(err) => {
            TRACING_SET.store(false, Ordering::Release);
            // If we cannot initialize the tracing system, we should not panic
            eprintln!("Failed to initialize tracing: {err:?}");
            LoggingGuards::default()
        }
    }
}

pub(crate) fn env_filter(rust_log: Option<&str>) -> Result<EnvFilter, TracingError> {
    match rust_log {
        Some(directives) => Ok(EnvFilter::builder().parse(directives)?),
        None => Ok(EnvFilter::from_default_env()),
    }
}

fn tracing_init_(config: &TracingConfig) -> Result<LoggingGuards, TracingError> {
    let (subscriber, guards) = build_subscriber(config)?;
    subscriber.try_init()?;
    Ok(guards)
}

/// Builds the subscriber [`tracing_init`] installs, without installing it.
///
/// Useful to scope it with `tracing::subscriber::with_default`. Keep the
/// guards alive for as long as the subscriber is in use; dropping them
/// flushes the file writer.
///
/// # Errors
/// Fails on invalid filter directives or when the logs directory cannot be
/// created.
pub fn build_subscriber(
    config: &TracingConfig,
) -> Result<(impl Subscriber + Send + Sync + 'static, LoggingGuards), TracingError> {
    let mut guards = LoggingGuards::default();
    let mut layers = vec![];

    let filter = env_filter(config.rust_log.as_deref())?;

    // Logging to stdout
    if !config.no_log_to_stdout {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_level(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_ansi(config.with_ansi_colors)
            .compact();
        layers.push(fmt_layer.boxed());
    }

    // Logging the rolling file appender
    if let Some((dir, name)) = &config.log_to_file {
        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|err| {
                TracingError::IOError(format!("Failed to create logs directory: {dir:?}: {err:?}"))
            })?;
        }

        let file_appender = tracing_appender::rolling::daily(dir, name);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.rolling_appender_guard = Some(guard);

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_writer)
            .with_level(true)
            .with_target(true)
            .with_thread_ids(true)
            .with_ansi(false)
            .compact();
        layers.push(fmt_layer.boxed());
    }

    let subscriber = tracing_subscriber::registry().with(filter).with(layers);

    Ok((subscriber, guards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter() {
        assert!(env_filter(Some("info,logx=debug")).is_ok());
        assert!(matches!(
            env_filter(Some("logx=loudest")),
            Err(TracingError::Parsing(_))
        ));
        assert!(env_filter(None).is_ok());
    }

    #[test]
    fn test_config_deserialize() {
        let config: TracingConfig = serde_json::from_str(
            r#"{"rust_log": "debug", "log_to_file": ["logs", "app.log"]}"#,
        )
        .unwrap();
        assert_eq!(config.rust_log.as_deref(), Some("debug"));
        assert_eq!(
            config.log_to_file,
            Some((PathBuf::from("logs"), "app.log".to_owned()))
        );
        assert!(!config.no_log_to_stdout);
        assert!(!config.with_ansi_colors);
    }
}
