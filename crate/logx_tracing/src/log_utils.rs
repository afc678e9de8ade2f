use logx::LogAdapter;

use crate::{tracing_init, LoggingGuards, TracingBackend, TracingConfig};

/// Initializing the stdout logger only.
///
/// # Arguments
/// * `rust_log` - filter directives; `None` falls back to the `RUST_LOG`
///   environment variable
///
/// # Notes
/// - safe to call from every test: only the first call installs the
///   subscriber
pub fn log_init(rust_log: Option<&str>) -> LoggingGuards {
    let config = TracingConfig {
        no_log_to_stdout: false,
        log_to_file: None,
        rust_log: rust_log.map(std::borrow::ToOwned::to_owned),
        with_ansi_colors: false,
    };
    tracing_init(&config)
}

/// A facade over the default [`TracingBackend`].
#[must_use]
pub fn new_adapter() -> LogAdapter<TracingBackend> {
    LogAdapter::new(TracingBackend::new())
}

#[cfg(test)]
mod tests {
    use logx::{info, Logger};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_log_init() {
        let _guards = log_init(Some("debug"));
        let logger = new_adapter().with_field("test", "log_init");
        info!(logger, "This is an INFO test log message", "answer", 42);
        logger.debugf(format_args!("This is a DEBUG test log message"));
        logger.notice(&[json!("notice is emitted at INFO")]);
    }
}
