use thiserror::Error;

/// Errors raised while configuring a logger.
///
/// Log calls themselves never return errors; these only surface from
/// configuration loading and adapter construction.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<toml::de::Error> for LoggerError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e.to_string())
    }
}
