use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracingError {
    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Tracing subscriber error: {0}")]
    TracingSubscriber(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<tracing_subscriber::filter::ParseError> for TracingError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Parsing(e.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for TracingError {
    fn from(value: tracing_subscriber::util::TryInitError) -> Self {
        Self::TracingSubscriber(value.to_string())
    }
}
