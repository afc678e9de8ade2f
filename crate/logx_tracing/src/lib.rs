//! # logx tracing backend
//!
//! Emits [`logx`] entries as `tracing` events and installs the subscriber
//! that writes them.
//!
//! ```rust-ignore
//! use logx_tracing::{log_init, new_adapter};
//!
//! let _guards = log_init(Some("info"));
//! let logger = new_adapter().with_field("env", "prod");
//! logx::info!(logger, "hello", "user", "alice");
//! logx::warning!(logger; "retrying {}", 3);
//! ```
//!
//! Severities map onto `tracing` levels as follows: debug → DEBUG,
//! info and notice → INFO, warning → WARN, error, fatal and panic → ERROR.
//! Fatal entries run the exit hook (`std::process::exit(1)` by default),
//! panic entries panic with the message.
mod backend;
mod error;
mod log_utils;
mod subscriber;

pub use backend::{TracingBackend, FATAL_EXIT_CODE};
pub use error::TracingError;
pub use log_utils::{log_init, new_adapter};
pub use subscriber::{build_subscriber, tracing_init, LoggingGuards, TracingConfig};

/// Re-exported dependencies for configuring the subscriber directly
pub mod reexport {
    pub use tracing;
    pub use tracing_subscriber;
}
