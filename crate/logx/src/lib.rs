//! # logx
//!
//! A leveled, structured logging facade. Application code talks to the
//! [`Logger`] / [`Adapter`] contracts; the actual emission is delegated to an
//! interchangeable [`Backend`] sink.
//!
//! ## Usage
//!
//! ```rust-ignore
//! use logx::{info, warning, LogAdapter};
//!
//! let logger = LogAdapter::new(backend).with_field("env", "prod");
//! info!(logger, "hello", "user", "alice");
//! warning!(logger; "retrying {}", 3);
//! ```
//!
//! ## Behavior
//!
//! - Every derivation (`with_field`, `with_formatter`) returns an independent
//!   logger; the receiver is never modified.
//! - Every public log call records its call site (`CallerFunc`, `CallerFile`,
//!   `CallerLine`) before merging call-supplied fields.
//! - A log call never fails: unknown levels degrade to the backend's Info
//!   tier, a missing formatter is a pass-through, and an odd field list keeps
//!   whatever it can.
//! - Fatal and Panic are handed to the backend unconditionally; the facade
//!   does not intercept process exit or unwinding.
mod adapter;
mod backend;
mod caller;
mod config;
mod context;
mod error;
mod fields;
mod formatter;
mod level;
mod logger;
mod macros;
pub mod testing;

pub use adapter::LogAdapter;
pub use backend::Backend;
pub use caller::{Caller, UNKNOWN_FUNCTION};
pub use config::FacadeConfig;
pub use context::LoggerContext;
pub use error::LoggerError;
pub use fields::{
    display_value, filter_fields_by_name, get_field_as_i64_or, merge_pairs, FieldValue, Fields,
    FIELD_CALLER_FILE, FIELD_CALLER_FUNC, FIELD_CALLER_LINE, FIELD_LOG_LEVEL,
};
pub use formatter::{Formatter, LevelPrefixFormatter, LogfmtFormatter};
pub use level::{LevelMap, Severity};
pub use logger::{Adapter, Logger, Message, Method};

/// Re-exported dependencies for use with the logging macros
///
/// The macros convert their arguments with `serde_json::to_value`, so callers
/// do not need `serde_json` as a direct dependency.
pub mod reexport {
    pub use serde_json;
}

#[doc(hidden)]
pub mod __private {
    pub use crate::caller::enclosing_function;
}

#[cfg(test)]
mod tests;
