use std::{fmt, sync::Arc};

use crate::{Caller, FieldValue, Formatter, Severity};

/// Which public entry point a call came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Fatal,
    Panic,
    /// Logs at the context's default severity, or at whatever `LogLevel`
    /// the fields carry.
    Print,
}

impl Method {
    /// Severity tagged onto the fields for leveled calls. `Print` resolves
    /// its level from the fields; fatal and panic bypass resolution.
    #[must_use]
    pub const fn tagged_severity(self) -> Option<Severity> {
        match self {
            Self::Debug => Some(Severity::Debug),
            Self::Info => Some(Severity::Info),
            Self::Notice => Some(Severity::Notice),
            Self::Warning => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
            Self::Fatal | Self::Panic | Self::Print => None,
        }
    }
}

/// Payload of a log call.
#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    /// Message followed by alternating field name/value pairs.
    Args(&'a [FieldValue]),
    /// Pre-formatted message; fields come only from prior derivations.
    Formatted(fmt::Arguments<'a>),
}

macro_rules! entry_points {
    ($($method:ident, $formatted:ident => $variant:ident;)+) => {
        $(
            #[track_caller]
            fn $method(&self, args: &[FieldValue]) {
                self.log_at(Caller::capture(), Method::$variant, Message::Args(args));
            }

            #[track_caller]
            fn $formatted(&self, args: fmt::Arguments<'_>) {
                self.log_at(Caller::capture(), Method::$variant, Message::Formatted(args));
            }
        )+
    };
}

/// The leveled, structured logging contract application code depends on.
///
/// The provided entry points all carry `#[track_caller]`: the recorded
/// `CallerFile`/`CallerLine` is the line that called them. Their
/// `CallerFunc` is always [`crate::UNKNOWN_FUNCTION`]; log through the
/// macros ([`crate::info!`] and friends) to record the calling function.
pub trait Logger: Send + Sync {
    /// Runs the whole pipeline for one call. Never fails.
    fn log_at(&self, caller: Caller, method: Method, message: Message<'_>);

    /// Derives a logger carrying one more field. The receiver is unchanged.
    fn with_field(&self, name: &str, value: FieldValue) -> Box<dyn Logger>;

    entry_points! {
        debug, debugf => Debug;
        info, infof => Info;
        notice, noticef => Notice;
        warning, warningf => Warning;
        error, errorf => Error;
        fatal, fatalf => Fatal;
        panic, panicf => Panic;
        print, printf => Print;
    }
}

/// A [`Logger`] whose message formatting can be swapped.
pub trait Adapter: Logger {
    fn with_formatter(&self, formatter: Arc<dyn Formatter>) -> Box<dyn Adapter>;
}
