/// Shared expansion of the leveled macros.
///
/// `logger; fmt, args...` builds a formatted message; `logger, message,
/// name, value, ...` builds the variadic form. Arguments are converted with
/// `serde_json::to_value`; anything that fails to serialize becomes `null`.
#[macro_export]
#[doc(hidden)]
macro_rules! __log {
    ($method:ident, $logger:expr; $($arg:tt)+) => {{
        use $crate::Logger as _;
        $logger.log_at(
            $crate::caller!(),
            $crate::Method::$method,
            $crate::Message::Formatted(::std::format_args!($($arg)+)),
        )
    }};
    ($method:ident, $logger:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.log_at(
            $crate::caller!(),
            $crate::Method::$method,
            $crate::Message::Args(&[
                $($crate::reexport::serde_json::to_value(&$arg).unwrap_or_default()),*
            ]),
        )
    }};
}

/// Logs at debug severity, recording the calling function
///
/// ```rust-ignore
/// debug!(logger, "cache miss", "key", key);
/// debug!(logger; "cache miss for {key}");
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::__log!(Debug, $($arg)+) };
}

/// Logs at info severity, recording the calling function
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::__log!(Info, $($arg)+) };
}

/// Logs at notice severity, recording the calling function
#[macro_export]
macro_rules! notice {
    ($($arg:tt)+) => { $crate::__log!(Notice, $($arg)+) };
}

/// Logs at warning severity, recording the calling function
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::__log!(Warning, $($arg)+) };
}

/// Logs at error severity, recording the calling function
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::__log!(Error, $($arg)+) };
}

/// Logs then lets the backend halt the process
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::__log!(Fatal, $($arg)+) };
}

/// Logs then lets the backend unwind
#[macro_export]
macro_rules! log_panic {
    ($($arg:tt)+) => { $crate::__log!(Panic, $($arg)+) };
}

/// Logs at the default severity of the logger
#[macro_export]
macro_rules! log_print {
    ($($arg:tt)+) => { $crate::__log!(Print, $($arg)+) };
}
