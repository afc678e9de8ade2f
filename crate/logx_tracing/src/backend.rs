use std::{fmt, sync::Arc};

use logx::{
    display_value, Backend, Fields, LevelMap, Severity, FIELD_CALLER_FILE, FIELD_CALLER_FUNC,
    FIELD_CALLER_LINE,
};
use tracing::Level;

/// Exit code used by [`TracingBackend::emit_fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

fn exit_process(code: i32) {
    std::process::exit(code)
}

/// [`Backend`] emitting `tracing` events under the `logx` target.
///
/// Each entry becomes one event carrying the message, the call site as
/// `caller` (`function@file:line`) and every other field as a JSON object
/// in `fields`.
#[derive(Clone)]
pub struct TracingBackend {
    exit_hook: ExitHook,
}

impl Default for TracingBackend {
    fn default() -> Self {
        Self {
            exit_hook: Arc::new(exit_process),
        }
    }
}

impl fmt::Debug for TracingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracingBackend").finish_non_exhaustive()
    }
}

impl TracingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces what happens after a fatal entry is emitted. Defaults to
    /// `std::process::exit(1)`.
    #[must_use]
    pub fn with_exit_hook(mut self, hook: impl Fn(i32) + Send + Sync + 'static) -> Self {
        self.exit_hook = Arc::new(hook);
        self
    }
}

/// Caller fields pulled out of the field set for display.
struct Entry {
    caller: String,
    fields: String,
}

impl Entry {
    fn new(fields: &Fields) -> Self {
        let mut fields = fields.clone();
        let function = fields.remove(FIELD_CALLER_FUNC);
        let file = fields.remove(FIELD_CALLER_FILE);
        let line = fields.remove(FIELD_CALLER_LINE);
        let caller = match (function, file, line) {
            (None, None, None) => String::new(),
            (function, file, line) => format!(
                "{}@{}:{}",
                function.as_ref().map(display_value).unwrap_or_default(),
                file.as_ref().map(display_value).unwrap_or_default(),
                line.as_ref().map(display_value).unwrap_or_default(),
            ),
        };
        Self {
            caller,
            fields: serde_json::to_string(&fields).unwrap_or_default(),
        }
    }
}

macro_rules! emit_event {
    ($level:expr, $entry:ident, $message:expr) => {
        tracing::event!(
            target: "logx",
            $level,
            caller = %$entry.caller,
            fields = %$entry.fields,
            "{}",
            $message
        )
    };
}

impl Backend for TracingBackend {
    type Level = Level;

    fn level_map(&self) -> LevelMap<Level> {
        LevelMap::new(Level::INFO)
            .with(Severity::Debug, Level::DEBUG)
            .with(Severity::Info, Level::INFO)
            .with(Severity::Notice, Level::INFO)
            .with(Severity::Warning, Level::WARN)
            .with(Severity::Error, Level::ERROR)
            .with(Severity::Fatal, Level::ERROR)
            .with(Severity::Panic, Level::ERROR)
    }

    fn parse_level(&self, name: &str) -> Option<Level> {
        match name.to_ascii_lowercase().as_str() {
            "warning" => Some(Level::WARN),
            other => other.parse().ok(),
        }
    }

    fn emit(&self, level: Level, message: &str, fields: &Fields) {
        let entry = Entry::new(fields);
        // `tracing` needs the level as a constant at each call site
        if level == Level::TRACE {
            emit_event!(Level::TRACE, entry, message);
        } else if level == Level::DEBUG {
            emit_event!(Level::DEBUG, entry, message);
        } else if level == Level::INFO {
            emit_event!(Level::INFO, entry, message);
        } else if level == Level::WARN {
            emit_event!(Level::WARN, entry, message);
        } else {
            emit_event!(Level::ERROR, entry, message);
        }
    }

    fn emit_fatal(&self, message: &str, fields: &Fields) {
        let entry = Entry::new(fields);
        emit_event!(Level::ERROR, entry, message);
        (self.exit_hook)(FATAL_EXIT_CODE);
    }

    fn emit_panic(&self, message: &str, fields: &Fields) {
        let entry = Entry::new(fields);
        emit_event!(Level::ERROR, entry, message);
        panic!("{message}");
    }
}
