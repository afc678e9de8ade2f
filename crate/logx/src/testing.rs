//! In-memory backend for asserting on what a logger emits.

use std::sync::{Arc, Mutex};

use crate::{Backend, Fields, LevelMap, Severity};

/// How an entry reached the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    Emit(Severity),
    Fatal,
    Panic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub emission: Emission,
    pub message: String,
    pub fields: Fields,
}

/// Records every entry instead of emitting it.
///
/// Uses the facade severities as its own level scale, with `Notice` folded
/// onto `Info` like most real backends. Fatal and panic entries are recorded
/// without halting or unwinding. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    entries: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far
    #[must_use]
    pub fn entries(&self) -> Vec<Recorded> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Last entry recorded, if any
    #[must_use]
    pub fn last(&self) -> Option<Recorded> {
        self.entries().pop()
    }

    pub fn clear(&self) {
        self.entries.lock().map(|mut e| e.clear()).ok();
    }

    fn record(&self, emission: Emission, message: &str, fields: &Fields) {
        self.entries
            .lock()
            .map(|mut entries| {
                entries.push(Recorded {
                    emission,
                    message: message.to_owned(),
                    fields: fields.clone(),
                });
            })
            .ok();
    }
}

impl Backend for RecordingBackend {
    type Level = Severity;

    fn level_map(&self) -> LevelMap<Severity> {
        LevelMap::new(Severity::Info)
            .with(Severity::Debug, Severity::Debug)
            .with(Severity::Info, Severity::Info)
            .with(Severity::Notice, Severity::Info)
            .with(Severity::Warning, Severity::Warning)
            .with(Severity::Error, Severity::Error)
    }

    fn parse_level(&self, name: &str) -> Option<Severity> {
        name.parse().ok()
    }

    fn emit(&self, level: Severity, message: &str, fields: &Fields) {
        self.record(Emission::Emit(level), message, fields);
    }

    fn emit_fatal(&self, message: &str, fields: &Fields) {
        self.record(Emission::Fatal, message, fields);
    }

    fn emit_panic(&self, message: &str, fields: &Fields) {
        self.record(Emission::Panic, message, fields);
    }
}
