use std::{fmt, sync::Arc};

use tracing::debug;

use crate::{
    filter_fields_by_name, get_field_as_i64_or, merge_pairs, Adapter, Backend, Caller,
    FacadeConfig, FieldValue, Fields, Formatter, LevelMap, Logger, LoggerContext, LoggerError,
    Message, Method, Severity, FIELD_LOG_LEVEL,
};

/// Generic facade over a [`Backend`].
///
/// Cheap to clone: the backend is shared, the context is copied.
pub struct LogAdapter<B: Backend> {
    backend: Arc<B>,
    context: LoggerContext<B::Level>,
}

impl<B: Backend> Clone for LogAdapter<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            context: self.context.clone(),
        }
    }
}

impl<B: Backend> fmt::Debug for LogAdapter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogAdapter")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> LogAdapter<B> {
    /// New adapter with no fields, no formatter, the backend's level map and
    /// `Info` as the default severity.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::from_shared(Arc::new(backend))
    }

    #[must_use]
    pub fn from_shared(backend: Arc<B>) -> Self {
        let context = LoggerContext::new(backend.level_map());
        Self { backend, context }
    }

    #[must_use]
    pub fn with_level_map(&self, level_map: LevelMap<B::Level>) -> Self {
        let mut adapter = self.clone();
        adapter.context.level_map = level_map;
        adapter
    }

    #[must_use]
    pub fn with_default_severity(&self, severity: Severity) -> Self {
        let mut adapter = self.clone();
        adapter.context.default_severity = severity;
        adapter
    }

    /// Applies a [`FacadeConfig`] on top of this adapter's current level map.
    ///
    /// Severities without an override keep whatever level they map to now,
    /// including entries set earlier with [`Self::with_level_map`].
    ///
    /// # Errors
    /// Returns `LoggerError::Parsing` when an override names an unknown
    /// severity or a level the backend does not know.
    pub fn with_config(&self, config: &FacadeConfig) -> Result<Self, LoggerError> {
        let mut level_map = self.context.level_map.clone();
        for (severity, name) in &config.level_overrides {
            let severity = severity.parse::<Severity>()?;
            let level = self.backend.parse_level(name).ok_or_else(|| {
                LoggerError::Parsing(format!("unknown backend level {name:?} for {severity}"))
            })?;
            debug!("mapping severity {severity} onto backend level {level:?}");
            level_map.insert(severity, level);
        }
        Ok(self
            .with_level_map(level_map)
            .with_default_severity(config.default_severity))
    }

    #[must_use]
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            context: self.context.with_field(name, value),
        }
    }

    #[must_use]
    pub fn with_formatter(&self, formatter: impl Formatter + 'static) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            context: self.context.with_formatter(Arc::new(formatter)),
        }
    }

    #[must_use]
    pub fn context(&self) -> &LoggerContext<B::Level> {
        &self.context
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn dispatch(&self, caller: &Caller, method: Method, message: Message<'_>) {
        let mut fields = self.context.fields.clone();
        caller.annotate(&mut fields);
        if let Some(severity) = method.tagged_severity() {
            fields.insert(FIELD_LOG_LEVEL.to_owned(), severity.as_i64().into());
        }

        let message = match message {
            Message::Args(args) => merge_pairs(args, &mut fields),
            Message::Formatted(args) => fmt::format(args),
        };

        // Resolved before formatting: a formatter cannot change the level.
        let level = self.resolve_level(&fields);

        let (message, fields) = self.format(message, fields);
        let fields = filter_fields_by_name(&fields, &[FIELD_LOG_LEVEL]);
        match method {
            Method::Fatal => self.backend.emit_fatal(&message, &fields),
            Method::Panic => self.backend.emit_panic(&message, &fields),
            _ => self.backend.emit(level, &message, &fields),
        }
    }

    fn format(&self, message: String, fields: Fields) -> (String, Fields) {
        match &self.context.formatter {
            Some(formatter) => formatter.format(message, fields),
            None => (message, fields),
        }
    }

    fn resolve_level(&self, fields: &Fields) -> B::Level {
        let code = get_field_as_i64_or(
            FIELD_LOG_LEVEL,
            fields,
            self.context.default_severity.as_i64(),
        );
        self.context.level_map.resolve_code(code)
    }
}

impl<B: Backend + 'static> Logger for LogAdapter<B> {
    fn log_at(&self, caller: Caller, method: Method, message: Message<'_>) {
        self.dispatch(&caller, method, message);
    }

    fn with_field(&self, name: &str, value: FieldValue) -> Box<dyn Logger> {
        Box::new(Self::with_field(self, name, value))
    }
}

impl<B: Backend + 'static> Adapter for LogAdapter<B> {
    fn with_formatter(&self, formatter: Arc<dyn Formatter>) -> Box<dyn Adapter> {
        Box::new(Self {
            backend: Arc::clone(&self.backend),
            context: self.context.with_formatter(formatter),
        })
    }
}
