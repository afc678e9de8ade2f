use std::{fmt, sync::Arc};

use crate::{FieldValue, Fields, Formatter, LevelMap, Severity};

/// State carried by one logger instance.
///
/// Contexts are never modified once a logger holds them: every derivation
/// clones the context, field map included, and overrides one attribute.
#[derive(Clone)]
pub struct LoggerContext<L> {
    pub fields: Fields,
    pub formatter: Option<Arc<dyn Formatter>>,
    pub level_map: LevelMap<L>,
    /// Used when a call carries no `LogLevel` field.
    pub default_severity: Severity,
}

impl<L: Copy> LoggerContext<L> {
    #[must_use]
    pub fn new(level_map: LevelMap<L>) -> Self {
        Self {
            fields: Fields::new(),
            formatter: None,
            level_map,
            default_severity: Severity::Info,
        }
    }

    #[must_use]
    pub fn with_field(&self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let mut context = self.clone();
        context.fields.insert(name.into(), value.into());
        context
    }

    #[must_use]
    pub fn with_formatter(&self, formatter: Arc<dyn Formatter>) -> Self {
        Self {
            formatter: Some(formatter),
            ..self.clone()
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for LoggerContext<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerContext")
            .field("fields", &self.fields)
            .field("formatter", &self.formatter.is_some())
            .field("level_map", &self.level_map)
            .field("default_severity", &self.default_severity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_with_field_leaves_parent_untouched() {
        let parent = LoggerContext::new(LevelMap::new(0_u8)).with_field("a", 1);
        let child = parent.with_field("b", 2);
        let sibling = parent.with_field("a", "overridden");

        assert_eq!(parent.fields.len(), 1);
        assert_eq!(parent.fields.get("a"), Some(&json!(1)));
        assert_eq!(child.fields.len(), 2);
        assert_eq!(sibling.fields.get("a"), Some(&json!("overridden")));
        assert_eq!(child.fields.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_with_formatter_keeps_fields() {
        let parent = LoggerContext::new(LevelMap::new(0_u8)).with_field("env", "prod");
        let child = parent.with_formatter(Arc::new(crate::LogfmtFormatter));
        assert!(parent.formatter.is_none());
        assert!(child.formatter.is_some());
        assert_eq!(child.fields, parent.fields);
        assert_eq!(child.default_severity, Severity::Info);
    }
}
