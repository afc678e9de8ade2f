use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{LoggerError, Severity};

/// Facade settings loadable from TOML.
///
/// ```toml
/// default_severity = "notice"
///
/// [level_overrides]
/// notice = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Severity of calls that carry no `LogLevel` field (`print`/`printf`).
    /// Names are case-insensitive.
    pub default_severity: Severity,

    /// Backend level names replacing entries of the adapter's level map,
    /// keyed by severity name (case-insensitive). Level names are parsed by
    /// the backend.
    pub level_overrides: BTreeMap<String, String>,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            default_severity: Severity::Info,
            level_overrides: BTreeMap::new(),
        }
    }
}

impl FacadeConfig {
    /// # Errors
    /// Returns `LoggerError::Config` when the TOML is invalid.
    pub fn from_toml_str(content: &str) -> Result<Self, LoggerError> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Returns an error when the file cannot be read or is invalid.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, LoggerError> {
        let path = path.as_ref();
        trace!("Loading facade configuration from {path:?}");
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::IOError(format!("Failed to read configuration file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let config = FacadeConfig::from_toml_str(
            r#"
            default_severity = "notice"

            [level_overrides]
            notice = "warn"
            debug = "trace"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_severity, Severity::Notice);
        assert_eq!(config.level_overrides.get("notice").unwrap(), "warn");
        assert_eq!(config.level_overrides.len(), 2);
    }

    #[test]
    fn test_severity_names_ignore_case() {
        let config = FacadeConfig::from_toml_str(
            r#"
            default_severity = "WARNING"

            [level_overrides]
            Notice = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_severity, Severity::Warning);
        assert_eq!(config.level_overrides.get("Notice").unwrap(), "warn");
    }

    #[test]
    fn test_defaults() {
        let config = FacadeConfig::from_toml_str("").unwrap();
        assert_eq!(config, FacadeConfig::default());
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            FacadeConfig::from_toml_str(r#"default_severity = "loud""#),
            Err(LoggerError::Config(_))
        ));
        assert!(matches!(
            FacadeConfig::from_toml("does/not/exist.toml"),
            Err(LoggerError::IOError(_))
        ));
    }
}
