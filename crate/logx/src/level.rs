use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::LoggerError;

/// Urgency of a log call, from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    /// Normal but significant. Most backends have no such tier and map it onto Info.
    Notice,
    Warning,
    Error,
    /// Dispatched directly; the backend halts the process.
    Fatal,
    /// Dispatched directly; the backend unwinds.
    Panic,
}

impl Severity {
    pub const ALL: [Self; 7] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Fatal,
        Self::Panic,
    ];

    /// Integer code stored in the `LogLevel` field.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self as i64
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }
}

impl TryFrom<i64> for Severity {
    type Error = LoggerError;

    fn try_from(code: i64) -> Result<Self, LoggerError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| LoggerError::Parsing(format!("unknown severity code: {code}")))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LoggerError::Parsing(format!("unknown severity: {s}")))
    }
}

/// Case-insensitive, like [`FromStr`].
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Mapping from facade severities onto a backend's own level scale.
///
/// Lookups never fail: anything unmapped resolves to `fallback`, which should
/// be the backend's Info tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMap<L> {
    entries: HashMap<Severity, L>,
    fallback: L,
}

impl<L: Copy> LevelMap<L> {
    #[must_use]
    pub fn new(fallback: L) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with(mut self, severity: Severity, level: L) -> Self {
        self.entries.insert(severity, level);
        self
    }

    pub fn insert(&mut self, severity: Severity, level: L) -> Option<L> {
        self.entries.insert(severity, level)
    }

    #[must_use]
    pub fn get(&self, severity: Severity) -> Option<L> {
        self.entries.get(&severity).copied()
    }

    #[must_use]
    pub fn fallback(&self) -> L {
        self.fallback
    }

    /// Backend level for `severity`, or the fallback when it is unknown or
    /// unmapped.
    #[must_use]
    pub fn resolve(&self, severity: Option<Severity>) -> L {
        severity
            .and_then(|severity| self.get(severity))
            .unwrap_or(self.fallback)
    }

    /// Resolves a raw `LogLevel` code as found in a field set.
    #[must_use]
    pub fn resolve_code(&self, code: i64) -> L {
        self.resolve(Severity::try_from(code).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Tier {
        Low,
        Mid,
        High,
    }

    fn map() -> LevelMap<Tier> {
        LevelMap::new(Tier::Mid)
            .with(Severity::Debug, Tier::Low)
            .with(Severity::Error, Tier::High)
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Notice);
        assert!(Severity::Notice < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
        assert!(Severity::Fatal < Severity::Panic);
    }

    #[test]
    fn test_severity_codes() {
        for severity in Severity::ALL {
            assert_eq!(Severity::try_from(severity.as_i64()).unwrap(), severity);
        }
        assert!(Severity::try_from(-1).is_err());
        assert!(Severity::try_from(42).is_err());
    }

    #[test]
    fn test_severity_names() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(Severity::Notice.to_string(), "notice");
        assert!("verbose".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_deserialize_ignores_case() {
        let severities: Vec<Severity> =
            serde_json::from_str(r#"["WARNING", "Notice", "debug"]"#).unwrap();
        assert_eq!(
            severities,
            vec![Severity::Warning, Severity::Notice, Severity::Debug]
        );
        assert!(serde_json::from_str::<Severity>(r#""loud""#).is_err());
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), r#""warning""#);
    }

    #[test]
    fn test_resolve_mapped_and_unmapped() {
        let map = map();
        assert_eq!(map.resolve(Some(Severity::Debug)), Tier::Low);
        assert_eq!(map.resolve(Some(Severity::Error)), Tier::High);
        assert_eq!(map.resolve(Some(Severity::Warning)), Tier::Mid);
        assert_eq!(map.resolve(None), Tier::Mid);
        assert_eq!(map.fallback(), Tier::Mid);
    }

    #[test]
    fn test_resolve_unknown_code_falls_back() {
        let map = map();
        assert_eq!(map.resolve_code(Severity::Debug.as_i64()), Tier::Low);
        assert_eq!(map.resolve_code(99), Tier::Mid);
        assert_eq!(map.resolve_code(-5), Tier::Mid);
    }
}
