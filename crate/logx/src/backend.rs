use std::fmt::Debug;

use crate::{Fields, LevelMap};

/// The sink that performs the actual emission.
///
/// Implementations must be safe for concurrent use: the facade shares one
/// backend between every logger derived from the same adapter and does no
/// locking of its own.
pub trait Backend: Send + Sync {
    /// The backend's own severity scale.
    type Level: Copy + Debug + Send + Sync + 'static;

    /// Default mapping from facade severities onto [`Self::Level`]. Its
    /// fallback must be the backend's Info tier.
    fn level_map(&self) -> LevelMap<Self::Level>;

    /// Parses a backend level by name, for configuration overrides.
    fn parse_level(&self, name: &str) -> Option<Self::Level>;

    fn emit(&self, level: Self::Level, message: &str, fields: &Fields);

    /// Emits then halts the process.
    fn emit_fatal(&self, message: &str, fields: &Fields);

    /// Emits then unwinds the calling thread.
    fn emit_panic(&self, message: &str, fields: &Fields);
}
