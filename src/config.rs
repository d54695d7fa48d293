//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum depth of at-rules parsed recursively inside `@media`.
    /// `None` means unbounded.
    pub max_nesting_depth: Option<usize>,
    /// Pretty-print the JSON interchange output.
    pub pretty_json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: None,
            pretty_json: true,
        }
    }
}

impl EngineConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap recursive at-rule parsing (builder).
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = Some(depth);
        self
    }

    /// Choose pretty or compact JSON output (builder).
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Whether a nested parse at `depth` is allowed.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_nesting_depth.is_none_or(|max| depth <= max)
    }
}
