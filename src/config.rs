//! Runtime configuration

use crate::error::JsError;
use crate::heap::DEFAULT_GC_THRESHOLD;
use crate::prelude::*;

/// Settings for a [`crate::Runtime`]
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Allocations between collections (0 disables the trigger)
    pub gc_threshold: usize,
    /// Intern common property names up front
    pub preload_common_strings: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            gc_threshold: DEFAULT_GC_THRESHOLD,
            preload_common_strings: true,
        }
    }
}

impl RuntimeConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(source: &str) -> Result<Self, JsError> {
        serde_json::from_str(source).map_err(|e| JsError::syntax_error(format!("{}", e)))
    }

    /// Defaults, with `GC_THRESHOLD` from the environment if it parses
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(threshold) = std::env::var("GC_THRESHOLD")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            config.gc_threshold = threshold;
        }
        config
    }
}
