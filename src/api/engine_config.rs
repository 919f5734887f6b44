use serde::{Deserialize, Serialize};

use crate::core::RangeSelector;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ViewMode;

use super::event_store::DEFAULT_STORAGE_KEY;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load timeline setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEngineConfig {
    #[serde(default)]
    pub default_range: RangeSelector,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_label_cache_capacity")]
    pub label_cache_capacity: usize,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self {
            default_range: RangeSelector::default(),
            default_view: ViewMode::default(),
            storage_key: default_storage_key(),
            label_cache_capacity: default_label_cache_capacity(),
        }
    }
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn with_default_range(mut self, range: RangeSelector) -> Self {
        self.default_range = range;
        self
    }

    #[must_use]
    pub fn with_default_view(mut self, view: ViewMode) -> Self {
        self.default_view = view;
        self
    }

    /// Sets the key the event collection is persisted under.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_label_cache_capacity(mut self, capacity: usize) -> Self {
        self.label_cache_capacity = capacity;
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        let key = self.storage_key.as_str();
        if key.trim().is_empty() {
            return Err(TimelineError::InvalidData(
                "storage key must be non-empty".to_owned(),
            ));
        }
        if key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(TimelineError::InvalidData(format!(
                "storage key `{key}` must be a plain name"
            )));
        }
        if self.label_cache_capacity == 0 {
            return Err(TimelineError::InvalidData(
                "label cache capacity must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_owned()
}

fn default_label_cache_capacity() -> usize {
    256
}
