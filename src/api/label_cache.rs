use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{Label, RangeSelector, Window};

/// Runtime metrics exposed by the in-engine axis-label cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct LabelCacheKey {
    pub(super) window: Window,
    pub(super) range: RangeSelector,
}

/// Bounded memo of label sequences keyed by `(window, range)`.
///
/// Labels depend on nothing else, so entries never go stale; the cache is
/// simply emptied when it reaches capacity.
#[derive(Debug)]
pub(super) struct AxisLabelCache {
    entries: HashMap<LabelCacheKey, Vec<Label>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl AxisLabelCache {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    pub(super) fn get_or_compute<F>(&mut self, key: LabelCacheKey, compute: F) -> Vec<Label>
    where
        F: FnOnce() -> Vec<Label>,
    {
        if let Some(value) = self.entries.get(&key) {
            self.hits = self.hits.saturating_add(1);
            return value.clone();
        }

        self.misses = self.misses.saturating_add(1);
        let value = compute();
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, value.clone());
        value
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn stats(&self) -> LabelCacheStats {
        LabelCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
