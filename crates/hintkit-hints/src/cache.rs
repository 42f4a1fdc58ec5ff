//! Memoizing cache in front of a [`FieldHintsLoader`].
//!
//! Non-empty load results are kept for the life of the cache. Empty results
//! are never stored, so a model whose hints file appears later is picked up on
//! the next lookup without a restart. Entries can also be dropped explicitly
//! with [`FieldHintsCache::invalidate`] or [`FieldHintsCache::clear`].
//!
//! The cache is owned by the caller and used from a single execution
//! context; lookups take `&mut self` and there is no internal locking.

use std::collections::HashMap;

use tracing::debug;

use hintkit_core::{FieldHints, FieldHintsLoader};

/// Cache statistics for monitoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from memory.
    pub hits: u64,
    /// Lookups that went to the loader.
    pub misses: u64,
    /// Misses where the loader returned nothing (not stored).
    pub empty_loads: u64,
}

/// Per-model field-hints cache.
#[derive(Debug)]
pub struct FieldHintsCache<L> {
    loader: L,
    entries: HashMap<String, FieldHints>,
    enabled: bool,
    stats: CacheStats,
    /// Holds the last result when the cache is disabled or the load was empty.
    scratch: FieldHints,
}

impl<L: FieldHintsLoader> FieldHintsCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            entries: HashMap::new(),
            enabled: true,
            stats: CacheStats::default(),
            scratch: FieldHints::new(),
        }
    }

    /// A cache that never stores anything; every lookup hits the loader.
    pub fn disabled(loader: L) -> Self {
        Self {
            enabled: false,
            ..Self::new(loader)
        }
    }

    /// Field hints for `model_name`, loading them on first use.
    pub fn get_field_hints(&mut self, model_name: &str) -> &FieldHints {
        if self.entries.contains_key(model_name) {
            self.stats.hits += 1;
            debug!(model = model_name, cache_hit = true, "Field hints lookup");
            return &self.entries[model_name];
        }

        self.stats.misses += 1;
        let loaded = self.loader.load_hints(model_name);
        debug!(
            model = model_name,
            cache_hit = false,
            field_count = loaded.len(),
            "Field hints lookup"
        );

        if loaded.is_empty() {
            self.stats.empty_loads += 1;
            self.scratch = loaded;
            return &self.scratch;
        }

        if !self.enabled {
            self.scratch = loaded;
            return &self.scratch;
        }

        self.entries.entry(model_name.to_string()).or_insert(loaded)
    }

    /// Whether hints for `model_name` are currently cached.
    pub fn contains(&self, model_name: &str) -> bool {
        self.entries.contains_key(model_name)
    }

    /// Drop the cached hints for one model. Returns whether an entry existed.
    pub fn invalidate(&mut self, model_name: &str) -> bool {
        let removed = self.entries.remove(model_name).is_some();
        if removed {
            debug!(model = model_name, "Field hints invalidated");
        }
        removed
    }

    /// Drop every cached entry. Statistics are kept.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "Field hints cache cleared");
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}
