//! Width Cache
//!
//! Memoizes measured widths so re-solving the same dialogue on every
//! keystroke does not reshape identical candidate lines.

use std::collections::HashMap;
use crate::font::{FontSpec, FontStyle, FontWeight};

/// Width cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidthKey {
    /// Family list as given in the font description
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Font size (scaled to avoid float hashing)
    pub size_scaled: u32,
    /// Measured text
    pub text: String,
}

impl WidthKey {
    /// Create a new width key
    pub fn new(font: &FontSpec, text: &str) -> Self {
        Self {
            family: font.family.clone(),
            weight: font.weight,
            style: font.style,
            size_scaled: (font.size * 100.0).round() as u32,
            text: text.to_string(),
        }
    }
}

/// Width cache with LRU eviction
pub struct WidthCache {
    /// Cached widths
    cache: HashMap<WidthKey, f32>,
    /// Maximum entries
    max_entries: usize,
    /// Usage order for LRU (key -> last_used)
    usage: HashMap<WidthKey, u64>,
    /// Counter for usage tracking
    counter: u64,
    hits: u64,
    misses: u64,
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(4096)
    }
}

impl WidthCache {
    /// Create a new width cache
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_entries.min(4096)),
            max_entries: max_entries.max(1),
            usage: HashMap::with_capacity(max_entries.min(4096)),
            counter: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Get a cached width
    pub fn get(&mut self, key: &WidthKey) -> Option<f32> {
        match self.cache.get(key) {
            Some(&width) => {
                self.counter += 1;
                self.usage.insert(key.clone(), self.counter);
                self.hits += 1;
                Some(width)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a measured width
    pub fn insert(&mut self, key: WidthKey, width: f32) {
        if !self.cache.contains_key(&key) && self.cache.len() >= self.max_entries {
            self.evict_lru();
        }

        self.counter += 1;
        self.usage.insert(key.clone(), self.counter);
        self.cache.insert(key, width);
    }

    /// Evict least recently used entry
    fn evict_lru(&mut self) {
        if let Some(oldest_key) = self.usage.iter()
            .min_by_key(|&(_, usage)| usage)
            .map(|(k, _)| k.clone())
        {
            self.cache.remove(&oldest_key);
            self.usage.remove(&oldest_key);
        }
    }

    /// Number of cached widths
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> WidthCacheStats {
        WidthCacheStats {
            size: self.cache.len(),
            max_size: self.max_entries,
            hits: self.hits,
            misses: self.misses,
            hit_rate: if self.hits + self.misses > 0 {
                self.hits as f64 / (self.hits + self.misses) as f64
            } else {
                0.0
            },
        }
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
        self.usage.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct WidthCacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}
