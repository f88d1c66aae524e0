// SPDX-License-Identifier: MPL-2.0
//! URL-keyed media cache.
//!
//! The feed screens fetch the same thumbnails and descriptions repeatedly
//! while scrolling; this cache keeps every fetched entry for the life of
//! the session. Deliberately unbounded and eviction-free: the working set
//! is one feed page of small assets.

use std::collections::HashMap;

/// Unbounded cache keyed by URL string.
#[derive(Debug, Clone, Default)]
pub struct UrlCache<T> {
    entries: HashMap<String, T>,
}

impl<T> UrlCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value for `url`, if present.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&T> {
        self.entries.get(url)
    }

    /// Stores `value` under `url`, replacing any previous entry.
    pub fn insert(&mut self, url: impl Into<String>, value: T) {
        self.entries.insert(url.into(), value);
    }

    /// Returns the cached value, inserting the result of `load` on a miss.
    pub fn get_or_insert_with(&mut self, url: &str, load: impl FnOnce() -> T) -> &T {
        self.entries.entry(url.to_string()).or_insert_with(load)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The two caches the client keeps: encoded images and description text.
#[derive(Debug, Clone, Default)]
pub struct MediaCache {
    pub images: UrlCache<Vec<u8>>,
    pub descriptions: UrlCache<String>,
}

impl MediaCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
