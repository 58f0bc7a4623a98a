/*!
 * Lookup caching functionality.
 *
 * This module provides the two session-lifetime caches: one for translations
 * keyed by provider and text, one for dictionary entries keyed by the
 * lowercased word. Entries are unbounded and never evicted.
 *
 * Both caches are shared mutable state without cross-request coordination:
 * two concurrent lookups for the same key may both miss and both fetch, and
 * the last writer wins. That race is an accepted property of the design.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::app_config::TranslationProvider;
use crate::providers::DictionaryEntry;

/// Cache key combining provider identity, source text, and the language pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TranslationCacheKey {
    /// Provider that produced the translation
    provider: TranslationProvider,

    /// Source text to translate
    source_text: String,

    /// Source language tag
    source_language: String,

    /// Target language tag
    target_language: String,
}

impl TranslationCacheKey {
    /// Create a new cache key
    fn new(
        provider: TranslationProvider,
        source_text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Self {
        Self {
            provider,
            source_text: source_text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }
}

/// Translation cache for storing and retrieving translations per provider
pub struct TranslationCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<TranslationCacheKey, String>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl TranslationCache {
    /// Create a new translation cache
    pub fn new(enabled: bool) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Get a translation from the cache
    pub fn get(
        &self,
        provider: TranslationProvider,
        source_text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let key =
            TranslationCacheKey::new(provider, source_text, source_language, target_language);
        let cache = self.cache.read();

        match cache.get(&key) {
            Some(translation) => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!(
                    "Translation cache hit for '{}' via {}",
                    truncate_text(source_text, 30),
                    provider
                );

                Some(translation.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!(
                    "Translation cache miss for '{}' via {}",
                    truncate_text(source_text, 30),
                    provider
                );

                None
            }
        }
    }

    /// Store a translation in the cache
    pub fn store(
        &self,
        provider: TranslationProvider,
        source_text: &str,
        source_language: &str,
        target_language: &str,
        translation: &str,
    ) {
        if !self.enabled {
            return;
        }

        let key =
            TranslationCacheKey::new(provider, source_text, source_language, target_language);
        let mut cache = self.cache.write();

        cache.insert(key, translation.to_string());

        debug!(
            "Cached translation for '{}' via {}",
            truncate_text(source_text, 30),
            provider
        );
    }

    /// Get cache statistics
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Translation cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for TranslationCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}

/// Dictionary cache keyed by the lowercased word
///
/// Stores `Option<DictionaryEntry>`: a cached `None` records that the word was
/// looked up and has no usable phonetics, so it is not fetched again this
/// session. Failed lookups are never stored.
pub struct DictionaryCache {
    /// Internal cache storage
    cache: Arc<RwLock<HashMap<String, Option<DictionaryEntry>>>>,

    /// Cache hit counter
    hits: Arc<RwLock<usize>>,

    /// Cache miss counter
    misses: Arc<RwLock<usize>>,

    /// Whether caching is enabled
    enabled: bool,
}

impl DictionaryCache {
    /// Create a new dictionary cache
    pub fn new(enabled: bool) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
            enabled,
        }
    }

    /// Get a cached lookup outcome for a word
    ///
    /// The outer `Option` is cache presence; the inner value may itself be
    /// `None` for a word known to have no entry.
    pub fn get(&self, word: &str) -> Option<Option<DictionaryEntry>> {
        if !self.enabled {
            return None;
        }

        let key = word.to_lowercase();
        let cache = self.cache.read();

        match cache.get(&key) {
            Some(entry) => {
                let mut hits = self.hits.write();
                *hits += 1;

                debug!("Dictionary cache hit for '{}'", key);

                Some(entry.clone())
            }
            None => {
                let mut misses = self.misses.write();
                *misses += 1;

                debug!("Dictionary cache miss for '{}'", key);

                None
            }
        }
    }

    /// Store a lookup outcome, including the no-entry outcome
    pub fn store(&self, word: &str, entry: Option<DictionaryEntry>) {
        if !self.enabled {
            return;
        }

        let key = word.to_lowercase();
        let mut cache = self.cache.write();

        cache.insert(key, entry);
    }

    /// Get cache statistics
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Dictionary cache cleared");
    }

    /// Get the number of entries in the cache
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Check if the cache is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for DictionaryCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Clone for DictionaryCache {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
            hits: self.hits.clone(),
            misses: self.misses.clone(),
            enabled: self.enabled,
        }
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub(crate) fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    }
}
