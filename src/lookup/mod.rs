/*!
 * Lookup service combining translation and dictionary results.
 *
 * This module contains the request orchestration core. It is split into
 * two submodules:
 *
 * - `core`: The lookup service, request/response types, and the ordered
 *   provider fallback traversal
 * - `cache`: Session-lifetime caches for translations and dictionary entries
 */

// Re-export main types for easier usage
pub use self::cache::{DictionaryCache, TranslationCache};
pub use self::core::{LookupRequest, LookupResponse, LookupService, TRANSLATION_FAILED_MESSAGE};

// Submodules
pub mod cache;
pub mod core;
