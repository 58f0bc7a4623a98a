/*!
 * # wordglance
 *
 * A Rust library and CLI for inline translation and dictionary lookup of
 * selected English text.
 *
 * ## Features
 *
 * - Translate text through LibreTranslate-compatible and MyMemory APIs with
 *   ordered provider fallback
 * - Fetch IPA transcription and pronunciation audio for single words
 * - Session-lifetime caching of translations and dictionary entries,
 *   including negative dictionary outcomes
 * - Settings resolution with safe defaults that never fails
 * - Typed message interface for UI layers
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Settings resolution and provider preference
 * - `lookup`: The request orchestration core:
 *   - `lookup::core`: Lookup service and ordered provider fallback
 *   - `lookup::cache`: Session caches for translations and dictionary entries
 * - `providers`: Client implementations for the external HTTP APIs:
 *   - `providers::libretranslate`: LibreTranslate-compatible JSON API client
 *   - `providers::mymemory`: MyMemory translation memory API client
 *   - `providers::dictionary`: Dictionary API client for word phonetics
 * - `app_controller`: Message handling and application wiring
 * - `language_utils`: English-text and single-word heuristics, language tags
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod lookup;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::{ProviderPreference, Settings, TranslationProvider};
pub use app_controller::{Controller, InboundMessage};
pub use errors::{AppError, LookupError, ProviderError};
pub use lookup::{LookupRequest, LookupResponse, LookupService};
pub use providers::DictionaryEntry;
