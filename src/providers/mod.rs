/*!
 * Provider implementations for the external translation and dictionary services.
 *
 * This module contains client implementations for the HTTP APIs the lookup
 * service talks to:
 * - LibreTranslate: JSON POST translation API
 * - MyMemory: translation memory API with GET queries
 * - DictionaryApi: free dictionary API for IPA and pronunciation audio
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::TranslationProvider;
use crate::errors::ProviderError;

pub use self::dictionary::DictionaryEntry;

/// Common trait for translation providers
///
/// Implementations are object-safe so the lookup service can traverse an
/// ordered, heterogeneous fallback list.
#[async_trait]
pub trait TranslateProvider: Send + Sync + Debug {
    /// The identity of this provider, used for cache keys and result labels
    fn kind(&self) -> TranslationProvider;

    /// Translate text between the given language tags
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text; an `Ok` value
    ///   is guaranteed to be non-empty after trimming
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;
}

/// Common trait for dictionary providers
#[async_trait]
pub trait DefinitionProvider: Send + Sync + Debug {
    /// Look up phonetics for a single word
    ///
    /// # Returns
    /// * `Ok(Some(entry))` - the word has at least one of IPA or audio
    /// * `Ok(None)` - the lookup succeeded but the word has no usable phonetics
    /// * `Err(_)` - transport, HTTP, or parse failure
    async fn define(&self, word: &str) -> Result<Option<DictionaryEntry>, ProviderError>;
}

pub mod dictionary;
pub mod libretranslate;
pub mod mymemory;
