/*!
 * Core lookup service implementation.
 *
 * This module contains the LookupService struct and its implementation,
 * which sequences translation providers with ordered fallback and merges in
 * the dictionary result for single words.
 */

use std::sync::Arc;

use log::{error, warn};
use serde::{Deserialize, Serialize};

use super::cache::{truncate_text, DictionaryCache, TranslationCache};
use crate::app_config::{ProviderPreference, Settings, TranslationProvider};
use crate::errors::{LookupError, ProviderError};
use crate::providers::dictionary::DictionaryApi;
use crate::providers::libretranslate::LibreTranslate;
use crate::providers::mymemory::MyMemory;
use crate::providers::{DefinitionProvider, DictionaryEntry, TranslateProvider};

/// Fixed user-facing message returned when every translation provider failed
pub const TRANSLATION_FAILED_MESSAGE: &str =
    "Translation is unavailable right now. Please try again later.";

/// A validated lookup request
///
/// Construction trims the text and rejects empty input, so a request that
/// exists is always safe to send to the providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Trimmed, non-empty text to look up
    text: String,

    /// Whether the text is a single word eligible for a dictionary lookup
    is_word: bool,
}

impl LookupRequest {
    /// Create a new lookup request
    ///
    /// # Returns
    /// * `Err(LookupError::EmptyText)` - when the trimmed text is empty;
    ///   rejected here, before any network call can happen
    pub fn new(text: impl Into<String>, is_word: bool) -> Result<Self, LookupError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(LookupError::EmptyText);
        }
        Ok(Self { text, is_word })
    }

    /// The text to look up
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a dictionary lookup should be attempted
    pub fn is_word(&self) -> bool {
        self.is_word
    }
}

/// Combined result of the translation and dictionary phases
///
/// Serializes with the wire field names the UI layer expects:
/// `{success, translation, providerName, dict, errorMessage}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// True iff the translation phase produced a result
    pub success: bool,

    /// Translated text, when the translation phase succeeded
    pub translation: Option<String>,

    /// Name of the provider that produced the translation
    pub provider_name: Option<String>,

    /// Dictionary entry for single words; its absence never affects `success`
    pub dict: Option<DictionaryEntry>,

    /// User-facing message, set only on failure
    pub error_message: Option<String>,
}

impl LookupResponse {
    /// Build a failure response carrying the given user-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            translation: None,
            provider_name: None,
            dict: None,
            error_message: Some(message.into()),
        }
    }
}

/// Main lookup service sequencing provider calls and merging results
///
/// All collaborators are injected: the provider set, the dictionary client,
/// and both caches. Cloned cache handles share storage, so a service built
/// from existing caches participates in the same session state.
pub struct LookupService {
    /// Translation providers, addressed by kind from the ordered fallback list
    providers: Vec<Arc<dyn TranslateProvider>>,

    /// Dictionary provider
    dictionary: Arc<dyn DefinitionProvider>,

    /// Cache of provider translations
    translation_cache: TranslationCache,

    /// Cache of dictionary lookups, including negative outcomes
    dictionary_cache: DictionaryCache,

    /// Source language tag for every request
    source_language: String,

    /// Target language tag for every request
    target_language: String,
}

impl LookupService {
    /// Create a lookup service wired to the real HTTP clients
    pub fn new(settings: &Settings) -> Self {
        let libretranslate = LibreTranslate::new(
            &settings.providers.libretranslate.endpoint,
            &settings.providers.libretranslate.api_key,
            settings.providers.libretranslate.timeout_secs,
        );
        let mymemory = MyMemory::new(
            &settings.providers.mymemory.endpoint,
            &settings.providers.mymemory.email,
            settings.providers.mymemory.timeout_secs,
        );
        let dictionary = DictionaryApi::new(
            &settings.providers.dictionary.endpoint,
            settings.providers.dictionary.timeout_secs,
        );

        Self::with_components(
            vec![Arc::new(libretranslate), Arc::new(mymemory)],
            Arc::new(dictionary),
            TranslationCache::new(true),
            DictionaryCache::new(true),
            &settings.source_language,
            &settings.target_language,
        )
    }

    /// Create a lookup service from explicit components
    pub fn with_components(
        providers: Vec<Arc<dyn TranslateProvider>>,
        dictionary: Arc<dyn DefinitionProvider>,
        translation_cache: TranslationCache,
        dictionary_cache: DictionaryCache,
        source_language: &str,
        target_language: &str,
    ) -> Self {
        Self {
            providers,
            dictionary,
            translation_cache,
            dictionary_cache,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        }
    }

    /// Translate the request text and, for single words, attach phonetics
    ///
    /// The call chain is strictly sequential: providers in preference order,
    /// one at a time, each at most once, then the dictionary. Provider
    /// failures are logged and recovered by falling through to the next
    /// provider; only exhaustion of the whole list surfaces as a failure
    /// response. Dictionary failures never do.
    pub async fn translate_and_define(
        &self,
        request: &LookupRequest,
        preference: ProviderPreference,
    ) -> LookupResponse {
        let mut translated: Option<(String, TranslationProvider)> = None;
        let mut last_error: Option<ProviderError> = None;

        for kind in preference.provider_order() {
            if let Some(cached) = self.translation_cache.get(
                kind,
                request.text(),
                &self.source_language,
                &self.target_language,
            ) {
                translated = Some((cached, kind));
                break;
            }

            let Some(provider) = self.provider_for(kind) else {
                warn!("No client registered for provider {}", kind);
                continue;
            };

            match provider
                .translate(request.text(), &self.source_language, &self.target_language)
                .await
            {
                Ok(text) => {
                    self.translation_cache.store(
                        kind,
                        request.text(),
                        &self.source_language,
                        &self.target_language,
                        &text,
                    );
                    translated = Some((text, kind));
                    break;
                }
                Err(e) => {
                    warn!(
                        "{} failed for '{}': {}",
                        kind.display_name(),
                        truncate_text(request.text(), 30),
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        let dict = if request.is_word() {
            self.define_word(request.text()).await
        } else {
            None
        };

        match translated {
            Some((translation, kind)) => LookupResponse {
                success: true,
                translation: Some(translation),
                provider_name: Some(kind.display_name().to_string()),
                dict,
                error_message: None,
            },
            None => {
                if let Some(e) = &last_error {
                    error!(
                        "All translation providers failed for '{}': {}",
                        truncate_text(request.text(), 30),
                        e
                    );
                }
                LookupResponse {
                    success: false,
                    translation: None,
                    provider_name: None,
                    dict,
                    error_message: Some(TRANSLATION_FAILED_MESSAGE.to_string()),
                }
            }
        }
    }

    /// Look up phonetics for a word, consulting the cache first
    ///
    /// A successful fetch is cached even when it yields no entry, so
    /// known-absent words are not re-fetched this session. A failed fetch is
    /// not cached and will be retried on the next request.
    async fn define_word(&self, word: &str) -> Option<DictionaryEntry> {
        let word = word.to_lowercase();

        if let Some(cached) = self.dictionary_cache.get(&word) {
            return cached;
        }

        match self.dictionary.define(&word).await {
            Ok(entry) => {
                self.dictionary_cache.store(&word, entry.clone());
                entry
            }
            Err(e) => {
                warn!("Dictionary lookup failed for '{}': {}", word, e);
                None
            }
        }
    }

    /// Find the registered client for a provider kind
    fn provider_for(&self, kind: TranslationProvider) -> Option<&Arc<dyn TranslateProvider>> {
        self.providers.iter().find(|p| p.kind() == kind)
    }

    /// Handle to the translation cache
    pub fn translation_cache(&self) -> &TranslationCache {
        &self.translation_cache
    }

    /// Handle to the dictionary cache
    pub fn dictionary_cache(&self) -> &DictionaryCache {
        &self.dictionary_cache
    }
}
