use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::DefinitionProvider;

/// Phonetics for a word: IPA transcription and pronunciation audio
///
/// Either field may be absent; a lookup producing neither is reported as no
/// entry at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// IPA transcription, e.g. `/ˈwɜːd/`
    pub ipa: Option<String>,

    /// URL of a pronunciation audio clip
    pub audio_url: Option<String>,
}

/// DictionaryApi client for the free dictionaryapi.dev-style word API
#[derive(Debug)]
pub struct DictionaryApi {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the service, the word is appended as a path segment
    endpoint: String,
}

/// A single dictionary entry in the response array
#[derive(Debug, Deserialize)]
struct WordEntry {
    /// Phonetic sub-entries
    #[serde(default)]
    phonetics: Vec<PhoneticEntry>,
}

/// A phonetic sub-entry, optionally carrying a transcription and/or audio URL
#[derive(Debug, Deserialize)]
struct PhoneticEntry {
    /// IPA transcription
    #[serde(default)]
    text: Option<String>,

    /// Pronunciation audio URL
    #[serde(default)]
    audio: Option<String>,
}

impl DictionaryApi {
    /// Create a new dictionary client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Parse a response body into a dictionary entry
    ///
    /// The first entry's phonetic list is scanned twice, independently: the
    /// first sub-entry with a non-empty transcription supplies `ipa`, the
    /// first with a non-empty audio URL supplies `audio_url`. The two may come
    /// from different sub-entries. `Ok(None)` means the body parsed but
    /// yielded neither.
    pub fn parse_entry(body: &str) -> Result<Option<DictionaryEntry>, ProviderError> {
        let entries: Vec<WordEntry> =
            serde_json::from_str(body).map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let Some(first) = entries.first() else {
            return Ok(None);
        };

        let ipa = first
            .phonetics
            .iter()
            .filter_map(|p| p.text.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(ToString::to_string);

        let audio_url = first
            .phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .map(str::trim)
            .find(|audio| !audio.is_empty())
            .map(ToString::to_string);

        if ipa.is_none() && audio_url.is_none() {
            Ok(None)
        } else {
            Ok(Some(DictionaryEntry { ipa, audio_url }))
        }
    }
}

#[async_trait]
impl DefinitionProvider for DictionaryApi {
    async fn define(&self, word: &str) -> Result<Option<DictionaryEntry>, ProviderError> {
        let url = format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            word.to_lowercase()
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Dictionary API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        Self::parse_entry(&body)
    }
}
