use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::app_config::TranslationProvider;
use crate::errors::ProviderError;
use crate::language_utils::primary_subtag;
use crate::providers::TranslateProvider;

/// Field names a LibreTranslate-compatible instance may use for the result
const TRANSLATION_ALIASES: [&str; 3] = ["translatedText", "translated_text", "translation"];

/// LibreTranslate client for interacting with a LibreTranslate-compatible API
#[derive(Debug)]
pub struct LibreTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the service
    endpoint: String,
    /// API key, required by some public instances
    api_key: String,
}

/// Translation request body
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Response format
    format: &'a str,
    /// API key, omitted when not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

impl LibreTranslate {
    /// Create a new LibreTranslate client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Extract the translated text from a response body
    ///
    /// Instances differ in the field name they use, so every known alias is
    /// probed in order. Returns `None` when no alias holds a non-empty string.
    pub fn extract_translation(value: &Value) -> Option<String> {
        TRANSLATION_ALIASES
            .iter()
            .filter_map(|alias| value.get(alias).and_then(Value::as_str))
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(ToString::to_string)
    }
}

#[async_trait]
impl TranslateProvider for LibreTranslate {
    fn kind(&self) -> TranslationProvider {
        TranslationProvider::LibreTranslate
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/translate", self.endpoint.trim_end_matches('/'));

        // LibreTranslate rejects regional tags, so zh-CN is sent as zh
        let request = TranslateRequest {
            q: text,
            source: primary_subtag(source),
            target: primary_subtag(target),
            format: "text",
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(&self.api_key)
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("LibreTranslate API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body).ok_or(ProviderError::EmptyTranslation)
    }
}
