use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::app_config::TranslationProvider;
use crate::errors::ProviderError;
use crate::providers::TranslateProvider;

/// MyMemory client for interacting with the MyMemory translation memory API
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the service
    endpoint: String,
    /// Contact email sent as the `de` parameter, raises the free quota
    email: String,
}

/// Translation response from the MyMemory API
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponse {
    /// Primary translation result
    #[serde(rename = "responseData", default)]
    pub response_data: Option<MyMemoryResponseData>,

    /// Translation memory match candidates
    #[serde(default)]
    pub matches: Vec<MyMemoryMatch>,
}

/// Primary result payload
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponseData {
    /// Translated text
    #[serde(rename = "translatedText", default)]
    pub translated_text: Option<String>,
}

/// A single translation memory match candidate
#[derive(Debug, Deserialize)]
pub struct MyMemoryMatch {
    /// Candidate translation
    #[serde(default)]
    pub translation: Option<String>,
}

impl MyMemory {
    /// Create a new MyMemory client
    pub fn new(endpoint: impl Into<String>, email: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            email: email.into(),
        }
    }

    /// Extract the translated text from a response
    ///
    /// Prefers the primary `responseData` field; falls back to the first
    /// match candidate carrying a non-empty translation.
    pub fn extract_translation(response: &MyMemoryResponse) -> Option<String> {
        let primary = response
            .response_data
            .as_ref()
            .and_then(|data| data.translated_text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty());

        primary
            .or_else(|| {
                response
                    .matches
                    .iter()
                    .filter_map(|m| m.translation.as_deref())
                    .map(str::trim)
                    .find(|text| !text.is_empty())
            })
            .map(ToString::to_string)
    }
}

#[async_trait]
impl TranslateProvider for MyMemory {
    fn kind(&self) -> TranslationProvider {
        TranslationProvider::MyMemory
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/get", self.endpoint.trim_end_matches('/'));
        let langpair = format!("{}|{}", source, target);

        let mut query: Vec<(&str, &str)> = vec![("q", text), ("langpair", &langpair)];
        if !self.email.is_empty() {
            query.push(("de", &self.email));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("MyMemory API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .json::<MyMemoryResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body).ok_or(ProviderError::EmptyTranslation)
    }
}
