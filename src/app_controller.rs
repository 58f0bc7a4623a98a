/*!
 * Application controller.
 *
 * Wires the resolved settings to the lookup service and exposes the two
 * entry points: the typed message interface used by UI layers, and a direct
 * lookup call for the CLI.
 */

use log::debug;
use serde::{Deserialize, Serialize};

use crate::app_config::Settings;
use crate::language_utils;
use crate::lookup::{LookupRequest, LookupResponse, LookupService};

/// Inbound message from the UI layer
///
/// Wire format: `{"type": "TRANSLATE_AND_DEFINE", "text": "...", "isWord": bool}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// Request a combined translation and dictionary lookup
    #[serde(rename = "TRANSLATE_AND_DEFINE")]
    TranslateAndDefine {
        /// Selected text
        text: String,

        /// Whether the selection is a single word
        #[serde(rename = "isWord")]
        is_word: bool,
    },
}

/// Main application controller
///
/// Holds the settings snapshot and the lookup service. Callers that want
/// live settings updates re-resolve and build a new controller; cloned cache
/// handles can carry the session cache across if desired.
pub struct Controller {
    /// Settings snapshot, supplies the provider preference per request
    settings: Settings,

    /// Lookup service
    service: LookupService,
}

impl Controller {
    /// Create a controller wired to the real HTTP clients
    pub fn new(settings: Settings) -> Self {
        let service = LookupService::new(&settings);
        Self { settings, service }
    }

    /// Create a controller around an existing service
    pub fn with_service(settings: Settings, service: LookupService) -> Self {
        Self { settings, service }
    }

    /// The settings snapshot this controller was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Handle to the lookup service
    pub fn service(&self) -> &LookupService {
        &self.service
    }

    /// Handle one inbound message
    ///
    /// The message interface always answers with a response envelope; invalid
    /// input (empty text) becomes a failure response, not an error.
    pub async fn handle_message(&self, message: InboundMessage) -> LookupResponse {
        match message {
            InboundMessage::TranslateAndDefine { text, is_word } => {
                match LookupRequest::new(text, is_word) {
                    Ok(request) => {
                        self.service
                            .translate_and_define(&request, self.settings.provider_preference)
                            .await
                    }
                    Err(e) => LookupResponse::failure(e.to_string()),
                }
            }
        }
    }

    /// Look up text directly, for the CLI
    ///
    /// When `is_word` is not given, single-word shape is detected from the
    /// text itself.
    pub async fn lookup(
        &self,
        text: &str,
        is_word: Option<bool>,
    ) -> Result<LookupResponse, crate::errors::LookupError> {
        let is_word = is_word.unwrap_or_else(|| language_utils::is_single_word(text));
        if !language_utils::is_english_text(text) {
            debug!("Selection does not look like English text: '{}'", text);
        }

        let request = LookupRequest::new(text, is_word)?;
        Ok(self
            .service
            .translate_and_define(&request, self.settings.provider_preference)
            .await)
    }
}
