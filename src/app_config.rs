use anyhow::{anyhow, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::{Path, PathBuf};

/// Application settings module
/// This module handles the persisted user settings including loading
/// with safe defaults and validating the resulting snapshot.
/// Represents the user settings consumed by the lookup service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Preferred translation provider, or auto for ordered fallback
    #[serde(default)]
    pub provider_preference: ProviderPreference,

    /// Source language tag (ISO 639 primary subtag, optional region)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language tag (ISO 639 primary subtag, optional region)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Per-provider endpoint configuration
    #[serde(default)]
    pub providers: ProviderSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider identity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: LibreTranslate-compatible JSON API
    #[default]
    LibreTranslate,
    // @provider: MyMemory translation memory API
    MyMemory,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::LibreTranslate => "LibreTranslate",
            Self::MyMemory => "MyMemory",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::LibreTranslate => "libretranslate".to_string(),
            Self::MyMemory => "mymemory".to_string(),
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl std::str::FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "libretranslate" => Ok(Self::LibreTranslate),
            "mymemory" => Ok(Self::MyMemory),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Provider preference persisted in the settings store
///
/// Unknown values deserialize to `Auto`, so a settings file written by a
/// newer or older version never makes resolution fail.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ProviderPreference {
    /// Ordered fallback across all providers
    #[default]
    Auto,
    /// LibreTranslate only, no fallback
    LibreTranslate,
    /// MyMemory only, no fallback
    MyMemory,
}

impl From<String> for ProviderPreference {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "libretranslate" => Self::LibreTranslate,
            "mymemory" => Self::MyMemory,
            // Unknown preferences behave exactly like auto
            _ => Self::Auto,
        }
    }
}

impl ProviderPreference {
    /// Derive the ordered provider list for this preference
    ///
    /// The first entry is the primary provider; any further entries are
    /// fallbacks, each tried at most once per request.
    pub fn provider_order(&self) -> Vec<TranslationProvider> {
        match self {
            Self::Auto => vec![
                TranslationProvider::LibreTranslate,
                TranslationProvider::MyMemory,
            ],
            Self::LibreTranslate => vec![TranslationProvider::LibreTranslate],
            Self::MyMemory => vec![TranslationProvider::MyMemory],
        }
    }

    // @returns: Lowercase preference identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::LibreTranslate => "libretranslate".to_string(),
            Self::MyMemory => "mymemory".to_string(),
        }
    }
}

impl std::fmt::Display for ProviderPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

impl std::str::FromStr for ProviderPreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        // Anything unknown folds to auto, matching deserialization
        Ok(Self::from(s.to_string()))
    }
}

/// Endpoint configuration for all external providers
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ProviderSettings {
    /// LibreTranslate service configuration
    #[serde(default)]
    pub libretranslate: LibreTranslateSettings,

    /// MyMemory service configuration
    #[serde(default)]
    pub mymemory: MyMemorySettings,

    /// Dictionary service configuration
    #[serde(default)]
    pub dictionary: DictionarySettings,
}

/// LibreTranslate service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LibreTranslateSettings {
    /// Service endpoint URL
    #[serde(default = "default_libretranslate_endpoint")]
    pub endpoint: String,

    /// API key, required by some public instances
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LibreTranslateSettings {
    fn default() -> Self {
        Self {
            endpoint: default_libretranslate_endpoint(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// MyMemory service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MyMemorySettings {
    /// Service endpoint URL
    #[serde(default = "default_mymemory_endpoint")]
    pub endpoint: String,

    /// Contact email sent as the `de` parameter, raises the free quota
    #[serde(default = "String::new")]
    pub email: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MyMemorySettings {
    fn default() -> Self {
        Self {
            endpoint: default_mymemory_endpoint(),
            email: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Dictionary service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DictionarySettings {
    /// Service endpoint URL, the lowercased word is appended as a path segment
    #[serde(default = "default_dictionary_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            endpoint: default_dictionary_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "zh-CN".to_string()
}

fn default_libretranslate_endpoint() -> String {
    "https://libretranslate.de".to_string()
}

fn default_mymemory_endpoint() -> String {
    "https://api.mymemory.translated.net".to_string()
}

fn default_dictionary_endpoint() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Settings {
    /// Resolve settings from the given file, never failing
    ///
    /// A missing file, an unreadable file, and malformed JSON all fall back
    /// to the hardcoded defaults. Partial files are filled in field by field
    /// through the serde defaults.
    pub fn resolve<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    debug!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!(
                        "Malformed settings file {}: {}. Falling back to defaults",
                        path.display(),
                        e
                    );
                    Settings::default()
                }
            },
            Err(e) => {
                debug!(
                    "Could not read settings file {}: {}. Falling back to defaults",
                    path.display(),
                    e
                );
                Settings::default()
            }
        }
    }

    /// Default settings file location inside the platform config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("wordglance").join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"))
    }

    /// Validate the settings for consistency
    ///
    /// Resolution itself never fails; callers use this to surface
    /// configuration problems as warnings before issuing lookups.
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::normalize_language_tag(&self.source_language)?;
        crate::language_utils::normalize_language_tag(&self.target_language)?;

        for (name, endpoint) in [
            ("libretranslate", &self.providers.libretranslate.endpoint),
            ("mymemory", &self.providers.mymemory.endpoint),
            ("dictionary", &self.providers.dictionary.endpoint),
        ] {
            url::Url::parse(endpoint)
                .map_err(|e| anyhow!("Invalid {} endpoint '{}': {}", name, endpoint, e))?;
        }

        Ok(())
    }
}

/// Default implementation for Settings
impl Default for Settings {
    fn default() -> Self {
        Settings {
            provider_preference: ProviderPreference::default(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            providers: ProviderSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}
