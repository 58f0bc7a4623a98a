/*!
 * Tests for settings resolution and provider preference
 */

use wordglance::app_config::{LogLevel, ProviderPreference, Settings, TranslationProvider};

use crate::common::{create_temp_dir, create_test_file};

/// Test default settings values
#[test]
fn test_defaultSettings_withNoParameters_shouldHaveCorrectDefaults() {
    let settings = Settings::default();

    assert_eq!(settings.provider_preference, ProviderPreference::Auto);
    assert_eq!(settings.source_language, "en");
    assert_eq!(settings.target_language, "zh-CN");
    assert_eq!(settings.log_level, LogLevel::Info);

    assert_eq!(
        settings.providers.libretranslate.endpoint,
        "https://libretranslate.de"
    );
    assert_eq!(
        settings.providers.mymemory.endpoint,
        "https://api.mymemory.translated.net"
    );
    assert_eq!(
        settings.providers.dictionary.endpoint,
        "https://api.dictionaryapi.dev/api/v2/entries/en"
    );
    assert_eq!(settings.providers.libretranslate.timeout_secs, 10);
    assert!(settings.providers.libretranslate.api_key.is_empty());
    assert!(settings.providers.mymemory.email.is_empty());
}

#[test]
fn test_resolve_withMissingFile_shouldFallBackToDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let path = temp_dir.path().join("does-not-exist.json");

    let settings = Settings::resolve(&path);

    assert_eq!(settings.provider_preference, ProviderPreference::Auto);
    assert_eq!(settings.source_language, "en");
}

#[test]
fn test_resolve_withMalformedJson_shouldFallBackToDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(temp_dir.path(), "settings.json", "{not json!").unwrap();

    let settings = Settings::resolve(&path);

    assert_eq!(settings.provider_preference, ProviderPreference::Auto);
    assert_eq!(settings.target_language, "zh-CN");
}

#[test]
fn test_resolve_withPartialFile_shouldFillInFieldDefaults() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(
        temp_dir.path(),
        "settings.json",
        r#"{"provider_preference": "mymemory", "target_language": "fr"}"#,
    )
    .unwrap();

    let settings = Settings::resolve(&path);

    assert_eq!(settings.provider_preference, ProviderPreference::MyMemory);
    assert_eq!(settings.target_language, "fr");
    // Everything omitted keeps its default
    assert_eq!(settings.source_language, "en");
    assert_eq!(
        settings.providers.mymemory.endpoint,
        "https://api.mymemory.translated.net"
    );
}

#[test]
fn test_resolve_withUnknownPreference_shouldFoldToAuto() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(
        temp_dir.path(),
        "settings.json",
        r#"{"provider_preference": "bing"}"#,
    )
    .unwrap();

    let settings = Settings::resolve(&path);

    assert_eq!(settings.provider_preference, ProviderPreference::Auto);
}

#[test]
fn test_resolve_withFullFile_shouldLoadEveryField() {
    let temp_dir = create_temp_dir().unwrap();
    let path = create_test_file(
        temp_dir.path(),
        "settings.json",
        r#"{
            "provider_preference": "libretranslate",
            "source_language": "en",
            "target_language": "es",
            "providers": {
                "libretranslate": {
                    "endpoint": "http://localhost:5000",
                    "api_key": "secret",
                    "timeout_secs": 5
                },
                "mymemory": {
                    "endpoint": "http://localhost:8080",
                    "email": "user@example.com",
                    "timeout_secs": 7
                },
                "dictionary": {
                    "endpoint": "http://localhost:9090",
                    "timeout_secs": 3
                }
            },
            "log_level": "debug"
        }"#,
    )
    .unwrap();

    let settings = Settings::resolve(&path);

    assert_eq!(
        settings.provider_preference,
        ProviderPreference::LibreTranslate
    );
    assert_eq!(settings.target_language, "es");
    assert_eq!(settings.providers.libretranslate.endpoint, "http://localhost:5000");
    assert_eq!(settings.providers.libretranslate.api_key, "secret");
    assert_eq!(settings.providers.libretranslate.timeout_secs, 5);
    assert_eq!(settings.providers.mymemory.email, "user@example.com");
    assert_eq!(settings.providers.dictionary.timeout_secs, 3);
    assert_eq!(settings.log_level, LogLevel::Debug);
}

/// Test provider order derivation
#[test]
fn test_providerOrder_withAutoPreference_shouldTryBothInOrder() {
    let order = ProviderPreference::Auto.provider_order();
    assert_eq!(
        order,
        vec![
            TranslationProvider::LibreTranslate,
            TranslationProvider::MyMemory
        ]
    );
}

#[test]
fn test_providerOrder_withPinnedPreference_shouldContainOnlyThatProvider() {
    assert_eq!(
        ProviderPreference::LibreTranslate.provider_order(),
        vec![TranslationProvider::LibreTranslate]
    );
    assert_eq!(
        ProviderPreference::MyMemory.provider_order(),
        vec![TranslationProvider::MyMemory]
    );
}

#[test]
fn test_providerPreference_fromString_shouldFoldUnknownToAuto() {
    assert_eq!(
        "libretranslate".parse::<ProviderPreference>().unwrap(),
        ProviderPreference::LibreTranslate
    );
    assert_eq!(
        "MyMemory".parse::<ProviderPreference>().unwrap(),
        ProviderPreference::MyMemory
    );
    assert_eq!(
        "deepl".parse::<ProviderPreference>().unwrap(),
        ProviderPreference::Auto
    );
    assert_eq!(
        "".parse::<ProviderPreference>().unwrap(),
        ProviderPreference::Auto
    );
}

/// Test settings validation
#[test]
fn test_validate_withVariousSettings_shouldValidateCorrectly() {
    // Defaults are valid
    let mut settings = Settings::default();
    assert!(settings.validate().is_ok());

    // Invalid source language
    settings.source_language = "xyzzy".to_string();
    assert!(settings.validate().is_err());
    settings.source_language = "en".to_string();

    // Invalid target language
    settings.target_language = String::new();
    assert!(settings.validate().is_err());
    settings.target_language = "zh-CN".to_string();

    // Invalid endpoint
    settings.providers.dictionary.endpoint = "not a url".to_string();
    assert!(settings.validate().is_err());
}

#[test]
fn test_translationProvider_displayName_shouldBeCapitalized() {
    assert_eq!(
        TranslationProvider::LibreTranslate.display_name(),
        "LibreTranslate"
    );
    assert_eq!(TranslationProvider::MyMemory.display_name(), "MyMemory");
}

#[test]
fn test_translationProvider_fromString_shouldRejectUnknown() {
    assert_eq!(
        "libretranslate".parse::<TranslationProvider>().unwrap(),
        TranslationProvider::LibreTranslate
    );
    assert!("deepl".parse::<TranslationProvider>().is_err());
}
