/*!
 * Tests for error types and conversions
 */

use wordglance::errors::{AppError, LookupError, ProviderError};

#[test]
fn test_providerError_connectionError_shouldDisplayCorrectly() {
    let error = ProviderError::ConnectionError("Host unreachable".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Connection error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_providerError_parseError_shouldDisplayCorrectly() {
    let error = ProviderError::ParseError("Invalid JSON".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse API response"));
    assert!(display.contains("Invalid JSON"));
}

#[test]
fn test_providerError_emptyTranslation_shouldDisplayCorrectly() {
    let display = format!("{}", ProviderError::EmptyTranslation);
    assert!(display.contains("empty translation"));
}

#[test]
fn test_lookupError_emptyText_shouldDisplayCorrectly() {
    let display = format!("{}", LookupError::EmptyText);
    assert!(display.contains("must not be empty"));
}

#[test]
fn test_appError_fromProviderError_shouldWrapCorrectly() {
    let provider_error = ProviderError::ConnectionError("Test error".to_string());
    let app_error: AppError = provider_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Provider error"));
    assert!(display.contains("Test error"));
}

#[test]
fn test_appError_fromLookupError_shouldWrapCorrectly() {
    let app_error: AppError = LookupError::EmptyText.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Lookup error"));
}

#[test]
fn test_appError_fromIoError_shouldBecomeSettingsError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::Settings(_)));
}
