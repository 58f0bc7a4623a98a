/*!
 * Tests for language tag handling and text-shape heuristics
 */

use wordglance::language_utils::{
    is_english_text, is_single_word, normalize_language_tag, primary_subtag,
};

#[test]
fn test_isEnglishText_withEnglishSentence_shouldReturnTrue() {
    assert!(is_english_text("The quick brown fox jumps over the lazy dog"));
    assert!(is_english_text("serendipity"));
    assert!(is_english_text("it's 100% done!"));
}

#[test]
fn test_isEnglishText_withNonLatinText_shouldReturnFalse() {
    assert!(!is_english_text("你好世界"));
    assert!(!is_english_text("Привет мир"));
    assert!(!is_english_text("こんにちは"));
}

#[test]
fn test_isEnglishText_withNoLetters_shouldReturnFalse() {
    assert!(!is_english_text(""));
    assert!(!is_english_text("12345"));
    assert!(!is_english_text("!?.,;"));
}

#[test]
fn test_isEnglishText_withMixedText_shouldUseLetterRatio() {
    // Mostly ASCII letters wins
    assert!(is_english_text("hello 世"));
    // Mostly CJK loses
    assert!(!is_english_text("你好世界啊 hi"));
}

#[test]
fn test_isSingleWord_withPlainWords_shouldReturnTrue() {
    assert!(is_single_word("hello"));
    assert!(is_single_word("Hello"));
    assert!(is_single_word("  padded  "));
    assert!(is_single_word("don't"));
    assert!(is_single_word("mother-in-law"));
}

#[test]
fn test_isSingleWord_withPhrasesAndSymbols_shouldReturnFalse() {
    assert!(!is_single_word("hello world"));
    assert!(!is_single_word(""));
    assert!(!is_single_word("hello!"));
    assert!(!is_single_word("123"));
    assert!(!is_single_word("-hyphen"));
    assert!(!is_single_word("trailing-"));
}

#[test]
fn test_normalizeLanguageTag_withValidTags_shouldNormalize() {
    assert_eq!(normalize_language_tag("en").unwrap(), "en");
    assert_eq!(normalize_language_tag("EN").unwrap(), "en");
    assert_eq!(normalize_language_tag("zh-cn").unwrap(), "zh-CN");
    assert_eq!(normalize_language_tag(" fr ").unwrap(), "fr");
    assert_eq!(normalize_language_tag("zho").unwrap(), "zho");
}

#[test]
fn test_normalizeLanguageTag_withInvalidTags_shouldReturnError() {
    assert!(normalize_language_tag("").is_err());
    assert!(normalize_language_tag("x").is_err());
    assert!(normalize_language_tag("xyzzy").is_err());
    assert!(normalize_language_tag("qq").is_err());
    assert!(normalize_language_tag("en-").is_err());
}

#[test]
fn test_primarySubtag_shouldDropRegion() {
    assert_eq!(primary_subtag("zh-CN"), "zh");
    assert_eq!(primary_subtag("en"), "en");
    assert_eq!(primary_subtag("pt-BR"), "pt");
}
