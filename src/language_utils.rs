use anyhow::{anyhow, Result};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language and text-shape utilities
///
/// This module provides the boundary heuristics for deciding what a piece of
/// selected text is (English prose, a single dictionary word) and for
/// normalizing the language tags sent to the translation APIs.
/// Single dictionary-word shape: letters with internal apostrophes or hyphens
static SINGLE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(?:['\-][A-Za-z]+)*$").expect("invalid word pattern"));

/// Minimum share of alphabetic characters that must be ASCII letters for a
/// selection to count as English text
const ENGLISH_LETTER_RATIO: f64 = 0.5;

/// Check whether a selection looks like English text
///
/// Counts alphabetic characters only, so punctuation and digits do not skew
/// the ratio. A selection with no letters at all is not English.
pub fn is_english_text(text: &str) -> bool {
    let mut letters = 0usize;
    let mut ascii_letters = 0usize;

    for c in text.chars() {
        if c.is_alphabetic() {
            letters += 1;
            if c.is_ascii_alphabetic() {
                ascii_letters += 1;
            }
        }
    }

    letters > 0 && (ascii_letters as f64 / letters as f64) >= ENGLISH_LETTER_RATIO
}

/// Check whether a trimmed selection is a single dictionary word
pub fn is_single_word(text: &str) -> bool {
    SINGLE_WORD.is_match(text.trim())
}

/// Normalize a language tag for the translation APIs
///
/// Accepts `en`, `EN`, `zh-CN`, `zho` and similar: the primary subtag is
/// validated against ISO 639-1/639-3 and lowercased, a region subtag is
/// uppercased and preserved. Anything else is rejected.
pub fn normalize_language_tag(tag: &str) -> Result<String> {
    let trimmed = tag.trim();
    let mut parts = trimmed.splitn(2, '-');
    let primary = parts.next().unwrap_or("").to_lowercase();
    let region = parts.next();

    let valid = match primary.len() {
        2 => Language::from_639_1(&primary).is_some(),
        3 => Language::from_639_3(&primary).is_some(),
        _ => false,
    };
    if !valid {
        return Err(anyhow!("Invalid language tag: {}", tag));
    }

    match region {
        Some(region) if !region.is_empty() => Ok(format!("{}-{}", primary, region.to_uppercase())),
        Some(_) => Err(anyhow!("Invalid language tag: {}", tag)),
        None => Ok(primary),
    }
}

/// Reduce a language tag to its primary subtag
///
/// Some providers reject regional tags, so `zh-CN` becomes `zh`.
pub fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}
