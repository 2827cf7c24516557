//! Quantity and Unit Extraction
//!
//! Pulls a numeric or word-form quantity and a measurement unit out of an
//! utterance. Hindi number words are always tried first so that code-mixed
//! speech ("डेढ़ kg rice chahiye") keeps its fractional quantities; a hit
//! short-circuits numeral lookup entirely. Otherwise a literal numeral wins
//! over an English number word.

use super::lexicon::{
    contains_word, ENGLISH_NUMBER_WORDS, ENGLISH_UNITS, HINDI_NUMBER_WORDS, HINDI_UNITS, NUMERAL,
};
use crate::language::Language;

/// Extract the spoken quantity. Defaults to 1 when nothing matches.
pub fn extract_quantity(lower: &str) -> f64 {
    for (word, value) in HINDI_NUMBER_WORDS {
        if contains_word(lower, word) {
            return *value;
        }
    }

    if let Some(caps) = NUMERAL.captures(lower) {
        if let Ok(value) = caps[1].parse::<f64>() {
            return value;
        }
    }

    for (word, value) in ENGLISH_NUMBER_WORDS {
        if contains_word(lower, word) {
            return *value;
        }
    }

    1.0
}

/// Extract a unit token from the fixed vocabulary: the first token after the
/// utterance start that appears in the unit list. Hindi-tagged utterances
/// check the Hindi vocabulary first, then fall back to English. Returns
/// `None` when no vocabulary entry is present; a unit is never invented.
pub fn extract_unit(lower: &str, lang: Language) -> Option<String> {
    match lang {
        Language::Hindi => {
            find_unit_token(lower, HINDI_UNITS).or_else(|| find_unit_token(lower, ENGLISH_UNITS))
        }
        Language::English => find_unit_token(lower, ENGLISH_UNITS),
    }
}

/// A vocabulary unit counts only when it follows a space, i.e. it is never
/// the first token of the utterance.
fn find_unit_token(lower: &str, vocabulary: &[&str]) -> Option<String> {
    lower
        .split_whitespace()
        .skip(1)
        .find(|token| vocabulary.contains(token))
        .map(|token| token.to_string())
}
