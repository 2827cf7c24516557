//! Item-Name Extraction
//!
//! Strips action verbs, quantities, units, and glue words from an utterance;
//! whatever survives is the item (or search query) the user meant. An empty
//! residual is valid; "remove last item" names nothing.

use super::lexicon::{
    ENGLISH_LEADING_VERBS, ENGLISH_STOPWORDS, HINDI_ACTIONS, HINDI_STOPWORDS, NUMERAL,
    PRICE_CEILING,
};
use crate::language::Language;

/// Extract the residual item phrase from the lowercased utterance.
/// `unit` is the token found by the quantity extractor, removed here so it
/// never leaks into the item name.
pub fn extract_item(lower: &str, lang: Language, unit: Option<&str>) -> String {
    let mut cleaned = lower.to_string();

    // Hindi action words can appear anywhere in the sentence, so every
    // occurrence goes, not just a leading phrase.
    if lang == Language::Hindi {
        for (_, words) in HINDI_ACTIONS {
            for word in *words {
                cleaned = cleaned.replace(word, "");
            }
        }
    }

    // English verbs are stripped regardless of the language tag: code-mixed
    // Hindi speech routinely opens with an English verb.
    let trimmed = cleaned.trim().to_string();
    cleaned = ENGLISH_LEADING_VERBS.replace(&trimmed, "").to_string();
    cleaned = ENGLISH_STOPWORDS.replace_all(&cleaned, "").to_string();

    // The price phrase goes before bare numerals so "bread under $5" does
    // not leave a dangling "under" in the query.
    cleaned = PRICE_CEILING.replace_all(&cleaned, "").to_string();
    cleaned = NUMERAL.replace_all(&cleaned, "").to_string();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();

    if lang == Language::Hindi {
        tokens.retain(|t| !HINDI_STOPWORDS.contains(t));
    }

    if let Some(unit) = unit {
        if let Some(pos) = tokens.iter().position(|t| *t == unit) {
            tokens.remove(pos);
        }
    }

    tokens.join(" ")
}

/// Price ceiling from "under $N" phrasing, read off the full lowercase
/// text rather than the stripped residual. The caller applies it only to
/// SEARCH commands.
pub fn extract_price_ceiling(lower: &str) -> Option<f64> {
    PRICE_CEILING
        .captures(lower)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}
