//! Bilingual Rule Tables
//!
//! All keyword vocabularies consumed by the interpreter live here as data,
//! keyed by language where they differ. Adding a language means adding
//! tables, not control flow.

use super::Action;
use lazy_static::lazy_static;
use regex::Regex;

/// Classification priority. First match wins; only one action is ever set.
pub const ACTION_PRIORITY: [Action; 5] = [
    Action::Add,
    Action::Remove,
    Action::Search,
    Action::Inventory,
    Action::Category,
];

/// Hindi action keywords, tested by substring containment.
/// Note "दो" (give) doubles as the number two; listing it under ADD makes
/// the item extractor strip it, which is what utterances like
/// "दो बोतल पानी जोड़ो" need.
pub const HINDI_ACTIONS: &[(Action, &[&str])] = &[
    (
        Action::Add,
        &["जोड़ो", "खरीदो", "रखो", "चाहिए", "लाओ", "दो"],
    ),
    (
        Action::Remove,
        &["हटाओ", "मिटाओ", "निकालो", "हटा दो", "डिलीट करो"],
    ),
    (Action::Search, &["ढूंढो", "खोजो", "दिखाओ", "क्या है"]),
    (
        Action::Inventory,
        &["स्टॉक", "उपलब्ध", "क्या मिलेगा", "चेक करो"],
    ),
    (Action::Category, &["श्रेणी", "कैटेगरी", "दिखाओ", "क्या है"]),
];

/// Hindi keywords for one action, if any
pub fn hindi_keywords(action: Action) -> &'static [&'static str] {
    HINDI_ACTIONS
        .iter()
        .find(|(a, _)| *a == action)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

lazy_static! {
    /// English action rules, one pattern per action, in priority order.
    /// These also serve as the code-mixing fallback for Hindi utterances.
    pub static ref ENGLISH_ACTIONS: Vec<(Action, Regex)> = vec![
        (Action::Add, Regex::new(r"(add|buy|put|need|want to buy)").unwrap()),
        (Action::Remove, Regex::new(r"(remove|delete|drop|take.*off)").unwrap()),
        (Action::Search, Regex::new(r"(find|search|look for)").unwrap()),
        (Action::Inventory, Regex::new(r"(check|inventory|stock|available|have)").unwrap()),
        (Action::Category, Regex::new(r"(category|categories|show|list|what.*in)").unwrap()),
    ];

    /// Leading English action-verb phrase, stripped from the front of the
    /// utterance when extracting the item name (any language tag).
    pub static ref ENGLISH_LEADING_VERBS: Regex = Regex::new(
        r"^(add|buy|put|need|want to buy|remove|delete|drop|take|find|search|look for|check|inventory|stock|available|have|category|categories|show|list|what.*in)\b"
    ).unwrap();

    /// English glue words stripped from item phrases
    pub static ref ENGLISH_STOPWORDS: Regex = Regex::new(
        r"\b(please|to|my|the|a|an|some|of|for|from|list|is|are|in)\b"
    ).unwrap();

    /// Literal integer or decimal quantity
    pub static ref NUMERAL: Regex = Regex::new(r"\b(\d+(?:\.\d+)?)\b").unwrap();

    /// Price ceiling phrase ("under $5", "under 5")
    pub static ref PRICE_CEILING: Regex = Regex::new(r"under\s*\$?(\d+(?:\.\d+)?)").unwrap();

    /// Explicit removal by position ("item 2", "item number 2")
    pub static ref REMOVE_BY_NUMBER: Regex = Regex::new(r"item\s*(?:number\s*)?(\d+)").unwrap();

    /// Phrasings that mean "remove the most recent entry", both languages
    pub static ref REMOVE_LAST: Vec<Regex> = vec![
        Regex::new(r"remove\s+(this|that|last)").unwrap(),
        Regex::new(r"take\s+.*(off|out)").unwrap(),
        Regex::new(r"हटाओ\s+(यह|वह|आखिरी)").unwrap(),
        Regex::new(r"निकालो\s+.*(बाहर)").unwrap(),
    ];
}

/// Hindi glue words stripped from item phrases (space-bounded)
pub const HINDI_STOPWORDS: &[&str] = &[
    "में", "का", "की", "के", "है", "हैं", "से", "पर", "को", "दो", "एक", "कुछ", "थोड़ा", "बहुत",
    "सब", "सारे",
];

/// English number words, including the fractional ones
pub const ENGLISH_NUMBER_WORDS: &[(&str, f64)] = &[
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("half", 0.5),
    ("quarter", 0.25),
];

/// Hindi number words. The fractional words (सवा, डेढ़, ढाई) have no
/// single-token English equivalent, hence the dedicated entries.
pub const HINDI_NUMBER_WORDS: &[(&str, f64)] = &[
    ("एक", 1.0),
    ("दो", 2.0),
    ("तीन", 3.0),
    ("चार", 4.0),
    ("पांच", 5.0),
    ("छह", 6.0),
    ("सात", 7.0),
    ("आठ", 8.0),
    ("नौ", 9.0),
    ("दस", 10.0),
    ("आधा", 0.5),
    ("सवा", 1.25),
    ("डेढ़", 1.5),
    ("ढाई", 2.5),
];

/// English measurement units recognized after a quantity
pub const ENGLISH_UNITS: &[&str] = &[
    "kg", "g", "liters", "ml", "pack", "packs", "bottle", "bottles", "piece", "pieces", "dozen",
];

/// Hindi measurement units
pub const HINDI_UNITS: &[&str] = &[
    "किलो", "ग्राम", "लीटर", "मिलीलीटर", "पैक", "पैकेट", "बोतल", "टुकड़ा", "दर्जन",
];

/// Ordinal words mapping to 0-based list positions
pub const ENGLISH_ORDINALS: &[(&str, usize)] = &[
    ("first", 0),
    ("second", 1),
    ("third", 2),
    ("fourth", 3),
    ("fifth", 4),
];

/// Hindi ordinal words, same index space
pub const HINDI_ORDINALS: &[(&str, usize)] = &[
    ("पहला", 0),
    ("दूसरा", 1),
    ("तीसरा", 2),
    ("चौथा", 3),
    ("पांचवां", 4),
];

/// Whole-word containment: `word` bounded by spaces or the utterance edges.
/// Used for number words and ordinals so "ten" never fires inside "tender".
pub fn contains_word(text: &str, word: &str) -> bool {
    text == word
        || text.starts_with(&format!("{} ", word))
        || text.ends_with(&format!(" {}", word))
        || text.contains(&format!(" {} ", word))
}
