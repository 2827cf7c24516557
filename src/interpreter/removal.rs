//! Removal Resolution
//!
//! Decides how a REMOVE utterance pinpoints its target: an explicit
//! position, the most recent entry, or a spoken name left to fuzzy
//! matching. Only annotates the command; bounds checks and the actual
//! list mutation belong to the dispatcher.

use super::lexicon::{
    contains_word, ENGLISH_ORDINALS, HINDI_ORDINALS, REMOVE_BY_NUMBER, REMOVE_LAST,
};

/// How the removal target was referenced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalTarget {
    /// "item number 3", "remove second item": 0-based position
    Index(usize),
    /// "remove last", "take it off": the most recently added entry
    Last,
    /// No shortcut given; match against the extracted item name
    ByName,
}

/// Resolve the removal reference, first applicable rule wins:
/// numeric position, then ordinal word, then remove-last phrasing,
/// then name matching.
pub fn resolve(lower: &str) -> RemovalTarget {
    if let Some(caps) = REMOVE_BY_NUMBER.captures(lower) {
        if let Ok(n) = caps[1].parse::<usize>() {
            if n > 0 {
                // Spoken positions are 1-based
                return RemovalTarget::Index(n - 1);
            }
        }
    }

    for (word, index) in ENGLISH_ORDINALS.iter().chain(HINDI_ORDINALS) {
        if contains_word(lower, word) {
            return RemovalTarget::Index(*index);
        }
    }

    if REMOVE_LAST.iter().any(|re| re.is_match(lower)) {
        return RemovalTarget::Last;
    }

    RemovalTarget::ByName
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_reference() {
        assert_eq!(resolve("remove item number 2"), RemovalTarget::Index(1));
        assert_eq!(resolve("remove item 5"), RemovalTarget::Index(4));
    }

    #[test]
    fn test_zero_is_not_a_position() {
        // "item 0" has no 1-based meaning; falls through to name matching
        assert_eq!(resolve("remove item 0"), RemovalTarget::ByName);
    }

    #[test]
    fn test_ordinal_reference() {
        assert_eq!(resolve("remove the first item"), RemovalTarget::Index(0));
        assert_eq!(resolve("delete second entry"), RemovalTarget::Index(1));
        assert_eq!(resolve("तीसरा हटाओ"), RemovalTarget::Index(2));
    }

    #[test]
    fn test_numeric_beats_ordinal() {
        assert_eq!(resolve("remove item 4 first"), RemovalTarget::Index(3));
    }

    #[test]
    fn test_remove_last() {
        assert_eq!(resolve("remove last"), RemovalTarget::Last);
        assert_eq!(resolve("remove that"), RemovalTarget::Last);
        assert_eq!(resolve("take the milk off my list"), RemovalTarget::Last);
        assert_eq!(resolve("हटाओ आखिरी"), RemovalTarget::Last);
    }

    #[test]
    fn test_name_fallback() {
        assert_eq!(resolve("remove milk"), RemovalTarget::ByName);
        assert_eq!(resolve("दूध हटाओ"), RemovalTarget::ByName);
    }
}
