//! Command Interpreter
//!
//! Turns one transcribed utterance (English, Hindi, or a mix) into a
//! structured shopping command: an action, the item phrase, quantity,
//! unit, and any removal or price annotations. Classification is total:
//! malformed input degrades to an ADD with an empty item, never an error.

pub mod item;
pub mod lexicon;
pub mod normalize;
pub mod quantity;
pub mod removal;

use crate::language::Language;
use lexicon::{hindi_keywords, ENGLISH_ACTIONS};
use removal::RemovalTarget;
use tracing::debug;

/// The classified intent of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Remove,
    Search,
    Inventory,
    Category,
}

/// Structured result of interpreting one utterance
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub action: Action,
    /// Residual item phrase; empty means "no named target"
    pub item: String,
    /// Spoken quantity, 1 when unspecified
    pub quantity: f64,
    /// Unit token from the fixed vocabulary, never invented
    pub unit: Option<String>,
    /// Price ceiling, SEARCH only
    pub max_price: Option<f64>,
    /// Explicit 0-based removal position, REMOVE only
    pub remove_index: Option<usize>,
    /// "remove last" shortcut, REMOVE only; exclusive with `remove_index`
    pub remove_last: bool,
}

impl Command {
    /// The search query is the item phrase under another name
    pub fn query(&self) -> &str {
        &self.item
    }
}

/// Interpret a transcribed utterance. Never fails: an utterance with no
/// recognizable action verb but a plausible item phrase still attempts an
/// add rather than vanishing silently.
pub fn interpret(text: &str, lang: Language) -> Command {
    let lower = text.trim().to_lowercase();
    debug!("interpreting ({}): '{}'", lang.code(), lower);

    let action = classify(&lower, lang);
    let quantity = quantity::extract_quantity(&lower);
    let unit = quantity::extract_unit(&lower, lang);
    let item = item::extract_item(&lower, lang, unit.as_deref());

    // Two independent assignments: the query IS the item phrase, and the
    // ceiling is read off the raw text, only for searches.
    let max_price = if action == Action::Search {
        item::extract_price_ceiling(&lower)
    } else {
        None
    };

    let (remove_index, remove_last) = if action == Action::Remove {
        match removal::resolve(&lower) {
            RemovalTarget::Index(i) => (Some(i), false),
            RemovalTarget::Last => (None, true),
            RemovalTarget::ByName => (None, false),
        }
    } else {
        (None, false)
    };

    let command = Command {
        action,
        item,
        quantity,
        unit,
        max_price,
        remove_index,
        remove_last,
    };
    debug!("interpreted: {:?}", command);
    command
}

/// Assign exactly one action. Priority ADD > REMOVE > SEARCH > INVENTORY >
/// CATEGORY; for Hindi, each category tries its Hindi keywords and then the
/// English rules for that same category (code-mixed speech) before the next
/// category is considered. No match defaults to ADD.
fn classify(lower: &str, lang: Language) -> Action {
    for (action, english) in ENGLISH_ACTIONS.iter() {
        if lang == Language::Hindi
            && hindi_keywords(*action).iter().any(|w| lower.contains(w))
        {
            return *action;
        }
        if english.is_match(lower) {
            return *action;
        }
    }
    Action::Add
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_quantity_and_unit() {
        let cmd = interpret("add 2 bottles of water", Language::English);
        assert_eq!(cmd.action, Action::Add);
        assert_eq!(cmd.item, "water");
        assert_eq!(cmd.quantity, 2.0);
        assert_eq!(cmd.unit.as_deref(), Some("bottles"));
        assert_eq!(cmd.max_price, None);
    }

    #[test]
    fn test_add_hindi() {
        let cmd = interpret("दो बोतल पानी जोड़ो", Language::Hindi);
        assert_eq!(cmd.action, Action::Add);
        assert_eq!(cmd.item, "पानी");
        assert_eq!(cmd.quantity, 2.0);
        assert_eq!(cmd.unit.as_deref(), Some("बोतल"));
    }

    #[test]
    fn test_remove_by_number() {
        let cmd = interpret("remove item number 2", Language::English);
        assert_eq!(cmd.action, Action::Remove);
        assert_eq!(cmd.remove_index, Some(1));
        assert!(!cmd.remove_last);
    }

    #[test]
    fn test_remove_last() {
        let cmd = interpret("remove last", Language::English);
        assert_eq!(cmd.action, Action::Remove);
        assert_eq!(cmd.remove_index, None);
        assert!(cmd.remove_last);
    }

    #[test]
    fn test_remove_by_name_hindi() {
        let cmd = interpret("दूध हटाओ", Language::Hindi);
        assert_eq!(cmd.action, Action::Remove);
        assert_eq!(cmd.item, "दूध");
        assert_eq!(cmd.remove_index, None);
        assert!(!cmd.remove_last);
    }

    #[test]
    fn test_search_with_price() {
        let cmd = interpret("search for bread under $5", Language::English);
        assert_eq!(cmd.action, Action::Search);
        assert_eq!(cmd.query(), "bread");
        assert_eq!(cmd.max_price, Some(5.0));
    }

    #[test]
    fn test_price_ignored_outside_search() {
        let cmd = interpret("add bread under $5", Language::English);
        assert_eq!(cmd.action, Action::Add);
        assert_eq!(cmd.max_price, None);
    }

    #[test]
    fn test_inventory_check() {
        let cmd = interpret("check if milk is available", Language::English);
        assert_eq!(cmd.action, Action::Inventory);
    }

    #[test]
    fn test_category_browse() {
        let cmd = interpret("what's in produce", Language::English);
        assert_eq!(cmd.action, Action::Category);
        assert_eq!(cmd.item, "produce");
    }

    #[test]
    fn test_code_mixed_hindi_uses_english_verbs() {
        let cmd = interpret("add दूध", Language::Hindi);
        assert_eq!(cmd.action, Action::Add);
        assert_eq!(cmd.item, "दूध");
    }

    #[test]
    fn test_unmatched_defaults_to_add() {
        let cmd = interpret("milk and eggs", Language::English);
        assert_eq!(cmd.action, Action::Add);
    }

    #[test]
    fn test_empty_input_yields_empty_add() {
        let cmd = interpret("", Language::English);
        assert_eq!(cmd.action, Action::Add);
        assert_eq!(cmd.item, "");
        assert_eq!(cmd.quantity, 1.0);
        assert_eq!(cmd.unit, None);
        assert_eq!(cmd.max_price, None);
    }

    #[test]
    fn test_priority_add_wins_over_search() {
        // "buy" (ADD) and "find" (SEARCH) both present; ADD has priority
        let cmd = interpret("buy whatever you find", Language::English);
        assert_eq!(cmd.action, Action::Add);
    }
}
