//! Suggestion Engine
//!
//! Derives follow-up suggestions from three sources: the newest list
//! entries, items duplicated in the current list, and history entries the
//! user has not touched for a week. Pure over its inputs; the caller
//! supplies the clock.

use crate::history::HistoryEntry;
use crate::list::ShoppingList;

/// At most this many suggestions are ever shown
pub const MAX_SUGGESTIONS: usize = 6;

/// How many of the newest list entries to offer again
const RECENT_LIMIT: usize = 5;

/// How many duplicated-in-list names to offer
const POPULAR_LIMIT: usize = 2;

/// How many long-untouched history names to offer
const FREQUENT_LIMIT: usize = 3;

/// History entries idle longer than this are "frequent" candidates
const STALE_AFTER_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    /// One of the newest list entries
    Recent,
    /// Appears more than once in the current list
    Popular,
    /// In the history but untouched for 7+ days
    Frequent,
}

impl SuggestionSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Frequent => "frequent",
        }
    }
}

/// One suggested item
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub source: SuggestionSource,
}

/// Build the suggestion list: recent ++ popular ++ frequent, de-duplicated
/// by name keeping the first occurrence, capped at six. Source order gives
/// recent entries priority over popular over frequent.
pub fn suggestions(list: &ShoppingList, history: &[HistoryEntry], now_ms: i64) -> Vec<Suggestion> {
    let mut combined: Vec<Suggestion> = Vec::new();

    for item in list.items().iter().take(RECENT_LIMIT) {
        combined.push(Suggestion {
            name: item.name.clone(),
            source: SuggestionSource::Recent,
        });
    }

    // Names appearing more than once in the current list, most duplicated
    // first. Counting preserves list order for ties.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in list.items() {
        match counts.iter_mut().find(|(name, _)| *name == item.name) {
            Some((_, n)) => *n += 1,
            None => counts.push((item.name.clone(), 1)),
        }
    }
    counts.retain(|(_, n)| *n > 1);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    for (name, _) in counts.into_iter().take(POPULAR_LIMIT) {
        combined.push(Suggestion {
            name,
            source: SuggestionSource::Popular,
        });
    }

    let mut stale: Vec<&HistoryEntry> = history
        .iter()
        .filter(|h| now_ms - h.last_added_at > STALE_AFTER_MS)
        .collect();
    stale.sort_by(|a, b| b.add_count.cmp(&a.add_count));
    for entry in stale.into_iter().take(FREQUENT_LIMIT) {
        combined.push(Suggestion {
            name: entry.name.clone(),
            source: SuggestionSource::Frequent,
        });
    }

    let mut unique: Vec<Suggestion> = Vec::new();
    for suggestion in combined {
        if !unique.iter().any(|s| s.name == suggestion.name) {
            unique.push(suggestion);
        }
    }
    unique.truncate(MAX_SUGGESTIONS);
    unique
}
