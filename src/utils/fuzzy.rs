//! Fuzzy Matching
//!
//! Token-overlap similarity between spoken phrases. Backs removal-by-name
//! when the user's wording does not exactly match a list entry.

use crate::interpreter::normalize::tokens;
use std::collections::HashSet;

/// Similarity threshold below which a fuzzy removal candidate is rejected
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Token-set overlap score:
/// `|tokens(a) ∩ tokens(b)| / max(|tokens(a)|, |tokens(b)|)`.
/// 0 when either side normalizes to no tokens at all.
pub fn similarity(a: &str, b: &str) -> f64 {
    let ta: HashSet<String> = tokens(a).into_iter().collect();
    let tb: HashSet<String> = tokens(b).into_iter().collect();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let shared = ta.intersection(&tb).count();
    shared as f64 / ta.len().max(tb.len()) as f64
}
