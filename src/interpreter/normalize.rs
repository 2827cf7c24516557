//! Text Normalization
//!
//! Every comparison in the assistant goes through `normalize` so that
//! punctuation and casing never affect matching.

/// Normalize free text for comparison: lower-case, drop everything outside
/// `[a-z0-9\s]`, collapse runs of whitespace, trim.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept: String = lower
        .chars()
        .filter_map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else if c.is_whitespace() {
                Some(' ')
            } else {
                None
            }
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized whitespace-split tokens. Empty input yields no tokens,
/// never an empty-string token.
pub fn tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Hello, World!"), "hello world");
        assert_eq!(normalize("  2  bottles   of WATER "), "2 bottles of water");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("what's in produce?"), "whats in produce");
        assert_eq!(normalize("$5.99"), "599");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["Milk & Cheese", "  a  b  ", "", "दूध milk", "123!@#"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_non_ascii_is_dropped() {
        // Devanagari falls outside [a-z0-9]; only the Latin part survives
        assert_eq!(normalize("दूध milk"), "milk");
        assert_eq!(normalize("पानी"), "");
    }

    #[test]
    fn test_tokens_empty() {
        assert!(tokens("").is_empty());
        assert!(tokens("!!!").is_empty());
        assert_eq!(tokens("orange  juice"), vec!["orange", "juice"]);
    }
}
