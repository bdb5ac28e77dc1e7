//! Constraint extraction from axiom text
//!
//! Pulls out the fragment following a trigger word ("must", "prohibit", ...)
//! as the action or state the axiom constrains.

/// Punctuation stripped from the tail of an extracted fragment
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Extract the constraint fragments following each trigger word.
///
/// For every trigger that occurs in `text` (assumed lower-cased), the
/// fragment is everything after the trigger's first occurrence, trimmed,
/// with a single trailing punctuation character removed. Empty fragments
/// are dropped and duplicates are kept once, in first-seen order. Triggers
/// that do not occur contribute nothing; the result may be empty.
pub fn extract_constraints(text: &str, triggers: &[&str]) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();

    for trigger in triggers {
        if let Some(idx) = text.find(trigger) {
            let rest = text[idx + trigger.len()..].trim();
            let fragment = strip_trailing_punctuation(rest);
            if !fragment.is_empty() && !fragments.iter().any(|f| f == fragment) {
                fragments.push(fragment.to_string());
            }
        }
    }

    fragments
}

fn strip_trailing_punctuation(s: &str) -> &str {
    s.strip_suffix(TRAILING_PUNCTUATION).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_fragment_after_trigger() {
        let fragments = extract_constraints("ai must protect privacy", &["must"]);
        assert_eq!(fragments, vec!["protect privacy"]);
    }

    #[test]
    fn test_strips_trailing_punctuation() {
        let fragments = extract_constraints("ai must protect privacy.", &["must"]);
        assert_eq!(fragments, vec!["protect privacy"]);
    }

    #[test]
    fn test_strips_only_one_punctuation_char() {
        let fragments = extract_constraints("systems must respond!!", &["must"]);
        assert_eq!(fragments, vec!["respond!"]);
    }

    #[test]
    fn test_missing_trigger_contributes_nothing() {
        let fragments = extract_constraints("ai should be nice", &["must"]);
        assert!(fragments.is_empty());
    }

    #[test]
    fn test_uses_first_occurrence_only() {
        let fragments =
            extract_constraints("ai must be safe and must be honest", &["must"]);
        assert_eq!(fragments, vec!["be safe and must be honest"]);
    }

    #[test]
    fn test_multiple_triggers_in_order() {
        let fragments = extract_constraints(
            "we require accuracy and ensure fairness",
            &["require", "ensure"],
        );
        assert_eq!(
            fragments,
            vec!["accuracy and ensure fairness", "fairness"]
        );
    }

    #[test]
    fn test_duplicate_fragments_kept_once() {
        // Overlapping triggers that land on the same tail collapse to one
        let fragments = extract_constraints("we must act", &["must", "st"]);
        assert_eq!(fragments, vec!["act"]);
    }

    #[test]
    fn test_trigger_at_end_is_dropped() {
        let fragments = extract_constraints("this is what we must", &["must"]);
        assert!(fragments.is_empty());
    }
}
