//! Action presence matching
//!
//! Decides whether a policy text mentions or enables an action phrase.
//! Matching is substring containment over whitespace-split words plus a
//! fixed synonym expansion table. No word-boundary or semantic analysis.

/// Fixed synonym expansion table, keyed by action word
///
/// Versioned data: changing these entries changes scoring, so they are
/// compiled in rather than configurable at runtime.
const SYNONYM_TABLE: [(&str, &[&str]); 4] = [
    ("deceive", &["lie", "mislead", "false", "dishonest"]),
    ("harm", &["hurt", "damage", "injure", "danger"]),
    ("privacy", &["confidential", "personal data", "information"]),
    ("discriminate", &["bias", "unfair", "prejudice", "favoritism"]),
];

/// Check whether `text` contains or enables `action`.
///
/// `text` must already be lower-cased. Returns true when every word of the
/// action phrase appears somewhere in the text (order-independent substring
/// containment), or when any action word has a synonym-table entry with at
/// least one synonym present in the text. Pure function.
pub fn contains_action(text: &str, action: &str) -> bool {
    let words: Vec<&str> = action.split_whitespace().collect();

    // Direct mention: all words present as substrings
    if words.iter().all(|word| text.contains(word)) {
        return true;
    }

    // Synonym expansion
    for word in &words {
        if let Some((_, synonyms)) = SYNONYM_TABLE.iter().find(|(key, _)| key == word) {
            if synonyms.iter().any(|synonym| text.contains(synonym)) {
                return true;
            }
        }
    }

    false
}
