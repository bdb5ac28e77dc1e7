//! Axiom pattern compilation
//!
//! Compiles each axiom into the constraint fragments used during analysis.
//! Compilation happens once per analyzer instance; the axiom set is
//! immutable after construction.

use crate::extract::extract_constraints;
use serde::{Deserialize, Serialize};

/// Trigger words marking an explicit prohibition
const PROHIBIT_TRIGGERS: [&str; 3] = ["prohibit", "forbid", "ban"];

/// Trigger words marking an explicit requirement
const REQUIRE_TRIGGERS: [&str; 3] = ["require", "ensure", "guarantee"];

/// Compiled detection pattern for a single axiom
///
/// One axiom may contribute to several fragment categories when it contains
/// several trigger words. All fragments are lower-cased with trailing
/// punctuation stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledPattern {
    /// Original axiom text
    pub axiom: String,
    /// Guarantees the policy must provide ("must ...")
    pub must_fragments: Vec<String>,
    /// Actions the policy must not enable ("must not ...")
    pub must_not_fragments: Vec<String>,
    /// Fragments after prohibit/forbid/ban
    pub prohibited_fragments: Vec<String>,
    /// Fragments after require/ensure/guarantee
    pub required_fragments: Vec<String>,
}

impl CompiledPattern {
    /// Compile a single axiom into its constraint fragments
    pub fn compile(axiom: &str) -> Self {
        let lower = axiom.to_lowercase();

        // A "must not ..." occurrence also matches the bare "must" trigger,
        // leaving a fragment of the form "not ...". Those belong solely to
        // the must-not category; keeping them as required guarantees would
        // double-count every prohibition axiom.
        let must_fragments = extract_constraints(&lower, &["must"])
            .into_iter()
            .filter(|f| !f.starts_with("not "))
            .collect();

        Self {
            axiom: axiom.to_string(),
            must_fragments,
            must_not_fragments: extract_constraints(&lower, &["must not"]),
            prohibited_fragments: extract_constraints(&lower, &PROHIBIT_TRIGGERS),
            required_fragments: extract_constraints(&lower, &REQUIRE_TRIGGERS),
        }
    }
}

/// Compile the full axiom set, preserving axiom order
pub fn compile_patterns(axioms: &[String]) -> Vec<CompiledPattern> {
    axioms.iter().map(|a| CompiledPattern::compile(a)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_axiom() {
        let pattern = CompiledPattern::compile("AI must protect privacy");
        assert_eq!(pattern.must_fragments, vec!["protect privacy"]);
        assert!(pattern.must_not_fragments.is_empty());
    }

    #[test]
    fn test_must_not_axiom() {
        let pattern = CompiledPattern::compile("AI must not deceive users");
        assert_eq!(pattern.must_not_fragments, vec!["deceive users"]);
        // "not deceive users" is a prohibition, not a required guarantee
        assert!(pattern.must_fragments.is_empty());
    }

    #[test]
    fn test_prohibit_triggers() {
        let pattern = CompiledPattern::compile("We forbid data resale.");
        assert_eq!(pattern.prohibited_fragments, vec!["data resale"]);
    }

    #[test]
    fn test_require_triggers() {
        let pattern =
            CompiledPattern::compile("Must ensure explicit consent for processing");
        assert_eq!(
            pattern.required_fragments,
            vec!["explicit consent for processing"]
        );
    }

    #[test]
    fn test_axiom_text_preserved_verbatim() {
        let pattern = CompiledPattern::compile("AI Must Protect Privacy");
        assert_eq!(pattern.axiom, "AI Must Protect Privacy");
        assert_eq!(pattern.must_fragments, vec!["protect privacy"]);
    }

    #[test]
    fn test_compile_patterns_preserves_order() {
        let axioms = vec![
            "AI must not deceive users".to_string(),
            "AI must protect privacy".to_string(),
        ];
        let patterns = compile_patterns(&axioms);
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].axiom, "AI must not deceive users");
        assert_eq!(patterns[1].axiom, "AI must protect privacy");
    }
}
