//! Objective contradiction checking
//!
//! Flags axioms whose positive requirement is undercut by a competing
//! emphasis in the policy text, using a fixed table of
//! (negative phrases, positive phrases) pairs.

use crate::analyzer::Violation;

/// Severity assigned to a contradiction-pair match
const CONTRADICTION_SEVERITY: f64 = 0.7;

/// Fixed contradiction pairs, checked in order
///
/// Versioned data owned by this module; compiled in to keep scoring
/// deterministic and auditable.
const CONTRADICTION_PAIRS: [(&[&str], &[&str]); 3] = [
    (
        &["optimize profit", "maximize revenue", "reduce costs"],
        &["prioritize safety", "ensure wellbeing", "protect users"],
    ),
    (
        &["efficiency", "speed", "performance"],
        &["thoroughness", "accuracy", "reliability"],
    ),
    (
        &["collect data", "analyze behavior", "track users"],
        &["respect privacy", "minimize data", "anonymous"],
    ),
];

/// Check one axiom against the contradiction-pair table.
///
/// `policy_lower` must already be lower-cased. A pair fires when any of its
/// negative phrases appears in the policy text while any of its positive
/// phrases appears in the axiom text; the emitted violation references the
/// first phrase on each side. Returns one violation per firing pair.
pub fn check_contradictions(axiom: &str, policy_lower: &str) -> Vec<Violation> {
    let axiom_lower = axiom.to_lowercase();
    let mut violations = Vec::new();

    for (negatives, positives) in &CONTRADICTION_PAIRS {
        let negative_in_policy = negatives.iter().any(|n| policy_lower.contains(n));
        let positive_required = positives.iter().any(|p| axiom_lower.contains(p));

        if negative_in_policy && positive_required {
            violations.push(Violation {
                axiom: axiom.to_string(),
                reason: format!(
                    "Policy emphasizes {} which may conflict with {}",
                    negatives[0], positives[0]
                ),
                severity: CONTRADICTION_SEVERITY,
                location: "Policy objectives".to_string(),
                suggestion: format!(
                    "Add balancing language or constraints for {}",
                    positives[0]
                ),
            });
        }
    }

    violations
}
