//! Policy analysis engine
//!
//! Runs every compiled axiom pattern against a policy document, collects
//! violations, and derives the compliance score, severity score, and risk
//! tier. `analyze` never fails: the worst outcome for any string input is a
//! zero-violation, fully compliant result.

use crate::contradiction::check_contradictions;
use crate::matcher::contains_action;
use crate::pattern::{compile_patterns, CompiledPattern};
use crate::{AnalyzerConfig, RiskLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity for a prohibited action found in the policy
const PROHIBITED_ACTION_SEVERITY: f64 = 0.8;

/// Severity for a required guarantee missing from the policy
const MISSING_GUARANTEE_SEVERITY: f64 = 0.6;

/// Characters of policy text kept in the result preview
const PREVIEW_CHARS: usize = 200;

/// Characters of a matching line kept in a violation location snippet
const LOCATION_SNIPPET_CHARS: usize = 50;

/// Generic recommendations appended when violations exceed half the axiom count
const GENERIC_RECOMMENDATIONS: [&str; 2] = [
    "Consider comprehensive policy review with ethics committee",
    "Implement ongoing compliance monitoring for all AI deployments",
];

/// A detected conflict between policy text and an axiom's constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Text of the axiom that produced this violation
    pub axiom: String,
    /// Human-readable explanation
    pub reason: String,
    /// Severity in [0, 1]
    pub severity: f64,
    /// Line reference with snippet, or a policy-scope-level literal
    pub location: String,
    /// Remediation text; not guaranteed unique across violations
    pub suggestion: String,
}

/// Result of one `analyze` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub timestamp: DateTime<Utc>,
    pub policy_preview: String,
    pub axioms_checked: usize,
    pub total_violations: usize,
    /// 1 minus the violation rate; may be negative when violations exceed
    /// axioms (not clamped)
    pub compliance_score: f64,
    /// Sum of violation severities divided by the axiom count
    pub severity_score: f64,
    pub is_compliant: bool,
    pub risk_level: RiskLevel,
    pub violations: Vec<Violation>,
    pub recommendations: Vec<String>,
}

/// Axiom compliance analyzer
///
/// Axioms and configuration are fixed at construction; detection patterns
/// are compiled once and reused for every `analyze` call. The analyzer
/// holds no mutable state, so shared references are safe across threads.
pub struct PolicyAnalyzer {
    axioms: Vec<String>,
    config: AnalyzerConfig,
    patterns: Vec<CompiledPattern>,
}

impl PolicyAnalyzer {
    /// Create an analyzer with the default configuration
    pub fn new(axioms: Vec<String>) -> Self {
        Self::with_config(axioms, AnalyzerConfig::default())
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(axioms: Vec<String>, config: AnalyzerConfig) -> Self {
        let patterns = compile_patterns(&axioms);
        Self {
            axioms,
            config,
            patterns,
        }
    }

    pub fn axioms(&self) -> &[String] {
        &self.axioms
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Analyze a policy document
    pub fn analyze(&self, policy_text: &str) -> AnalysisResult {
        self.analyze_with_context(policy_text, "")
    }

    /// Analyze a policy document with additional caller context
    ///
    /// The context string is informational only; it does not affect scoring.
    pub fn analyze_with_context(&self, policy_text: &str, context: &str) -> AnalysisResult {
        let policy_lower = policy_text.to_lowercase();
        let mut violations = Vec::new();

        if !context.is_empty() {
            debug!(context, "analyzing policy with caller context");
        }

        for pattern in &self.patterns {
            // Prohibited actions present in the policy
            for prohibited in &pattern.must_not_fragments {
                if contains_action(&policy_lower, prohibited) {
                    violations.push(Violation {
                        axiom: pattern.axiom.clone(),
                        reason: format!("Policy allows or enables: {prohibited}"),
                        severity: PROHIBITED_ACTION_SEVERITY,
                        location: find_location(policy_text, prohibited),
                        suggestion: format!("Remove or restrict references to: {prohibited}"),
                    });
                }
            }

            // Required guarantees missing from the policy
            for required in &pattern.must_fragments {
                if !contains_action(&policy_lower, required) {
                    violations.push(Violation {
                        axiom: pattern.axiom.clone(),
                        reason: format!("Policy does not ensure: {required}"),
                        severity: MISSING_GUARANTEE_SEVERITY,
                        location: "Policy scope".to_string(),
                        suggestion: format!("Add explicit guarantee for: {required}"),
                    });
                }
            }

            // Objective contradictions
            if self.config.enable_semantic {
                violations.extend(check_contradictions(&pattern.axiom, &policy_lower));
            }
        }

        let axiom_count = self.axioms.len();
        let total_score = if axiom_count > 0 {
            violations.len() as f64 / axiom_count as f64
        } else {
            // Empty axiom set: vacuously compliant
            0.0
        };
        let severity_score = if violations.is_empty() {
            0.0
        } else {
            violations.iter().map(|v| v.severity).sum::<f64>() / axiom_count as f64
        };

        debug!(
            axioms = axiom_count,
            violations = violations.len(),
            total_score,
            "policy analysis complete"
        );

        let recommendations = self.generate_recommendations(&violations);

        AnalysisResult {
            timestamp: Utc::now(),
            policy_preview: preview(policy_text),
            axioms_checked: axiom_count,
            total_violations: violations.len(),
            compliance_score: 1.0 - total_score,
            severity_score,
            is_compliant: total_score < self.config.threshold,
            risk_level: RiskLevel::from_violation_rate(total_score),
            violations,
            recommendations,
        }
    }

    /// Deduplicated suggestions in first-seen order, plus generic entries
    /// under a high-violation condition
    fn generate_recommendations(&self, violations: &[Violation]) -> Vec<String> {
        let mut recommendations: Vec<String> = Vec::new();

        for violation in violations {
            if !recommendations.contains(&violation.suggestion) {
                recommendations.push(violation.suggestion.clone());
            }
        }

        if violations.len() as f64 > self.axioms.len() as f64 * 0.5 {
            for generic in GENERIC_RECOMMENDATIONS {
                recommendations.push(generic.to_string());
            }
        }

        recommendations
    }
}

/// Locate the first line containing `search_term` (already lower-cased)
///
/// Returns a 1-based line reference with a truncated snippet, or the
/// policy-scope literal when no line matches.
fn find_location(policy_text: &str, search_term: &str) -> String {
    for (index, line) in policy_text.lines().enumerate() {
        if line.to_lowercase().contains(search_term) {
            let snippet: String = line.trim().chars().take(LOCATION_SNIPPET_CHARS).collect();
            return format!("Line {}: {}...", index + 1, snippet);
        }
    }
    "Policy scope".to_string()
}

/// First 200 characters of the policy, ellipsis-suffixed when truncated
fn preview(policy_text: &str) -> String {
    if policy_text.chars().count() > PREVIEW_CHARS {
        let head: String = policy_text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        policy_text.to_string()
    }
}
