//! Markdown report generation

use super::ComplianceReport;
use crate::CoreResult;
use std::fmt::Write;

pub fn generate(report: &ComplianceReport) -> CoreResult<String> {
    let result = &report.result;
    let mut out = String::new();

    let _ = writeln!(out, "# Policy Compliance Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Report ID: `{}`", report.id);
    let _ = writeln!(out, "- Generated: {}", report.generated_at.to_rfc3339());
    let _ = writeln!(out, "- Policy SHA-256: `{}`", report.policy_sha256);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "|---|---|");
    let _ = writeln!(out, "| Axioms checked | {} |", result.axioms_checked);
    let _ = writeln!(out, "| Violations | {} |", result.total_violations);
    let _ = writeln!(out, "| Compliance score | {:.2} |", result.compliance_score);
    let _ = writeln!(out, "| Severity score | {:.2} |", result.severity_score);
    let _ = writeln!(
        out,
        "| Verdict | {} |",
        if result.is_compliant {
            "COMPLIANT"
        } else {
            "NON-COMPLIANT"
        }
    );
    let _ = writeln!(out, "| Risk level | {} |", result.risk_level);
    let _ = writeln!(out);

    if !result.violations.is_empty() {
        let _ = writeln!(out, "## Violations");
        let _ = writeln!(out);
        for (index, violation) in result.violations.iter().enumerate() {
            let _ = writeln!(out, "### {}. {}", index + 1, violation.reason);
            let _ = writeln!(out);
            let _ = writeln!(out, "- Axiom: {}", violation.axiom);
            let _ = writeln!(out, "- Severity: {:.1}", violation.severity);
            let _ = writeln!(out, "- Location: {}", violation.location);
            let _ = writeln!(out, "- Suggestion: {}", violation.suggestion);
            let _ = writeln!(out);
        }
    }

    if !result.recommendations.is_empty() {
        let _ = writeln!(out, "## Recommendations");
        let _ = writeln!(out);
        for recommendation in &result.recommendations {
            let _ = writeln!(out, "- {}", recommendation);
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::PolicyAnalyzer;

    #[test]
    fn test_markdown_report_sections() {
        let analyzer = PolicyAnalyzer::new(vec!["AI must not deceive users".to_string()]);
        let policy = "Our system may mislead users for engagement.";
        let report = ComplianceReport::new(policy, analyzer.analyze(policy));

        let output = generate(&report).unwrap();
        assert!(output.starts_with("# Policy Compliance Report"));
        assert!(output.contains("| Risk level | CRITICAL |"));
        assert!(output.contains("## Violations"));
        assert!(output.contains("- Axiom: AI must not deceive users"));
        assert!(output.contains("## Recommendations"));
    }

    #[test]
    fn test_clean_policy_has_no_violation_section() {
        let analyzer = PolicyAnalyzer::new(vec!["AI must protect privacy".to_string()]);
        let policy = "We protect privacy rigorously.";
        let report = ComplianceReport::new(policy, analyzer.analyze(policy));

        let output = generate(&report).unwrap();
        assert!(output.contains("| Verdict | COMPLIANT |"));
        assert!(!output.contains("## Violations"));
        assert!(!output.contains("## Recommendations"));
    }
}
