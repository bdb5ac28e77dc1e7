//! JSON report generation

use super::ComplianceReport;
use crate::CoreResult;

pub fn generate(report: &ComplianceReport) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::PolicyAnalyzer;

    #[test]
    fn test_json_report_fields() {
        let analyzer = PolicyAnalyzer::new(vec!["AI must not deceive users".to_string()]);
        let policy = "Our system may mislead users for engagement.";
        let report = ComplianceReport::new(policy, analyzer.analyze(policy));

        let output = generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(value["policy_sha256"].is_string());
        assert_eq!(value["result"]["total_violations"], 1);
        assert_eq!(value["result"]["risk_level"], "CRITICAL");
        assert_eq!(value["result"]["violations"][0]["severity"], 0.8);
    }
}
