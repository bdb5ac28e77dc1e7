//! Compliance report generation

pub mod json;
pub mod markdown;

use crate::analyzer::AnalysisResult;
use crate::CoreResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
}

/// An analysis result packaged for audit trails
///
/// Carries a SHA-256 digest of the analyzed policy text so a report can be
/// tied back to the exact document it scored.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub policy_sha256: String,
    pub result: AnalysisResult,
}

impl ComplianceReport {
    pub fn new(policy_text: &str, result: AnalysisResult) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(policy_text.as_bytes());

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            policy_sha256: hex::encode(hasher.finalize()),
            result,
        }
    }
}

/// Generate a report in the specified format
pub fn generate_report(report: &ComplianceReport, format: ReportFormat) -> CoreResult<String> {
    match format {
        ReportFormat::Json => json::generate(report),
        ReportFormat::Markdown => markdown::generate(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::PolicyAnalyzer;

    #[test]
    fn test_report_hashes_policy_text() {
        let analyzer = PolicyAnalyzer::new(vec!["AI must protect privacy".to_string()]);
        let policy = "We protect privacy rigorously.";
        let report = ComplianceReport::new(policy, analyzer.analyze(policy));

        assert_eq!(report.policy_sha256.len(), 64);

        let again = ComplianceReport::new(policy, analyzer.analyze(policy));
        assert_eq!(report.policy_sha256, again.policy_sha256);
        assert_ne!(report.id, again.id);
    }
}
