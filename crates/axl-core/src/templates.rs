//! Named compliance templates
//!
//! Static presets bundling an axiom list with a compliance threshold.
//! The registry is process-wide read-only data, built once on first use
//! and never mutated.

use crate::analyzer::PolicyAnalyzer;
use crate::AnalyzerConfig;
use serde::Serialize;
use std::sync::OnceLock;

/// A named axiom/threshold bundle
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceTemplate {
    pub id: String,
    pub name: String,
    pub axioms: Vec<String>,
    pub threshold: f64,
}

impl ComplianceTemplate {
    /// Build an analyzer configured with this template's axioms and threshold
    pub fn analyzer(&self) -> PolicyAnalyzer {
        PolicyAnalyzer::with_config(
            self.axioms.clone(),
            AnalyzerConfig {
                threshold: self.threshold,
                ..Default::default()
            },
        )
    }
}

fn build_registry() -> Vec<ComplianceTemplate> {
    vec![
        ComplianceTemplate {
            id: "healthcare".to_string(),
            name: "Healthcare AI Ethics".to_string(),
            axioms: vec![
                "AI must prioritize patient well-being above all else".to_string(),
                "AI must not discriminate based on protected characteristics".to_string(),
                "AI must maintain strict patient confidentiality".to_string(),
                "AI must provide accurate medical information".to_string(),
            ],
            threshold: 0.3,
        },
        ComplianceTemplate {
            id: "gdpr".to_string(),
            name: "GDPR Data Protection".to_string(),
            axioms: vec![
                "Must obtain explicit user consent for data processing".to_string(),
                "Must allow users to delete their data upon request".to_string(),
                "Must not transfer data to unsafe jurisdictions".to_string(),
                "Must implement data protection by design".to_string(),
            ],
            threshold: 0.2,
        },
        ComplianceTemplate {
            id: "finance".to_string(),
            name: "Financial Services Ethics".to_string(),
            axioms: vec![
                "AI must not engage in market manipulation".to_string(),
                "AI must treat all customers fairly without discrimination".to_string(),
                "AI must maintain financial system integrity".to_string(),
                "AI must provide transparent explanations for decisions".to_string(),
            ],
            threshold: 0.25,
        },
    ]
}

/// All registered templates
pub fn templates() -> &'static [ComplianceTemplate] {
    static REGISTRY: OnceLock<Vec<ComplianceTemplate>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

/// Look up a template by id
pub fn find_template(id: &str) -> Option<&'static ComplianceTemplate> {
    templates().iter().find(|t| t.id == id)
}
