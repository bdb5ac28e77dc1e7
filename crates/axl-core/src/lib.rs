//! Axiom Linter Core Engine
//!
//! This crate provides the core engine for scoring free-text policy
//! documents against natural-language axioms: compiling axioms into
//! constraint patterns, detecting violations, and deriving compliance
//! scores, risk tiers, and remediation suggestions.
//!
//! The engine is a heuristic first-pass linter built on surface-level
//! keyword and substring matching. It is not a formal verifier.

pub mod analyzer;
pub mod contradiction;
pub mod extract;
pub mod matcher;
pub mod pattern;
pub mod report;
pub mod templates;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use analyzer::{AnalysisResult, PolicyAnalyzer, Violation};
pub use pattern::CompiledPattern;
pub use report::{ComplianceReport, ReportFormat};
pub use templates::ComplianceTemplate;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Analyzer configuration
///
/// `threshold` is the violation-rate cutoff for the compliant/non-compliant
/// verdict. Out-of-range values are accepted as given; scores may then fall
/// outside conventional bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Violation rate below which a policy is considered compliant
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Enable contradiction-pair checking
    #[serde(default = "default_enable_semantic")]
    pub enable_semantic: bool,
    /// Reserved for stricter matching modes; carried but not consulted
    #[serde(default)]
    pub strict_mode: bool,
}

fn default_threshold() -> f64 {
    0.3
}

fn default_enable_semantic() -> bool {
    true
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            enable_semantic: true,
            strict_mode: false,
        }
    }
}

/// Risk tiers derived from the violation rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Tier a violation rate (violations per axiom)
    ///
    /// The cut points are fixed constants, independent of the configured
    /// compliance threshold.
    pub fn from_violation_rate(rate: f64) -> Self {
        if rate < 0.1 {
            RiskLevel::Low
        } else if rate < 0.3 {
            RiskLevel::Moderate
        } else if rate < 0.5 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Moderate => write!(f, "MODERATE"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}
