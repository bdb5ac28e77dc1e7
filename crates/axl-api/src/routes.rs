//! Analysis and template routes

use axl_core::analyzer::AnalysisResult;
use axl_core::templates::{self, ComplianceTemplate};
use axl_core::{AnalyzerConfig, PolicyAnalyzer};
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    /// Preset template id; takes precedence over `axioms`
    pub template: Option<String>,
    /// Explicit axiom list when no template is given
    pub axioms: Option<Vec<String>>,
    pub threshold: Option<f64>,
    pub enable_semantic: Option<bool>,
    /// Policy text to analyze
    pub policy: String,
    /// Informational context, not used by scoring
    pub context: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_templates() -> Json<&'static [ComplianceTemplate]> {
    Json(templates::templates())
}

pub async fn analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let (analyzer, template_name) = match &request.template {
        Some(id) => {
            let template = templates::find_template(id)
                .ok_or_else(|| bad_request(format!("unknown template: {id}")))?;
            let config = AnalyzerConfig {
                threshold: template.threshold,
                enable_semantic: request.enable_semantic.unwrap_or(true),
                ..Default::default()
            };
            (
                PolicyAnalyzer::with_config(template.axioms.clone(), config),
                Some(template.name.clone()),
            )
        }
        None => {
            let axioms = request
                .axioms
                .clone()
                .ok_or_else(|| bad_request("either template or axioms is required"))?;
            let config = AnalyzerConfig {
                threshold: request.threshold.unwrap_or(0.3),
                enable_semantic: request.enable_semantic.unwrap_or(true),
                ..Default::default()
            };
            (PolicyAnalyzer::with_config(axioms, config), None)
        }
    };

    let context = request.context.as_deref().unwrap_or("");
    let result = analyzer.analyze_with_context(&request.policy, context);

    Ok(Json(AnalyzeResponse {
        template: template_name,
        result,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: serde_json::Value) -> Json<AnalyzeRequest> {
        Json(serde_json::from_value(body).unwrap())
    }

    #[tokio::test]
    async fn test_analyze_with_explicit_axioms() {
        let response = analyze(request(serde_json::json!({
            "axioms": ["AI must not deceive users"],
            "policy": "Our system may mislead users for engagement."
        })))
        .await
        .unwrap();

        assert_eq!(response.0.result.total_violations, 1);
        assert!(response.0.template.is_none());
    }

    #[tokio::test]
    async fn test_analyze_with_template() {
        let response = analyze(request(serde_json::json!({
            "template": "gdpr",
            "policy": "We obtain explicit user consent for data processing, allow users \
                       to delete their data upon request, and implement data protection \
                       by design."
        })))
        .await
        .unwrap();

        assert_eq!(response.0.template.as_deref(), Some("GDPR Data Protection"));
        assert_eq!(response.0.result.axioms_checked, 4);
        assert_eq!(response.0.result.total_violations, 0);
        assert!(response.0.result.is_compliant);
    }

    #[tokio::test]
    async fn test_unknown_template_is_client_error() {
        let error = analyze(request(serde_json::json!({
            "template": "aviation",
            "policy": "irrelevant"
        })))
        .await
        .err()
        .unwrap();

        assert_eq!(error.0, StatusCode::BAD_REQUEST);
        assert!(error.1 .0.error.contains("unknown template"));
    }

    #[tokio::test]
    async fn test_missing_axioms_and_template_is_client_error() {
        let error = analyze(request(serde_json::json!({ "policy": "text" })))
            .await
            .err()
            .unwrap();

        assert_eq!(error.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_response_flattens_result_fields() {
        let response = analyze(request(serde_json::json!({
            "axioms": [],
            "policy": "anything"
        })))
        .await
        .unwrap();

        let value = serde_json::to_value(&response.0).unwrap();
        assert_eq!(value["axioms_checked"], 0);
        assert_eq!(value["compliance_score"], 1.0);
        assert_eq!(value["risk_level"], "LOW");
    }
}
