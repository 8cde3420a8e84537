//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::analyzer::{analyze_resume, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

/// Both inputs must be at least this many characters. The engine itself
/// tolerates shorter text; the boundary enforces the product rule.
pub const MIN_INPUT_CHARS: usize = 50;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

fn default_use_ai() -> bool {
    true
}

/// POST /api/v1/analyze
///
/// Scores a resume against a job description. AI enhancement is attempted
/// when requested and configured; its failures degrade silently to the
/// traditional result, so this handler only rejects invalid input.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if request.resume_text.trim().chars().count() < MIN_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "resume_text must be at least {MIN_INPUT_CHARS} characters"
        )));
    }
    if request.job_description.trim().chars().count() < MIN_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "job_description must be at least {MIN_INPUT_CHARS} characters"
        )));
    }

    let result = analyze_resume(
        &state.llm,
        &request.resume_text,
        &request.job_description,
        request.use_ai,
    )
    .await;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_ai_defaults_to_true() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"resume_text": "resume body", "job_description": "jd body"}"#,
        )
        .unwrap();
        assert!(request.use_ai);
    }

    #[test]
    fn test_use_ai_can_be_disabled() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"resume_text": "resume body", "job_description": "jd body", "use_ai": false}"#,
        )
        .unwrap();
        assert!(!request.use_ai);
    }
}
