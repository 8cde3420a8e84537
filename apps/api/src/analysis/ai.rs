//! AI Enhancement - requests a structured resume analysis from the LLM and
//! validates the response against the documented schema.
//!
//! Wire names are camelCase because that is the JSON schema the prompt asks
//! the model to produce. Absent optional fields deserialize to defaults so a
//! sparse but valid response is never rejected.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::analysis::recommendations::Recommendation;
use crate::llm_client::{AiError, LlmClient};

/// Keyword view of the AI analysis. `relevance_score` is the model's
/// holistic 0-100 relevance judgement, distinct from the literal match rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiKeywordAnalysis {
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub relevance_score: Option<u32>,
}

/// AI sub-score breakdown. The model is asked for four fields; `results` is
/// accepted if present so a richer response still merges field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiScoreBreakdown {
    #[serde(default)]
    pub formatting: Option<u32>,
    #[serde(default)]
    pub keywords: Option<u32>,
    #[serde(default)]
    pub structure: Option<u32>,
    #[serde(default)]
    pub contact: Option<u32>,
    #[serde(default)]
    pub results: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAtsScore {
    #[serde(default)]
    pub overall: Option<u32>,
    #[serde(default)]
    pub breakdown: Option<AiScoreBreakdown>,
}

/// A concrete rewrite suggestion from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: String,
    pub original: String,
    pub improved: String,
    pub explanation: String,
}

/// Full structured output of the AI analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    #[serde(default)]
    pub keyword_analysis: Option<AiKeywordAnalysis>,
    #[serde(default)]
    pub ats_score: Option<AiAtsScore>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub ai_enhanced_suggestions: Vec<AiSuggestion>,
}

/// Requests an AI analysis of the resume against the job description.
///
/// Single attempt: failures (including a malformed response) surface as
/// [`AiError`] for the orchestration layer to degrade on, never retried here.
pub async fn request_ai_analysis(
    resume_text: &str,
    job_description: &str,
    llm: &LlmClient,
) -> Result<AiAnalysis, AiError> {
    let prompt = ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description);
    llm.call_json::<AiAnalysis>(&prompt, ANALYSIS_SYSTEM).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::recommendations::{Category, Priority};

    #[test]
    fn test_full_response_deserializes() {
        let json = r#"{
            "keywordAnalysis": {
                "matched": ["rust", "tokio"],
                "missing": ["kubernetes"],
                "relevanceScore": 72
            },
            "atsScore": {
                "overall": 81,
                "breakdown": {
                    "formatting": 90,
                    "keywords": 70,
                    "structure": 85,
                    "contact": 100
                }
            },
            "strengths": ["Deep async Rust experience"],
            "weaknesses": ["No container orchestration exposure"],
            "recommendations": [
                {
                    "priority": "high",
                    "category": "keywords",
                    "title": "Mention Kubernetes",
                    "description": "Add container orchestration experience",
                    "example": "Deployed services to Kubernetes clusters"
                }
            ],
            "aiEnhancedSuggestions": [
                {
                    "type": "bullet",
                    "original": "Worked on backend",
                    "improved": "Built async Rust services handling 10k rps",
                    "explanation": "Specific and quantified"
                }
            ]
        }"#;

        let analysis: AiAnalysis = serde_json::from_str(json).unwrap();
        let keyword_analysis = analysis.keyword_analysis.unwrap();
        assert_eq!(keyword_analysis.matched, vec!["rust", "tokio"]);
        assert_eq!(keyword_analysis.relevance_score, Some(72));

        let ats = analysis.ats_score.unwrap();
        assert_eq!(ats.overall, Some(81));
        let breakdown = ats.breakdown.unwrap();
        assert_eq!(breakdown.formatting, Some(90));
        assert_eq!(breakdown.results, None);

        assert_eq!(analysis.recommendations.len(), 1);
        assert_eq!(analysis.recommendations[0].priority, Priority::High);
        assert_eq!(analysis.recommendations[0].category, Category::Keywords);
        assert_eq!(
            analysis.recommendations[0].example.as_deref(),
            Some("Deployed services to Kubernetes clusters")
        );
        assert_eq!(analysis.recommendations[0].impact, None);

        assert_eq!(analysis.ai_enhanced_suggestions[0].suggestion_type, "bullet");
    }

    #[test]
    fn test_sparse_response_uses_defaults() {
        let analysis: AiAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.keyword_analysis.is_none());
        assert!(analysis.ats_score.is_none());
        assert!(analysis.strengths.is_empty());
        assert!(analysis.recommendations.is_empty());
        assert!(analysis.ai_enhanced_suggestions.is_empty());
    }

    #[test]
    fn test_unknown_priority_is_schema_violation() {
        let json = r#"{
            "recommendations": [{
                "priority": "urgent",
                "category": "keywords",
                "title": "t",
                "description": "d"
            }]
        }"#;
        assert!(serde_json::from_str::<AiAnalysis>(json).is_err());
    }

    #[test]
    fn test_prompt_template_substitution() {
        let prompt = ANALYSIS_PROMPT_TEMPLATE
            .replace("{resume_text}", "RESUME BODY")
            .replace("{job_description}", "JD BODY");
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
