//! Analysis orchestration: the traditional heuristic pass, the optional AI
//! enhancement, and the unified result handed back to callers.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::ai::{request_ai_analysis, AiSuggestion};
use crate::analysis::keywords::extract_keywords;
use crate::analysis::merge::merge_analyses;
use crate::analysis::metadata::{extract_metadata, ResumeMetadata};
use crate::analysis::recommendations::{generate_insights, generate_recommendations, Insight, Recommendation};
use crate::analysis::scoring::{composite_score, score_breakdown, ScoreBreakdown, ScoringWeights};
use crate::llm_client::LlmClient;

/// Missing keywords beyond this count are dropped from the result for
/// display. Scores, recommendations, and insights always see the full list.
pub const MISSING_KEYWORD_DISPLAY_CAP: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Traditional,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: u32,
    pub keyword_match: u32,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub total: usize,
}

/// The unified analysis result. Built fresh per invocation and never mutated
/// afterwards; `strengths`, `weaknesses`, and `ai_suggestions` are only
/// populated on the hybrid path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scores: Scores,
    pub keywords: KeywordSummary,
    pub recommendations: Vec<Recommendation>,
    pub insights: Vec<Insight>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_suggestions: Vec<AiSuggestion>,
    pub metadata: ResumeMetadata,
    pub analysis_type: AnalysisType,
    pub ai_enhanced: bool,
}

/// The deterministic heuristic pass. Pure text computation, no I/O, and
/// tolerant of arbitrarily short inputs.
pub fn traditional_analysis(resume_text: &str, job_description: &str) -> AnalysisResult {
    let resume_keywords = extract_keywords(resume_text);
    let job_keywords = extract_keywords(job_description);

    let matched: Vec<String> = job_keywords
        .iter()
        .filter(|jk| resume_keywords.iter().any(|rk| rk.eq_ignore_ascii_case(jk)))
        .cloned()
        .collect();
    let missing: Vec<String> = job_keywords
        .iter()
        .filter(|jk| !matched.iter().any(|m| m.eq_ignore_ascii_case(jk)))
        .cloned()
        .collect();

    let breakdown = score_breakdown(resume_text, matched.len(), job_keywords.len());
    let overall = composite_score(&breakdown, &ScoringWeights::default());
    let keyword_match = breakdown.keywords;

    // The full missing list drives everything below; the display cap is
    // applied only to the exposed copy.
    let recommendations = generate_recommendations(resume_text, &missing, overall);
    let insights = generate_insights(resume_text, &matched, &missing);
    let metadata = extract_metadata(resume_text);

    let mut missing_display = missing;
    missing_display.truncate(MISSING_KEYWORD_DISPLAY_CAP);

    AnalysisResult {
        scores: Scores {
            overall,
            keyword_match,
            breakdown,
        },
        keywords: KeywordSummary {
            matched,
            missing: missing_display,
            total: job_keywords.len(),
        },
        recommendations,
        insights,
        strengths: Vec::new(),
        weaknesses: Vec::new(),
        ai_suggestions: Vec::new(),
        metadata,
        analysis_type: AnalysisType::Traditional,
        ai_enhanced: false,
    }
}

/// Full analysis: heuristic pass first, then one AI attempt when requested
/// and configured. Any AI failure is logged and degrades to the traditional
/// result; it never aborts the analysis.
pub async fn analyze_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
    use_ai: bool,
) -> AnalysisResult {
    let traditional = traditional_analysis(resume_text, job_description);

    if use_ai && llm.is_configured() {
        match request_ai_analysis(resume_text, job_description, llm).await {
            Ok(ai) => return merge_analyses(traditional, Some(ai)),
            Err(e) => warn!("AI analysis failed, using traditional analysis only: {e}"),
        }
    }

    merge_analyses(traditional, None)
}
