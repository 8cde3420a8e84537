//! Merge Policy - reconciles the heuristic result with an optional AI
//! analysis into one unified result. AI values win where present, heuristic
//! values survive field-by-field otherwise.

use crate::analysis::ai::AiAnalysis;
use crate::analysis::analyzer::{AnalysisResult, AnalysisType, KeywordSummary, Scores};

/// Merges the heuristic result with an optional AI analysis.
///
/// Absent AI: pure pass-through, tagged traditional. Present AI: keyword
/// sets become order-preserving unions (heuristic first), AI scores take
/// precedence field-by-field, recommendations concatenate, and insights and
/// metadata stay heuristic.
pub fn merge_analyses(traditional: AnalysisResult, ai: Option<AiAnalysis>) -> AnalysisResult {
    let Some(ai) = ai else {
        return traditional;
    };

    let (ai_matched, ai_missing, relevance_score) = match ai.keyword_analysis {
        Some(ka) => (ka.matched, ka.missing, ka.relevance_score),
        None => (Vec::new(), Vec::new(), None),
    };

    let matched = union(traditional.keywords.matched, ai_matched);
    let missing = union(traditional.keywords.missing, ai_missing);

    let (ai_overall, ai_breakdown) = match ai.ats_score {
        Some(score) => (score.overall, score.breakdown),
        None => (None, None),
    };

    let mut breakdown = traditional.scores.breakdown;
    if let Some(b) = ai_breakdown {
        breakdown.keywords = b.keywords.unwrap_or(breakdown.keywords);
        breakdown.formatting = b.formatting.unwrap_or(breakdown.formatting);
        breakdown.structure = b.structure.unwrap_or(breakdown.structure);
        breakdown.contact = b.contact.unwrap_or(breakdown.contact);
        breakdown.results = b.results.unwrap_or(breakdown.results);
    }

    let mut recommendations = traditional.recommendations;
    recommendations.extend(ai.recommendations);

    AnalysisResult {
        scores: Scores {
            overall: ai_overall.unwrap_or(traditional.scores.overall),
            // The model's holistic relevance judgement replaces the literal
            // match rate here even though the keyword sets are unions. This
            // asymmetry is observable, documented behavior.
            keyword_match: relevance_score.unwrap_or(traditional.scores.keyword_match),
            breakdown,
        },
        keywords: KeywordSummary {
            matched,
            missing,
            total: traditional.keywords.total,
        },
        recommendations,
        insights: traditional.insights,
        strengths: ai.strengths,
        weaknesses: ai.weaknesses,
        ai_suggestions: ai.ai_enhanced_suggestions,
        metadata: traditional.metadata,
        analysis_type: AnalysisType::Hybrid,
        ai_enhanced: true,
    }
}

/// Order-preserving exact-string union: every `first` entry, then `additions`
/// entries not already present.
fn union(first: Vec<String>, additions: Vec<String>) -> Vec<String> {
    let mut merged = first;
    for term in additions {
        if !merged.contains(&term) {
            merged.push(term);
        }
    }
    merged
}
