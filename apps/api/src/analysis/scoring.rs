//! Heuristic Scorer - five independent 0-100 sub-scores and the weighted
//! composite ATS score.

use serde::{Deserialize, Serialize};

use crate::analysis::patterns;

/// Action verbs that signal measurable accomplishments. Matched as
/// case-insensitive substrings, 10 points each, capped at 60.
const ACTION_VERBS: &[&str] = &[
    "achieved",
    "improved",
    "increased",
    "decreased",
    "reduced",
    "managed",
    "led",
    "developed",
    "implemented",
    "created",
    "designed",
    "optimized",
];

/// Composite weights per sub-score. They sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword_match: u32,
    pub format: u32,
    pub structure: u32,
    pub contact: u32,
    pub measurable_results: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_match: 40,
            format: 25,
            structure: 20,
            contact: 10,
            measurable_results: 5,
        }
    }
}

/// The five named sub-scores, each clamped to 0-100 before weighting.
/// Field names follow the wire format the AI breakdown shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: u32,
    pub formatting: u32,
    pub structure: u32,
    pub contact: u32,
    pub results: u32,
}

/// Keyword-match sub-score: round(100 * matched / total), 0 for an empty
/// job keyword set.
pub fn keyword_match_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// Format quality: length band, year tokens, bullets, line breaks, and the
/// non-standard punctuation ratio. Capped at 100.
pub fn assess_format(text: &str) -> u32 {
    let mut score = 0;

    let word_count = patterns::word_count(text);
    if (300..=1000).contains(&word_count) {
        score += 30;
    } else if (200..=1500).contains(&word_count) {
        score += 20;
    } else {
        score += 10;
    }

    if patterns::has_year(text) {
        score += 20;
    }
    if patterns::has_bullet_points(text) {
        score += 20;
    }
    if text.contains('\n') {
        score += 15;
    }
    if patterns::special_char_ratio(text) < 0.05 {
        score += 15;
    }

    score.min(100)
}

/// Content structure: presence of the four canonical section phrases plus a
/// bonus when at least 3 short standalone lines look like headers.
pub fn assess_structure(text: &str) -> u32 {
    let mut score = 0;

    if patterns::has_experience_section(text) {
        score += 25;
    }
    if patterns::has_education_section(text) {
        score += 25;
    }
    if patterns::has_skills_section(text) {
        score += 25;
    }
    if patterns::has_summary_section(text) {
        score += 15;
    }
    if patterns::header_line_count(text) >= 3 {
        score += 10;
    }

    score.min(100)
}

/// Contact information: email and phone carry most of the weight, LinkedIn
/// and other professional links round it out.
pub fn assess_contact_info(text: &str) -> u32 {
    let mut score = 0;

    if patterns::has_email(text) {
        score += 35;
    }
    if patterns::has_phone(text) {
        score += 35;
    }
    if patterns::has_linkedin(text) {
        score += 15;
    }
    if patterns::has_professional_link(text) {
        score += 15;
    }

    score.min(100)
}

/// Measurable results: number/percentage/currency tokens plus distinct
/// action verbs.
pub fn assess_measurable_results(text: &str) -> u32 {
    let numbers = patterns::count_number_tokens(text);
    let mut score = if numbers >= 5 {
        40
    } else if numbers >= 3 {
        25
    } else if numbers >= 1 {
        15
    } else {
        0
    };

    let lower = text.to_lowercase();
    let verbs = ACTION_VERBS.iter().filter(|v| lower.contains(**v)).count() as u32;
    score += (verbs * 10).min(60);

    score.min(100)
}

/// Full sub-score breakdown for a resume against a job keyword set.
pub fn score_breakdown(resume_text: &str, matched_count: usize, job_total: usize) -> ScoreBreakdown {
    ScoreBreakdown {
        keywords: keyword_match_score(matched_count, job_total),
        formatting: assess_format(resume_text),
        structure: assess_structure(resume_text),
        contact: assess_contact_info(resume_text),
        results: assess_measurable_results(resume_text),
    }
}

/// Weighted composite: round(sum(weight_i * subscore_i) / 100), clamped to
/// 0-100. Integer round-half-up matches the documented invariant.
pub fn composite_score(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u32 {
    let weighted = breakdown.keywords * weights.keyword_match
        + breakdown.formatting * weights.format
        + breakdown.structure * weights.structure
        + breakdown.contact * weights.contact
        + breakdown.results * weights.measurable_results;
    ((weighted + 50) / 100).min(100)
}
