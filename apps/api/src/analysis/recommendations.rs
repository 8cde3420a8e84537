//! Recommendation & Insight Generator - rule-based improvement suggestions
//! and descriptive insights derived from the heuristic scorer's outputs.
//!
//! Recommendations are emitted in a fixed authoring order that reflects
//! severity intent. The order is part of the contract; callers may re-sort
//! but the generator never does.

use serde::{Deserialize, Serialize};

use crate::analysis::patterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keywords,
    Formatting,
    Content,
    Structure,
}

/// A single improvement suggestion. `impact` is set by this generator;
/// `example` may arrive on AI-supplied recommendations instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: Category,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsightStatus {
    Excellent,
    Good,
    NeedsWork,
}

/// A labelled observation about the resume with a traffic-light status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub label: String,
    pub value: String,
    pub description: String,
    pub status: InsightStatus,
}

/// Generates prioritized recommendations in fixed rule order:
/// missing keywords, structure, contact info, quantifiable results, action
/// verbs (always), LinkedIn.
///
/// `missing_keywords` is the full uncapped list; the 15-item display cap is
/// presentation-only and never reaches this function.
pub fn generate_recommendations(
    resume_text: &str,
    missing_keywords: &[String],
    overall_score: u32,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !missing_keywords.is_empty() {
        let top = &missing_keywords[..missing_keywords.len().min(5)];
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: Category::Keywords,
            title: "Add Missing Keywords".to_string(),
            description: format!("Incorporate these important keywords: {}", top.join(", ")),
            impact: Some("High - Significantly improves ATS compatibility".to_string()),
            example: None,
        });
    }

    if overall_score < 70 {
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: Category::Structure,
            title: "Improve Resume Structure".to_string(),
            description:
                "Use clear section headers: Professional Summary, Experience, Education, Skills"
                    .to_string(),
            impact: Some("High - Makes resume easier for ATS to parse".to_string()),
            example: None,
        });
    }

    // The original checks for a bare '@' here, not the full email pattern.
    if !resume_text.contains('@') {
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: Category::Formatting,
            title: "Add Contact Information".to_string(),
            description:
                "Include your email address and phone number at the top of your resume".to_string(),
            impact: Some("Critical - Required for employer contact".to_string()),
            example: None,
        });
    }

    if patterns::count_number_tokens(resume_text) < 3 {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            category: Category::Content,
            title: "Add Quantifiable Achievements".to_string(),
            description: "Include numbers, percentages, and metrics to demonstrate impact \
                          (e.g., \"Increased sales by 25%\")"
                .to_string(),
            impact: Some("Medium - Makes accomplishments more concrete".to_string()),
            example: None,
        });
    }

    recommendations.push(Recommendation {
        priority: Priority::Medium,
        category: Category::Content,
        title: "Use Strong Action Verbs".to_string(),
        description: "Start bullet points with powerful verbs like \"Managed\", \"Developed\", \
                      \"Achieved\", \"Optimized\""
            .to_string(),
        impact: Some("Medium - Creates stronger impression".to_string()),
        example: None,
    });

    if !patterns::has_linkedin(resume_text) {
        recommendations.push(Recommendation {
            priority: Priority::Low,
            category: Category::Formatting,
            title: "Add LinkedIn Profile".to_string(),
            description: "Include your LinkedIn profile URL to show professional online presence"
                .to_string(),
            impact: Some("Low - Provides additional context for recruiters".to_string()),
            example: None,
        });
    }

    recommendations
}

/// The four fixed insights: match rate, length, skills alignment, and ATS
/// readability. `missing` is the full uncapped list so the match rate is
/// computed over the real keyword universe.
pub fn generate_insights(
    resume_text: &str,
    matched: &[String],
    missing: &[String],
) -> Vec<Insight> {
    let word_count = patterns::word_count(resume_text);
    let total = matched.len() + missing.len();
    let match_rate = if total > 0 {
        matched.len() as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    vec![
        Insight {
            label: "Keyword Match Rate".to_string(),
            value: format!("{match_rate:.1}%"),
            description: "Percentage of job keywords found in your resume".to_string(),
            status: if match_rate >= 70.0 {
                InsightStatus::Excellent
            } else if match_rate >= 50.0 {
                InsightStatus::Good
            } else {
                InsightStatus::NeedsWork
            },
        },
        Insight {
            label: "Resume Length".to_string(),
            value: format!("{word_count} words"),
            description: "Ideal length is 400-800 words for most positions".to_string(),
            status: if (400..=800).contains(&word_count) {
                InsightStatus::Excellent
            } else if (300..=1000).contains(&word_count) {
                InsightStatus::Good
            } else {
                InsightStatus::NeedsWork
            },
        },
        Insight {
            label: "Skills Alignment".to_string(),
            value: if matched.len() > 10 {
                "Strong"
            } else if matched.len() > 5 {
                "Moderate"
            } else {
                "Weak"
            }
            .to_string(),
            description: "How well your skills align with job requirements".to_string(),
            status: if matched.len() > 10 {
                InsightStatus::Excellent
            } else if matched.len() > 5 {
                InsightStatus::Good
            } else {
                InsightStatus::NeedsWork
            },
        },
        Insight {
            label: "ATS Readability".to_string(),
            value: if patterns::has_dash_bullets(resume_text) {
                "Good"
            } else {
                "Needs Work"
            }
            .to_string(),
            description: "Use bullet points and clear formatting for better ATS parsing"
                .to_string(),
            status: if patterns::has_dash_bullets(resume_text) {
                InsightStatus::Good
            } else {
                InsightStatus::NeedsWork
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    // A resume that trips every conditional rule: no '@', no numbers, no
    // LinkedIn, and a low overall score.
    const BARE_RESUME: &str = "worked at a company doing software things";

    #[test]
    fn test_all_rules_fire_in_authoring_order() {
        let missing = keywords(&["rust", "tokio", "axum", "sqlx", "redis", "kafka"]);
        let recs = generate_recommendations(BARE_RESUME, &missing, 40);

        assert_eq!(recs.len(), 6);
        assert_eq!(recs[0].category, Category::Keywords);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].category, Category::Structure);
        assert_eq!(recs[1].priority, Priority::High);
        assert_eq!(recs[2].category, Category::Formatting);
        assert_eq!(recs[2].title, "Add Contact Information");
        assert_eq!(recs[3].category, Category::Content);
        assert_eq!(recs[3].priority, Priority::Medium);
        assert_eq!(recs[4].title, "Use Strong Action Verbs");
        assert_eq!(recs[5].category, Category::Formatting);
        assert_eq!(recs[5].priority, Priority::Low);
    }

    #[test]
    fn test_missing_keyword_rule_names_at_most_five() {
        let missing = keywords(&["one", "two", "three", "four", "five", "six", "seven"]);
        let recs = generate_recommendations(BARE_RESUME, &missing, 90);
        assert!(recs[0].description.contains("five"));
        assert!(!recs[0].description.contains("six"));
    }

    #[test]
    fn test_satisfied_rules_are_skipped() {
        let strong = "jane@example.com linkedin.com/in/jane grew revenue 25% across 3 regions in 2022";
        let recs = generate_recommendations(strong, &[], 85);
        // only the unconditional action-verb rule remains
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Use Strong Action Verbs");
    }

    #[test]
    fn test_order_is_deterministic() {
        let missing = keywords(&["kafka", "spark"]);
        let first = generate_recommendations(BARE_RESUME, &missing, 50);
        let second = generate_recommendations(BARE_RESUME, &missing, 50);
        assert_eq!(first, second);
    }

    #[test]
    fn test_insights_are_exactly_four() {
        let insights = generate_insights(BARE_RESUME, &[], &[]);
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0].label, "Keyword Match Rate");
        assert_eq!(insights[1].label, "Resume Length");
        assert_eq!(insights[2].label, "Skills Alignment");
        assert_eq!(insights[3].label, "ATS Readability");
    }

    #[test]
    fn test_match_rate_value_and_status() {
        let matched = keywords(&["rust", "tokio", "axum", "serde", "sqlx", "tracing", "anyhow"]);
        let missing = keywords(&["kafka", "spark", "redis"]);
        let insights = generate_insights(BARE_RESUME, &matched, &missing);
        assert_eq!(insights[0].value, "70.0%");
        assert_eq!(insights[0].status, InsightStatus::Excellent);

        let insights = generate_insights(BARE_RESUME, &matched[..5], &missing);
        // 5 of 8 = 62.5%
        assert_eq!(insights[0].value, "62.5%");
        assert_eq!(insights[0].status, InsightStatus::Good);
    }

    #[test]
    fn test_match_rate_zero_when_no_keywords() {
        let insights = generate_insights(BARE_RESUME, &[], &[]);
        assert_eq!(insights[0].value, "0.0%");
        assert_eq!(insights[0].status, InsightStatus::NeedsWork);
    }

    #[test]
    fn test_length_insight_thresholds() {
        let ideal = "word ".repeat(500);
        let insights = generate_insights(&ideal, &[], &[]);
        assert_eq!(insights[1].status, InsightStatus::Excellent);

        let long = "word ".repeat(1200);
        let insights = generate_insights(&long, &[], &[]);
        assert_eq!(insights[1].status, InsightStatus::NeedsWork);
    }

    #[test]
    fn test_alignment_tiers() {
        let eleven = keywords(&[
            "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "a10", "a11",
        ]);
        let insights = generate_insights(BARE_RESUME, &eleven, &[]);
        assert_eq!(insights[2].value, "Strong");

        let insights = generate_insights(BARE_RESUME, &eleven[..6], &[]);
        assert_eq!(insights[2].value, "Moderate");

        let insights = generate_insights(BARE_RESUME, &[], &[]);
        assert_eq!(insights[2].value, "Weak");
    }

    #[test]
    fn test_readability_ignores_asterisk_bullets() {
        // '*' counts for the format sub-score but not for this insight
        let insights = generate_insights("* item one\n* item two", &[], &[]);
        assert_eq!(insights[3].status, InsightStatus::NeedsWork);

        let insights = generate_insights("- item one\n- item two", &[], &[]);
        assert_eq!(insights[3].status, InsightStatus::Good);
    }
}
