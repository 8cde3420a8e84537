//! Compiled pattern matchers shared by the scoring, recommendation, insight,
//! and metadata modules.
//!
//! Each matcher pins its character-class semantics here so the scoring rules
//! depend on this file, not on a regex dialect.

use std::sync::LazyLock;

use regex::Regex;

/// Email: `@` followed by a dotted host and a TLD of 2+ word characters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[\w.-]+\.\w{2,}").unwrap());

/// US-style phone number: three groups of 3/3/4 digits, separated by an
/// optional dash, dot, or space.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

/// Any 4-digit run, treated as a year token.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

/// Bullet markers accepted by ATS parsers: `•`, `-`, `*`.
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[•\-*]").unwrap());

/// Narrower bullet class used by the readability insight: `•` or `-` only.
static DASH_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[•\-]").unwrap());

/// A number token, optionally suffixed with `%` or `$`.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+[%$]?").unwrap());

/// Characters outside the "standard resume punctuation" set.
static SPECIAL_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,;:()\-]").unwrap());

/// Section header phrase groups counted by [`count_common_sections`].
const COMMON_SECTION_GROUPS: &[&[&str]] = &[
    &["experience", "employment", "work history"],
    &["education", "academic"],
    &["skills", "competencies"],
    &["summary", "objective", "profile"],
    &["certifications", "licenses"],
    &["projects"],
    &["awards", "achievements"],
];

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

pub fn has_year(text: &str) -> bool {
    YEAR_RE.is_match(text)
}

pub fn has_bullet_points(text: &str) -> bool {
    BULLET_RE.is_match(text)
}

pub fn has_dash_bullets(text: &str) -> bool {
    DASH_BULLET_RE.is_match(text)
}

pub fn has_linkedin(text: &str) -> bool {
    text.to_lowercase().contains("linkedin.com")
}

/// GitHub, portfolio, personal website, or blog mention.
pub fn has_professional_link(text: &str) -> bool {
    contains_any(
        &text.to_lowercase(),
        &["github.com", "portfolio", "website", "blog"],
    )
}

/// Number of number/percentage/currency tokens in the text.
pub fn count_number_tokens(text: &str) -> usize {
    NUMBER_RE.find_iter(text).count()
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Ratio of non-standard punctuation characters to total characters.
/// Returns 1.0 for empty text so it never qualifies for the format bonus.
pub fn special_char_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 1.0;
    }
    SPECIAL_CHAR_RE.find_iter(text).count() as f64 / total as f64
}

/// Number of short standalone lines that look like section headers: 3 to 30
/// characters of letters and spaces only, bounded by line breaks on both
/// sides (the first and last lines of the text never qualify).
pub fn header_line_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    let segments: Vec<&str> = lower.split('\n').collect();
    if segments.len() < 3 {
        return 0;
    }
    segments[1..segments.len() - 1]
        .iter()
        .filter(|line| {
            let len = line.chars().count();
            (3..=30).contains(&len)
                && line
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == ' ' || c == '\t')
        })
        .count()
}

pub fn has_experience_section(text: &str) -> bool {
    contains_any(
        &text.to_lowercase(),
        &["experience", "employment", "work history"],
    )
}

pub fn has_education_section(text: &str) -> bool {
    contains_any(&text.to_lowercase(), &["education", "academic"])
}

pub fn has_skills_section(text: &str) -> bool {
    contains_any(&text.to_lowercase(), &["skills", "competencies", "expertise"])
}

pub fn has_summary_section(text: &str) -> bool {
    contains_any(&text.to_lowercase(), &["summary", "objective", "profile"])
}

/// How many of the common resume section groups appear at least once.
pub fn count_common_sections(text: &str) -> usize {
    let lower = text.to_lowercase();
    COMMON_SECTION_GROUPS
        .iter()
        .filter(|group| contains_any(&lower, group))
        .count()
}

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_detected() {
        assert!(has_email("reach me at jane@example.com today"));
        assert!(!has_email("no address here"));
        assert!(!has_email("twitter handle @jane"));
    }

    #[test]
    fn test_phone_detected_with_separators() {
        assert!(has_phone("555-123-4567"));
        assert!(has_phone("555.123.4567"));
        assert!(has_phone("555 123 4567"));
        assert!(has_phone("5551234567"));
        assert!(!has_phone("call 12-34"));
    }

    #[test]
    fn test_year_token() {
        assert!(has_year("2019 - 2023"));
        // 4-digit runs inside longer numbers still count
        assert!(has_year("badge 98765"));
        assert!(!has_year("room 123"));
    }

    #[test]
    fn test_bullet_classes_differ() {
        assert!(has_bullet_points("* item"));
        assert!(!has_dash_bullets("* item"));
        assert!(has_dash_bullets("• item"));
        assert!(has_dash_bullets("- item"));
    }

    #[test]
    fn test_number_tokens_counted() {
        assert_eq!(count_number_tokens("grew 30% and saved $2000 across 3 teams"), 3);
        assert_eq!(count_number_tokens("no digits"), 0);
    }

    #[test]
    fn test_special_char_ratio() {
        assert_eq!(special_char_ratio("plain words, punctuation; fine."), 0.0);
        assert!(special_char_ratio("") >= 1.0);
        // '@' and '%' are outside the standard set
        assert!(special_char_ratio("a@b%c") > 0.0);
    }

    #[test]
    fn test_header_lines_counted() {
        let text = "Jane Doe\nexperience\nacme corp\neducation\nstate university\nskills\nrust\n";
        // every interior line qualifies; "jane doe" leads and never counts
        assert_eq!(header_line_count(text), 6);
        assert_eq!(header_line_count("single line"), 0);
        assert_eq!(header_line_count("two\nlines"), 0);
    }

    #[test]
    fn test_header_lines_reject_digits_and_length_extremes() {
        let text = "name\nexperience 2021\nok line\nx\neducation\nend";
        // "experience 2021" has digits, "x" is too short; "ok line" and
        // "education" qualify
        assert_eq!(header_line_count(text), 2);
    }

    #[test]
    fn test_section_matchers_case_insensitive() {
        assert!(has_experience_section("WORK HISTORY"));
        assert!(has_education_section("Academic background"));
        assert!(has_skills_section("Core Competencies"));
        assert!(has_summary_section("Objective: ship software"));
        assert!(!has_summary_section("experience only"));
    }

    #[test]
    fn test_common_sections_counted_once_per_group() {
        let text = "Experience\nEmployment\nEducation\nSkills\nProjects\n";
        // experience+employment collapse into one group
        assert_eq!(count_common_sections(text), 4);
    }

    #[test]
    fn test_professional_links() {
        assert!(has_professional_link("see github.com/jane"));
        assert!(has_professional_link("My Portfolio: jane.dev"));
        assert!(!has_professional_link("linkedin.com/in/jane"));
    }
}
