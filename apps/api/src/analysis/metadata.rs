//! Descriptive resume metadata attached to every analysis result.

use serde::{Deserialize, Serialize};

use crate::analysis::patterns;

/// Which of the four canonical sections the resume mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub summary: bool,
}

/// Structural facts about the resume text. Purely descriptive; scores never
/// read from this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeMetadata {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_linkedin: bool,
    pub has_github: bool,
    pub sections: SectionPresence,
    pub word_count: usize,
    pub has_years: bool,
    pub has_bullet_points: bool,
    pub estimated_sections: usize,
}

pub fn extract_metadata(text: &str) -> ResumeMetadata {
    let lower = text.to_lowercase();
    ResumeMetadata {
        has_email: patterns::has_email(text),
        has_phone: patterns::has_phone(text),
        has_linkedin: patterns::has_linkedin(text),
        has_github: lower.contains("github.com"),
        sections: SectionPresence {
            experience: lower.contains("experience"),
            education: lower.contains("education"),
            skills: lower.contains("skills"),
            summary: lower.contains("summary") || lower.contains("objective"),
        },
        word_count: patterns::word_count(text),
        has_years: patterns::has_year(text),
        has_bullet_points: patterns::has_bullet_points(text),
        estimated_sections: patterns::count_common_sections(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_flags() {
        let meta = extract_metadata("jane@example.com 555-123-4567 linkedin.com/in/jane");
        assert!(meta.has_email);
        assert!(meta.has_phone);
        assert!(meta.has_linkedin);
        assert!(!meta.has_github);
    }

    #[test]
    fn test_section_presence() {
        let meta = extract_metadata("Experience\nEducation\nSkills\nCareer Objective");
        assert!(meta.sections.experience);
        assert!(meta.sections.education);
        assert!(meta.sections.skills);
        assert!(meta.sections.summary);
        assert_eq!(meta.estimated_sections, 4);
    }

    #[test]
    fn test_empty_text_is_all_false() {
        let meta = extract_metadata("");
        assert!(!meta.has_email);
        assert_eq!(meta.word_count, 0);
        assert_eq!(meta.estimated_sections, 0);
    }
}
