//! Keyword Extractor - normalizes text, tokenizes, filters stop-words,
//! detects technical phrases, and ranks terms by frequency.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Maximum number of ranked keywords returned per text.
pub const MAX_KEYWORDS: usize = 30;

/// Inputs shorter than this yield an empty keyword set, not an error.
const MIN_TEXT_CHARS: usize = 10;

/// Punctuation-bearing technical terms rewritten to single tokens before
/// tokenization, so they survive the punctuation collapse intact.
const TECHNICAL_MAPPINGS: &[(&str, &str)] = &[
    ("react.js", "reactjs"),
    ("node.js", "nodejs"),
    ("vue.js", "vuejs"),
    ("c++", "cplusplus"),
    ("c#", "csharp"),
    (".net", "dotnet"),
];

/// Known multi-word technical phrases, detected by substring containment.
/// Each detected phrase counts as one occurrence in the frequency table.
const TECHNICAL_PHRASES: &[&str] = &[
    "machine learning",
    "data analysis",
    "project management",
    "full stack",
    "front end",
    "back end",
    "software development",
    "agile methodology",
    "version control",
    "database management",
    "api development",
    "cloud computing",
    "data visualization",
    "business intelligence",
    "quality assurance",
    "user experience",
    "customer service",
    "team leadership",
];

/// Grammatical function words plus generic hiring-domain words that carry no
/// signal about the candidate or the role.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "is", "are", "was", "were", "been",
        "being", "have", "has", "had", "do", "does", "did", "will", "would", "should", "could",
        "may", "might", "must", "can", "this", "that", "these", "those", "i", "you", "he", "she",
        "it", "we", "they", "what", "which", "who", "when", "where", "why", "how", "work",
        "working", "experience", "years", "year", "ability", "skills", "skill", "required",
        "requirements", "looking", "candidate", "position", "job", "role", "us", "our", "team",
        "company", "business",
    ]
    .into_iter()
    .collect()
});

/// Extracts up to [`MAX_KEYWORDS`] ranked keywords from free text.
pub fn extract_keywords(text: &str) -> Vec<String> {
    extract_keywords_with_limit(text, MAX_KEYWORDS)
}

/// Ranked keyword extraction with an explicit cap.
///
/// Terms are distinct lowercase tokens or detected technical phrases, sorted
/// by descending frequency with ties broken by first-seen order.
pub fn extract_keywords_with_limit(text: &str, max: usize) -> Vec<String> {
    if text.chars().count() < MIN_TEXT_CHARS {
        return Vec::new();
    }

    let mut normalized = text.to_lowercase();
    for (original, replacement) in TECHNICAL_MAPPINGS {
        normalized = normalized.replace(original, replacement);
    }

    // Collapse everything except word characters, '+', '#', '.', '-' to
    // spaces, then tokenize on whitespace.
    let collapsed: String = normalized
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '_' | '+' | '#' | '.' | '-') {
                c
            } else {
                ' '
            }
        })
        .collect();

    // Frequency table plus first-seen order for stable tie-breaking.
    let mut order: Vec<String> = Vec::new();
    let mut freq: HashMap<String, u32> = HashMap::new();

    for raw in collapsed.split_whitespace() {
        // Sentence punctuation sticks to token edges ("node.js." becomes
        // "nodejs." after mapping); strip it so terminal periods do not fork
        // otherwise identical terms.
        let token = raw.trim_matches('.');
        if token.chars().count() <= 2 || STOP_WORDS.contains(token) {
            continue;
        }
        match freq.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                order.push(token.to_string());
                freq.insert(token.to_string(), 1);
            }
        }
    }

    for phrase in TECHNICAL_PHRASES {
        if normalized.contains(phrase) {
            match freq.get_mut(*phrase) {
                Some(count) => *count += 1,
                None => {
                    order.push((*phrase).to_string());
                    freq.insert((*phrase).to_string(), 1);
                }
            }
        }
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|term| {
            let count = freq[&term];
            (term, count)
        })
        .collect();
    // Stable sort keeps first-seen order for equal frequencies.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(max);
    ranked.into_iter().map(|(term, _)| term).collect()
}
