//! Field extraction: name, email, phone and vocabulary skills.
//!
//! Every extractor returns the empty string when nothing matches. Callers
//! cannot tell "absent" apart from "empty".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email pattern")
});

// Loose on purpose: any run of three or more digits split by at most single
// separators qualifies, so years and ids inside prose match too.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{0,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}")
        .expect("valid phone pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Matched vocabulary entries, in vocabulary order.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone)]
struct Skill {
    label: String,
    pattern: Regex,
}

/// Ordered list of recognized skill keywords, each compiled to a
/// case-insensitive whole-word matcher.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<Skill>,
}

impl SkillVocabulary {
    /// Builds the vocabulary. Blank entries are skipped and repeated entries
    /// keep their first position.
    pub fn new<I, S>(entries: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skills: Vec<Skill> = Vec::new();
        for entry in entries {
            let label = entry.as_ref().trim();
            if label.is_empty() || skills.iter().any(|s| s.label == label) {
                continue;
            }
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(label)))?;
            skills.push(Skill {
                label: label.to_string(),
                pattern,
            });
        }
        Ok(Self { skills })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.label.as_str())
    }

    /// Entries found in `text`, in vocabulary order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.skills
            .iter()
            .filter(|s| s.pattern.is_match(text))
            .map(|s| s.label.clone())
            .collect()
    }
}

/// First line with no `@`, `+` or `http` that has at least two words, trimmed.
///
/// A two-word greeting such as "Dear Sir" qualifies just like a real name.
pub fn extract_name(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.contains(['@', '+']) && !line.contains("http"))
        .map(str::trim)
        .find(|line| line.split_whitespace().count() >= 2)
        .map(String::from)
        .unwrap_or_default()
}

/// First email-shaped substring in document order.
pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped substring in document order.
///
/// The pattern's optional leading separator can grab the space or newline in
/// front of the digits; it is stripped from the result.
pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| {
            m.as_str()
                .trim_start_matches(|c: char| c == '-' || c == '.' || c.is_whitespace())
                .to_string()
        })
        .unwrap_or_default()
}

pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    vocabulary.matches(text)
}

pub fn extract(text: &str, vocabulary: &SkillVocabulary) -> ExtractedFields {
    ExtractedFields {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text, vocabulary),
    }
}
