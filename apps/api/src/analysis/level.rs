use serde::{Deserialize, Serialize};

/// Lines of extracted text treated as one page.
pub const LINES_PER_PAGE: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Fresher,
    Intermediate,
    Experienced,
    Unclassified,
}

impl ExperienceLevel {
    /// Label stored in the `user_level` column. Unclassified is stored empty.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "Fresher",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Experienced => "Experienced",
            ExperienceLevel::Unclassified => "",
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ExperienceLevel::Fresher => Some("You are looking Fresher."),
            ExperienceLevel::Intermediate => Some("You are at intermediate level!"),
            ExperienceLevel::Experienced => Some("You are at experience level!"),
            ExperienceLevel::Unclassified => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEstimate {
    pub page_estimate: i64,
    pub level: ExperienceLevel,
}

/// Estimates page count from line count (floor of `line_count / 50`) and maps
/// it to an experience level. Not based on real PDF page metadata.
pub fn classify(line_count: i64) -> LevelEstimate {
    let page_estimate = line_count.div_euclid(LINES_PER_PAGE);
    let level = match page_estimate {
        1 => ExperienceLevel::Fresher,
        2 => ExperienceLevel::Intermediate,
        p if p >= 3 => ExperienceLevel::Experienced,
        _ => ExperienceLevel::Unclassified,
    };
    LevelEstimate {
        page_estimate,
        level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(0).level, ExperienceLevel::Unclassified);
        assert_eq!(classify(49).level, ExperienceLevel::Unclassified);
        assert_eq!(classify(50).level, ExperienceLevel::Fresher);
        assert_eq!(classify(99).level, ExperienceLevel::Fresher);
        assert_eq!(classify(100).level, ExperienceLevel::Intermediate);
        assert_eq!(classify(149).level, ExperienceLevel::Intermediate);
        assert_eq!(classify(150).level, ExperienceLevel::Experienced);
        assert_eq!(classify(5_000).level, ExperienceLevel::Experienced);
    }

    #[test]
    fn test_page_estimate_is_floor() {
        assert_eq!(classify(1).page_estimate, 0);
        assert_eq!(classify(149).page_estimate, 2);
        assert_eq!(classify(-1).page_estimate, -1);
    }

    #[test]
    fn test_negative_is_unclassified() {
        assert_eq!(classify(-120).level, ExperienceLevel::Unclassified);
    }

    #[test]
    fn test_unclassified_stores_empty_label() {
        assert_eq!(ExperienceLevel::Unclassified.as_str(), "");
        assert!(ExperienceLevel::Unclassified.message().is_none());
        assert_eq!(ExperienceLevel::Experienced.as_str(), "Experienced");
    }

    #[test]
    fn test_level_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ExperienceLevel::Unclassified).unwrap(),
            "unclassified"
        );
        assert_eq!(serde_json::to_value(ExperienceLevel::Fresher).unwrap(), "fresher");
        let level: ExperienceLevel = serde_json::from_str("\"experienced\"").unwrap();
        assert_eq!(level, ExperienceLevel::Experienced);
    }
}
