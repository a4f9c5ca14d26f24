// Résumé analysis pipeline.
// raw text → extracted fields → level classification → marker score → record.
// Every stage is a pure function of its input.

pub mod fields;
pub mod handlers;
pub mod level;
pub mod markers;
pub mod record;
pub mod text;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::analysis::fields::{extract, ExtractedFields, SkillVocabulary};
use crate::analysis::level::{classify, LevelEstimate};
use crate::analysis::markers::{score, MarkerReport};
use crate::analysis::record::{assemble, AnalysisRecord};
use crate::analysis::text::RawResumeText;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeAnalysis {
    pub fields: ExtractedFields,
    pub estimate: LevelEstimate,
    pub markers: MarkerReport,
}

impl ResumeAnalysis {
    pub fn to_record(&self, timestamp: NaiveDateTime) -> AnalysisRecord {
        assemble(
            &self.fields,
            self.estimate.level,
            self.markers.score,
            self.estimate.page_estimate,
            timestamp,
        )
    }
}

pub fn analyze(raw: &RawResumeText, vocabulary: &SkillVocabulary) -> ResumeAnalysis {
    let text = raw.as_str();
    let line_count = i64::try_from(raw.line_count()).unwrap_or(i64::MAX);
    ResumeAnalysis {
        fields: extract(text, vocabulary),
        estimate: classify(line_count),
        markers: score(text),
    }
}
