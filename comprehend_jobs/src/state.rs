use crate::job::JobOutput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A piece of source text, typically one transcript phrase, with optional timing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ms: Option<u64>,
}

impl TextSegment {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            begin_ms: None,
            end_ms: None,
        }
    }

    pub fn timed<S: Into<String>>(text: S, begin_ms: u64, end_ms: u64) -> Self {
        Self {
            text: text.into(),
            begin_ms: Some(begin_ms),
            end_ms: Some(end_ms),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    NotStarted,
    Completed,
    /// The job ran but there was no text long enough to analyze.
    NoData,
}

/// State handed from one pipeline step to the next.
///
/// Jobs take it by value, record their output under their keyword and hand it back.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// Comprehend code (`en`, `zh-TW`) or transcription locale (`en-US`).
    pub language_code: String,
    pub segments: Vec<TextSegment>,
    /// Items scoring below this are dropped.
    #[serde(default)]
    pub min_confidence: f32,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub output: BTreeMap<String, JobOutput>,
}

impl JobState {
    pub fn new<S: Into<String>>(language_code: S, segments: Vec<TextSegment>) -> Self {
        Self {
            language_code: language_code.into(),
            segments,
            ..Default::default()
        }
    }

    /// One segment per non-blank line of `text`.
    pub fn from_text<S: Into<String>>(language_code: S, text: &str) -> Self {
        let segments = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(TextSegment::new)
            .collect();
        Self::new(language_code, segments)
    }

    pub fn with_job_id<S: Into<String>>(mut self, job_id: S) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn output_for(&self, keyword: &str) -> Option<&JobOutput> {
        self.output.get(keyword)
    }
}
