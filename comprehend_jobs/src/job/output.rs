use super::JobKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One analysis item (an entity, a key phrase, ...) located in its source segment.
///
/// The service fields (`Text`, `Type`, `Score`, `BeginOffset`, `EndOffset`, ...) are
/// kept as returned, except that offsets are relative to the segment rather than
/// to the document that was sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetectedItem {
    pub segment: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ms: Option<u64>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl DetectedItem {
    pub fn text(&self) -> Option<&str> {
        self.fields.get("Text").and_then(|v| v.as_str())
    }

    pub fn score(&self) -> Option<f64> {
        self.fields.get("Score").and_then(|v| v.as_f64())
    }

    pub fn begin_offset(&self) -> Option<u64> {
        self.fields.get("BeginOffset").and_then(|v| v.as_u64())
    }

    pub fn end_offset(&self) -> Option<u64> {
        self.fields.get("EndOffset").and_then(|v| v.as_u64())
    }

    /// `Type` for entities; absent for key phrases.
    pub fn item_type(&self) -> Option<&str> {
        self.fields.get("Type").and_then(|v| v.as_str())
    }
}

/// A document the service reported in `ErrorList`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentError {
    pub segment: usize,
    pub error_code: String,
    pub error_message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobOutput {
    pub keyword: String,
    pub type_tag: String,
    pub items: Vec<DetectedItem>,
    #[serde(default)]
    pub errors: Vec<DocumentError>,
    pub document_count: usize,
    pub batch_count: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl JobOutput {
    pub(crate) fn new(kind: JobKind, started_at: DateTime<Utc>) -> Self {
        Self {
            keyword: kind.keyword.to_string(),
            type_tag: kind.type_tag.to_string(),
            items: Vec::new(),
            errors: Vec::new(),
            document_count: 0,
            batch_count: 0,
            started_at,
            completed_at: None,
        }
    }
}

impl std::fmt::Display for JobOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} items, {} failed documents ({} documents in {} batches)",
            self.type_tag,
            self.items.len(),
            self.errors.len(),
            self.document_count,
            self.batch_count
        )
    }
}
