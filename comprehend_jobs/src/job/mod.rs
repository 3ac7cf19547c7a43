mod documents;
mod output;

pub use documents::MIN_CHARACTERS;
pub use output::{DetectedItem, DocumentError, JobOutput};

use crate::{
    error::JobError,
    state::{JobState, JobStatus},
};
use comprehend_interface::{
    BatchDetectRequest, BatchDetectResponse, ClientError, ComprehendService, LanguageCode,
    MAX_BATCH_DOCUMENTS, MAX_DOCUMENT_BYTES,
};
use documents::{build_documents, Document};
use std::{future::Future, sync::Arc};

/// What distinguishes one kind of comprehend job from another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JobKind {
    /// Key the job's output is stored under in [`JobState::output`].
    pub keyword: &'static str,
    pub type_tag: &'static str,
    /// Field of each per-document result holding the detected items.
    pub prop_list: &'static str,
}

impl JobKind {
    pub const ENTITY: JobKind = JobKind {
        keyword: "entity",
        type_tag: "Entity",
        prop_list: "Entities",
    };

    pub const KEY_PHRASE: JobKind = JobKind {
        keyword: "keyphrase",
        type_tag: "KeyPhrase",
        prop_list: "KeyPhrases",
    };
}

/// Runs one batch detection operation over every segment of a [`JobState`].
///
/// The runner does not know which operation it runs; the caller passes it to
/// [`ComprehendJob::start_job`] as a closure over the client.
pub struct ComprehendJob<S: ComprehendService> {
    kind: JobKind,
    state: JobState,
    client: Arc<S>,
}

impl<S: ComprehendService> ComprehendJob<S> {
    pub fn new(kind: JobKind, state: JobState, client: Arc<S>) -> Self {
        Self {
            kind,
            state,
            client,
        }
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    pub fn keyword(&self) -> &'static str {
        self.kind.keyword
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    pub fn client(&self) -> &Arc<S> {
        &self.client
    }

    /// Splits the segments into documents, sends them through `operation` in batches
    /// of [`MAX_BATCH_DOCUMENTS`], and records the collected items in the state.
    ///
    /// The first failed call aborts the job. Documents the service lists in
    /// `ErrorList` are recorded and do not.
    pub async fn start_job<F, Fut>(mut self, operation: F) -> Result<JobState, JobError>
    where
        F: Fn(BatchDetectRequest) -> Fut,
        Fut: Future<Output = Result<BatchDetectResponse, ClientError>>,
    {
        let language = LanguageCode::from_locale(&self.state.language_code)
            .ok_or_else(|| JobError::UnsupportedLanguage(self.state.language_code.clone()))?;

        let mut output = JobOutput::new(self.kind, chrono::Utc::now());
        let documents = build_documents(&self.state.segments, MAX_DOCUMENT_BYTES);
        output.document_count = documents.len();
        crate::info!(
            "Starting {} job{}: {} segments, {} documents ({language})",
            self.kind.keyword,
            self.state
                .job_id
                .as_deref()
                .map(|id| format!(" {id}"))
                .unwrap_or_default(),
            self.state.segments.len(),
            documents.len(),
        );

        if documents.is_empty() {
            crate::warn!("No text to analyze for {} job", self.kind.keyword);
            output.completed_at = Some(chrono::Utc::now());
            self.state.status = JobStatus::NoData;
            self.state
                .output
                .insert(self.kind.keyword.to_string(), output);
            return Ok(self.state);
        }

        for batch in documents.chunks(MAX_BATCH_DOCUMENTS) {
            let request = BatchDetectRequest::new(
                batch.iter().map(|doc| doc.text.clone()).collect(),
                language,
            );
            crate::debug!(
                "Batch {}: {} documents",
                output.batch_count,
                request.text_list.len()
            );
            let response = operation(request).await?;
            output.batch_count += 1;
            self.collect(batch, response, &mut output)?;
        }

        output
            .items
            .sort_by_key(|item| (item.segment, item.begin_offset().unwrap_or(0)));
        output.completed_at = Some(chrono::Utc::now());
        crate::info!("{output}");

        self.state.status = JobStatus::Completed;
        self.state
            .output
            .insert(self.kind.keyword.to_string(), output);
        Ok(self.state)
    }

    fn collect(
        &self,
        batch: &[Document],
        response: BatchDetectResponse,
        output: &mut JobOutput,
    ) -> Result<(), JobError> {
        let document = |index: usize| {
            batch.get(index).ok_or_else(|| {
                JobError::InvalidResponse(format!(
                    "result index {index} outside batch of {}",
                    batch.len()
                ))
            })
        };

        for result in &response.result_list {
            let doc = document(result.index)?;
            let segment = &self.state.segments[doc.segment];
            for item in result.items(self.kind.prop_list) {
                let Some(fields) = item.as_object() else {
                    crate::warn!("Ignoring non-object {} item: {item}", self.kind.prop_list);
                    continue;
                };
                if let Some(score) = fields.get("Score").and_then(|v| v.as_f64()) {
                    if score < f64::from(self.state.min_confidence) {
                        continue;
                    }
                }
                let mut fields = fields.clone();
                if doc.char_offset > 0 {
                    rebase_offset(&mut fields, "BeginOffset", doc.char_offset);
                    rebase_offset(&mut fields, "EndOffset", doc.char_offset);
                }
                output.items.push(DetectedItem {
                    segment: doc.segment,
                    begin_ms: segment.begin_ms,
                    end_ms: segment.end_ms,
                    fields,
                });
            }
        }

        for failed in &response.error_list {
            let doc = document(failed.index)?;
            crate::warn!(
                "Document {} of segment {} failed: {}: {}",
                failed.index,
                doc.segment,
                failed.error_code,
                failed.error_message
            );
            output.errors.push(DocumentError {
                segment: doc.segment,
                error_code: failed.error_code.clone(),
                error_message: failed.error_message.clone(),
            });
        }
        Ok(())
    }
}

fn rebase_offset(
    fields: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    char_offset: usize,
) {
    if let Some(offset) = fields.get(key).and_then(|v| v.as_u64()) {
        fields.insert(key.to_string(), (offset + char_offset as u64).into());
    }
}
