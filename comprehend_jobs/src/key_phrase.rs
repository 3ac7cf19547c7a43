use crate::{
    error::JobError,
    job::{ComprehendJob, JobKind},
    state::JobState,
};
use comprehend_interface::ComprehendService;
use std::sync::Arc;

/// Detects key noun phrases with `BatchDetectKeyPhrases`.
pub struct KeyPhraseDetectionJob<S: ComprehendService> {
    job: ComprehendJob<S>,
}

impl<S: ComprehendService> KeyPhraseDetectionJob<S> {
    pub fn new(state: JobState, client: Arc<S>) -> Self {
        Self {
            job: ComprehendJob::new(JobKind::KEY_PHRASE, state, client),
        }
    }

    pub fn prop_list(&self) -> &'static str {
        self.job.kind().prop_list
    }

    pub fn type_tag(&self) -> &'static str {
        self.job.kind().type_tag
    }

    pub fn job(&self) -> &ComprehendJob<S> {
        &self.job
    }

    pub async fn start_job(self) -> Result<JobState, JobError> {
        let client = Arc::clone(self.job.client());
        self.job
            .start_job(|request| client.batch_detect_key_phrases(request))
            .await
    }
}

impl<S: ComprehendService> std::fmt::Display for KeyPhraseDetectionJob<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_tag())
    }
}
