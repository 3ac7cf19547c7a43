use crate::{
    error::JobError,
    job::{ComprehendJob, JobKind},
    state::JobState,
};
use comprehend_interface::ComprehendService;
use std::sync::Arc;

/// Detects named entities (people, places, organizations, dates, ...) with
/// `BatchDetectEntities`.
pub struct EntityDetectionJob<S: ComprehendService> {
    job: ComprehendJob<S>,
}

impl<S: ComprehendService> EntityDetectionJob<S> {
    pub fn new(state: JobState, client: Arc<S>) -> Self {
        Self {
            job: ComprehendJob::new(JobKind::ENTITY, state, client),
        }
    }

    /// Always `"Entities"`.
    pub fn prop_list(&self) -> &'static str {
        self.job.kind().prop_list
    }

    /// Always `"Entity"`.
    pub fn type_tag(&self) -> &'static str {
        self.job.kind().type_tag
    }

    pub fn job(&self) -> &ComprehendJob<S> {
        &self.job
    }

    pub async fn start_job(self) -> Result<JobState, JobError> {
        let client = Arc::clone(self.job.client());
        self.job
            .start_job(|request| client.batch_detect_entities(request))
            .await
    }
}

impl<S: ComprehendService> std::fmt::Display for EntityDetectionJob<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_tag())
    }
}
