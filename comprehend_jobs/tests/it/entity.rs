use super::*;

fn sample_state() -> JobState {
    JobState::new(
        "en-US",
        vec![
            TextSegment::timed("Jeff Bezos founded Amazon", 0, 2_000),
            TextSegment::timed("in Seattle", 2_000, 3_000),
        ],
    )
    .with_job_id("job-1")
}

#[test]
fn type_tag_is_entity() {
    let job = EntityDetectionJob::new(sample_state(), RecordingClient::echo());
    assert_eq!(job.type_tag(), "Entity");
    assert_eq!(job.to_string(), "Entity");

    let job = EntityDetectionJob::new(JobState::default(), RecordingClient::echo());
    assert_eq!(job.type_tag(), "Entity");
}

#[test]
fn prop_list_is_entities() {
    let job = EntityDetectionJob::new(sample_state(), RecordingClient::echo());
    assert_eq!(job.prop_list(), "Entities");
    assert_eq!(job.job().keyword(), "entity");

    let job = EntityDetectionJob::new(JobState::from_text("fr", "bonjour"), RecordingClient::echo());
    assert_eq!(job.prop_list(), "Entities");
}

#[test]
fn construction_does_not_call_the_service() {
    let client = RecordingClient::echo();
    let job = EntityDetectionJob::new(sample_state(), Arc::clone(&client));
    assert_eq!(job.job().state(), &sample_state());
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn start_job_delegates_to_batch_detect_entities() {
    let client = RecordingClient::echo();
    let job = EntityDetectionJob::new(sample_state(), Arc::clone(&client));
    job.start_job().await.unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    let (operation, request) = &calls[0];
    assert_eq!(operation, "BatchDetectEntities");
    assert_eq!(
        request.text_list,
        vec!["Jeff Bezos founded Amazon".to_string(), "in Seattle".to_string()]
    );
    assert_eq!(request.language_code.as_str(), "en");
}

#[tokio::test]
async fn success_is_the_runners_result_unchanged() {
    let client = RecordingClient::echo();
    let through_adapter = EntityDetectionJob::new(sample_state(), Arc::clone(&client))
        .start_job()
        .await
        .unwrap();
    let through_runner = ComprehendJob::new(JobKind::ENTITY, sample_state(), Arc::clone(&client))
        .start_job(|request| client.batch_detect_entities(request))
        .await
        .unwrap();

    assert_eq!(through_adapter.status, JobStatus::Completed);
    let adapter_output = through_adapter.output_for("entity").unwrap();
    let runner_output = through_runner.output_for("entity").unwrap();
    assert_eq!(adapter_output.items, runner_output.items);
    assert_eq!(adapter_output.errors, runner_output.errors);
    assert_eq!(adapter_output.document_count, runner_output.document_count);
    assert_eq!(adapter_output.batch_count, runner_output.batch_count);
    assert_eq!(adapter_output.type_tag, "Entity");
    assert_eq!(through_adapter.segments, through_runner.segments);
    assert_eq!(through_adapter.job_id.as_deref(), Some("job-1"));
}

#[tokio::test]
async fn failure_is_the_runners_error_unchanged() {
    let client = RecordingClient::failing("ThrottlingException", "Rate exceeded");
    let adapter_err = EntityDetectionJob::new(sample_state(), Arc::clone(&client))
        .start_job()
        .await
        .unwrap_err();
    let runner_err = ComprehendJob::new(JobKind::ENTITY, sample_state(), Arc::clone(&client))
        .start_job(|request| client.batch_detect_entities(request))
        .await
        .unwrap_err();

    assert_eq!(adapter_err.to_string(), runner_err.to_string());
    match adapter_err {
        JobError::Client(ClientError::ApiError(e)) => {
            assert_eq!(e.error_code(), "ThrottlingException");
            assert_eq!(e.message, "Rate exceeded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn instances_do_not_share_state() {
    let client = RecordingClient::echo();
    let first = EntityDetectionJob::new(sample_state(), Arc::clone(&client));
    let second = EntityDetectionJob::new(
        JobState::from_text("es", "Hola Madrid").with_job_id("job-2"),
        Arc::clone(&client),
    );

    let first_state = first.start_job().await.unwrap();
    assert_eq!(first_state.status, JobStatus::Completed);
    assert_eq!(second.job().state().status, JobStatus::NotStarted);
    assert!(second.job().state().output.is_empty());

    let second_state = second.start_job().await.unwrap();
    assert_eq!(second_state.job_id.as_deref(), Some("job-2"));
    let texts: Vec<_> = second_state
        .output_for("entity")
        .unwrap()
        .items
        .iter()
        .map(|i| i.text().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["Hola", "Madrid"]);
    assert_eq!(first_state.output_for("entity").unwrap().items.len(), 6);
}
