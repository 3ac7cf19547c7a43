use super::*;

#[test]
fn accessors_name_key_phrases() {
    let job = KeyPhraseDetectionJob::new(JobState::default(), RecordingClient::echo());
    assert_eq!(job.type_tag(), "KeyPhrase");
    assert_eq!(job.prop_list(), "KeyPhrases");
    assert_eq!(job.job().keyword(), "keyphrase");
    assert_eq!(job.to_string(), "KeyPhrase");
}

#[tokio::test]
async fn start_job_delegates_to_batch_detect_key_phrases() {
    let client = RecordingClient::echo();
    let state = KeyPhraseDetectionJob::new(
        JobState::from_text("de", "Der schnelle Fuchs"),
        Arc::clone(&client),
    )
    .start_job()
    .await
    .unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "BatchDetectKeyPhrases");
    let output = state.output_for("keyphrase").unwrap();
    assert_eq!(output.type_tag, "KeyPhrase");
    assert_eq!(output.items.len(), 3);
    assert!(state.output_for("entity").is_none());
}

#[tokio::test]
async fn jobs_chain_through_one_state() {
    let client = RecordingClient::echo();
    let state = JobState::from_text("en", "Amazon Comprehend");
    let state = EntityDetectionJob::new(state, Arc::clone(&client))
        .start_job()
        .await
        .unwrap();
    let state = KeyPhraseDetectionJob::new(state, Arc::clone(&client))
        .start_job()
        .await
        .unwrap();

    assert_eq!(state.output.len(), 2);
    assert!(state.output_for("entity").is_some());
    assert!(state.output_for("keyphrase").is_some());
    let operations: Vec<_> = client.calls().into_iter().map(|(op, _)| op).collect();
    assert_eq!(operations, vec!["BatchDetectEntities", "BatchDetectKeyPhrases"]);
}
