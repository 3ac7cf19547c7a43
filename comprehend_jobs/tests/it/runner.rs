use super::*;
use comprehend_jobs::comprehend_interface::{BatchItemError, MAX_BATCH_DOCUMENTS};

fn entity_job(
    state: JobState,
    client: &Arc<RecordingClient>,
) -> EntityDetectionJob<RecordingClient> {
    EntityDetectionJob::new(state, Arc::clone(client))
}

#[tokio::test]
async fn batches_hold_at_most_25_documents() {
    let segments = (0..30)
        .map(|i| TextSegment::timed(format!("segment number {i}"), i * 1_000, i * 1_000 + 900))
        .collect();
    let client = RecordingClient::echo();
    let state = entity_job(JobState::new("en", segments), &client)
        .start_job()
        .await
        .unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1.text_list.len(), MAX_BATCH_DOCUMENTS);
    assert_eq!(calls[1].1.text_list.len(), 5);
    assert_eq!(calls[1].1.text_list[0], "segment number 25");

    let output = state.output_for("entity").unwrap();
    assert_eq!(output.document_count, 30);
    assert_eq!(output.batch_count, 2);
    assert_eq!(output.items.len(), 90);
    assert!(output.completed_at.is_some());

    // Items map back to the segment they came from, in order.
    let last = output.items.last().unwrap();
    assert_eq!(last.segment, 29);
    assert_eq!(last.text(), Some("29"));
    assert_eq!(last.begin_ms, Some(29_000));
    assert_eq!(last.end_ms, Some(29_900));
}

#[tokio::test]
async fn long_segments_are_split_and_offsets_rebased() {
    let text = format!("{}Seattle is here", "word ".repeat(1_000));
    let client = RecordingClient::echo();
    let state = entity_job(JobState::new("en", vec![TextSegment::new(text.clone())]), &client)
        .start_job()
        .await
        .unwrap();

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.text_list.len(), 2);
    assert_eq!(calls[0].1.text_list[0].len(), 5_000);
    assert_eq!(calls[0].1.text_list[1], "Seattle is here");

    let output = state.output_for("entity").unwrap();
    let seattle = output
        .items
        .iter()
        .find(|item| item.text() == Some("Seattle"))
        .unwrap();
    assert_eq!(seattle.segment, 0);
    assert_eq!(seattle.begin_offset(), Some(5_000));
    assert_eq!(seattle.end_offset(), Some(5_007));
    let located: String = text.chars().skip(5_000).take(7).collect();
    assert_eq!(located, "Seattle");
}

#[tokio::test]
async fn low_confidence_items_are_dropped() {
    let client = RecordingClient::new(|_, _| {
        Ok(serde_json::from_value(json!({
            "ResultList": [{
                "Index": 0,
                "Entities": [
                    {"Text": "maybe", "Type": "OTHER", "Score": 0.2, "BeginOffset": 0, "EndOffset": 5},
                    {"Text": "Paris", "Type": "LOCATION", "Score": 0.95, "BeginOffset": 6, "EndOffset": 11}
                ]
            }]
        }))
        .unwrap())
    });
    let state = entity_job(
        JobState::from_text("fr-FR", "maybe Paris").with_min_confidence(0.5),
        &client,
    )
    .start_job()
    .await
    .unwrap();

    let items = &state.output_for("entity").unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text(), Some("Paris"));
    assert_eq!(items[0].item_type(), Some("LOCATION"));
    assert_eq!(client.calls()[0].1.language_code.as_str(), "fr");
}

#[tokio::test]
async fn document_errors_are_recorded_not_fatal() {
    let client = RecordingClient::new(|operation, request| {
        let mut response = echo_response(operation, request);
        response.result_list.retain(|r| r.index != 1);
        response.error_list.push(BatchItemError {
            index: 1,
            error_code: "INTERNAL_SERVER_ERROR".to_string(),
            error_message: "Unknown error".to_string(),
        });
        Ok(response)
    });
    let state = entity_job(
        JobState::from_text("en", "first good line\nsecond bad line\nthird good line"),
        &client,
    )
    .start_job()
    .await
    .unwrap();

    assert_eq!(state.status, JobStatus::Completed);
    let output = state.output_for("entity").unwrap();
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].segment, 1);
    assert_eq!(output.errors[0].error_code, "INTERNAL_SERVER_ERROR");
    assert!(output.items.iter().all(|item| item.segment != 1));
    assert_eq!(output.items.len(), 6);
}

#[tokio::test]
async fn out_of_range_result_index_is_invalid() {
    let client = RecordingClient::new(|_, _| {
        Ok(serde_json::from_value(json!({"ResultList": [{"Index": 3, "Entities": []}]})).unwrap())
    });
    let err = entity_job(JobState::from_text("en", "only one document"), &client)
        .start_job()
        .await
        .unwrap_err();
    assert!(matches!(err, JobError::InvalidResponse(_)));
}

#[tokio::test]
async fn unsupported_language_never_calls_the_service() {
    let client = RecordingClient::echo();
    let err = entity_job(JobState::from_text("nl-NL", "Goedemorgen Amsterdam"), &client)
        .start_job()
        .await
        .unwrap_err();
    assert!(matches!(err, JobError::UnsupportedLanguage(ref code) if code == "nl-NL"));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn short_text_completes_with_no_data() {
    let client = RecordingClient::echo();
    let state = entity_job(
        JobState::new("en", vec![TextSegment::new("hi"), TextSegment::new("   ")]),
        &client,
    )
    .start_job()
    .await
    .unwrap();

    assert!(client.calls().is_empty());
    assert_eq!(state.status, JobStatus::NoData);
    let output = state.output_for("entity").unwrap();
    assert!(output.items.is_empty());
    assert_eq!(output.batch_count, 0);
}

#[tokio::test]
async fn failure_in_a_later_batch_aborts_the_job() {
    let client = RecordingClient::new(|operation, request| {
        if request.text_list[0] == "line 25" {
            Err(api_error("InternalServerException", "boom"))
        } else {
            Ok(echo_response(operation, request))
        }
    });
    let text = (0..40).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let err = entity_job(JobState::from_text("en", &text), &client)
        .start_job()
        .await
        .unwrap_err();

    assert_eq!(client.calls().len(), 2);
    assert_eq!(err.to_string(), "ClientError: InternalServerException: boom");
}

#[tokio::test]
async fn state_round_trips_through_json_after_a_job() {
    let client = RecordingClient::echo();
    let state = entity_job(JobState::from_text("en", "Jeff Bezos"), &client)
        .start_job()
        .await
        .unwrap();

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value["status"], "COMPLETED");
    assert_eq!(value["output"]["entity"]["items"][0]["Text"], "Jeff");
    assert_eq!(value["output"]["entity"]["items"][0]["segment"], 0);
    let restored: JobState = serde_json::from_value(value).unwrap();
    assert_eq!(restored, state);
}
