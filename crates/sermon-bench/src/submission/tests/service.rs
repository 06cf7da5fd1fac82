use std::sync::Arc;
use std::time::{Duration, Instant};

use super::common::*;
use crate::profiles::ProfileId;
use crate::submission::{
    AnalysisGateway, FormField, GatewayError, SimulatedAnalysisGateway, SubmissionError,
    SubmissionService, UploadType,
};
use crate::views::{NavigationState, Route};

fn sequence_number(id: &str) -> u64 {
    id.strip_prefix("sermon-")
        .and_then(|n| n.parse().ok())
        .expect("sermon id has numeric suffix")
}

#[tokio::test]
async fn simulated_gateway_waits_then_issues_increasing_ids() {
    let gateway = SimulatedAnalysisGateway::new(Duration::from_millis(20));
    let started = Instant::now();
    let first = gateway
        .analyze(&text_submission("john-piper"))
        .await
        .expect("simulated gateway never fails");
    assert!(started.elapsed() >= Duration::from_millis(20));

    let second = gateway
        .analyze(&text_submission("john-piper"))
        .await
        .expect("simulated gateway never fails");

    let first = sequence_number(&first.0);
    let second = sequence_number(&second.0);
    assert!(first >= 123);
    assert!(second > first);
}

#[tokio::test]
async fn submit_navigates_to_results_with_payload() {
    let gateway = Arc::new(RecordingGateway::default());
    let service = SubmissionService::new(catalog(), gateway.clone());

    let navigation = service
        .submit(text_submission("billy-graham"))
        .await
        .expect("valid submission");

    assert_eq!(
        navigation.route,
        Route::Results {
            id: "sermon-900".to_string()
        }
    );
    assert_eq!(navigation.location(), "/results/sermon-900");
    let state = navigation.results_state().expect("results payload");
    assert_eq!(state.sermon_data.as_ref(), Some(&text_form()));
    assert_eq!(state.profile_id, Some(ProfileId::new("billy-graham")));
    assert_eq!(gateway.calls().len(), 1);
}

#[tokio::test]
async fn unknown_profile_falls_back_to_default() {
    let service = SubmissionService::new(catalog(), Arc::new(RecordingGateway::default()));
    let navigation = service
        .submit(text_submission("not-a-preacher"))
        .await
        .expect("valid submission");
    match navigation.state {
        Some(NavigationState::Results(state)) => {
            assert_eq!(state.profile_id, Some(ProfileId::new("john-piper")));
        }
        other => panic!("unexpected navigation state {other:?}"),
    }
}

#[tokio::test]
async fn invalid_submission_never_reaches_gateway() {
    let gateway = Arc::new(RecordingGateway::default());
    let service = SubmissionService::new(catalog(), gateway.clone());
    let mut submission = text_submission("john-piper");
    submission.form.title = "   ".to_string();

    let error = service.submit(submission).await.expect_err("missing title");
    match error {
        SubmissionError::Validation(errors) => assert!(errors.contains(&FormField::Title)),
        other => panic!("unexpected error {other:?}"),
    }
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn gateway_failures_map_to_submission_errors() {
    let unavailable = SubmissionService::new(catalog(), Arc::new(UnavailableGateway));
    let error = unavailable
        .submit(text_submission("john-piper"))
        .await
        .expect_err("gateway down");
    assert!(matches!(
        error,
        SubmissionError::Network(GatewayError::Unavailable(_))
    ));

    let rejecting = SubmissionService::new(catalog(), Arc::new(RejectingGateway));
    let error = rejecting
        .submit(text_submission("john-piper"))
        .await
        .expect_err("gateway rejects");
    match error {
        SubmissionError::Validation(errors) => {
            assert_eq!(
                errors.get(&FormField::Content),
                Some("Content could not be transcribed")
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn audio_submission_only_needs_the_recording() {
    let service = simulated_service();
    let mut submission = text_submission("tony-evans");
    submission.upload_type = UploadType::Audio;
    submission.form = Default::default();
    submission.file = Some(audio_file());

    let navigation = service.submit(submission).await.expect("audio accepted");
    assert!(navigation.location().starts_with("/results/sermon-"));
}
