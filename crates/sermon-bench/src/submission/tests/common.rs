use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::profiles::{ProfileCatalog, ProfileId};
use crate::submission::{
    AnalysisGateway, FormField, GatewayError, SelectedFile, SermonFormData, SermonId,
    SermonSubmission, SimulatedAnalysisGateway, SubmissionFieldErrors, SubmissionService,
    UploadType,
};

pub(super) fn sermon_body() -> String {
    "Jesus said, I am the good shepherd. The good shepherd lays down his life for the sheep. \
     He knows his own and his own know him, and no one can snatch them out of his hand."
        .to_string()
}

pub(super) fn text_form() -> SermonFormData {
    SermonFormData {
        title: "The Good Shepherd".to_string(),
        scripture: "John 10:11-18".to_string(),
        content: sermon_body(),
        notes: Some("Morning service".to_string()),
        media_url: None,
    }
}

pub(super) fn text_submission(profile: &str) -> SermonSubmission {
    SermonSubmission {
        profile_id: Some(ProfileId::new(profile)),
        upload_type: UploadType::Text,
        form: text_form(),
        file: None,
    }
}

pub(super) fn audio_file() -> SelectedFile {
    SelectedFile::new("shepherd.mp3", 5 * 1024 * 1024, Some("audio/mpeg".to_string()))
}

pub(super) fn document_file() -> SelectedFile {
    SelectedFile::new("shepherd.pdf", 2048, Some("application/pdf".to_string()))
}

pub(super) fn catalog() -> Arc<ProfileCatalog> {
    Arc::new(ProfileCatalog::standard())
}

pub(super) fn simulated_service() -> Arc<SubmissionService<SimulatedAnalysisGateway>> {
    Arc::new(SubmissionService::new(
        catalog(),
        Arc::new(SimulatedAnalysisGateway::new(Duration::from_millis(5))),
    ))
}

#[derive(Default)]
pub(super) struct RecordingGateway {
    calls: Mutex<Vec<SermonSubmission>>,
}

impl RecordingGateway {
    pub(super) fn calls(&self) -> Vec<SermonSubmission> {
        self.calls.lock().expect("lock").clone()
    }
}

impl AnalysisGateway for RecordingGateway {
    fn analyze(
        &self,
        submission: &SermonSubmission,
    ) -> impl Future<Output = Result<SermonId, GatewayError>> + Send {
        self.calls.lock().expect("lock").push(submission.clone());
        async { Ok(SermonId("sermon-900".to_string())) }
    }
}

pub(super) struct UnavailableGateway;

impl AnalysisGateway for UnavailableGateway {
    fn analyze(
        &self,
        _submission: &SermonSubmission,
    ) -> impl Future<Output = Result<SermonId, GatewayError>> + Send {
        async { Err(GatewayError::Unavailable("connection reset".to_string())) }
    }
}

pub(super) struct RejectingGateway;

impl AnalysisGateway for RejectingGateway {
    fn analyze(
        &self,
        _submission: &SermonSubmission,
    ) -> impl Future<Output = Result<SermonId, GatewayError>> + Send {
        async {
            let mut errors = SubmissionFieldErrors::new();
            errors.insert(FormField::Content, "Content could not be transcribed");
            Err(GatewayError::Rejected(errors))
        }
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
