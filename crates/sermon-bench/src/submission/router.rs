use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::SermonSubmission;
use super::service::{AnalysisGateway, SubmissionError, SubmissionService};

/// Router builder exposing the sermon submission endpoint.
pub fn submission_router<G>(service: Arc<SubmissionService<G>>) -> Router
where
    G: AnalysisGateway + 'static,
{
    Router::new()
        .route("/api/v1/sermons", post(submit_handler::<G>))
        .with_state(service)
}

pub(crate) async fn submit_handler<G>(
    State(service): State<Arc<SubmissionService<G>>>,
    axum::Json(submission): axum::Json<SermonSubmission>,
) -> Response
where
    G: AnalysisGateway + 'static,
{
    match service.submit(submission).await {
        Ok(navigation) => {
            let payload = json!({
                "location": navigation.location(),
                "navigation": navigation,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Validation(errors)) => {
            let payload = json!({
                "error": "submission is invalid",
                "fields": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Network(error)) => {
            warn!(%error, "analysis gateway failed");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
