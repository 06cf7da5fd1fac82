use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Extension;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sermon_bench::error::AppError;
use sermon_bench::evaluation::{AggregateScore, ScoreAggregator, SermonEvaluation};
use sermon_bench::profiles::{
    CategoryFilter, PreacherProfile, ProfileDraft, ProfileId, ProfileSelectionState,
};
use sermon_bench::submission::{submission_router, AnalysisGateway, SubmissionService};
use sermon_bench::views::{DashboardView, Navigation, ResultsState, ResultsView};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProfileQuery {
    #[serde(default)]
    pub(crate) q: Option<String>,
    #[serde(default)]
    pub(crate) category: Option<CategoryFilter>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileListResponse {
    pub(crate) filtered: bool,
    pub(crate) count: usize,
    pub(crate) profiles: Vec<PreacherProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProfileCreatedResponse {
    pub(crate) profile: PreacherProfile,
    pub(crate) navigation: Navigation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AggregateRequest {
    pub(crate) scores: BTreeMap<String, i32>,
}

pub(crate) fn with_sermon_routes<G>(service: Arc<SubmissionService<G>>) -> axum::Router
where
    G: AnalysisGateway + 'static,
{
    submission_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/profiles",
            get(list_profiles_endpoint).post(create_profile_endpoint),
        )
        .route("/api/v1/profiles/:profile_id", get(profile_endpoint))
        .route(
            "/api/v1/results/:sermon_id",
            get(default_results_endpoint).post(results_endpoint),
        )
        .route(
            "/api/v1/evaluations/aggregate",
            axum::routing::post(aggregate_endpoint),
        )
        .route("/api/v1/dashboard", get(dashboard_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn list_profiles_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Json<ProfileListResponse> {
    let selection = ProfileSelectionState {
        search_term: query.q.unwrap_or_default(),
        category: query.category.unwrap_or_default(),
    };
    let matches = selection.visible(&state.catalog);

    Json(ProfileListResponse {
        filtered: matches.is_filtered(),
        count: matches.len(),
        profiles: matches.into_profiles().into_iter().cloned().collect(),
        message: selection.empty_message(&state.catalog),
    })
}

pub(crate) async fn profile_endpoint(
    Extension(state): Extension<AppState>,
    Path(profile_id): Path<String>,
) -> Response {
    let id = ProfileId(profile_id);
    match state.catalog.get(&id) {
        Some(profile) => (StatusCode::OK, Json(profile.clone())).into_response(),
        None => {
            let payload = json!({
                "error": format!("profile '{id}' not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn create_profile_endpoint(
    Json(draft): Json<ProfileDraft>,
) -> Result<(StatusCode, Json<ProfileCreatedResponse>), AppError> {
    let (profile, navigation) = draft.submit()?;
    info!(profile_id = %profile.id, "profile draft accepted");
    Ok((
        StatusCode::CREATED,
        Json(ProfileCreatedResponse {
            profile,
            navigation,
        }),
    ))
}

pub(crate) async fn default_results_endpoint(
    Extension(state): Extension<AppState>,
    Path(sermon_id): Path<String>,
) -> Json<ResultsView> {
    Json(ResultsView::build(
        &sermon_id,
        None,
        &state.catalog,
        &SermonEvaluation::mock(),
    ))
}

pub(crate) async fn results_endpoint(
    Extension(state): Extension<AppState>,
    Path(sermon_id): Path<String>,
    Json(payload): Json<ResultsState>,
) -> Json<ResultsView> {
    Json(ResultsView::build(
        &sermon_id,
        Some(&payload),
        &state.catalog,
        &SermonEvaluation::mock(),
    ))
}

pub(crate) async fn aggregate_endpoint(
    Json(request): Json<AggregateRequest>,
) -> Result<Json<AggregateScore>, AppError> {
    let score = ScoreAggregator::aggregate(request.scores)?;
    Ok(Json(score))
}

pub(crate) async fn dashboard_endpoint() -> Json<DashboardView> {
    Json(DashboardView::mock(Local::now().date_naive()))
}
