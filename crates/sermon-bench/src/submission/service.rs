use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::domain::{SermonId, SermonSubmission, SubmissionFieldErrors};
use super::form::validate_submission;
use crate::config::AnalysisConfig;
use crate::profiles::ProfileCatalog;
use crate::views::{Navigation, NavigationState, ResultsState, Route};

/// Outbound hook that hands a sermon to the analysis backend.
pub trait AnalysisGateway: Send + Sync {
    fn analyze(
        &self,
        submission: &SermonSubmission,
    ) -> impl Future<Output = Result<SermonId, GatewayError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("analysis service unavailable: {0}")]
    Unavailable(String),
    #[error("analysis service rejected the submission: {0}")]
    Rejected(SubmissionFieldErrors),
}

/// Error raised by the submission service. Both variants return the user to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission is invalid: {0}")]
    Validation(SubmissionFieldErrors),
    #[error(transparent)]
    Network(GatewayError),
}

impl From<GatewayError> for SubmissionError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Rejected(errors) => Self::Validation(errors),
            other => Self::Network(other),
        }
    }
}

static SERMON_SEQUENCE: AtomicU64 = AtomicU64::new(123);

fn next_sermon_id() -> SermonId {
    let id = SERMON_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SermonId(format!("sermon-{id}"))
}

/// Stand-in backend: waits for a fixed delay, then issues the next sermon id.
#[derive(Debug, Clone)]
pub struct SimulatedAnalysisGateway {
    delay: Duration,
}

impl SimulatedAnalysisGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl AnalysisGateway for SimulatedAnalysisGateway {
    fn analyze(
        &self,
        submission: &SermonSubmission,
    ) -> impl Future<Output = Result<SermonId, GatewayError>> + Send {
        let delay = self.delay;
        let upload_type = submission.upload_type;
        async move {
            debug!(?upload_type, delay_ms = delay.as_millis() as u64, "simulating analysis");
            tokio::time::sleep(delay).await;
            Ok(next_sermon_id())
        }
    }
}

/// Service validating submissions and forwarding them to the analysis gateway.
pub struct SubmissionService<G> {
    catalog: Arc<ProfileCatalog>,
    gateway: Arc<G>,
}

impl<G> SubmissionService<G>
where
    G: AnalysisGateway + 'static,
{
    pub fn new(catalog: Arc<ProfileCatalog>, gateway: Arc<G>) -> Self {
        Self { catalog, gateway }
    }

    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }

    /// Submit a sermon and return the navigation to its results page.
    pub async fn submit(&self, submission: SermonSubmission) -> Result<Navigation, SubmissionError> {
        validate_submission(&submission).map_err(SubmissionError::Validation)?;

        let profile_id = self
            .catalog
            .resolve(submission.profile_id.as_ref())
            .id
            .clone();

        let sermon_id = self.gateway.analyze(&submission).await?;
        info!(%sermon_id, %profile_id, upload_type = ?submission.upload_type, "sermon analyzed");

        let state = ResultsState {
            sermon_data: Some(submission.form),
            profile_id: Some(profile_id),
        };
        Ok(Navigation::with_state(
            Route::Results { id: sermon_id.0 },
            NavigationState::Results(state),
        ))
    }
}
