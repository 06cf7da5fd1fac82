//! Sermon submission: upload modes, media hints, the form state machine, and
//! the service that hands a sermon to the analysis gateway.

pub mod domain;
pub mod form;
pub mod media;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    FormField, SelectedFile, SermonFormData, SermonId, SermonSubmission, SubmissionFieldErrors,
    UploadType,
};
pub use form::{validate_submission, FormMessage, SubmissionForm};
pub use media::{UploadHint, WaveformPreview};
pub use router::submission_router;
pub use service::{
    AnalysisGateway, GatewayError, SimulatedAnalysisGateway, SubmissionError, SubmissionService,
};
