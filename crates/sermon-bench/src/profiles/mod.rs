//! Benchmark preacher profiles: catalog lookup, filtering, the selection view
//! state and the create-profile draft.

mod catalog;
pub mod domain;
pub mod draft;
mod parser;
mod seed;
pub mod selection;

pub use catalog::{CategoryFilter, ProfileCatalog, ProfileMatches};
pub use domain::{PreacherProfile, PreachingCategory, PreachingEra, ProfileId};
pub use draft::{DraftError, ProfileDraft, SampleSermon, SampleSermonKind};
pub use selection::{ProfileSelectionState, SelectionMessage};

use domain::{UnknownCategory, UnknownEra};

/// Failures while building or importing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("profile catalog must contain at least one profile")]
    Empty,
    #[error("duplicate profile id '{0}'")]
    DuplicateId(ProfileId),
    #[error("profile '{0}' has no categories")]
    MissingCategories(ProfileId),
    #[error("line {line}: {source}")]
    InvalidCategory { line: usize, source: UnknownCategory },
    #[error("line {line}: {source}")]
    InvalidEra { line: usize, source: UnknownEra },
    #[error("failed to read profile catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile CSV data: {0}")]
    Csv(#[from] csv::Error),
}
