use super::domain::{PreacherProfile, PreachingCategory, PreachingEra, ProfileId};
use crate::submission::SelectedFile;
use crate::validation::FieldErrors;
use crate::views::{Navigation, Route};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MIN_DESCRIPTION_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Name,
    Description,
    Categories,
    Strengths,
    Era,
    ImageUrl,
}

pub type DraftFieldErrors = FieldErrors<DraftField>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("profile draft is invalid: {0}")]
    Invalid(DraftFieldErrors),
}

impl DraftError {
    pub fn field_errors(&self) -> &DraftFieldErrors {
        match self {
            DraftError::Invalid(errors) => errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleSermonKind {
    #[default]
    Text,
    Document,
    Audio,
    Video,
}

/// Example sermon attached to a draft profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSermon {
    pub id: String,
    pub title: String,
    pub scripture: String,
    pub kind: SampleSermonKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<SelectedFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl SampleSermon {
    /// Blank sample keyed by the creation instant in milliseconds.
    pub fn new(kind: SampleSermonKind, created_at: DateTime<Utc>) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            title: String::new(),
            scripture: String::new(),
            kind,
            content: None,
            file: None,
            media_url: None,
        }
    }
}

/// Create-profile form contents.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDraft {
    pub name: String,
    pub description: String,
    pub categories: BTreeSet<PreachingCategory>,
    /// Comma-separated, as typed.
    pub strengths: String,
    pub era: Option<PreachingEra>,
    pub image_url: String,
    pub sample_sermons: Vec<SampleSermon>,
}

impl ProfileDraft {
    pub fn add_sample(&mut self, sample: SampleSermon) {
        self.sample_sermons.push(sample);
    }

    pub fn remove_sample(&mut self, id: &str) -> bool {
        let before = self.sample_sermons.len();
        self.sample_sermons.retain(|sample| sample.id != id);
        before != self.sample_sermons.len()
    }

    pub fn strengths_list(&self) -> Vec<String> {
        self.strengths
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn field_errors(&self) -> DraftFieldErrors {
        let mut errors = DraftFieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(DraftField::Name, "Name is required");
        } else if slugify(&self.name).is_empty() {
            errors.insert(DraftField::Name, "Name must contain letters or digits");
        }
        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.insert(
                DraftField::Description,
                "Please provide a detailed description (minimum 100 characters)",
            );
        }
        if self.categories.is_empty() {
            errors.insert(DraftField::Categories, "Select at least one category");
        }
        if self.strengths_list().is_empty() {
            errors.insert(DraftField::Strengths, "Please list key strengths");
        }
        if self.era.is_none() {
            errors.insert(DraftField::Era, "Please select an era");
        }
        if self.image_url.trim().is_empty() {
            errors.insert(DraftField::ImageUrl, "Please provide an image URL");
        }

        errors
    }

    pub fn validate(&self) -> Result<PreacherProfile, DraftError> {
        let errors = self.field_errors();
        let era = match (errors.is_empty(), self.era) {
            (true, Some(era)) => era,
            _ => return Err(DraftError::Invalid(errors)),
        };

        Ok(PreacherProfile {
            id: ProfileId(slugify(&self.name)),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            categories: self.categories.clone(),
            strengths: self.strengths_list(),
            era,
            image_url: self.image_url.trim().to_string(),
        })
    }

    /// Validates and hands back the navigation to the profile list.
    pub fn submit(&self) -> Result<(PreacherProfile, Navigation), DraftError> {
        let profile = self.validate()?;
        Ok((profile, Navigation::to(Route::Profiles)))
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
