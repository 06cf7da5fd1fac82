use crate::profiles::ProfileId;
use crate::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input modality selected on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadType {
    #[default]
    Text,
    File,
    Audio,
    Video,
}

impl UploadType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Text, Self::File, Self::Audio, Self::Video]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Enter Text",
            Self::File => "Upload Document",
            Self::Audio => "Audio Recording",
            Self::Video => "Video Recording",
        }
    }

    pub const fn is_upload(self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// Fields shown on the text tab plus the remote video URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub scripture: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

impl SermonFormData {
    pub fn media_url(&self) -> Option<&str> {
        self.media_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Metadata for a file picked from disk. Contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type,
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Identifier issued by the analysis gateway for a submitted sermon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SermonId(pub String);

impl fmt::Display for SermonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the form handed to the analysis gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
    #[serde(default)]
    pub upload_type: UploadType,
    #[serde(default)]
    pub form: SermonFormData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<SelectedFile>,
}

/// Fields that can carry inline validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    Scripture,
    Content,
    Notes,
    MediaUrl,
    File,
}

pub type SubmissionFieldErrors = FieldErrors<FormField>;
