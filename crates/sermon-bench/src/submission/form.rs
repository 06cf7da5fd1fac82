use super::domain::{
    FormField, SelectedFile, SermonFormData, SermonSubmission, SubmissionFieldErrors, UploadType,
};
use super::media::{self, WaveformPreview};
use super::service::SubmissionError;
use crate::profiles::{ProfileCatalog, ProfileId};
use crate::views::{Navigation, NavigationState, Transition, ViewModel};

pub const MIN_CONTENT_CHARS: usize = 100;

/// Checks a submission snapshot. Text mode checks the written fields; upload
/// modes only require an attachment that the current mode accepts.
pub fn validate_submission(submission: &SermonSubmission) -> Result<(), SubmissionFieldErrors> {
    let mut errors = SubmissionFieldErrors::new();
    let form = &submission.form;

    match submission.upload_type {
        UploadType::Text => {
            if form.title.trim().is_empty() {
                errors.insert(FormField::Title, "Title is required");
            }
            if form.scripture.trim().is_empty() {
                errors.insert(FormField::Scripture, "Scripture reference is required");
            }
            if form.content.trim().is_empty() {
                errors.insert(FormField::Content, "Sermon content is required");
            } else if form.content.chars().count() < MIN_CONTENT_CHARS {
                errors.insert(
                    FormField::Content,
                    "Sermon content should be at least 100 characters",
                );
            }
        }
        upload_type => match &submission.file {
            Some(file) if !media::accepts(upload_type, file) => {
                errors.insert(FormField::File, unsupported_file_message(upload_type, file));
            }
            Some(_) => {}
            None if upload_type == UploadType::Video && form.media_url().is_some() => {}
            None if upload_type == UploadType::Video => {
                errors.insert(FormField::File, "Add a video file or a video URL");
            }
            None => {
                errors.insert(FormField::File, "Select a file to analyze");
            }
        },
    }

    errors.into_result(())
}

fn unsupported_file_message(upload_type: UploadType, file: &SelectedFile) -> String {
    format!(
        "{} is not supported for {}",
        file.name,
        upload_type.label().to_lowercase()
    )
}

/// State of the submission page.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionForm {
    pub profile_id: ProfileId,
    pub upload_type: UploadType,
    pub fields: SermonFormData,
    pub selected_file: Option<SelectedFile>,
    pub waveform: Option<WaveformPreview>,
    pub submitting: bool,
    pub errors: SubmissionFieldErrors,
    pub alert: Option<String>,
}

#[derive(Debug)]
pub enum FormMessage {
    SelectUploadType(UploadType),
    Edit(FormField, String),
    SelectFile(SelectedFile),
    ClearFile,
    SubmitRequested,
    SubmitSucceeded(Navigation),
    SubmitFailed(SubmissionError),
}

impl SubmissionForm {
    pub fn for_profile(profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            upload_type: UploadType::default(),
            fields: SermonFormData::default(),
            selected_file: None,
            waveform: None,
            submitting: false,
            errors: SubmissionFieldErrors::new(),
            alert: None,
        }
    }

    /// Opens the form for the profile handed over by navigation, or the default profile.
    pub fn open(catalog: &ProfileCatalog, state: Option<&NavigationState>) -> Self {
        let requested = match state {
            Some(NavigationState::Submit {
                selected_profile_id,
            }) => Some(selected_profile_id),
            _ => None,
        };
        Self::for_profile(catalog.resolve(requested).id.clone())
    }

    pub fn submission(&self) -> SermonSubmission {
        SermonSubmission {
            profile_id: Some(self.profile_id.clone()),
            upload_type: self.upload_type,
            form: self.fields.clone(),
            file: self.selected_file.clone(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Analyzing..."
        } else {
            "Analyze Sermon"
        }
    }

    pub fn size_hint(&self) -> Option<String> {
        let file = self.selected_file.as_ref()?;
        Some(media::display_size(self.upload_type, file.size_bytes))
    }
}

impl ViewModel for SubmissionForm {
    type Message = FormMessage;

    fn update(&self, message: Self::Message) -> Transition<Self> {
        let mut next = self.clone();
        match message {
            FormMessage::SelectUploadType(upload_type) => {
                next.upload_type = upload_type;
            }
            FormMessage::Edit(field, value) => {
                match field {
                    FormField::Title => next.fields.title = value,
                    FormField::Scripture => next.fields.scripture = value,
                    FormField::Content => next.fields.content = value,
                    FormField::Notes => next.fields.notes = optional(value),
                    FormField::MediaUrl => next.fields.media_url = optional(value),
                    FormField::File => return Transition::stay(next),
                }
                next.errors.remove(&field);
            }
            FormMessage::SelectFile(file) => {
                if !media::accepts(self.upload_type, &file) {
                    next.errors.insert(
                        FormField::File,
                        unsupported_file_message(self.upload_type, &file),
                    );
                    return Transition::stay(next);
                }
                next.waveform = (self.upload_type == UploadType::Audio)
                    .then(|| WaveformPreview::for_file(&file));
                next.errors.remove(&FormField::File);
                next.selected_file = Some(file);
            }
            FormMessage::ClearFile => {
                next.selected_file = None;
                next.waveform = None;
            }
            FormMessage::SubmitRequested => {
                if self.submitting {
                    return Transition::stay(next);
                }
                next.alert = None;
                match validate_submission(&self.submission()) {
                    Ok(()) => {
                        next.errors = SubmissionFieldErrors::new();
                        next.submitting = true;
                    }
                    Err(errors) => next.errors = errors,
                }
            }
            FormMessage::SubmitSucceeded(navigation) => {
                return Transition::navigate(next, navigation);
            }
            FormMessage::SubmitFailed(error) => {
                next.submitting = false;
                match error {
                    SubmissionError::Validation(errors) => next.errors = errors,
                    SubmissionError::Network(error) => next.alert = Some(error.to_string()),
                }
            }
        }
        Transition::stay(next)
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
