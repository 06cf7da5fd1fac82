use super::common::*;
use crate::profiles::{ProfileCatalog, ProfileId};
use crate::submission::{
    validate_submission, FormField, FormMessage, GatewayError, SelectedFile, SubmissionError,
    SubmissionFieldErrors, SubmissionForm, UploadType,
};
use crate::views::{Navigation, NavigationState, RenderLoop, Route, ViewModel};

fn form() -> SubmissionForm {
    SubmissionForm::for_profile(ProfileId::new("john-piper"))
}

fn filled_text_form() -> SubmissionForm {
    let mut form = form();
    form.fields = text_form();
    form
}

fn apply(form: &SubmissionForm, message: FormMessage) -> SubmissionForm {
    form.update(message).state
}

#[test]
fn opens_for_selected_profile_or_default() {
    let catalog = ProfileCatalog::standard();
    let state = NavigationState::Submit {
        selected_profile_id: ProfileId::new("tim-keller"),
    };
    assert_eq!(
        SubmissionForm::open(&catalog, Some(&state)).profile_id,
        ProfileId::new("tim-keller")
    );

    let unknown = NavigationState::Submit {
        selected_profile_id: ProfileId::new("nobody"),
    };
    assert_eq!(
        SubmissionForm::open(&catalog, Some(&unknown)).profile_id,
        ProfileId::new("john-piper")
    );
    assert_eq!(
        SubmissionForm::open(&catalog, None).profile_id,
        ProfileId::new("john-piper")
    );
}

#[test]
fn switching_upload_type_keeps_entered_data() {
    let mut state = filled_text_form();
    state = apply(&state, FormMessage::SelectUploadType(UploadType::File));
    state = apply(&state, FormMessage::SelectFile(document_file()));

    for upload_type in [UploadType::Video, UploadType::Audio, UploadType::Text] {
        state = apply(&state, FormMessage::SelectUploadType(upload_type));
        assert_eq!(state.upload_type, upload_type);
        assert_eq!(state.fields, text_form());
        assert_eq!(state.selected_file, Some(document_file()));
    }
}

#[test]
fn text_mode_reports_each_missing_field() {
    let state = apply(&form(), FormMessage::SubmitRequested);
    assert!(!state.submitting);
    assert_eq!(state.errors.get(&FormField::Title), Some("Title is required"));
    assert_eq!(
        state.errors.get(&FormField::Scripture),
        Some("Scripture reference is required")
    );
    assert_eq!(
        state.errors.get(&FormField::Content),
        Some("Sermon content is required")
    );
}

#[test]
fn short_content_is_rejected() {
    let mut state = filled_text_form();
    state.fields.content = "x".repeat(99);
    let state = apply(&state, FormMessage::SubmitRequested);
    assert_eq!(
        state.errors.get(&FormField::Content),
        Some("Sermon content should be at least 100 characters")
    );

    let mut state = filled_text_form();
    state.fields.content = "x".repeat(100);
    assert!(apply(&state, FormMessage::SubmitRequested).errors.is_empty());
}

#[test]
fn editing_a_field_clears_its_error() {
    let state = apply(&form(), FormMessage::SubmitRequested);
    let state = apply(
        &state,
        FormMessage::Edit(FormField::Title, "Faith Over Fear".to_string()),
    );
    assert!(!state.errors.contains(&FormField::Title));
    assert!(state.errors.contains(&FormField::Scripture));
    assert_eq!(state.fields.title, "Faith Over Fear");

    let state = apply(&state, FormMessage::Edit(FormField::Notes, "  ".to_string()));
    assert_eq!(state.fields.notes, None);
}

#[test]
fn upload_modes_require_an_attachment() {
    let state = apply(&form(), FormMessage::SelectUploadType(UploadType::Audio));
    let state = apply(&state, FormMessage::SubmitRequested);
    assert_eq!(
        state.errors.get(&FormField::File),
        Some("Select a file to analyze")
    );
    assert!(!state.errors.contains(&FormField::Title));

    let state = apply(&form(), FormMessage::SelectUploadType(UploadType::Video));
    let state = apply(
        &state,
        FormMessage::Edit(FormField::MediaUrl, "https://youtu.be/abc".to_string()),
    );
    let state = apply(&state, FormMessage::SubmitRequested);
    assert!(state.submitting);
    assert!(state.errors.is_empty());
}

#[test]
fn mismatched_files_are_refused_at_selection() {
    let state = apply(&form(), FormMessage::SelectUploadType(UploadType::File));
    let state = apply(&state, FormMessage::SelectFile(audio_file()));
    assert!(state.selected_file.is_none());
    assert!(state.errors.contains(&FormField::File));

    let state = apply(&state, FormMessage::SelectFile(document_file()));
    assert_eq!(state.selected_file, Some(document_file()));
    assert!(!state.errors.contains(&FormField::File));
    assert_eq!(state.size_hint().as_deref(), Some("2.0 KB"));
}

#[test]
fn audio_selection_builds_a_fresh_waveform() {
    let state = apply(&form(), FormMessage::SelectUploadType(UploadType::Audio));
    assert!(state.waveform.is_none());

    let state = apply(&state, FormMessage::SelectFile(audio_file()));
    let waveform = state.waveform.clone().expect("waveform built");
    assert_eq!(waveform.source_name, "shepherd.mp3");
    assert_eq!(waveform.wave_color, "#4F46E5");
    assert_eq!(waveform.height, 80);

    let replacement = SelectedFile::new("evening.wav", 1024, Some("audio/wav".to_string()));
    let state = apply(&state, FormMessage::SelectFile(replacement));
    assert_eq!(
        state.waveform.as_ref().map(|w| w.source_name.as_str()),
        Some("evening.wav")
    );

    let state = apply(&state, FormMessage::ClearFile);
    assert!(state.selected_file.is_none());
    assert!(state.waveform.is_none());
}

#[test]
fn non_audio_selection_drops_the_previous_waveform() {
    let state = apply(&form(), FormMessage::SelectUploadType(UploadType::Audio));
    let state = apply(&state, FormMessage::SelectFile(audio_file()));
    assert!(state.waveform.is_some());

    let state = apply(&state, FormMessage::SelectUploadType(UploadType::File));
    let state = apply(&state, FormMessage::SelectFile(document_file()));
    assert_eq!(state.selected_file, Some(document_file()));
    assert!(state.waveform.is_none());
}

#[test]
fn submit_is_ignored_while_submitting() {
    let submitting = apply(&filled_text_form(), FormMessage::SubmitRequested);
    assert!(submitting.submitting);
    assert_eq!(submitting.submit_label(), "Analyzing...");

    let again = submitting.update(FormMessage::SubmitRequested);
    assert_eq!(again.state, submitting);
    assert!(again.navigation.is_none());
}

#[test]
fn failures_return_to_an_editable_form() {
    let submitting = apply(&filled_text_form(), FormMessage::SubmitRequested);

    let failed = apply(
        &submitting,
        FormMessage::SubmitFailed(SubmissionError::Network(GatewayError::Unavailable(
            "timeout".to_string(),
        ))),
    );
    assert!(!failed.submitting);
    assert_eq!(failed.submit_label(), "Analyze Sermon");
    assert!(failed.alert.as_deref().unwrap_or_default().contains("timeout"));

    let mut errors = SubmissionFieldErrors::new();
    errors.insert(FormField::Scripture, "Unrecognized reference");
    let rejected = apply(
        &submitting,
        FormMessage::SubmitFailed(SubmissionError::Validation(errors)),
    );
    assert!(!rejected.submitting);
    assert_eq!(
        rejected.errors.get(&FormField::Scripture),
        Some("Unrecognized reference")
    );
}

#[test]
fn render_loop_follows_a_full_submission() {
    let mut renders = 0;
    let mut view = RenderLoop::new(form(), |_: &SubmissionForm| renders += 1);
    for (field, value) in [
        (FormField::Title, text_form().title),
        (FormField::Scripture, text_form().scripture),
        (FormField::Content, text_form().content),
    ] {
        assert!(view.dispatch(FormMessage::Edit(field, value)).is_none());
    }
    view.dispatch(FormMessage::SubmitRequested);
    assert!(view.state().submitting);

    let target = Navigation::to(Route::Results {
        id: "sermon-500".to_string(),
    });
    let navigation = view.dispatch(FormMessage::SubmitSucceeded(target.clone()));
    assert_eq!(navigation, Some(target));
    assert_eq!(view.render_count(), 5);
    drop(view);
    assert_eq!(renders, 5);
}

#[test]
fn validation_checks_file_kind_against_mode() {
    let mut submission = text_submission("john-piper");
    submission.upload_type = UploadType::Video;
    submission.file = Some(document_file());
    let errors = validate_submission(&submission).expect_err("pdf is not a video");
    assert!(errors.contains(&FormField::File));

    submission.file = Some(SelectedFile::new(
        "sermon.mp4",
        10,
        Some("video/mp4".to_string()),
    ));
    assert!(validate_submission(&submission).is_ok());
}
