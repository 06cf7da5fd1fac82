use sermon_bench::evaluation::charts::{ChartKind, SeriesRole};
use sermon_bench::evaluation::{FeedbackKind, RatingTier, SermonEvaluation};
use sermon_bench::profiles::{ProfileCatalog, ProfileId};
use sermon_bench::submission::SermonFormData;
use sermon_bench::views::results::UNTITLED_SERMON;
use sermon_bench::views::{ResultsState, ResultsView, Route};

fn build(state: Option<&ResultsState>) -> ResultsView {
    ResultsView::build(
        "sermon-123",
        state,
        &ProfileCatalog::standard(),
        &SermonEvaluation::mock(),
    )
}

#[test]
fn missing_payload_falls_back_to_defaults() {
    let view = build(None);
    assert_eq!(view.sermon_id, "sermon-123");
    assert_eq!(view.sermon_title, UNTITLED_SERMON);
    assert_eq!(view.scripture, None);
    assert_eq!(view.profile.id, ProfileId::new("john-piper"));
    assert_eq!(view.profile.name, "John Piper");
}

#[test]
fn partial_payloads_fall_back_field_by_field() {
    let only_profile = ResultsState {
        sermon_data: None,
        profile_id: Some(ProfileId::new("tony-evans")),
    };
    let view = build(Some(&only_profile));
    assert_eq!(view.sermon_title, UNTITLED_SERMON);
    assert_eq!(view.profile.name, "Tony Evans");

    let unknown_profile = ResultsState {
        sermon_data: Some(SermonFormData {
            title: "  ".to_string(),
            ..SermonFormData::default()
        }),
        profile_id: Some(ProfileId::new("ghost")),
    };
    let view = build(Some(&unknown_profile));
    assert_eq!(view.sermon_title, UNTITLED_SERMON);
    assert_eq!(view.profile.id, ProfileId::new("john-piper"));
}

#[test]
fn full_payload_drives_title_and_comparison() {
    let state = ResultsState {
        sermon_data: Some(SermonFormData {
            title: "Faith Over Fear".to_string(),
            scripture: "Isaiah 41:10".to_string(),
            ..SermonFormData::default()
        }),
        profile_id: Some(ProfileId::new("billy-graham")),
    };
    let view = build(Some(&state));

    assert_eq!(view.sermon_title, "Faith Over Fear");
    assert_eq!(view.scripture.as_deref(), Some("Isaiah 41:10"));
    assert_eq!(view.score.overall, 76);
    assert_eq!(view.score.tier, RatingTier::VeryGood);

    assert_eq!(view.comparison.kind, ChartKind::Radar);
    assert_eq!(view.comparison.labels.len(), 6);
    assert_eq!(view.comparison.labels[1], "Biblical Accuracy");
    let benchmark = view
        .comparison
        .dataset(SeriesRole::Benchmark)
        .expect("benchmark series");
    assert_eq!(benchmark.label, "Billy Graham");
    assert_eq!(benchmark.data, [92, 95, 90, 88, 93, 94]);
    let submitted = view
        .comparison
        .dataset(SeriesRole::Submission)
        .expect("submission series");
    assert_eq!(submitted.label, "Your Sermon");
    assert_eq!(submitted.data, [78, 85, 82, 70, 68, 75]);

    assert_eq!(view.metrics.kind, ChartKind::Bar);
    assert_eq!(view.metrics.labels[3], "Theological Depth");
}

#[test]
fn feedback_and_resources_mention_the_profile() {
    let state = ResultsState {
        sermon_data: None,
        profile_id: Some(ProfileId::new("tim-keller")),
    };
    let view = build(Some(&state));

    assert_eq!(view.strengths.len(), 2);
    assert_eq!(view.improvements.len(), 3);
    assert!(view
        .strengths
        .iter()
        .all(|item| item.kind == FeedbackKind::Strength));
    assert!(view
        .improvements
        .iter()
        .any(|item| item.description.contains("Tim Keller")));
    assert_eq!(view.resources.len(), 3);
    assert!(view.resources[0].summary.contains("Tim Keller's Approach"));

    let targets: Vec<Route> = view
        .actions
        .iter()
        .map(|action| action.navigation.route.clone())
        .collect();
    assert_eq!(targets, [Route::Profiles, Route::Submit]);
}

#[test]
fn view_serializes_for_the_api() {
    let json = serde_json::to_value(build(None)).expect("serializes");
    assert_eq!(json["sermon_title"], UNTITLED_SERMON);
    assert_eq!(json["score"]["tier_label"], "Very Good");
    assert_eq!(json["breakdown"][0]["label"], "Structure");
    assert_eq!(json["comparison"]["options"]["scale_max"], 100);
}
