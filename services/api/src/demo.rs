use crate::infra::{configured_catalog, describe_file, parse_metric_pair, upload_type_for};
use clap::Args;
use sermon_bench::error::AppError;
use sermon_bench::evaluation::{ScoreAggregator, SermonEvaluation};
use sermon_bench::profiles::{
    CategoryFilter, ProfileCatalog, ProfileId, ProfileSelectionState, SelectionMessage,
};
use sermon_bench::submission::{
    media, FormField, FormMessage, SimulatedAnalysisGateway, SubmissionForm, SubmissionService,
};
use sermon_bench::views::{RenderLoop, ResultsView, Route, ViewModel};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct ProfilesArgs {
    /// Case-insensitive search over names and descriptions
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Category id, or "all"
    #[arg(long, default_value = "all")]
    pub(crate) category: CategoryFilter,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Sub-score as NAME=SCORE; repeat for each metric
    #[arg(long = "metric", value_parser = parse_metric_pair, required = true)]
    pub(crate) metrics: Vec<(String, i32)>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Profile id to compare against (defaults to the first catalog profile)
    #[arg(long)]
    pub(crate) profile: Option<String>,
    /// Submit a media file instead of the sample text sermon
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Simulated analysis delay in milliseconds
    #[arg(long, default_value_t = 500)]
    pub(crate) delay_ms: u64,
}

pub(crate) fn run_profiles(args: ProfilesArgs) -> Result<(), AppError> {
    let catalog = configured_catalog()?;
    print_profiles(&catalog, args);
    Ok(())
}

fn print_profiles(catalog: &ProfileCatalog, args: ProfilesArgs) {
    let selection = ProfileSelectionState {
        search_term: args.query.unwrap_or_default(),
        category: args.category,
    };

    let matches = selection.visible(catalog);
    println!(
        "Preacher profiles ({} of {}, category: {})",
        matches.len(),
        catalog.len(),
        selection.category.label()
    );
    if let Some(message) = selection.empty_message(catalog) {
        println!("  {message}");
        return;
    }
    for profile in matches.profiles() {
        println!(
            "- {} [{}] {} | {}",
            profile.name,
            profile.id,
            profile.era.label(),
            profile.category_labels().join(", ")
        );
        println!("  Strengths: {}", profile.strengths.join(", "));
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let score = ScoreAggregator::aggregate(args.metrics.iter().map(|(name, score)| (name, *score)))?;
    println!("Overall score: {}/100 ({})", score.overall, score.tier_label);
    for (name, value) in &args.metrics {
        println!("  - {name}: {value}");
    }
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        file,
        delay_ms,
    } = args;

    let catalog = Arc::new(configured_catalog()?);
    println!("Sermon benchmark demo");

    let selection = ProfileSelectionState::default();
    let requested = profile
        .map(ProfileId)
        .unwrap_or_else(|| catalog.default_profile().id.clone());
    let chosen = selection.update(SelectionMessage::Choose(requested));
    let navigation_state = chosen
        .navigation
        .as_ref()
        .and_then(|navigation| navigation.state.as_ref());

    let mut form = RenderLoop::new(
        SubmissionForm::open(&catalog, navigation_state),
        |state: &SubmissionForm| {
            if let Some((_, message)) = state.errors.iter().next() {
                println!("  ! {message}");
            }
        },
    );
    let profile_name = catalog.resolve(Some(&form.state().profile_id)).name.clone();
    println!("- Comparing against {profile_name}");

    match file {
        Some(path) => {
            let selected = describe_file(&path)?;
            let upload_type = upload_type_for(&selected);
            println!(
                "- Uploading {} as {} ({})",
                selected.name,
                upload_type.label(),
                media::display_size(upload_type, selected.size_bytes)
            );
            if let Some(warning) = media::size_warning(upload_type, &selected) {
                println!("  Note: {warning}");
            }
            form.dispatch(FormMessage::SelectUploadType(upload_type));
            form.dispatch(FormMessage::SelectFile(selected));
            if let Some(waveform) = &form.state().waveform {
                println!(
                    "  Waveform preview ready ({}px, bars {}px)",
                    waveform.height, waveform.bar_width
                );
            }
        }
        None => {
            for (field, value) in sample_sermon() {
                form.dispatch(FormMessage::Edit(field, value));
            }
            println!("- Submitting sample sermon \"{}\"", form.state().fields.title);
        }
    }

    form.dispatch(FormMessage::SubmitRequested);
    if !form.state().submitting {
        println!("  Submission not sent; fix the errors above and retry.");
        return Ok(());
    }
    println!("  {}", form.state().submit_label());

    let gateway = Arc::new(SimulatedAnalysisGateway::new(Duration::from_millis(delay_ms)));
    let service = SubmissionService::new(catalog.clone(), gateway);
    let outcome = service.submit(form.state().submission()).await;
    let navigation = match outcome {
        Ok(navigation) => form.dispatch(FormMessage::SubmitSucceeded(navigation)),
        Err(err) => {
            println!("  Submission failed: {err}");
            form.dispatch(FormMessage::SubmitFailed(err));
            return Ok(());
        }
    };

    let Some(navigation) = navigation else {
        return Ok(());
    };
    let Route::Results { id } = &navigation.route else {
        return Ok(());
    };
    println!("- Navigating to {}", navigation.location());

    let view = ResultsView::build(
        id,
        navigation.results_state(),
        &catalog,
        &SermonEvaluation::mock(),
    );
    render_results(&view);
    Ok(())
}

fn sample_sermon() -> [(FormField, String); 4] {
    [
        (FormField::Title, "The Good Shepherd".to_string()),
        (FormField::Scripture, "John 10:11-18".to_string()),
        (
            FormField::Content,
            "I am the good shepherd. The good shepherd lays down his life for the sheep. \
             Tonight we look at what it means to be known by name, kept by grace, \
             and led by a shepherd who never loses one of his own."
                .to_string(),
        ),
        (FormField::Notes, "Evening service".to_string()),
    ]
}

fn render_results(view: &ResultsView) {
    println!("\nSermon Evaluation Results");
    println!("Sermon: {}", view.sermon_title);
    if let Some(scripture) = &view.scripture {
        println!("Scripture: {scripture}");
    }
    println!("Compared to: {}", view.profile.name);
    println!(
        "Overall score: {}/100 ({})",
        view.score.overall, view.score.tier_label
    );

    println!("Breakdown:");
    for row in &view.breakdown {
        let benchmark = row
            .benchmark
            .map(|score| format!(" | {} {score}", view.profile.name))
            .unwrap_or_default();
        println!(
            "  - {}: {}/100 ({}){}",
            row.label,
            row.score,
            row.tier.label(),
            benchmark
        );
    }

    println!("Sermon metrics (you vs {}):", view.profile.name);
    for (index, label) in view.metrics.labels.iter().enumerate() {
        let values: Vec<String> = view
            .metrics
            .datasets
            .iter()
            .filter_map(|dataset| dataset.data.get(index).map(u32::to_string))
            .collect();
        println!("  - {label}: {}", values.join(" vs "));
    }

    println!("Strengths:");
    for item in &view.strengths {
        println!("  + {}: {}", item.title, item.description);
    }
    println!("Areas for improvement:");
    for item in &view.improvements {
        println!("  * {}: {}", item.title, item.description);
    }
    println!("Recommended resources:");
    for resource in &view.resources {
        println!("  - {}: {}", resource.title, resource.summary);
    }
}
