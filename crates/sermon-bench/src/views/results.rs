use serde::Serialize;

use super::navigation::{Navigation, ResultsState, Route};
use crate::evaluation::charts::{ChartData, Series, SeriesRole};
use crate::evaluation::feedback::{feedback_for, recommended_resources};
use crate::evaluation::{
    AggregateScore, BenchmarkScores, FeedbackItem, FeedbackKind, RatingTier, ResourceLink,
    SermonEvaluation, SermonMetric, SermonStatistic,
};
use crate::profiles::{PreacherProfile, ProfileCatalog, ProfileId};

pub const UNTITLED_SERMON: &str = "Untitled Sermon";
const SUBMISSION_SERIES: &str = "Your Sermon";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub id: ProfileId,
    pub name: String,
    pub era: &'static str,
    pub categories: Vec<&'static str>,
}

impl From<&PreacherProfile> for ProfileSummary {
    fn from(profile: &PreacherProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            era: profile.era.label(),
            categories: profile.category_labels(),
        }
    }
}

/// One row of the per-metric breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricBreakdown {
    pub metric: SermonMetric,
    pub label: &'static str,
    pub score: u8,
    pub benchmark: Option<u8>,
    pub tier: RatingTier,
    pub band: &'static str,
}

/// Color band of a score bar; same thresholds as the rating tiers.
pub const fn score_band(tier: RatingTier) -> &'static str {
    match tier {
        RatingTier::Exceptional => "green-500",
        RatingTier::Excellent => "green-400",
        RatingTier::VeryGood => "yellow-400",
        RatingTier::Good => "yellow-500",
        RatingTier::NeedsImprovement => "red-500",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsAction {
    pub label: &'static str,
    pub navigation: Navigation,
}

/// Everything the results page renders for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub sermon_id: String,
    pub sermon_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scripture: Option<String>,
    pub profile: ProfileSummary,
    pub score: AggregateScore,
    pub comparison: ChartData,
    pub metrics: ChartData,
    pub strengths: Vec<FeedbackItem>,
    pub improvements: Vec<FeedbackItem>,
    pub breakdown: Vec<MetricBreakdown>,
    pub resources: Vec<ResourceLink>,
    pub actions: Vec<ResultsAction>,
}

impl ResultsView {
    /// Builds the page. A missing payload, title or profile id falls back to
    /// an untitled sermon compared against the first catalog profile.
    pub fn build(
        sermon_id: &str,
        state: Option<&ResultsState>,
        catalog: &ProfileCatalog,
        evaluation: &SermonEvaluation,
    ) -> Self {
        let sermon = state.and_then(|state| state.sermon_data.as_ref());
        let profile = catalog.resolve(state.and_then(|state| state.profile_id.as_ref()));

        let sermon_title = sermon
            .map(|sermon| sermon.title.trim())
            .filter(|title| !title.is_empty())
            .unwrap_or(UNTITLED_SERMON)
            .to_string();
        let scripture = sermon
            .map(|sermon| sermon.scripture.trim())
            .filter(|scripture| !scripture.is_empty())
            .map(str::to_string);

        let benchmark = BenchmarkScores::mock();
        let (strengths, improvements) = feedback_for(profile)
            .into_iter()
            .partition(|item| item.kind == FeedbackKind::Strength);

        let breakdown = evaluation
            .iter()
            .map(|(metric, score)| {
                let tier = RatingTier::from_score(score);
                MetricBreakdown {
                    metric,
                    label: metric.label(),
                    score,
                    benchmark: benchmark.get(metric),
                    tier,
                    band: score_band(tier),
                }
            })
            .collect();

        Self {
            sermon_id: sermon_id.to_string(),
            sermon_title,
            scripture,
            profile: ProfileSummary::from(profile),
            score: evaluation.summary(),
            comparison: comparison_chart(profile, evaluation, &benchmark),
            metrics: statistics_chart(profile),
            strengths,
            improvements,
            breakdown,
            resources: recommended_resources(profile),
            actions: vec![
                ResultsAction {
                    label: "Change Profile",
                    navigation: Navigation::to(Route::Profiles),
                },
                ResultsAction {
                    label: "Submit Another Sermon",
                    navigation: Navigation::to(Route::Submit),
                },
            ],
        }
    }
}

fn comparison_chart(
    profile: &PreacherProfile,
    evaluation: &SermonEvaluation,
    benchmark: &BenchmarkScores,
) -> ChartData {
    let labels = evaluation
        .iter()
        .map(|(metric, _)| metric.label().to_string())
        .collect();
    let submitted = evaluation.iter().map(|(_, score)| u32::from(score)).collect();
    let ideal = evaluation
        .iter()
        .map(|(metric, _)| u32::from(benchmark.get(metric).unwrap_or_default()))
        .collect();

    ChartData::radar(
        labels,
        vec![
            Series {
                label: SUBMISSION_SERIES.to_string(),
                role: SeriesRole::Submission,
                data: submitted,
            },
            Series {
                label: profile.name.clone(),
                role: SeriesRole::Benchmark,
                data: ideal,
            },
        ],
    )
}

fn statistics_chart(profile: &PreacherProfile) -> ChartData {
    let statistics = SermonStatistic::ordered();
    let labels = statistics
        .iter()
        .map(|statistic| statistic.label().to_string())
        .collect();
    let (submitted, ideal) = statistics
        .iter()
        .map(|statistic| statistic.mock_values())
        .unzip();

    ChartData::bar(
        labels,
        vec![
            Series {
                label: SUBMISSION_SERIES.to_string(),
                role: SeriesRole::Submission,
                data: submitted,
            },
            Series {
                label: profile.name.clone(),
                role: SeriesRole::Benchmark,
                data: ideal,
            },
        ],
    )
}
