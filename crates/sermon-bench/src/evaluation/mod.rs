//! Score aggregation and the mocked evaluation content shown on the results page.

pub mod charts;
pub mod feedback;
pub mod metrics;

pub use feedback::{FeedbackItem, FeedbackKind, ResourceLink};
pub use metrics::{BenchmarkScores, SermonEvaluation, SermonMetric, SermonStatistic};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Invalid input handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("cannot aggregate an empty metric set")]
    EmptyMetrics,
    #[error("score {score} for metric '{metric}' is outside 0..=100")]
    ScoreOutOfRange { metric: String, score: i32 },
    #[error("unknown sermon metric '{0}'")]
    UnknownMetric(String),
    #[error("metric '{0}' appears more than once")]
    DuplicateMetric(String),
}

/// Qualitative label for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTier {
    Exceptional,
    Excellent,
    VeryGood,
    Good,
    NeedsImprovement,
}

impl RatingTier {
    /// Lower bounds, highest first. Bounds are inclusive.
    const THRESHOLDS: [(u8, RatingTier); 4] = [
        (90, RatingTier::Exceptional),
        (80, RatingTier::Excellent),
        (70, RatingTier::VeryGood),
        (60, RatingTier::Good),
    ];

    pub fn from_score(score: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(RatingTier::NeedsImprovement)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exceptional => "Exceptional",
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall score plus its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateScore {
    pub overall: u8,
    pub tier: RatingTier,
    pub tier_label: &'static str,
}

impl AggregateScore {
    pub(crate) fn from_overall(overall: u8) -> Self {
        let tier = RatingTier::from_score(overall);
        Self {
            overall,
            tier,
            tier_label: tier.label(),
        }
    }
}

/// Unweighted mean of named sub-scores, rounded half-up, classified into a tier.
///
/// The input is treated as a name to score mapping: a name given twice is rejected.
pub struct ScoreAggregator;

impl ScoreAggregator {
    pub fn aggregate<I, K>(metrics: I) -> Result<AggregateScore, EvaluationError>
    where
        I: IntoIterator<Item = (K, i32)>,
        K: fmt::Display,
    {
        let mut scores: BTreeMap<String, i32> = BTreeMap::new();

        for (metric, score) in metrics {
            let metric = metric.to_string();
            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(EvaluationError::ScoreOutOfRange { metric, score });
            }
            if scores.contains_key(&metric) {
                return Err(EvaluationError::DuplicateMetric(metric));
            }
            scores.insert(metric, score);
        }

        if scores.is_empty() {
            return Err(EvaluationError::EmptyMetrics);
        }

        let sum: i64 = scores.values().map(|score| i64::from(*score)).sum();
        let count = scores.len() as i64;
        Ok(AggregateScore::from_overall(mean_round_half_up(sum, count)))
    }
}

/// Both arguments are non-negative and `count > 0`, so the result lies in 0..=100.
pub(crate) fn mean_round_half_up(sum: i64, count: i64) -> u8 {
    let rounded = (2 * sum + count) / (2 * count);
    rounded.clamp(0, i64::from(MAX_SCORE)) as u8
}
