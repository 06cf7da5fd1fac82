use super::{mean_round_half_up, AggregateScore, EvaluationError, MAX_SCORE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Named sub-scores of a sermon evaluation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SermonMetric {
    Structure,
    BiblicalAccuracy,
    Clarity,
    Relevance,
    Delivery,
    Engagement,
}

impl SermonMetric {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Structure,
            Self::BiblicalAccuracy,
            Self::Clarity,
            Self::Relevance,
            Self::Delivery,
            Self::Engagement,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::BiblicalAccuracy => "biblicalAccuracy",
            Self::Clarity => "clarity",
            Self::Relevance => "relevance",
            Self::Delivery => "delivery",
            Self::Engagement => "engagement",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::BiblicalAccuracy => "Biblical Accuracy",
            Self::Clarity => "Clarity",
            Self::Relevance => "Relevance",
            Self::Delivery => "Delivery",
            Self::Engagement => "Engagement",
        }
    }
}

impl FromStr for SermonMetric {
    type Err = EvaluationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|metric| metric.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| EvaluationError::UnknownMetric(value.trim().to_string()))
    }
}

/// Per-submission scores. Never empty; every value lies in 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SermonEvaluation {
    scores: BTreeMap<SermonMetric, u8>,
}

impl SermonEvaluation {
    pub fn new<I>(scores: I) -> Result<Self, EvaluationError>
    where
        I: IntoIterator<Item = (SermonMetric, i32)>,
    {
        let mut validated = BTreeMap::new();
        for (metric, score) in scores {
            let value = u8::try_from(score)
                .ok()
                .filter(|value| i32::from(*value) <= MAX_SCORE)
                .ok_or_else(|| EvaluationError::ScoreOutOfRange {
                    metric: metric.key().to_string(),
                    score,
                })?;
            validated.insert(metric, value);
        }

        if validated.is_empty() {
            return Err(EvaluationError::EmptyMetrics);
        }

        Ok(Self { scores: validated })
    }

    /// The fixed scores every submission currently receives.
    pub fn mock() -> Self {
        let scores = SermonMetric::ordered()
            .into_iter()
            .zip([78, 85, 82, 70, 68, 75])
            .collect();
        Self { scores }
    }

    pub fn get(&self, metric: SermonMetric) -> Option<u8> {
        self.scores.get(&metric).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SermonMetric, u8)> + '_ {
        self.scores.iter().map(|(metric, score)| (*metric, *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn summary(&self) -> AggregateScore {
        let sum: i64 = self.scores.values().map(|score| i64::from(*score)).sum();
        AggregateScore::from_overall(mean_round_half_up(sum, self.scores.len() as i64))
    }
}

/// Ideal scores attributed to a benchmark profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkScores(BTreeMap<SermonMetric, u8>);

impl BenchmarkScores {
    pub fn mock() -> Self {
        Self(
            SermonMetric::ordered()
                .into_iter()
                .zip([92, 95, 90, 88, 93, 94])
                .collect(),
        )
    }

    pub fn get(&self, metric: SermonMetric) -> Option<u8> {
        self.0.get(&metric).copied()
    }
}

/// Countable sermon characteristics compared on the metrics bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SermonStatistic {
    AvgSentenceLength,
    IllustrationUsage,
    ScriptureReferences,
    TheologicalDepth,
    ApplicationPoints,
}

impl SermonStatistic {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::AvgSentenceLength,
            Self::IllustrationUsage,
            Self::ScriptureReferences,
            Self::TheologicalDepth,
            Self::ApplicationPoints,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AvgSentenceLength => "Avg Sentence Length",
            Self::IllustrationUsage => "Illustration Usage",
            Self::ScriptureReferences => "Scripture References",
            Self::TheologicalDepth => "Theological Depth",
            Self::ApplicationPoints => "Application Points",
        }
    }

    /// Mock (submission, benchmark) values.
    pub const fn mock_values(self) -> (u32, u32) {
        match self {
            Self::AvgSentenceLength => (25, 20),
            Self::IllustrationUsage => (6, 8),
            Self::ScriptureReferences => (12, 15),
            Self::TheologicalDepth => (65, 80),
            Self::ApplicationPoints => (4, 6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::RatingTier;

    #[test]
    fn mock_evaluation_is_very_good() {
        let evaluation = SermonEvaluation::mock();
        assert_eq!(evaluation.len(), 6);
        assert_eq!(evaluation.get(SermonMetric::BiblicalAccuracy), Some(85));
        let summary = evaluation.summary();
        assert_eq!(summary.overall, 76);
        assert_eq!(summary.tier, RatingTier::VeryGood);
    }

    #[test]
    fn evaluation_rejects_empty_and_out_of_range() {
        assert_eq!(
            SermonEvaluation::new(Vec::<(SermonMetric, i32)>::new()),
            Err(EvaluationError::EmptyMetrics)
        );
        assert!(matches!(
            SermonEvaluation::new([(SermonMetric::Clarity, 120)]),
            Err(EvaluationError::ScoreOutOfRange { score: 120, .. })
        ));
        assert!(matches!(
            SermonEvaluation::new([(SermonMetric::Clarity, -3)]),
            Err(EvaluationError::ScoreOutOfRange { score: -3, .. })
        ));
    }

    #[test]
    fn evaluation_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(SermonEvaluation::mock()).expect("serializes");
        assert_eq!(json["biblicalAccuracy"], 85);
        assert_eq!(json["engagement"], 75);
    }

    #[test]
    fn metrics_parse_from_keys() {
        assert_eq!(
            "biblicalAccuracy".parse::<SermonMetric>(),
            Ok(SermonMetric::BiblicalAccuracy)
        );
        assert!("volume".parse::<SermonMetric>().is_err());
    }
}
