use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::evaluation::charts::{ChartData, Series, SeriesRole};
use crate::profiles::ProfileId;

const PROGRESS_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const PROGRESS_SCORES: [u32; 6] = [65, 68, 72, 75, 79, 82];
const SERMONS_ANALYZED: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStat {
    pub title: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentSermon {
    pub id: String,
    pub title: &'static str,
    pub score: u8,
    pub profile_id: ProfileId,
    pub profile_name: &'static str,
    pub analyzed_on: NaiveDate,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusArea {
    pub area: &'static str,
    pub score: u8,
    pub tip: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    pub format: &'static str,
    pub length: &'static str,
}

/// Progress overview for the signed-in preacher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub progress: ChartData,
    pub stats: Vec<DashboardStat>,
    pub improvement_points: i64,
    pub recent: Vec<RecentSermon>,
    pub focus_areas: Vec<FocusArea>,
    pub resources: Vec<LearningResource>,
}

impl DashboardView {
    /// Fixed sample history; recent evaluations are dated relative to `today`.
    pub fn mock(today: NaiveDate) -> Self {
        let first = PROGRESS_SCORES.first().copied().unwrap_or_default();
        let last = PROGRESS_SCORES.last().copied().unwrap_or_default();
        let highest = PROGRESS_SCORES.iter().copied().max().unwrap_or_default();
        let improvement_points = i64::from(last) - i64::from(first);

        let progress = ChartData::line(
            PROGRESS_MONTHS.iter().map(|month| month.to_string()).collect(),
            vec![Series {
                label: "Overall Score".to_string(),
                role: SeriesRole::Submission,
                data: PROGRESS_SCORES.to_vec(),
            }],
        );

        let stats = vec![
            DashboardStat {
                title: format!("{SERMONS_ANALYZED} Sermons Analyzed"),
                description: "Total sermons evaluated",
            },
            DashboardStat {
                title: format!("{highest}/100"),
                description: "Your highest score",
            },
            DashboardStat {
                title: format!("{improvement_points:+} points"),
                description: "Improvement in 6 months",
            },
        ];

        let recent = [
            (123, "The Good Shepherd", 82, "john-piper", "John Piper", 2),
            (122, "Faith Over Fear", 79, "billy-graham", "Billy Graham", 7),
            (121, "Grace Abounding", 75, "charles-spurgeon", "Charles Spurgeon", 21),
        ]
        .into_iter()
        .map(|(n, title, score, profile_id, profile_name, days_ago)| {
            let analyzed_on = today - Duration::days(days_ago);
            RecentSermon {
                id: format!("sermon-{n}"),
                title,
                score,
                profile_id: ProfileId::new(profile_id),
                profile_name,
                analyzed_on,
                when: relative_label(analyzed_on, today),
            }
        })
        .collect();

        let focus_areas = vec![
            FocusArea {
                area: "Sermon Application",
                score: 68,
                tip: "Increase practical application examples by 30%",
            },
            FocusArea {
                area: "Delivery Pace",
                score: 72,
                tip: "Reduce speaking speed by 10-15% in key sections",
            },
            FocusArea {
                area: "Illustrative Content",
                score: 75,
                tip: "Add 2-3 more illustrations per sermon",
            },
        ];

        let resources = vec![
            LearningResource {
                title: "The Art of Sermon Application",
                format: "Video Course",
                length: "1h 45m",
            },
            LearningResource {
                title: "Mastering Sermon Delivery",
                format: "Workshop",
                length: "2h 30m",
            },
            LearningResource {
                title: "Crafting Powerful Illustrations",
                format: "E-Book",
                length: "124 pages",
            },
        ];

        Self {
            progress,
            stats,
            improvement_points,
            recent,
            focus_areas,
            resources,
        }
    }

    pub fn improvement_summary(&self) -> String {
        format!(
            "Your scores have improved by {} points since you started",
            self.improvement_points
        )
    }
}

/// Coarse "n units ago" label. Future dates read as today.
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days().max(0);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => plural(days / 7, "week"),
        30..=364 => plural(days / 30, "month"),
        _ => plural(days / 365, "year"),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
