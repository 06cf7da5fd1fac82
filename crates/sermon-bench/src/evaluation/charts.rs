//! Chart payloads for the results and dashboard pages.
//!
//! Chart components are registered once per process. Every builder goes
//! through [`ensure_registered`], so callers never need to initialize anything.

use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartComponent {
    RadialLinearScale,
    PointElement,
    LineElement,
    Filler,
    Tooltip,
    Legend,
    CategoryScale,
    LinearScale,
    BarElement,
}

const ALL_COMPONENTS: [ChartComponent; 9] = [
    ChartComponent::RadialLinearScale,
    ChartComponent::PointElement,
    ChartComponent::LineElement,
    ChartComponent::Filler,
    ChartComponent::Tooltip,
    ChartComponent::Legend,
    ChartComponent::CategoryScale,
    ChartComponent::LinearScale,
    ChartComponent::BarElement,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Radar,
    Bar,
    Line,
}

impl ChartKind {
    pub const fn required_components(self) -> &'static [ChartComponent] {
        match self {
            Self::Radar => &[
                ChartComponent::RadialLinearScale,
                ChartComponent::PointElement,
                ChartComponent::LineElement,
                ChartComponent::Filler,
            ],
            Self::Bar => &[
                ChartComponent::CategoryScale,
                ChartComponent::LinearScale,
                ChartComponent::BarElement,
            ],
            Self::Line => &[
                ChartComponent::CategoryScale,
                ChartComponent::LinearScale,
                ChartComponent::PointElement,
                ChartComponent::LineElement,
            ],
        }
    }
}

#[derive(Debug)]
pub struct ChartRegistry {
    components: Vec<ChartComponent>,
}

impl ChartRegistry {
    pub fn components(&self) -> &[ChartComponent] {
        &self.components
    }

    pub fn supports(&self, kind: ChartKind) -> bool {
        kind.required_components()
            .iter()
            .all(|component| self.components.contains(component))
    }
}

static REGISTRY: OnceLock<ChartRegistry> = OnceLock::new();

/// Registers every chart component on first call; later calls are no-ops.
pub fn ensure_registered() -> &'static ChartRegistry {
    REGISTRY.get_or_init(|| {
        debug!(components = ALL_COMPONENTS.len(), "registering chart components");
        ChartRegistry {
            components: ALL_COMPONENTS.to_vec(),
        }
    })
}

pub fn is_registered() -> bool {
    REGISTRY.get().is_some()
}

/// Which side of a comparison a dataset represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesRole {
    Submission,
    Benchmark,
}

impl SeriesRole {
    pub const fn border_color(self) -> &'static str {
        match self {
            Self::Submission => "rgba(99, 102, 241, 1)",
            Self::Benchmark => "rgba(234, 179, 8, 1)",
        }
    }

    pub const fn background_color(self, kind: ChartKind) -> &'static str {
        match (self, kind) {
            (Self::Submission, ChartKind::Bar) => "rgba(99, 102, 241, 0.7)",
            (Self::Submission, _) => "rgba(99, 102, 241, 0.2)",
            (Self::Benchmark, ChartKind::Bar) => "rgba(234, 179, 8, 0.7)",
            (Self::Benchmark, _) => "rgba(234, 179, 8, 0.2)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub role: SeriesRole,
    pub data: Vec<u32>,
    pub background_color: &'static str,
    pub border_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<u32>,
    pub begin_at_zero: bool,
    pub legend: LegendPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub options: ChartOptions,
}

/// One named series before colors are attached.
pub struct Series {
    pub label: String,
    pub role: SeriesRole,
    pub data: Vec<u32>,
}

impl ChartData {
    fn build(kind: ChartKind, labels: Vec<String>, series: Vec<Series>, options: ChartOptions) -> Self {
        let registry = ensure_registered();
        debug_assert!(registry.supports(kind));

        let datasets = series
            .into_iter()
            .map(|series| ChartDataset {
                label: series.label,
                role: series.role,
                data: series.data,
                background_color: series.role.background_color(kind),
                border_color: series.role.border_color(),
            })
            .collect();

        Self {
            kind,
            labels,
            datasets,
            options,
        }
    }

    /// Radial chart on a fixed 0..=100 scale.
    pub fn radar(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self::build(
            ChartKind::Radar,
            labels,
            series,
            ChartOptions {
                scale_min: Some(0),
                scale_max: Some(100),
                step_size: Some(20),
                begin_at_zero: true,
                legend: LegendPosition::Bottom,
            },
        )
    }

    pub fn bar(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self::build(
            ChartKind::Bar,
            labels,
            series,
            ChartOptions {
                scale_min: None,
                scale_max: None,
                step_size: None,
                begin_at_zero: true,
                legend: LegendPosition::Bottom,
            },
        )
    }

    pub fn line(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self::build(
            ChartKind::Line,
            labels,
            series,
            ChartOptions {
                scale_min: None,
                scale_max: None,
                step_size: None,
                begin_at_zero: false,
                legend: LegendPosition::Top,
            },
        )
    }

    pub fn dataset(&self, role: SeriesRole) -> Option<&ChartDataset> {
        self.datasets.iter().find(|dataset| dataset.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_happens_once() {
        let first = ensure_registered();
        let second = ensure_registered();
        assert!(std::ptr::eq(first, second));
        assert!(is_registered());
        for kind in [ChartKind::Radar, ChartKind::Bar, ChartKind::Line] {
            assert!(first.supports(kind), "{kind:?} supported");
        }
    }

    #[test]
    fn radar_uses_fixed_percentage_scale() {
        let chart = ChartData::radar(
            vec!["Clarity".to_string()],
            vec![Series {
                label: "Your Sermon".to_string(),
                role: SeriesRole::Submission,
                data: vec![82],
            }],
        );
        assert!(is_registered());
        assert_eq!(chart.options.scale_max, Some(100));
        assert_eq!(chart.options.step_size, Some(20));
        let dataset = chart.dataset(SeriesRole::Submission).expect("dataset");
        assert_eq!(dataset.background_color, "rgba(99, 102, 241, 0.2)");
    }
}
