//! Scenarios and the figures that plot them

use serde::{Deserialize, Serialize};

use super::{FigureId, ModelParams, ScenarioId, SeriesMetric};
use crate::sweep::Sweep;

/// Which patience case a scenario was designed to illustrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PatienceCase {
    /// thorn < 1
    AbsoluteImpatience,
    /// thorn > 1
    AbsolutePatience,
    /// thorn = 1
    AbsolutelyPoised,
    /// Not tied to a particular patience case
    #[default]
    Unspecified,
}

impl PatienceCase {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AbsoluteImpatience => "thorn < 1: absolute impatience",
            Self::AbsolutePatience => "thorn > 1: absolute patience",
            Self::AbsolutelyPoised => "thorn = 1: absolutely poised",
            Self::Unspecified => "general",
        }
    }
}

/// A named combination of fixed parameters and one sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    #[serde(default)]
    pub case: PatienceCase,
    /// Parameters held fixed across the sweep (swept fields are overwritten per point)
    pub base: ModelParams,
    pub sweep: Sweep,
}

/// A single plotted line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub scenario: ScenarioId,
    pub metric: SeriesMetric,
    /// Legend label; falls back to the metric's short label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Trace {
    pub fn new(scenario: impl Into<ScenarioId>, metric: SeriesMetric) -> Self {
        Self {
            scenario: scenario.into(),
            metric,
            label: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn legend(&self) -> &str {
        self.label
            .as_deref()
            .unwrap_or_else(|| self.metric.short_label())
    }
}

/// One chart within a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
}

/// A titled grid of panels, laid out row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub id: FigureId,
    pub title: String,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Panel at grid position (row, col)
    #[must_use]
    pub fn panel(&self, row: usize, col: usize) -> Option<&Panel> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = row.checked_mul(self.cols)?.checked_add(col)?;
        self.panels.get(index)
    }
}
