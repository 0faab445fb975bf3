//! Scenario and Figure builders
//!
//! Fluent helpers for declaring scenarios and figure layouts:
//!
//! ```ignore
//! use foresight_core::catalog::{FigureBuilder, ScenarioBuilder};
//! use foresight_core::model::{SeriesMetric, SweepParameter};
//!
//! let scenario = ScenarioBuilder::new("impatient-beta", "Variable beta")
//!     .interest_factor(1.03)
//!     .risk_aversion(2.0)
//!     .sweep(SweepParameter::DiscountFactor, 0.5, 1.0 / 1.03, 50)
//!     .build();
//!
//! let figure = FigureBuilder::new("impatient", "Absolute impatience", 1, 1)
//!     .panel("Variable beta", "beta", "consumption", |p| {
//!         p.trace("impatient-beta", SeriesMetric::Consumption)
//!     })
//!     .build();
//! ```

use crate::model::{
    Figure, FigureId, ModelParams, Panel, PatienceCase, Scenario, ScenarioId, SeriesMetric,
    SweepParameter, Trace,
};
use crate::sweep::Sweep;

/// Number of points in each built-in sweep
pub const DEFAULT_STEPS: usize = 50;

/// Builder for a single scenario
pub struct ScenarioBuilder {
    id: ScenarioId,
    title: String,
    case: PatienceCase,
    base: ModelParams,
    sweep: Sweep,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: ScenarioId::new(id),
            title: title.to_string(),
            case: PatienceCase::default(),
            base: ModelParams::default(),
            sweep: Sweep::single(SweepParameter::DiscountFactor, 0.96, 0.96, 1),
        }
    }

    #[must_use]
    pub fn case(mut self, case: PatienceCase) -> Self {
        self.case = case;
        self
    }

    #[must_use]
    pub fn interest_factor(mut self, value: f64) -> Self {
        self.base.interest_factor = value;
        self
    }

    #[must_use]
    pub fn discount_factor(mut self, value: f64) -> Self {
        self.base.discount_factor = value;
        self
    }

    #[must_use]
    pub fn risk_aversion(mut self, value: f64) -> Self {
        self.base.risk_aversion = value;
        self
    }

    #[must_use]
    pub fn income_growth(mut self, value: f64) -> Self {
        self.base.income_growth = value;
        self
    }

    #[must_use]
    pub fn permanent_income(mut self, value: f64) -> Self {
        self.base.permanent_income = value;
        self
    }

    #[must_use]
    pub fn prior_assets(mut self, value: f64) -> Self {
        self.base.prior_assets = value;
        self
    }

    /// Set any parameter, including the rate forms (r, g, v)
    #[must_use]
    pub fn param(mut self, parameter: SweepParameter, value: f64) -> Self {
        self.base.set(parameter, value);
        self
    }

    /// Replace the sweep with a single-parameter sweep
    #[must_use]
    pub fn sweep(mut self, parameter: SweepParameter, min: f64, max: f64, steps: usize) -> Self {
        self.sweep = Sweep::single(parameter, min, max, steps);
        self
    }

    /// Drag another parameter along with the primary sweep
    #[must_use]
    pub fn link(mut self, parameter: SweepParameter, min: f64, max: f64) -> Self {
        self.sweep = self.sweep.linked(parameter, min, max);
        self
    }

    #[must_use]
    pub fn build(self) -> Scenario {
        Scenario {
            id: self.id,
            title: self.title,
            case: self.case,
            base: self.base,
            sweep: self.sweep,
        }
    }
}

/// Builder for a panel's traces
pub struct PanelBuilder {
    traces: Vec<Trace>,
}

impl PanelBuilder {
    #[must_use]
    pub fn trace(mut self, scenario: &str, metric: SeriesMetric) -> Self {
        self.traces.push(Trace::new(scenario, metric));
        self
    }

    #[must_use]
    pub fn labeled(mut self, scenario: &str, metric: SeriesMetric, label: &str) -> Self {
        self.traces.push(Trace::new(scenario, metric).labeled(label));
        self
    }
}

/// Builder for a figure grid; panels are added row-major
pub struct FigureBuilder {
    figure: Figure,
}

impl FigureBuilder {
    #[must_use]
    pub fn new(id: &str, title: &str, rows: usize, cols: usize) -> Self {
        Self {
            figure: Figure {
                id: FigureId::new(id),
                title: title.to_string(),
                rows,
                cols,
                panels: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn panel(
        mut self,
        title: &str,
        x_label: &str,
        y_label: &str,
        traces: impl FnOnce(PanelBuilder) -> PanelBuilder,
    ) -> Self {
        let built = traces(PanelBuilder { traces: Vec::new() });
        self.figure.panels.push(Panel {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            traces: built.traces,
        });
        self
    }

    #[must_use]
    pub fn build(self) -> Figure {
        self.figure
    }
}
