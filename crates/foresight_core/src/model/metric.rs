//! Series that can be read off an evaluated sweep point.

use serde::{Deserialize, Serialize};

use crate::formulas::PointOutcome;

/// One derived quantity of the model, as plotted against the sweep axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesMetric {
    /// Absolute patience factor (R beta)^(1/rho)
    Thorn,
    /// Return patience factor thorn / R
    ThornRatio,
    /// Human wealth o
    HumanWealth,
    /// Exact consumption
    Consumption,
    /// First-order approximate consumption
    ConsumptionApprox,
    /// Exact consumption minus the approximation
    ConsumptionGap,
    /// Savings implied by exact consumption
    Savings,
    /// Savings implied by approximate consumption
    SavingsApprox,
    /// Growth-adjusted impatience thorn_g
    GrowthImpatience,
    /// Consumption out of human wealth p (1 - thorn_g / (r - g))
    HumanWealthConsumption,
    /// Saving rate zeta
    SavingRate,
    /// Saving rate response rho^-1 v r^-2
    SavingRateResponse,
}

impl SeriesMetric {
    pub const ALL: [SeriesMetric; 12] = [
        Self::Thorn,
        Self::ThornRatio,
        Self::HumanWealth,
        Self::Consumption,
        Self::ConsumptionApprox,
        Self::ConsumptionGap,
        Self::Savings,
        Self::SavingsApprox,
        Self::GrowthImpatience,
        Self::HumanWealthConsumption,
        Self::SavingRate,
        Self::SavingRateResponse,
    ];

    /// Columns shown by default in tables
    pub const TABLE: [SeriesMetric; 6] = [
        Self::Consumption,
        Self::ConsumptionApprox,
        Self::Savings,
        Self::SavingsApprox,
        Self::Thorn,
        Self::ThornRatio,
    ];

    /// Get a display label for the metric
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thorn => "Absolute patience factor",
            Self::ThornRatio => "Return patience factor",
            Self::HumanWealth => "Human wealth",
            Self::Consumption => "Consumption",
            Self::ConsumptionApprox => "Consumption (approx)",
            Self::ConsumptionGap => "Approximation gap",
            Self::Savings => "Savings",
            Self::SavingsApprox => "Savings (approx)",
            Self::GrowthImpatience => "Growth impatience",
            Self::HumanWealthConsumption => "Human wealth consumption",
            Self::SavingRate => "Saving rate",
            Self::SavingRateResponse => "Saving rate response",
        }
    }

    /// Get a short label suitable for legends and table headers
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Thorn => "thorn",
            Self::ThornRatio => "thorn_R",
            Self::HumanWealth => "o",
            Self::Consumption => "c",
            Self::ConsumptionApprox => "c (approx)",
            Self::ConsumptionGap => "c - c_app",
            Self::Savings => "s",
            Self::SavingsApprox => "s (approx)",
            Self::GrowthImpatience => "thorn_g",
            Self::HumanWealthConsumption => "human wealth",
            Self::SavingRate => "saving rate",
            Self::SavingRateResponse => "d savingrate",
        }
    }

    /// Read this metric from an evaluated point
    #[must_use]
    pub fn value(&self, point: &PointOutcome) -> f64 {
        match self {
            Self::Thorn => point.thorn,
            Self::ThornRatio => point.thorn_ratio,
            Self::HumanWealth => point.human_wealth,
            Self::Consumption => point.consumption,
            Self::ConsumptionApprox => point.consumption_approx,
            Self::ConsumptionGap => point.consumption_gap(),
            Self::Savings => point.savings,
            Self::SavingsApprox => point.savings_approx,
            Self::GrowthImpatience => point.growth_impatience,
            Self::HumanWealthConsumption => point.human_wealth_consumption,
            Self::SavingRate => point.saving_rate,
            Self::SavingRateResponse => point.saving_rate_response,
        }
    }
}
