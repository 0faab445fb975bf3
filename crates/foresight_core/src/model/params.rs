//! Scalar parameters of the perfect-foresight CRRA consumer
//!
//! `ModelParams` holds the factors as the model states them (gross interest
//! factor, discount factor, gross income growth). The net rates used by the
//! first-order approximations are derived on demand.

use serde::{Deserialize, Serialize};

use super::SweepParameter;

/// Fixed economic parameters of a scenario
///
/// Fields missing from a study file take their `Default` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Gross interest factor R
    pub interest_factor: f64,
    /// Discount factor beta
    pub discount_factor: f64,
    /// Coefficient of relative risk aversion rho
    pub risk_aversion: f64,
    /// Gross permanent income growth factor G
    pub income_growth: f64,
    /// Permanent income p
    pub permanent_income: f64,
    /// Assets carried in from the previous period a
    pub prior_assets: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            interest_factor: 1.03,
            discount_factor: 0.96,
            risk_aversion: 2.0,
            income_growth: 1.01,
            permanent_income: 10.0,
            prior_assets: 5.0,
        }
    }
}

impl ModelParams {
    /// Net interest rate r = R - 1
    #[must_use]
    pub fn net_interest_rate(&self) -> f64 {
        self.interest_factor - 1.0
    }

    /// Time preference rate v = (1 - beta) / beta
    #[must_use]
    pub fn time_preference(&self) -> f64 {
        (1.0 - self.discount_factor) / self.discount_factor
    }

    /// Net income growth g = G - 1
    #[must_use]
    pub fn net_income_growth(&self) -> f64 {
        self.income_growth - 1.0
    }

    /// Read the current value of a sweepable parameter.
    #[must_use]
    pub fn get(&self, param: SweepParameter) -> f64 {
        match param {
            SweepParameter::InterestFactor => self.interest_factor,
            SweepParameter::DiscountFactor => self.discount_factor,
            SweepParameter::RiskAversion => self.risk_aversion,
            SweepParameter::IncomeGrowth => self.income_growth,
            SweepParameter::PermanentIncome => self.permanent_income,
            SweepParameter::PriorAssets => self.prior_assets,
            SweepParameter::NetInterestRate => self.net_interest_rate(),
            SweepParameter::NetIncomeGrowth => self.net_income_growth(),
            SweepParameter::TimePreference => self.time_preference(),
        }
    }

    /// Overwrite one parameter in place.
    ///
    /// Rate parameters write through to the factor they are derived from, so
    /// setting `TimePreference` to `v` stores `beta = 1 / (1 + v)`.
    pub fn set(&mut self, param: SweepParameter, value: f64) {
        match param {
            SweepParameter::InterestFactor => self.interest_factor = value,
            SweepParameter::DiscountFactor => self.discount_factor = value,
            SweepParameter::RiskAversion => self.risk_aversion = value,
            SweepParameter::IncomeGrowth => self.income_growth = value,
            SweepParameter::PermanentIncome => self.permanent_income = value,
            SweepParameter::PriorAssets => self.prior_assets = value,
            SweepParameter::NetInterestRate => self.interest_factor = 1.0 + value,
            SweepParameter::NetIncomeGrowth => self.income_growth = 1.0 + value,
            SweepParameter::TimePreference => self.discount_factor = 1.0 / (1.0 + value),
        }
    }

    /// Copy with one parameter replaced
    #[must_use]
    pub fn with(mut self, param: SweepParameter, value: f64) -> Self {
        self.set(param, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_rates() {
        let params = ModelParams {
            interest_factor: 1.04,
            discount_factor: 0.8,
            income_growth: 1.02,
            ..Default::default()
        };
        assert!((params.net_interest_rate() - 0.04).abs() < 1e-12);
        assert!((params.time_preference() - 0.25).abs() < 1e-12);
        assert!((params.net_income_growth() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_rate_parameters_write_through_to_factors() {
        let params = ModelParams::default()
            .with(SweepParameter::NetInterestRate, 0.05)
            .with(SweepParameter::NetIncomeGrowth, 0.01)
            .with(SweepParameter::TimePreference, 0.25);

        assert!((params.interest_factor - 1.05).abs() < 1e-12);
        assert!((params.income_growth - 1.01).abs() < 1e-12);
        assert!((params.discount_factor - 0.8).abs() < 1e-12);
        assert!((params.get(SweepParameter::TimePreference) - 0.25).abs() < 1e-12);
    }
}
