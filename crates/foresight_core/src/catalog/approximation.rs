//! Accuracy of the first-order consumption approximation.
//!
//! Three patience cases, each sweeping the parameters that move thorn.
//! Previous assets, income and (unless swept) income growth are fixed at
//! a = 5, p = 10, G = 1.01 so that FHWC holds.

use super::builder::{DEFAULT_STEPS, FigureBuilder, ScenarioBuilder};
use crate::model::{Figure, PatienceCase, Scenario, SeriesMetric, SweepParameter};

fn base(id: &str, title: &str, case: PatienceCase) -> ScenarioBuilder {
    ScenarioBuilder::new(id, title)
        .case(case)
        .income_growth(1.01)
        .prior_assets(5.0)
        .permanent_income(10.0)
}

pub(super) fn impatient_scenarios() -> Vec<Scenario> {
    let case = PatienceCase::AbsoluteImpatience;
    vec![
        // RIC: thorn stays below R while beta <= 1/R
        base("impatient-beta", "Variable beta", case)
            .interest_factor(1.03)
            .risk_aversion(2.0)
            .sweep(SweepParameter::DiscountFactor, 0.5, 1.0 / 1.03, DEFAULT_STEPS)
            .build(),
        base("impatient-r", "Variable R", case)
            .discount_factor(0.95)
            .risk_aversion(5.0)
            .sweep(SweepParameter::InterestFactor, 1.0, 1.0 / 0.95, DEFAULT_STEPS)
            .link(SweepParameter::IncomeGrowth, 0.4, 1.0 / 0.95 - 0.1)
            .build(),
        base("impatient-rho", "Variable rho", case)
            .interest_factor(1.03)
            .discount_factor(0.96)
            .sweep(SweepParameter::RiskAversion, 0.5, 20.0, DEFAULT_STEPS)
            .build(),
    ]
}

pub(super) fn patient_scenarios() -> Vec<Scenario> {
    let case = PatienceCase::AbsolutePatience;
    vec![
        base("patient-beta", "Variable beta", case)
            .interest_factor(1.03)
            .risk_aversion(5.0)
            .sweep(SweepParameter::DiscountFactor, 1.0 / 1.03, 1.5, DEFAULT_STEPS)
            .build(),
        base("patient-r", "Variable R", case)
            .discount_factor(1.01)
            .risk_aversion(5.0)
            .sweep(SweepParameter::InterestFactor, 1.0 / 1.01, 1.5, DEFAULT_STEPS)
            .link(SweepParameter::IncomeGrowth, 1.0 / 1.01 - 0.1, 1.0 - 0.1)
            .build(),
        base("patient-rho", "Variable rho", case)
            .interest_factor(1.1)
            .discount_factor(0.96)
            .sweep(SweepParameter::RiskAversion, 0.5, 20.0, DEFAULT_STEPS)
            .build(),
    ]
}

pub(super) fn poised_scenarios() -> Vec<Scenario> {
    let case = PatienceCase::AbsolutelyPoised;
    vec![
        // R rises as beta falls; G keeps pace to hold FHWC
        base("poised-beta", "Variable beta and R", case)
            .risk_aversion(5.0)
            .sweep(SweepParameter::DiscountFactor, 1.0, 1.0 / 1.5, DEFAULT_STEPS)
            .link(SweepParameter::InterestFactor, 1.0, 1.5)
            .link(SweepParameter::IncomeGrowth, 0.9, 1.4)
            .build(),
        base("poised-rho", "Variable rho", case)
            .interest_factor(1.04)
            .discount_factor(1.0 / 1.04)
            .sweep(SweepParameter::RiskAversion, 0.5, 20.0, DEFAULT_STEPS)
            .build(),
    ]
}

/// Consumption, savings and thorn rows for one column per scenario
fn comparison_figure(id: &str, title: &str, columns: &[(&str, &str, &str)]) -> Figure {
    let mut figure = FigureBuilder::new(id, title, 3, columns.len());
    for &(scenario, title, x) in columns {
        figure = figure.panel(title, x, "consumption", |p| {
            p.trace(scenario, SeriesMetric::Consumption)
                .trace(scenario, SeriesMetric::ConsumptionApprox)
        });
    }
    for &(scenario, title, x) in columns {
        figure = figure.panel(title, x, "savings", |p| {
            p.trace(scenario, SeriesMetric::Savings)
                .trace(scenario, SeriesMetric::SavingsApprox)
        });
    }
    for &(scenario, title, x) in columns {
        figure = figure.panel(title, x, "thorn", |p| {
            p.trace(scenario, SeriesMetric::Thorn)
                .trace(scenario, SeriesMetric::ThornRatio)
        });
    }
    figure.build()
}

pub(super) fn figures() -> Vec<Figure> {
    vec![
        comparison_figure(
            "impatient",
            "Case 1: thorn < 1, absolute impatience",
            &[
                ("impatient-beta", "Variable beta", "beta"),
                ("impatient-r", "Variable R", "R"),
                ("impatient-rho", "Variable rho", "rho"),
            ],
        ),
        comparison_figure(
            "patient",
            "Case 2: thorn > 1, absolute patience",
            &[
                ("patient-beta", "Variable beta", "beta"),
                ("patient-r", "Variable R", "R"),
                ("patient-rho", "Variable rho", "rho"),
            ],
        ),
        comparison_figure(
            "poised",
            "Case 3: thorn = 1, absolutely poised",
            &[
                ("poised-beta", "Variable beta", "beta"),
                ("poised-rho", "Variable rho", "rho"),
            ],
        ),
    ]
}
