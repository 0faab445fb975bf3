//! Size of the human wealth effect and the saving rate.
//!
//! These sweeps are stated in net rates (r, g, v) rather than factors.
//! Every scenario keeps r > g (finite human wealth) and thorn_g < 0.

use super::builder::{DEFAULT_STEPS, FigureBuilder, ScenarioBuilder};
use crate::model::{Figure, Scenario, SeriesMetric, SweepParameter};

fn rates(id: &str, title: &str) -> ScenarioBuilder {
    ScenarioBuilder::new(id, title)
        .permanent_income(10.0)
        .param(SweepParameter::NetInterestRate, 0.04)
        .param(SweepParameter::NetIncomeGrowth, 0.02)
        .discount_factor(0.96)
        .risk_aversion(2.0)
}

pub(super) fn human_wealth_scenarios() -> Vec<Scenario> {
    vec![
        rates("hw-beta", "Variable beta")
            .sweep(SweepParameter::DiscountFactor, 0.5, 0.99, DEFAULT_STEPS)
            .build(),
        rates("hw-r", "Variable r")
            .sweep(SweepParameter::NetInterestRate, 0.021, 0.99, DEFAULT_STEPS)
            .build(),
        rates("hw-rho", "Variable rho")
            .sweep(SweepParameter::RiskAversion, 0.5, 10.0, DEFAULT_STEPS)
            .build(),
        rates("hw-g", "Variable g")
            .sweep(SweepParameter::NetIncomeGrowth, 0.001, 0.039, DEFAULT_STEPS)
            .build(),
    ]
}

/// Saving rate against assets for each side of thorn = 1
pub(super) fn saving_rate_scenarios() -> Vec<Scenario> {
    let assets = |id: &str, title: &str, beta: f64| {
        rates(id, title)
            .discount_factor(beta)
            .sweep(SweepParameter::PriorAssets, 0.5, 200.0, DEFAULT_STEPS)
            .build()
    };
    vec![
        assets("saving-impatient", "thorn < 1", 0.96),
        assets("saving-patient", "thorn > 1", 1.2),
        assets("saving-poised", "thorn = 1", 1.0 / 1.04),
    ]
}

/// Sensitivity of the saving rate response rho^-1 v r^-2 to each input
pub(super) fn response_scenarios() -> Vec<Scenario> {
    let response = |id: &str, title: &str| {
        rates(id, title)
            .param(SweepParameter::NetInterestRate, 0.05)
            .param(SweepParameter::TimePreference, 0.05)
    };
    vec![
        response("response-rho", "Variable rho")
            .sweep(SweepParameter::RiskAversion, 0.5, 10.0, DEFAULT_STEPS)
            .build(),
        response("response-v", "Variable v")
            .sweep(SweepParameter::TimePreference, 0.01, 0.1, DEFAULT_STEPS)
            .build(),
        response("response-r", "Variable r")
            .sweep(SweepParameter::NetInterestRate, 0.01, 0.1, DEFAULT_STEPS)
            .build(),
    ]
}

pub(super) fn figures() -> Vec<Figure> {
    let human_wealth = [
        ("hw-beta", "Variable beta", "beta"),
        ("hw-r", "Variable r", "r"),
        ("hw-rho", "Variable rho", "rho"),
        ("hw-g", "Variable g", "g"),
    ]
    .into_iter()
    .fold(
        FigureBuilder::new("human-wealth", "Size of the human wealth effect", 2, 2),
        |figure, (scenario, title, x)| {
            figure.panel(title, x, "Consumption", |p| {
                p.trace(scenario, SeriesMetric::HumanWealthConsumption)
            })
        },
    )
    .build();

    let response = [
        ("response-rho", "Variable rho", "rho"),
        ("response-v", "Variable v", "v"),
        ("response-r", "Variable r", "r"),
    ]
    .into_iter()
    .fold(
        FigureBuilder::new(
            "saving-rate-response",
            "Response of the saving rate to r",
            1,
            3,
        ),
        |figure, (scenario, title, x)| {
            figure.panel(title, x, "d savingrate", |p| {
                p.trace(scenario, SeriesMetric::SavingRateResponse)
            })
        },
    )
    .build();

    vec![
        human_wealth,
        FigureBuilder::new("saving-rate-assets", "Saving rate and increasing assets", 1, 1)
            .panel("Saving rate and increasing assets", "assets", "savingrate", |p| {
                p.labeled("saving-impatient", SeriesMetric::SavingRate, "saving rate")
            })
            .build(),
        FigureBuilder::new("saving-rate-sign", "Sign of the saving rate depends on thorn", 1, 1)
            .panel("Saving rate and increasing assets", "assets", "savingrate", |p| {
                p.labeled("saving-impatient", SeriesMetric::SavingRate, "thorn<1")
                    .labeled("saving-patient", SeriesMetric::SavingRate, "thorn>1")
                    .labeled("saving-poised", SeriesMetric::SavingRate, "thorn=1")
            })
            .build(),
        response,
    ]
}
