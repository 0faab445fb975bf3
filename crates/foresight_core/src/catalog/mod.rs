//! Built-in study
//!
//! Reproduces the perfect-foresight CRRA problem set:
//! - `impatient`, `patient`, `poised` - exact vs. approximate consumption and
//!   savings under each patience case
//! - `human-wealth` - how large the human wealth effect is for each parameter
//! - `saving-rate-assets`, `saving-rate-sign`, `saving-rate-response` - how the
//!   saving rate behaves as assets and interest rates change

mod approximation;
mod builder;
mod human_wealth;

pub use builder::{DEFAULT_STEPS, FigureBuilder, PanelBuilder, ScenarioBuilder};

use crate::study::Study;

/// The complete built-in study
#[must_use]
pub fn builtin_study() -> Study {
    let mut study = Study::new("Perfect foresight CRRA: approximations and saving");
    study.scenarios.extend(approximation::impatient_scenarios());
    study.scenarios.extend(approximation::patient_scenarios());
    study.scenarios.extend(approximation::poised_scenarios());
    study.scenarios.extend(human_wealth::human_wealth_scenarios());
    study.scenarios.extend(human_wealth::saving_rate_scenarios());
    study.scenarios.extend(human_wealth::response_scenarios());
    study.figures.extend(approximation::figures());
    study.figures.extend(human_wealth::figures());
    study
}
