//! Parameter sweeps over the closed-form model.
//!
//! A [`Sweep`] drives one primary parameter over a linear range, optionally
//! dragging linked parameters along with it. Evaluation is split in two steps:
//!
//! ```ignore
//! use foresight_core::sweep::{evaluate_study, Sweep};
//! use foresight_core::model::SeriesMetric;
//!
//! // Phase 1: evaluate every formula at every point (done once)
//! let results = evaluate_study(&study)?;
//!
//! // Phase 2: pull out whichever series a chart needs
//! let c = results.series(&"impatient-beta".into(), SeriesMetric::Consumption)?;
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
