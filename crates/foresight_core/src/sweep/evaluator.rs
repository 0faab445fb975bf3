//! Sweep evaluation: turn scenarios into derived sequences.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::{Result, StudyError};
use crate::formulas::PointOutcome;
use crate::model::{Scenario, ScenarioId, SeriesMetric};
use crate::study::Study;

/// Derived sequences for one scenario, one entry per sweep point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub scenario: ScenarioId,
    pub points: Vec<PointOutcome>,
}

impl ScenarioResult {
    /// One metric across the sweep
    pub fn values(&self, metric: SeriesMetric) -> Vec<f64> {
        self.points.iter().map(|p| metric.value(p)).collect()
    }

    /// `(x, y)` pairs ready for plotting
    pub fn series(&self, metric: SeriesMetric) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, metric.value(p))).collect()
    }

    /// Largest |c - c_app| over the sweep, ignoring non-finite points
    pub fn max_consumption_gap(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.consumption_gap().abs())
            .filter(|gap| gap.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Evaluate every point of a scenario's sweep.
pub fn evaluate_scenario(scenario: &Scenario) -> Result<ScenarioResult> {
    scenario
        .sweep
        .validate()
        .map_err(|source| StudyError::InvalidSweep {
            scenario: scenario.id.clone(),
            source,
        })?;

    let points = scenario
        .sweep
        .points(&scenario.base)
        .iter()
        .map(|(x, params)| PointOutcome::evaluate(*x, params))
        .collect();

    Ok(ScenarioResult {
        scenario: scenario.id.clone(),
        points,
    })
}

/// Results for a whole study, in scenario order
#[derive(Debug, Clone, Serialize)]
pub struct StudyResults {
    results: Vec<ScenarioResult>,
    #[serde(skip)]
    index: FxHashMap<ScenarioId, usize>,
}

impl StudyResults {
    pub fn new(results: Vec<ScenarioResult>) -> Self {
        let index = results
            .iter()
            .enumerate()
            .map(|(i, r)| (r.scenario.clone(), i))
            .collect();
        Self { results, index }
    }

    pub fn get(&self, id: &ScenarioId) -> Option<&ScenarioResult> {
        self.index.get(id).map(|&i| &self.results[i])
    }

    /// `(x, y)` pairs for one metric of one scenario
    pub fn series(&self, id: &ScenarioId, metric: SeriesMetric) -> Result<Vec<(f64, f64)>> {
        self.get(id)
            .map(|r| r.series(metric))
            .ok_or_else(|| StudyError::UnknownScenario(id.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Evaluate all scenarios of a study.
///
/// With the `parallel` feature scenarios are evaluated on the rayon pool;
/// the output order always matches `study.scenarios`.
pub fn evaluate_study(study: &Study) -> Result<StudyResults> {
    #[cfg(feature = "parallel")]
    let results: Result<Vec<ScenarioResult>> =
        study.scenarios.par_iter().map(evaluate_scenario).collect();

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<ScenarioResult>> =
        study.scenarios.iter().map(evaluate_scenario).collect();

    Ok(StudyResults::new(results?))
}
