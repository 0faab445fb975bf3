//! Exported study results
//!
//! One document per study: every scenario with its sweep description, the
//! condition report and every evaluated point. Non-finite values export as
//! `null` in JSON.

use clap::ValueEnum;
use serde::Serialize;

use foresight_core::conditions::ConditionReport;
use foresight_core::error::StudyError;
use foresight_core::formulas::PointOutcome;
use foresight_core::model::{PatienceCase, ScenarioId};
use foresight_core::{Study, StudyResults};

use super::storage::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
}

#[derive(Debug, Serialize)]
pub struct ResultsDocument<'a> {
    pub title: &'a str,
    pub scenarios: Vec<ScenarioExport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioExport<'a> {
    pub id: &'a ScenarioId,
    pub title: &'a str,
    pub case: PatienceCase,
    /// One label per axis, primary first
    pub sweep: Vec<String>,
    pub conditions: ConditionReport,
    pub points: &'a [PointOutcome],
}

impl<'a> ResultsDocument<'a> {
    /// Pair each scenario of `study` with its evaluated points
    pub fn new(study: &'a Study, results: &'a StudyResults) -> Result<Self, StudyError> {
        let scenarios = study
            .scenarios
            .iter()
            .map(|scenario| {
                let result = results
                    .get(&scenario.id)
                    .ok_or_else(|| StudyError::UnknownScenario(scenario.id.clone()))?;
                Ok(ScenarioExport {
                    id: &scenario.id,
                    title: &scenario.title,
                    case: scenario.case,
                    sweep: scenario.sweep.labels(),
                    conditions: ConditionReport::from_result(result),
                    points: &result.points,
                })
            })
            .collect::<Result<Vec<_>, StudyError>>()?;

        Ok(Self {
            title: &study.title,
            scenarios,
        })
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, StorageError> {
        match format {
            ExportFormat::Json => serde_json::to_string_pretty(self)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| StorageError::Serialize(format!("Failed to write JSON: {}", e))),
            ExportFormat::Yaml => serde_saphyr::to_string(self)
                .map_err(|e| StorageError::Serialize(format!("Failed to write YAML: {}", e))),
        }
    }
}
