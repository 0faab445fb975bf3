//! A study: the scenarios to evaluate and the figures that plot them.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudyError};
use crate::model::{Figure, FigureId, Scenario, ScenarioId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Study {
    pub title: String,
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub figures: Vec<Figure>,
}

impl Study {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    #[must_use]
    pub fn figure(mut self, figure: Figure) -> Self {
        self.figures.push(figure);
        self
    }

    /// Look up a scenario by id
    pub fn find_scenario(&self, id: &ScenarioId) -> Result<&Scenario> {
        self.scenarios
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| StudyError::UnknownScenario(id.clone()))
    }

    /// Look up a figure by id
    pub fn find_figure(&self, id: &FigureId) -> Result<&Figure> {
        self.figures
            .iter()
            .find(|f| &f.id == id)
            .ok_or_else(|| StudyError::UnknownFigure(id.clone()))
    }

    /// Check ids are unique, sweeps are well formed, figure grids match their
    /// panels, and every trace points at a scenario of this study.
    pub fn validate(&self) -> Result<()> {
        let mut scenario_ids = FxHashSet::default();
        for scenario in &self.scenarios {
            if !scenario_ids.insert(&scenario.id) {
                return Err(StudyError::DuplicateScenario(scenario.id.clone()));
            }
            scenario
                .sweep
                .validate()
                .map_err(|source| StudyError::InvalidSweep {
                    scenario: scenario.id.clone(),
                    source,
                })?;
        }

        let mut figure_ids = FxHashSet::default();
        for figure in &self.figures {
            if !figure_ids.insert(&figure.id) {
                return Err(StudyError::DuplicateFigure(figure.id.clone()));
            }
            let cells = figure
                .rows
                .checked_mul(figure.cols)
                .ok_or_else(|| StudyError::GridTooLarge {
                    figure: figure.id.clone(),
                    rows: figure.rows,
                    cols: figure.cols,
                })?;
            if figure.panels.len() != cells {
                return Err(StudyError::PanelLayout {
                    figure: figure.id.clone(),
                    cells,
                    panels: figure.panels.len(),
                });
            }
            for trace in figure.panels.iter().flat_map(|p| &p.traces) {
                if !scenario_ids.contains(&trace.scenario) {
                    return Err(StudyError::UnknownScenario(trace.scenario.clone()));
                }
            }
        }
        Ok(())
    }
}
