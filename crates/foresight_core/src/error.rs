use std::fmt;

use crate::model::{FigureId, ScenarioId, SweepParameter};

/// Errors in a sweep definition
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// An axis was configured with zero steps
    EmptyAxis(SweepParameter),
    /// A range bound is NaN or infinite
    NonFiniteBound {
        parameter: SweepParameter,
        min: f64,
        max: f64,
    },
    /// A linked axis does not have the same number of points as the primary axis
    LengthMismatch {
        parameter: SweepParameter,
        expected: usize,
        found: usize,
    },
    /// Two axes drive the same underlying parameter
    DuplicateParameter(SweepParameter),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::EmptyAxis(param) => {
                write!(f, "sweep axis {} has no points", param.symbol())
            }
            SweepError::NonFiniteBound {
                parameter,
                min,
                max,
            } => write!(
                f,
                "sweep axis {} has non-finite bounds ({min}, {max})",
                parameter.symbol()
            ),
            SweepError::LengthMismatch {
                parameter,
                expected,
                found,
            } => write!(
                f,
                "linked axis {} has {found} points, primary axis has {expected}",
                parameter.symbol()
            ),
            SweepError::DuplicateParameter(param) => {
                write!(f, "parameter {} is swept more than once", param.symbol())
            }
        }
    }
}

impl std::error::Error for SweepError {}

/// Errors related to study lookups and validation
#[derive(Debug, Clone, PartialEq)]
pub enum StudyError {
    UnknownScenario(ScenarioId),
    UnknownFigure(FigureId),
    DuplicateScenario(ScenarioId),
    DuplicateFigure(FigureId),
    /// A figure's panel count does not match its grid
    PanelLayout {
        figure: FigureId,
        cells: usize,
        panels: usize,
    },
    /// `rows * cols` does not fit in a `usize`
    GridTooLarge {
        figure: FigureId,
        rows: usize,
        cols: usize,
    },
    InvalidSweep {
        scenario: ScenarioId,
        source: SweepError,
    },
}

impl fmt::Display for StudyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyError::UnknownScenario(id) => write!(f, "scenario '{id}' not found"),
            StudyError::UnknownFigure(id) => write!(f, "figure '{id}' not found"),
            StudyError::DuplicateScenario(id) => write!(f, "scenario '{id}' defined twice"),
            StudyError::DuplicateFigure(id) => write!(f, "figure '{id}' defined twice"),
            StudyError::PanelLayout {
                figure,
                cells,
                panels,
            } => write!(
                f,
                "figure '{figure}' has {panels} panels but a grid of {cells} cells"
            ),
            StudyError::GridTooLarge { figure, rows, cols } => {
                write!(f, "figure '{figure}' has an oversized {rows}x{cols} grid")
            }
            StudyError::InvalidSweep { scenario, source } => {
                write!(f, "scenario '{scenario}': {source}")
            }
        }
    }
}

impl std::error::Error for StudyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StudyError::InvalidSweep { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StudyError>;
