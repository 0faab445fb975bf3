//! Model conditions and patience regimes
//!
//! The finite human wealth condition (FHWC) requires G < R; the return
//! impatience condition (RIC) requires thorn < R. Neither gates evaluation:
//! a point that violates them is still evaluated, and the report below
//! says where that happened.

use serde::{Deserialize, Serialize};

use crate::formulas::PointOutcome;
use crate::model::{ModelParams, ScenarioId};
use crate::sweep::ScenarioResult;

/// Tolerance for treating thorn as exactly one
pub const POISED_TOLERANCE: f64 = 1e-9;

/// Finite human wealth condition: G < R
#[must_use]
pub fn fhwc_holds(params: &ModelParams) -> bool {
    params.income_growth < params.interest_factor
}

/// Return impatience condition: thorn < R
#[must_use]
pub fn ric_holds(thorn: f64, interest_factor: f64) -> bool {
    thorn < interest_factor
}

/// Which side of one the absolute patience factor falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatienceRegime {
    AbsolutelyImpatient,
    AbsolutelyPoised,
    AbsolutelyPatient,
}

impl PatienceRegime {
    /// Classify a thorn value; NaN has no regime.
    #[must_use]
    pub fn classify(thorn: f64) -> Option<Self> {
        if thorn.is_nan() {
            None
        } else if (thorn - 1.0).abs() <= POISED_TOLERANCE {
            Some(Self::AbsolutelyPoised)
        } else if thorn < 1.0 {
            Some(Self::AbsolutelyImpatient)
        } else {
            Some(Self::AbsolutelyPatient)
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AbsolutelyImpatient => "impatient",
            Self::AbsolutelyPoised => "poised",
            Self::AbsolutelyPatient => "patient",
        }
    }
}

/// Per-scenario tally of conditions and regimes across a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionReport {
    pub scenario: ScenarioId,
    pub points: usize,
    pub fhwc_holds: usize,
    pub ric_holds: usize,
    pub impatient: usize,
    pub poised: usize,
    pub patient: usize,
    /// Points whose thorn is NaN
    pub undefined: usize,
    pub max_consumption_gap: f64,
}

impl ConditionReport {
    pub fn from_result(result: &ScenarioResult) -> Self {
        let mut report = Self {
            scenario: result.scenario.clone(),
            points: result.points.len(),
            fhwc_holds: 0,
            ric_holds: 0,
            impatient: 0,
            poised: 0,
            patient: 0,
            undefined: 0,
            max_consumption_gap: result.max_consumption_gap(),
        };
        for point in &result.points {
            report.tally(point);
        }
        report
    }

    fn tally(&mut self, point: &PointOutcome) {
        if fhwc_holds(&point.params) {
            self.fhwc_holds += 1;
        }
        if ric_holds(point.thorn, point.params.interest_factor) {
            self.ric_holds += 1;
        }
        match PatienceRegime::classify(point.thorn) {
            Some(PatienceRegime::AbsolutelyImpatient) => self.impatient += 1,
            Some(PatienceRegime::AbsolutelyPoised) => self.poised += 1,
            Some(PatienceRegime::AbsolutelyPatient) => self.patient += 1,
            None => self.undefined += 1,
        }
    }

    /// Points where FHWC fails
    pub fn fhwc_violations(&self) -> usize {
        self.points - self.fhwc_holds
    }

    /// Points where RIC fails
    pub fn ric_violations(&self) -> usize {
        self.points - self.ric_holds
    }

    /// The regime of the whole sweep, if every point shares one
    pub fn uniform_regime(&self) -> Option<PatienceRegime> {
        if self.points == 0 {
            None
        } else if self.impatient == self.points {
            Some(PatienceRegime::AbsolutelyImpatient)
        } else if self.poised == self.points {
            Some(PatienceRegime::AbsolutelyPoised)
        } else if self.patient == self.points {
            Some(PatienceRegime::AbsolutelyPatient)
        } else {
            None
        }
    }
}
