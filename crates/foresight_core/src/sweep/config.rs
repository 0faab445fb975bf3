//! Configuration types for parameter sweeps.

use serde::{Deserialize, Serialize};

use crate::error::SweepError;
use crate::model::{ModelParams, SweepParameter};

/// One swept parameter and its inclusive linear range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    /// The parameter this axis drives
    pub parameter: SweepParameter,
    /// First value of the sweep
    pub min_value: f64,
    /// Last value of the sweep (may be below `min_value` for a descending sweep)
    pub max_value: f64,
    /// Number of steps (points) in the sweep
    pub step_count: usize,
}

impl SweepAxis {
    pub fn new(
        parameter: SweepParameter,
        min_value: f64,
        max_value: f64,
        step_count: usize,
    ) -> Self {
        Self {
            parameter,
            min_value,
            max_value,
            step_count,
        }
    }

    /// Generate the sweep values
    pub fn sweep_values(&self) -> Vec<f64> {
        if self.step_count == 0 {
            return Vec::new();
        }
        if self.step_count == 1 {
            return vec![self.min_value];
        }
        let step_size = (self.max_value - self.min_value) / (self.step_count - 1) as f64;
        (0..self.step_count)
            .map(|i| {
                // Pin the endpoint so it is exactly max_value
                if i == self.step_count - 1 {
                    self.max_value
                } else {
                    self.min_value + step_size * i as f64
                }
            })
            .collect()
    }

    /// Get a descriptive label for display
    pub fn label(&self) -> String {
        format!(
            "{} [{}..{}, {} steps]",
            self.parameter.symbol(),
            trim_float(self.min_value),
            trim_float(self.max_value),
            self.step_count
        )
    }

    fn validate(&self) -> Result<(), SweepError> {
        if self.step_count == 0 {
            return Err(SweepError::EmptyAxis(self.parameter));
        }
        if !self.min_value.is_finite() || !self.max_value.is_finite() {
            return Err(SweepError::NonFiniteBound {
                parameter: self.parameter,
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

/// A primary axis plus any axes that move in lockstep with it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    /// The plotted axis
    pub primary: SweepAxis,
    /// Axes that co-vary index-by-index with the primary axis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked: Vec<SweepAxis>,
}

impl Sweep {
    /// Sweep a single parameter
    pub fn single(
        parameter: SweepParameter,
        min_value: f64,
        max_value: f64,
        step_count: usize,
    ) -> Self {
        Self {
            primary: SweepAxis::new(parameter, min_value, max_value, step_count),
            linked: Vec::new(),
        }
    }

    /// Add an axis that moves together with the primary one
    pub fn linked(mut self, parameter: SweepParameter, min_value: f64, max_value: f64) -> Self {
        let step_count = self.primary.step_count;
        self.linked
            .push(SweepAxis::new(parameter, min_value, max_value, step_count));
        self
    }

    /// Number of points in the sweep
    pub fn len(&self) -> usize {
        self.primary.step_count
    }

    pub fn is_empty(&self) -> bool {
        self.primary.step_count == 0
    }

    /// Check the sweep is well formed.
    pub fn validate(&self) -> Result<(), SweepError> {
        self.primary.validate()?;
        let mut seen = vec![self.primary.parameter];
        for axis in &self.linked {
            axis.validate()?;
            if axis.step_count != self.primary.step_count {
                return Err(SweepError::LengthMismatch {
                    parameter: axis.parameter,
                    expected: self.primary.step_count,
                    found: axis.step_count,
                });
            }
            if seen.iter().any(|p| p.aliases(axis.parameter)) {
                return Err(SweepError::DuplicateParameter(axis.parameter));
            }
            seen.push(axis.parameter);
        }
        Ok(())
    }

    /// The parameter set at every sweep point, paired with the primary axis value.
    ///
    /// Linked axes are applied after the primary axis.
    pub fn points(&self, base: &ModelParams) -> Vec<(f64, ModelParams)> {
        let xs = self.primary.sweep_values();
        let linked: Vec<(SweepParameter, Vec<f64>)> = self
            .linked
            .iter()
            .map(|axis| (axis.parameter, axis.sweep_values()))
            .collect();

        xs.iter()
            .enumerate()
            .map(|(i, &x)| {
                let mut params = base.with(self.primary.parameter, x);
                for (parameter, values) in &linked {
                    if let Some(&value) = values.get(i) {
                        params.set(*parameter, value);
                    }
                }
                (x, params)
            })
            .collect()
    }

    /// Get labels for all axes, primary first
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(&self.primary)
            .chain(&self.linked)
            .map(SweepAxis::label)
            .collect()
    }
}

/// Format a bound without trailing zeros (0.50 -> "0.5", 20.0 -> "20")
fn trim_float(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
