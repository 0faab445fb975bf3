//! Identifiers for study entities
//!
//! Scenarios and figures are addressed by short slugs (`impatient-beta`,
//! `human-wealth`) so that they read well on the command line and in YAML.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a Scenario within a study
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub String);

/// Unique identifier for a Figure within a study
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FigureId(pub String);

impl ScenarioId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FigureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScenarioId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for FigureId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ScenarioId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
