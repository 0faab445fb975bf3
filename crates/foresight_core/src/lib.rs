//! Perfect-foresight consumption and saving, evaluated over parameter sweeps
//!
//! This crate evaluates the closed-form solution of the perfect-foresight
//! CRRA consumption model and its first-order approximations. It supports:
//! - Exact and approximate consumption, savings and the patience factor thorn
//! - Human wealth effect, saving rate and saving rate response
//! - Linear sweeps of one parameter, optionally dragging others along
//! - FHWC / RIC checks and patience regime classification
//! - A built-in study with the standard comparison figures
//!
//! # Example
//!
//! ```ignore
//! use foresight_core::catalog::builtin_study;
//! use foresight_core::model::SeriesMetric;
//! use foresight_core::sweep::evaluate_study;
//!
//! let study = builtin_study();
//! let results = evaluate_study(&study)?;
//! let c = results.series(&"impatient-beta".into(), SeriesMetric::Consumption)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod catalog;
pub mod conditions;
pub mod error;
pub mod formulas;
pub mod study;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use catalog::builtin_study;
pub use study::Study;
pub use sweep::{StudyResults, evaluate_scenario, evaluate_study};
