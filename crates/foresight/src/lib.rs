//! Terminal front end for the perfect-foresight sweep evaluator
//!
//! Loads a study (the built-in one or a YAML file), evaluates it with
//! `foresight_core` and then prints tables, condition reports and exports,
//! or pages through the study's figures as terminal charts.

pub mod app;
pub mod commands;
pub mod data;
pub mod logging;
pub mod screens;
pub mod util;

pub use app::App;
pub use logging::init_logging;
