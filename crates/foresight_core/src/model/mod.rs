mod ids;
mod metric;
mod parameter;
mod params;
mod scenario;

pub use ids::{FigureId, ScenarioId};
pub use metric::SeriesMetric;
pub use parameter::SweepParameter;
pub use params::ModelParams;
pub use scenario::{Figure, Panel, PatienceCase, Scenario, Trace};
