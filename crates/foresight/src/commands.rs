//! Text reports for the non-interactive subcommands

use std::fmt::Write;

use foresight_core::conditions::ConditionReport;
use foresight_core::error::StudyError;
use foresight_core::model::{ModelParams, ScenarioId, SeriesMetric, SweepParameter};
use foresight_core::{Study, StudyResults};

use crate::util::format::{format_percentage, format_value};

/// Width of one numeric table column
const COLUMN_WIDTH: usize = 13;

/// Scenarios, figures, plottable series and sweepable parameters of a study
pub fn list(study: &Study) -> String {
    let mut out = String::new();
    let id_width = study
        .scenarios
        .iter()
        .map(|s| s.id.as_str().len())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "{}", study.title);
    let _ = writeln!(out, "\nScenarios ({}):", study.scenarios.len());
    for scenario in &study.scenarios {
        let _ = writeln!(
            out,
            "  {:<id_width$}  {:<28}  {}",
            scenario.id.as_str(),
            scenario.title,
            scenario.sweep.labels().join(" + "),
        );
    }

    let _ = writeln!(out, "\nFigures ({}):", study.figures.len());
    for figure in &study.figures {
        let _ = writeln!(
            out,
            "  {:<22}  {}x{}  {}",
            figure.id.as_str(),
            figure.rows,
            figure.cols,
            figure.title,
        );
    }

    let _ = writeln!(out, "\nSeries:");
    for metric in SeriesMetric::ALL {
        let _ = writeln!(out, "  {:<14}  {}", metric.short_label(), metric.label());
    }

    // Defaults apply to any parameter a study file leaves out
    let defaults = ModelParams::default();
    let _ = writeln!(out, "\nParameters (default):");
    for parameter in SweepParameter::ALL {
        let _ = writeln!(
            out,
            "  {:<6}  {:<22}  {}",
            parameter.symbol(),
            parameter.label(),
            format_value(defaults.get(parameter)),
        );
    }
    out
}

/// Tabulate one scenario: the swept value followed by `metrics`
pub fn table(
    study: &Study,
    results: &StudyResults,
    id: &ScenarioId,
    metrics: &[SeriesMetric],
) -> Result<String, StudyError> {
    let scenario = study.find_scenario(id)?;
    let result = results
        .get(id)
        .ok_or_else(|| StudyError::UnknownScenario(id.clone()))?;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}), x = {}",
        scenario.title,
        scenario.case.label(),
        scenario.sweep.primary.parameter.label()
    );

    let _ = write!(
        out,
        "{:>COLUMN_WIDTH$}",
        scenario.sweep.primary.parameter.symbol()
    );
    for metric in metrics {
        let _ = write!(out, "{:>COLUMN_WIDTH$}", metric.short_label());
    }
    out.push('\n');

    for point in &result.points {
        let _ = write!(out, "{:>COLUMN_WIDTH$}", format_value(point.x));
        for metric in metrics {
            let _ = write!(out, "{:>COLUMN_WIDTH$}", format_value(metric.value(point)));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Condition reports for every scenario, in study order
pub fn condition_reports(results: &StudyResults) -> Vec<ConditionReport> {
    results.iter().map(ConditionReport::from_result).collect()
}

/// Per-scenario FHWC / RIC tally and patience regime
///
/// Violations are also logged; they are reported, never fatal.
pub fn check(results: &StudyResults) -> String {
    let mut out = String::new();
    let reports = condition_reports(results);
    let id_width = reports
        .iter()
        .map(|r| r.scenario.as_str().len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    let _ = writeln!(
        out,
        "{:<id_width$}  {:>8}  {:>8}  {:<12}  {:>12}",
        "scenario", "FHWC", "RIC", "regime", "max |c-c_app|"
    );
    for report in &reports {
        let regime = match report.uniform_regime() {
            Some(regime) => regime.label().to_string(),
            None => format!(
                "mixed {}/{}/{}",
                report.impatient, report.poised, report.patient
            ),
        };
        let _ = writeln!(
            out,
            "{:<id_width$}  {:>8}  {:>8}  {:<12}  {:>12}",
            report.scenario.as_str(),
            share(report.fhwc_holds, report.points),
            share(report.ric_holds, report.points),
            regime,
            format_value(report.max_consumption_gap),
        );

        if report.fhwc_violations() > 0 {
            tracing::warn!(
                scenario = %report.scenario,
                points = report.fhwc_violations(),
                "finite human wealth condition violated"
            );
        }
        if report.ric_violations() > 0 {
            tracing::warn!(
                scenario = %report.scenario,
                points = report.ric_violations(),
                "return impatience condition violated"
            );
        }
        if report.undefined > 0 {
            tracing::warn!(
                scenario = %report.scenario,
                points = report.undefined,
                "thorn undefined"
            );
        }
    }
    out
}

fn share(count: usize, total: usize) -> String {
    if total == 0 {
        return "-".to_string();
    }
    format_percentage(count as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_core::{builtin_study, evaluate_study};

    #[test]
    fn test_list_names_everything() {
        let study = builtin_study();
        let out = list(&study);

        assert!(out.contains("Scenarios (18):"));
        assert!(out.contains("Figures (7):"));
        assert!(out.contains("saving-rate-response"));
        assert!(out.contains("Approximation gap"));
        // Rate forms are derived from the default factors
        assert!(out.contains("  r       Net interest rate       0.0300"));
        assert!(out.contains("  beta    Discount factor         0.9600"));
        // Linked axes are listed after the primary one
        assert!(out.contains("beta [1..0.6667, 50 steps] + R [1..1.5, 50 steps]"));
    }

    #[test]
    fn test_table_has_one_row_per_point() {
        let study = builtin_study();
        let results = evaluate_study(&study).unwrap();
        let out = table(
            &study,
            &results,
            &ScenarioId::new("impatient-rho"),
            &SeriesMetric::TABLE,
        )
        .unwrap();

        let lines: Vec<&str> = out.lines().collect();
        // Title, header and 50 points
        assert_eq!(lines.len(), 52);
        assert!(lines[0].ends_with("x = Risk aversion"));
        assert!(lines[1].trim_start().starts_with("rho"));
        assert!(lines[1].contains("c (approx)"));
        assert!(lines[2].trim_start().starts_with("0.5000"));
        assert!(lines[51].trim_start().starts_with("20.0000"));
    }

    #[test]
    fn test_table_unknown_scenario() {
        let study = builtin_study();
        let results = evaluate_study(&study).unwrap();
        let id = ScenarioId::new("nope");

        assert_eq!(
            table(&study, &results, &id, &SeriesMetric::TABLE),
            Err(StudyError::UnknownScenario(id))
        );
    }

    #[test]
    fn test_check_reports_each_scenario() {
        let study = builtin_study();
        let results = evaluate_study(&study).unwrap();
        let out = check(&results);

        assert_eq!(out.lines().count(), 19);
        let poised = out
            .lines()
            .find(|line| line.starts_with("poised-rho"))
            .unwrap();
        assert!(poised.contains("poised"));
        assert!(poised.contains("100.00%"));
    }

    #[test]
    fn test_share() {
        assert_eq!(share(49, 50), "98.00%");
        assert_eq!(share(0, 0), "-");
    }
}
