//! The built-in study

use super::assert_close;
use crate::catalog::{DEFAULT_STEPS, FigureBuilder, ScenarioBuilder, builtin_study};
use crate::error::StudyError;
use crate::model::{FigureId, ScenarioId, SeriesMetric, SweepParameter};
use crate::sweep::evaluate_study;

#[test]
fn test_builtin_study_validates() {
    let study = builtin_study();
    study.validate().unwrap();

    assert_eq!(study.scenarios.len(), 18);
    let figure_ids: Vec<&str> = study.figures.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        figure_ids,
        vec![
            "impatient",
            "patient",
            "poised",
            "human-wealth",
            "saving-rate-assets",
            "saving-rate-sign",
            "saving-rate-response",
        ]
    );
    assert!(
        study
            .scenarios
            .iter()
            .all(|s| s.sweep.len() == DEFAULT_STEPS)
    );
}

#[test]
fn test_comparison_figure_layout() {
    let study = builtin_study();
    let figure = study.find_figure(&FigureId::new("impatient")).unwrap();

    assert_eq!((figure.rows, figure.cols), (3, 3));
    let savings = figure.panel(1, 2).unwrap();
    assert_eq!(savings.y_label, "savings");
    assert_eq!(savings.x_label, "rho");
    let legends: Vec<&str> = savings.traces.iter().map(|t| t.legend()).collect();
    assert_eq!(legends, vec!["s", "s (approx)"]);
    assert!(
        savings
            .traces
            .iter()
            .all(|t| t.scenario == ScenarioId::new("impatient-rho"))
    );

    let poised = study.find_figure(&FigureId::new("poised")).unwrap();
    assert_eq!((poised.rows, poised.cols), (3, 2));
    assert!(poised.panel(0, 2).is_none());
}

#[test]
fn test_poised_savings_use_poised_parameters() {
    let study = builtin_study();
    let results = evaluate_study(&study).unwrap();
    let poised = results.get(&ScenarioId::new("poised-beta")).unwrap();

    for point in &poised.points {
        let r = point.params.interest_factor - 1.0;
        assert_close(point.savings, r * 5.0 + 10.0 - point.consumption, 1e-9);
    }
    // beta and R move in opposite directions
    let first = &poised.points[0].params;
    let last = &poised.points[DEFAULT_STEPS - 1].params;
    assert_eq!(first.interest_factor, 1.0);
    assert_eq!(last.interest_factor, 1.5);
    assert_eq!(last.income_growth, 1.4);
}

#[test]
fn test_saving_rate_sign_follows_thorn() {
    let results = evaluate_study(&builtin_study()).unwrap();
    let last = |id: &str| {
        let series = results
            .series(&ScenarioId::new(id), SeriesMetric::SavingRate)
            .unwrap();
        series[series.len() - 1]
    };

    let (assets, impatient) = last("saving-impatient");
    assert_eq!(assets, 200.0);
    assert!(impatient < 0.0);

    let (_, patient) = last("saving-patient");
    assert!(patient > 0.0);

    // Poised dissaving fades toward zero as assets grow
    let (_, poised) = last("saving-poised");
    assert!(poised < 0.0);
    assert!(poised.abs() < impatient.abs());
}

#[test]
fn test_saving_rate_approaches_its_limit() {
    let results = evaluate_study(&builtin_study()).unwrap();
    let result = results.get(&ScenarioId::new("saving-impatient")).unwrap();
    let v = 1.0 / 0.96 - 1.0;
    let limit = (0.04 - v) / (2.0 * 0.04);

    let distance: Vec<f64> = result
        .values(SeriesMetric::SavingRate)
        .iter()
        .map(|z| (z - limit).abs())
        .collect();
    assert!(distance.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_human_wealth_effect_values() {
    let results = evaluate_study(&builtin_study()).unwrap();
    let endpoints = |id: &str| {
        let values = results
            .get(&ScenarioId::new(id))
            .unwrap()
            .values(SeriesMetric::HumanWealthConsumption);
        (values[0], values[values.len() - 1])
    };

    // Less patience, larger effect
    let (impatient, patient) = endpoints("hw-beta");
    assert_close(impatient, 260.0, 1e-6);
    assert_close(patient, 12.5252525, 1e-6);

    // Effect explodes as g approaches r
    let (low_g, high_g) = endpoints("hw-g");
    assert_close(low_g, 10.470085, 1e-5);
    assert_close(high_g, 408.333333, 1e-5);
}

#[test]
fn test_saving_rate_response_values() {
    let results = evaluate_study(&builtin_study()).unwrap();
    let rho = results
        .get(&ScenarioId::new("response-rho"))
        .unwrap()
        .values(SeriesMetric::SavingRateResponse);

    // rho^-1 v r^-2 with v = r = 0.05
    assert_close(rho[0], 40.0, 1e-6);
    assert_close(rho[rho.len() - 1], 2.0, 1e-6);
}

#[test]
fn test_validate_catches_layout_and_references() {
    let scenario = ScenarioBuilder::new("only", "Only")
        .sweep(SweepParameter::RiskAversion, 1.0, 2.0, 3)
        .build();

    let duplicate = crate::Study::new("dup")
        .scenario(scenario.clone())
        .scenario(scenario.clone());
    assert_eq!(
        duplicate.validate(),
        Err(StudyError::DuplicateScenario(ScenarioId::new("only")))
    );

    let short = crate::Study::new("short").scenario(scenario.clone()).figure(
        FigureBuilder::new("grid", "Grid", 2, 1)
            .panel("one", "rho", "c", |p| p.trace("only", SeriesMetric::Consumption))
            .build(),
    );
    assert_eq!(
        short.validate(),
        Err(StudyError::PanelLayout {
            figure: FigureId::new("grid"),
            cells: 2,
            panels: 1,
        })
    );

    let dangling = crate::Study::new("dangling").scenario(scenario).figure(
        FigureBuilder::new("grid", "Grid", 1, 1)
            .panel("one", "rho", "c", |p| p.trace("other", SeriesMetric::Consumption))
            .build(),
    );
    assert_eq!(
        dangling.validate(),
        Err(StudyError::UnknownScenario(ScenarioId::new("other")))
    );
}

#[test]
fn test_validate_rejects_oversized_grid() {
    let scenario = ScenarioBuilder::new("only", "Only")
        .sweep(SweepParameter::RiskAversion, 1.0, 2.0, 3)
        .build();
    let rows = usize::MAX / 2 + 1;

    // rows * cols wraps to zero, which would match an empty panel list
    let study = crate::Study::new("huge")
        .scenario(scenario)
        .figure(FigureBuilder::new("grid", "Grid", rows, 2).build());
    assert_eq!(
        study.validate(),
        Err(StudyError::GridTooLarge {
            figure: FigureId::new("grid"),
            rows,
            cols: 2,
        })
    );
    assert!(study.figures[0].panel(rows - 1, 1).is_none());
}
