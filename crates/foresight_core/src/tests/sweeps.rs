//! Sweep ranges, linked axes and study evaluation

use super::assert_close;
use crate::catalog::ScenarioBuilder;
use crate::error::{StudyError, SweepError};
use crate::model::{ModelParams, ScenarioId, SeriesMetric, SweepParameter};
use crate::study::Study;
use crate::sweep::{Sweep, SweepAxis, evaluate_scenario, evaluate_study};

#[test]
fn test_sweep_values_are_inclusive_and_linear() {
    let axis = SweepAxis::new(SweepParameter::RiskAversion, 0.5, 20.0, 50);
    let values = axis.sweep_values();

    assert_eq!(values.len(), 50);
    assert_eq!(values[0], 0.5);
    assert_eq!(values[49], 20.0);
    let step = 19.5 / 49.0;
    for pair in values.windows(2) {
        assert_close(pair[1] - pair[0], step, 1e-12);
    }
}

#[test]
fn test_descending_sweep() {
    let axis = SweepAxis::new(SweepParameter::DiscountFactor, 1.0, 1.0 / 1.5, 5);
    let values = axis.sweep_values();

    assert_eq!(values.first(), Some(&1.0));
    assert_eq!(values.last(), Some(&(1.0 / 1.5)));
    assert!(values.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_single_and_empty_axes() {
    let single = SweepAxis::new(SweepParameter::InterestFactor, 1.03, 2.0, 1);
    assert_eq!(single.sweep_values(), vec![1.03]);

    let empty = SweepAxis::new(SweepParameter::InterestFactor, 1.03, 2.0, 0);
    assert!(empty.sweep_values().is_empty());
}

#[test]
fn test_linked_axes_move_together() {
    let sweep = Sweep::single(SweepParameter::InterestFactor, 1.0, 1.5, 11)
        .linked(SweepParameter::IncomeGrowth, 0.9, 1.4);
    let points = sweep.points(&ModelParams::default());

    assert_eq!(points.len(), 11);
    for (x, params) in &points {
        assert_eq!(*x, params.interest_factor);
        assert_close(params.interest_factor - params.income_growth, 0.1, 1e-12);
        // Unswept fields come from the base
        assert_eq!(params.risk_aversion, ModelParams::default().risk_aversion);
    }
}

#[test]
fn test_validate_rejects_bad_sweeps() {
    let empty = Sweep::single(SweepParameter::RiskAversion, 1.0, 2.0, 0);
    assert_eq!(
        empty.validate(),
        Err(SweepError::EmptyAxis(SweepParameter::RiskAversion))
    );

    let mut mismatched = Sweep::single(SweepParameter::InterestFactor, 1.0, 1.5, 10);
    mismatched.linked.push(SweepAxis::new(
        SweepParameter::IncomeGrowth,
        0.9,
        1.4,
        9,
    ));
    assert_eq!(
        mismatched.validate(),
        Err(SweepError::LengthMismatch {
            parameter: SweepParameter::IncomeGrowth,
            expected: 10,
            found: 9,
        })
    );

    // r and R write to the same field
    let aliased = Sweep::single(SweepParameter::InterestFactor, 1.0, 1.5, 10)
        .linked(SweepParameter::NetInterestRate, 0.0, 0.5);
    assert_eq!(
        aliased.validate(),
        Err(SweepError::DuplicateParameter(
            SweepParameter::NetInterestRate
        ))
    );

    let unbounded = Sweep::single(SweepParameter::PriorAssets, 0.0, f64::INFINITY, 10);
    assert!(matches!(
        unbounded.validate(),
        Err(SweepError::NonFiniteBound { .. })
    ));
}

#[test]
fn test_evaluate_scenario_matches_pointwise_formulas() {
    let scenario = ScenarioBuilder::new("beta", "Variable beta")
        .interest_factor(1.03)
        .risk_aversion(2.0)
        .income_growth(1.01)
        .sweep(SweepParameter::DiscountFactor, 0.5, 1.0 / 1.03, 50)
        .build();
    let result = evaluate_scenario(&scenario).unwrap();

    assert_eq!(result.points.len(), 50);
    assert_eq!(result.scenario, ScenarioId::new("beta"));
    for point in &result.points {
        let expected = (1.03 * point.x).powf(0.5);
        assert_close(point.thorn, expected, 1e-12);
        assert_eq!(point.params.discount_factor, point.x);
    }
}

#[test]
fn test_gap_shrinks_as_beta_approaches_inverse_interest_factor() {
    let scenario = ScenarioBuilder::new("beta", "Variable beta")
        .interest_factor(1.03)
        .risk_aversion(2.0)
        .income_growth(1.01)
        .sweep(SweepParameter::DiscountFactor, 0.5, 1.0 / 1.03, 50)
        .build();
    let gaps: Vec<f64> = evaluate_scenario(&scenario)
        .unwrap()
        .values(SeriesMetric::ConsumptionGap)
        .into_iter()
        .map(f64::abs)
        .collect();

    assert!(gaps.windows(2).all(|w| w[1] < w[0]));
    assert!(gaps[0] > 100.0);
    assert_close(gaps[49], 0.45, 1e-9);
}

#[test]
fn test_invalid_sweep_is_reported_with_scenario() {
    let scenario = ScenarioBuilder::new("broken", "Broken")
        .sweep(SweepParameter::RiskAversion, 1.0, 2.0, 0)
        .build();

    match evaluate_scenario(&scenario) {
        Err(StudyError::InvalidSweep { scenario, source }) => {
            assert_eq!(scenario.as_str(), "broken");
            assert_eq!(source, SweepError::EmptyAxis(SweepParameter::RiskAversion));
        }
        other => panic!("expected InvalidSweep, got {other:?}"),
    }
}

#[test]
fn test_evaluate_study_preserves_order_and_lookup() {
    let study = Study::new("order")
        .scenario(
            ScenarioBuilder::new("b", "B")
                .sweep(SweepParameter::RiskAversion, 1.0, 5.0, 5)
                .build(),
        )
        .scenario(
            ScenarioBuilder::new("a", "A")
                .sweep(SweepParameter::PriorAssets, 0.0, 100.0, 3)
                .build(),
        );
    let results = evaluate_study(&study).unwrap();

    let ids: Vec<&str> = results.iter().map(|r| r.scenario.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(results.len(), 2);

    let series = results
        .series(&ScenarioId::new("a"), SeriesMetric::Savings)
        .unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[2].0, 100.0);

    assert_eq!(
        results.series(&ScenarioId::new("missing"), SeriesMetric::Savings),
        Err(StudyError::UnknownScenario(ScenarioId::new("missing")))
    );
}

#[test]
fn test_rate_sweep_reports_rate_on_x_axis() {
    let scenario = ScenarioBuilder::new("r", "Variable r")
        .sweep(SweepParameter::NetInterestRate, 0.01, 0.1, 10)
        .build();
    let result = evaluate_scenario(&scenario).unwrap();

    let first = &result.points[0];
    assert_eq!(first.x, 0.01);
    assert_close(first.params.interest_factor, 1.01, 1e-12);
}
