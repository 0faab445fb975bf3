//! FHWC / RIC checks and patience regimes

use crate::catalog::builtin_study;
use crate::conditions::{ConditionReport, PatienceRegime, fhwc_holds, ric_holds};
use crate::model::{ModelParams, ScenarioId};
use crate::sweep::evaluate_study;

fn reports() -> Vec<ConditionReport> {
    let results = evaluate_study(&builtin_study()).unwrap();
    results.iter().map(ConditionReport::from_result).collect()
}

fn report(reports: &[ConditionReport], id: &str) -> ConditionReport {
    reports
        .iter()
        .find(|r| r.scenario == ScenarioId::new(id))
        .cloned()
        .unwrap()
}

#[test]
fn test_classify_regimes() {
    assert_eq!(
        PatienceRegime::classify(0.98),
        Some(PatienceRegime::AbsolutelyImpatient)
    );
    assert_eq!(
        PatienceRegime::classify(1.0 + 1e-12),
        Some(PatienceRegime::AbsolutelyPoised)
    );
    assert_eq!(
        PatienceRegime::classify(1.02),
        Some(PatienceRegime::AbsolutelyPatient)
    );
    assert_eq!(PatienceRegime::classify(f64::NAN), None);
}

#[test]
fn test_conditions() {
    let params = ModelParams {
        interest_factor: 1.03,
        income_growth: 1.01,
        ..Default::default()
    };
    assert!(fhwc_holds(&params));
    assert!(!fhwc_holds(&ModelParams {
        income_growth: 1.03,
        ..params
    }));

    assert!(ric_holds(0.99, 1.03));
    assert!(!ric_holds(1.05, 1.03));
}

#[test]
fn test_case_one_is_impatient() {
    let reports = reports();

    let rho = report(&reports, "impatient-rho");
    assert_eq!(rho.uniform_regime(), Some(PatienceRegime::AbsolutelyImpatient));
    assert_eq!(rho.ric_violations(), 0);
    assert_eq!(rho.fhwc_violations(), 0);

    // The last point sits exactly on beta = 1/R
    let beta = report(&reports, "impatient-beta");
    assert_eq!(beta.impatient, 49);
    assert_eq!(beta.poised, 1);
    assert_eq!(beta.ric_violations(), 0);
}

#[test]
fn test_case_two_is_patient() {
    let reports = reports();

    let rho = report(&reports, "patient-rho");
    assert_eq!(rho.uniform_regime(), Some(PatienceRegime::AbsolutelyPatient));
    assert_eq!(rho.fhwc_violations(), 0);

    // Large beta pushes thorn past R
    let beta = report(&reports, "patient-beta");
    assert!(beta.ric_violations() > 0);
}

#[test]
fn test_case_three_is_poised() {
    let reports = reports();

    let rho = report(&reports, "poised-rho");
    assert_eq!(rho.uniform_regime(), Some(PatienceRegime::AbsolutelyPoised));
    assert_eq!(rho.points, 50);
    assert_eq!(rho.undefined, 0);
}

#[test]
fn test_report_tracks_largest_gap() {
    let reports = reports();
    let beta = report(&reports, "impatient-beta");
    assert!(beta.max_consumption_gap > 100.0);
}
