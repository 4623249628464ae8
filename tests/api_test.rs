use teamscore::api::{self, DashboardState, PeriodReport};
use teamscore::config::{NormalizationMode, ScoringParams};
use teamscore::period::PeriodKey;
use teamscore::record::RawRecord;

fn may() -> PeriodKey {
    PeriodKey::new(2024, 5).unwrap()
}

fn ana_bea() -> Vec<RawRecord> {
    vec![
        RawRecord::from_form("Ana", "120", "20:00", "2"),
        RawRecord::from_form("Bea", "80", "25", "5"),
    ]
}

#[test]
fn test_unwritten_period_scores_empty() {
    let state = DashboardState::default();
    assert!(api::period_scores(&state, may()).unwrap().is_empty());
}

#[test]
fn test_save_then_score() {
    let state = DashboardState::default();
    api::save_period(&state, may(), ana_bea()).unwrap();

    let scores = api::period_scores(&state, may()).unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].productivity, 120.0);
    assert_eq!(scores[1].efficiency, 90.0);
}

#[test]
fn test_save_replaces_period() {
    let state = DashboardState::default();
    api::save_period(&state, may(), ana_bea()).unwrap();
    api::save_period(&state, may(), vec![RawRecord::new("Carla", 10, 3.0, 0)]).unwrap();

    let scores = api::period_scores(&state, may()).unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].employee_name, "Carla");
    // Alone in the cohort: exactly average everywhere, zero errors.
    assert_eq!(scores[0].productivity, 100.0);
    assert_eq!(scores[0].efficiency, 100.0);
    assert_eq!(scores[0].quality, 100.0);
}

#[test]
fn test_switching_mode_rescores() {
    let state = DashboardState::default();
    api::save_period(&state, may(), ana_bea()).unwrap();

    api::set_params(&state, ScoringParams::fixed_target()).unwrap();
    let scores = api::period_scores(&state, may()).unwrap();
    assert_eq!(scores[0].overall, 71.11);
}

#[test]
fn test_set_params_rejects_invalid() {
    let state = DashboardState::default();
    let bad = ScoringParams {
        max_handling_minutes: -1.0,
        ..Default::default()
    };
    assert!(api::set_params(&state, bad).is_err());
    // Previous params stay active.
    assert_eq!(
        state.params.lock().unwrap().mode,
        NormalizationMode::CohortRelative
    );
}

#[test]
fn test_period_report_content() {
    let state = DashboardState::default();
    api::save_period(&state, may(), ana_bea()).unwrap();

    let report = api::period_report(&state, may()).unwrap();
    assert_eq!(report.period, "Maio/2024");
    assert_eq!(report.year, 2024);
    assert_eq!(report.month, 5);
    assert_eq!(report.mode, NormalizationMode::CohortRelative);
    assert_eq!(report.employees.len(), 2);

    let bea = &report.employees[1];
    assert_eq!(
        bea.flags,
        vec![
            "productivity: needs training",
            "efficiency: needs attention",
            "quality: needs training",
        ]
    );
    assert!(bea.note.starts_with("Bea:"));
    assert!(bea.note.contains("treinamento em Produtividade e Qualidade"));
    assert!(bea.note.contains("atenção em Eficiência"));

    let ana = &report.employees[0];
    assert!(ana.flags.is_empty());
    assert!(ana.note.contains("todas as dimensões"));
}

#[test]
fn test_report_json_round_trip() {
    let state = DashboardState::default();
    api::save_period(&state, may(), ana_bea()).unwrap();
    let report = api::period_report(&state, may()).unwrap();

    let json = report.to_json_pretty().unwrap();
    assert!(json.contains("\"employeeName\": \"Ana\""));
    assert!(json.contains("\"mode\": \"cohort-relative\""));

    let back: PeriodReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_empty_period_report() {
    let state = DashboardState::default();
    api::save_period(&state, may(), Vec::new()).unwrap();
    let report = api::period_report(&state, may()).unwrap();
    assert!(report.employees.is_empty());
}
