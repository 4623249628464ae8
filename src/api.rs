use crate::coaching::coaching_note;
use crate::config::{NormalizationMode, ScoringParams};
use crate::error::{TeamScoreError, TsResult};
use crate::period::PeriodKey;
use crate::record::RawRecord;
use crate::scorer::{self, ScoreResult};
use crate::store::PeriodStore;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// Session state owned by the host: the period store and the active params.
pub struct DashboardState {
    pub store: Mutex<PeriodStore>,
    pub params: Mutex<ScoringParams>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ScoringParams::default())
    }
}

impl DashboardState {
    pub fn new(params: ScoringParams) -> Self {
        Self {
            store: Mutex::new(PeriodStore::new()),
            params: Mutex::new(params),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReport {
    pub employee_name: String,
    pub productivity: f64,
    pub efficiency: f64,
    pub quality: f64,
    pub overall: f64,
    pub flags: Vec<String>,
    pub note: String,
}

/// Printable export of one period.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodReport {
    pub period: String,
    pub year: i32,
    pub month: u32,
    pub mode: NormalizationMode,
    pub employees: Vec<EmployeeReport>,
}

impl PeriodReport {
    pub fn build(key: PeriodKey, mode: NormalizationMode, results: &[ScoreResult]) -> Self {
        let employees = results
            .iter()
            .map(|r| EmployeeReport {
                employee_name: r.employee_name.clone(),
                productivity: r.productivity,
                efficiency: r.efficiency,
                quality: r.quality,
                overall: r.overall,
                flags: r
                    .flags
                    .iter()
                    .map(|f| format!("{}: {}", f.dimension, f.level))
                    .collect(),
                note: coaching_note(r),
            })
            .collect();

        Self {
            period: key.to_string(),
            year: key.year(),
            month: key.month(),
            mode,
            employees,
        }
    }

    pub fn to_json_pretty(&self) -> TsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn lock<'a, T>(m: &'a Mutex<T>, what: &str) -> TsResult<MutexGuard<'a, T>> {
    m.lock()
        .map_err(|e| TeamScoreError::State(format!("{} lock poisoned: {}", what, e)))
}

/// Service: Replace the records of one period (the form's save button).
pub fn save_period(
    state: &DashboardState,
    key: PeriodKey,
    records: Vec<RawRecord>,
) -> TsResult<()> {
    info!("Saving {} rows for {}", records.len(), key);
    lock(&state.store, "store")?.put(key, records);
    Ok(())
}

/// Service: Swap the active scoring params after validating them.
pub fn set_params(state: &DashboardState, params: ScoringParams) -> TsResult<()> {
    params.validate()?;
    *lock(&state.params, "params")? = params;
    Ok(())
}

/// Service: Score the selected period. An unwritten period scores empty.
pub fn period_scores(state: &DashboardState, key: PeriodKey) -> TsResult<Vec<ScoreResult>> {
    let params = lock(&state.params, "params")?.clone();
    let store = lock(&state.store, "store")?;
    Ok(scorer::score(store.get(&key), &params))
}

/// Service: Build the export document for the selected period.
pub fn period_report(state: &DashboardState, key: PeriodKey) -> TsResult<PeriodReport> {
    let params = lock(&state.params, "params")?.clone();
    let store = lock(&state.store, "store")?;
    let results = scorer::score(store.get(&key), &params);
    Ok(PeriodReport::build(key, params.mode, &results))
}
