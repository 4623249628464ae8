pub mod cohort;
pub mod fixed;
pub mod flags;
pub mod types;

pub use self::cohort::CohortMeans;
pub use self::types::{CapabilityFlag, Dimension, FlagLevel, ScoreResult};
use crate::config::{NormalizationMode, ScoringParams};
use crate::record::RawRecord;
use tracing::debug;

/// Turns one period's raw records into scores. Holds only its parameters, so
/// repeated calls on the same input give the same output.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    pub params: ScoringParams,
}

impl ScoreEngine {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    /// One result per named record, in input order. Blank rows are skipped.
    pub fn score(&self, records: &[RawRecord]) -> Vec<ScoreResult> {
        score(records, &self.params)
    }
}

pub fn score(records: &[RawRecord], params: &ScoringParams) -> Vec<ScoreResult> {
    let named = records.iter().filter(|r| !r.is_blank());

    match params.mode {
        NormalizationMode::FixedTarget => {
            debug!("Scoring {} records against fixed targets", records.len());
            named
                .map(|rec| {
                    let (p, e, q) = fixed::sub_scores(rec, params);
                    build_result(rec, p, e, q, fixed::overall(p, e, q), params)
                })
                .collect()
        }
        NormalizationMode::CohortRelative => {
            let means = CohortMeans::from_records(records);
            debug!(
                "Cohort means: interactions={:.2} minutes={:.2} errors={:.2}",
                means.interactions, means.handling_minutes, means.errors
            );
            named
                .map(|rec| {
                    let (p, e, q) = cohort::sub_scores(rec, &means);
                    build_result(rec, p, e, q, cohort::weighted_overall(p, e, q, params), params)
                })
                .collect()
        }
    }
}

fn build_result(
    rec: &RawRecord,
    productivity: f64,
    efficiency: f64,
    quality: f64,
    overall: f64,
    params: &ScoringParams,
) -> ScoreResult {
    ScoreResult {
        employee_name: rec.employee_name.trim().to_string(),
        productivity,
        efficiency,
        quality,
        overall,
        flags: flags::capability_flags(productivity, efficiency, quality, params),
    }
}
