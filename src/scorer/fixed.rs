use crate::config::ScoringParams;
use crate::record::RawRecord;

/// Sub-scores against fixed targets, each clamped to [0, 100].
pub fn sub_scores(rec: &RawRecord, params: &ScoringParams) -> (f64, f64, f64) {
    let productivity = (rec.interaction_count as f64 / params.target_interactions).min(1.0) * 100.0;
    let efficiency =
        (1.0 - rec.average_handling_minutes / params.max_handling_minutes).max(0.0) * 100.0;
    let quality = (1.0 - rec.error_count as f64 / params.max_errors).max(0.0) * 100.0;
    (productivity, efficiency, quality)
}

/// Plain mean of the three sub-scores, rounded to 2 decimals.
pub fn overall(productivity: f64, efficiency: f64, quality: f64) -> f64 {
    round2((productivity + efficiency + quality) / 3.0)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
