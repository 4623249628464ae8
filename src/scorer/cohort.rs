use crate::config::ScoringParams;
use crate::record::RawRecord;

/// Period means over the named (non-blank) records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CohortMeans {
    pub interactions: f64,
    pub handling_minutes: f64,
    pub errors: f64,
}

impl CohortMeans {
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut n = 0usize;
        let mut sum = Self::default();
        for rec in records.iter().filter(|r| !r.is_blank()) {
            n += 1;
            sum.interactions += rec.interaction_count as f64;
            sum.handling_minutes += rec.average_handling_minutes;
            sum.errors += rec.error_count as f64;
        }

        if n == 0 {
            return Self::default();
        }

        let n = n as f64;
        Self {
            interactions: sum.interactions / n,
            handling_minutes: sum.handling_minutes / n,
            errors: sum.errors / n,
        }
    }
}

/// Sub-scores relative to the cohort. Unbounded above.
pub fn sub_scores(rec: &RawRecord, means: &CohortMeans) -> (f64, f64, f64) {
    let productivity = if means.interactions > 0.0 {
        rec.interaction_count as f64 * 100.0 / means.interactions
    } else {
        0.0
    };

    // Zero recorded time earns no efficiency credit.
    let efficiency = if rec.average_handling_minutes > 0.0 {
        means.handling_minutes * 100.0 / rec.average_handling_minutes
    } else {
        0.0
    };

    let quality = if rec.error_count > 0 {
        means.errors * 100.0 / rec.error_count as f64
    } else {
        100.0
    };

    (productivity, efficiency, quality)
}

pub fn weighted_overall(
    productivity: f64,
    efficiency: f64,
    quality: f64,
    params: &ScoringParams,
) -> f64 {
    productivity * params.weight_productivity
        + efficiency * params.weight_efficiency
        + quality * params.weight_quality
}
