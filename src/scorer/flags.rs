use super::types::{CapabilityFlag, Dimension, FlagLevel};
use crate::config::ScoringParams;

pub fn classify(value: f64, params: &ScoringParams) -> Option<FlagLevel> {
    if !params.attention_tier {
        return (value < params.attention_threshold).then_some(FlagLevel::NeedsTraining);
    }

    if value < params.training_threshold {
        Some(FlagLevel::NeedsTraining)
    } else if value < params.attention_threshold {
        Some(FlagLevel::NeedsAttention)
    } else {
        None
    }
}

pub fn capability_flags(
    productivity: f64,
    efficiency: f64,
    quality: f64,
    params: &ScoringParams,
) -> Vec<CapabilityFlag> {
    [
        (Dimension::Productivity, productivity),
        (Dimension::Efficiency, efficiency),
        (Dimension::Quality, quality),
    ]
    .into_iter()
    .filter_map(|(dimension, value)| {
        classify(value, params).map(|level| CapabilityFlag { dimension, level })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let params = ScoringParams::default();
        assert_eq!(classify(89.99, &params), Some(FlagLevel::NeedsTraining));
        assert_eq!(classify(90.0, &params), Some(FlagLevel::NeedsAttention));
        assert_eq!(classify(99.99, &params), Some(FlagLevel::NeedsAttention));
        assert_eq!(classify(100.0, &params), None);
        assert_eq!(classify(250.0, &params), None);
    }

    #[test]
    fn test_flags_follow_dimension_order() {
        let params = ScoringParams::default();
        let flags = capability_flags(95.0, 100.0, 10.0, &params);
        assert_eq!(flags.len(), 2);
        assert_eq!(flags[0].dimension, Dimension::Productivity);
        assert_eq!(flags[1].dimension, Dimension::Quality);
    }
}
