use crate::error::{TeamScoreError, TsResult};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub scoring: ScoringParams,
    #[command(flatten)]
    pub report: ReportOptions,
}

/// How raw counters are turned into sub-scores.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NormalizationMode {
    /// Clamped ratios against fixed targets; overall is the plain mean.
    FixedTarget,
    /// Ratios against the period's own means; overall is weighted.
    CohortRelative,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    #[arg(long, value_enum, default_value_t = NormalizationMode::CohortRelative)]
    pub mode: NormalizationMode,

    // === FIXED TARGETS ===
    #[arg(long, default_value_t = 100.0)]
    pub target_interactions: f64,
    #[arg(long, default_value_t = 30.0)]
    pub max_handling_minutes: f64,
    #[arg(long, default_value_t = 10.0)]
    pub max_errors: f64,

    // === COHORT WEIGHTS ===
    #[arg(long, default_value_t = 0.4)]
    pub weight_productivity: f64,
    #[arg(long, default_value_t = 0.3)]
    pub weight_efficiency: f64,
    #[arg(long, default_value_t = 0.3)]
    pub weight_quality: f64,

    // === FLAG THRESHOLDS ===
    #[arg(long, default_value_t = 90.0)]
    pub training_threshold: f64,
    #[arg(long, default_value_t = 100.0)]
    pub attention_threshold: f64,
    // Off: everything under attention_threshold is a training flag.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub attention_tier: bool,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            mode: NormalizationMode::CohortRelative,
            target_interactions: 100.0,
            max_handling_minutes: 30.0,
            max_errors: 10.0,
            weight_productivity: 0.4,
            weight_efficiency: 0.3,
            weight_quality: 0.3,
            training_threshold: 90.0,
            attention_threshold: 100.0,
            attention_tier: true,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    #[arg(long, default_value_t = 2)]
    pub display_decimals: usize,
    #[arg(long, default_value_t = false)]
    pub hide_notes: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            display_decimals: 2,
            hide_notes: false,
        }
    }
}

impl ScoringParams {
    pub fn fixed_target() -> Self {
        Self {
            mode: NormalizationMode::FixedTarget,
            ..Default::default()
        }
    }

    pub fn cohort_relative() -> Self {
        Self {
            mode: NormalizationMode::CohortRelative,
            ..Default::default()
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TeamScoreError::Config(format!(
                "Failed to read params file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> TsResult<()> {
        let targets = [
            ("target_interactions", self.target_interactions),
            ("max_handling_minutes", self.max_handling_minutes),
            ("max_errors", self.max_errors),
        ];
        for (name, v) in targets {
            if !v.is_finite() || v <= 0.0 {
                return Err(TeamScoreError::Config(format!(
                    "{} must be a positive number (got {})",
                    name, v
                )));
            }
        }

        let weights = [
            ("weight_productivity", self.weight_productivity),
            ("weight_efficiency", self.weight_efficiency),
            ("weight_quality", self.weight_quality),
        ];
        for (name, v) in weights {
            if !v.is_finite() || v < 0.0 {
                return Err(TeamScoreError::Config(format!(
                    "{} must be non-negative (got {})",
                    name, v
                )));
            }
        }

        if !self.training_threshold.is_finite() || !self.attention_threshold.is_finite() {
            return Err(TeamScoreError::Config(
                "flag thresholds must be finite".to_string(),
            ));
        }
        if self.training_threshold > self.attention_threshold {
            return Err(TeamScoreError::Config(format!(
                "training_threshold ({}) must not exceed attention_threshold ({})",
                self.training_threshold, self.attention_threshold
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_params: &ScoringParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field.clone();
                }
            };
        }

        update_if_present!(mode, "mode");

        update_if_present!(target_interactions, "target_interactions");
        update_if_present!(max_handling_minutes, "max_handling_minutes");
        update_if_present!(max_errors, "max_errors");

        update_if_present!(weight_productivity, "weight_productivity");
        update_if_present!(weight_efficiency, "weight_efficiency");
        update_if_present!(weight_quality, "weight_quality");

        update_if_present!(training_threshold, "training_threshold");
        update_if_present!(attention_threshold, "attention_threshold");
        update_if_present!(attention_tier, "attention_tier");
    }
}
