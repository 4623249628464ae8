use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    Productivity,
    Efficiency,
    Quality,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Productivity => "Produtividade",
            Self::Efficiency => "Eficiência",
            Self::Quality => "Qualidade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum FlagLevel {
    #[strum(serialize = "needs training")]
    NeedsTraining,
    #[strum(serialize = "needs attention")]
    NeedsAttention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityFlag {
    pub dimension: Dimension,
    pub level: FlagLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub employee_name: String,
    pub productivity: f64,
    pub efficiency: f64,
    pub quality: f64,
    pub overall: f64,
    // At most one per dimension, in Dimension order.
    pub flags: Vec<CapabilityFlag>,
}

impl ScoreResult {
    pub fn sub_score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Productivity => self.productivity,
            Dimension::Efficiency => self.efficiency,
            Dimension::Quality => self.quality,
        }
    }

    pub fn flag_for(&self, dimension: Dimension) -> Option<FlagLevel> {
        self.flags
            .iter()
            .find(|f| f.dimension == dimension)
            .map(|f| f.level)
    }

    /// Radar chart axes: productivity, efficiency, quality, overall.
    pub fn radar_values(&self) -> [f64; 4] {
        [
            self.productivity,
            self.efficiency,
            self.quality,
            self.overall,
        ]
    }
}
