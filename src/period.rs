use crate::error::{TeamScoreError, TsResult};
use serde::Serialize;
use std::fmt;

pub const FIRST_YEAR: i32 = 2023;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Portuguese month name for `1..=12`, independent of the host locale.
pub fn month_name(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[(month - 1) as usize]),
        _ => None,
    }
}

/// One scoring cycle. Only constructible through [`PeriodKey::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> TsResult<Self> {
        if year < FIRST_YEAR {
            return Err(TeamScoreError::Validation(format!(
                "Year {} is before {}",
                year, FIRST_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(TeamScoreError::Validation(format!(
                "Month {} is outside 1-12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month_name(), self.year)
    }
}
