use crate::scorer::{Dimension, FlagLevel, ScoreResult};
use strum::IntoEnumIterator;

/// Short narrative for the supervisor, built from the capability flags.
pub fn coaching_note(result: &ScoreResult) -> String {
    let mut training = Vec::new();
    let mut attention = Vec::new();
    for dim in Dimension::iter() {
        match result.flag_for(dim) {
            Some(FlagLevel::NeedsTraining) => training.push(dim.label()),
            Some(FlagLevel::NeedsAttention) => attention.push(dim.label()),
            None => {}
        }
    }

    if training.is_empty() && attention.is_empty() {
        return format!(
            "{} atingiu ou superou a referência em todas as dimensões. Manter o acompanhamento regular.",
            result.employee_name
        );
    }

    let mut parts = Vec::new();
    if !training.is_empty() {
        parts.push(format!(
            "recomenda-se treinamento em {}",
            join_pt(&training)
        ));
    }
    if !attention.is_empty() {
        parts.push(format!("requer atenção em {}", join_pt(&attention)));
    }

    format!("{}: {}.", result.employee_name, parts.join("; "))
}

fn join_pt(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} e {}", init.join(", "), last),
    }
}
