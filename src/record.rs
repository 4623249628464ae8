/// One employee's unprocessed counters for a period.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub employee_name: String,
    pub interaction_count: u32,
    pub average_handling_minutes: f64,
    pub error_count: u32,
}

impl RawRecord {
    pub fn new(
        employee_name: &str,
        interaction_count: u32,
        average_handling_minutes: f64,
        error_count: u32,
    ) -> Self {
        Self {
            employee_name: employee_name.trim().to_string(),
            interaction_count,
            average_handling_minutes: sanitize_minutes(average_handling_minutes),
            error_count,
        }
    }

    /// Builds a record from the raw text of a form row. Numeric fields that
    /// do not parse become 0.
    pub fn from_form(name: &str, interactions: &str, handling_time: &str, errors: &str) -> Self {
        Self::new(
            name,
            parse_count(interactions),
            parse_handling_time(handling_time),
            parse_count(errors),
        )
    }

    /// Unfilled form rows carry a blank name.
    pub fn is_blank(&self) -> bool {
        self.employee_name.trim().is_empty()
    }
}

/// Parses "mm:ss" or decimal minutes. Anything else yields 0.
pub fn parse_handling_time(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    if text.contains(':') {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 2 {
            return 0.0;
        }
        let minutes: u64 = match parts[0].trim().parse() {
            Ok(v) => v,
            Err(_) => return 0.0,
        };
        let seconds: u64 = match parts[1].trim().parse() {
            Ok(v) => v,
            Err(_) => return 0.0,
        };
        return sanitize_minutes(minutes as f64 + seconds as f64 / 60.0);
    }

    // Form users type "7,5" as often as "7.5".
    match text.replace(',', ".").parse::<f64>() {
        Ok(v) => sanitize_minutes(v),
        Err(_) => 0.0,
    }
}

fn parse_count(text: &str) -> u32 {
    let text = text.trim();
    if let Ok(v) = text.parse::<u32>() {
        return v;
    }
    // Spreadsheet exports write integers as "12.0".
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 => v.trunc() as u32,
        _ => 0,
    }
}

fn sanitize_minutes(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}
