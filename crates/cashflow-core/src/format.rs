//! Display-time currency formatting.

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: Option<f64>) -> String;
}

/// Rounds to whole currency units and groups thousands with a separator.
/// Missing or non-finite values render as a placeholder dash. Rounding
/// happens only at display time; aggregation keeps exact sums.
#[derive(Debug, Clone)]
pub struct GroupedFormatter {
    separator: char,
}

impl GroupedFormatter {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }
}

impl Default for GroupedFormatter {
    fn default() -> Self {
        Self::new(',')
    }
}

impl CurrencyFormatter for GroupedFormatter {
    fn format_amount(&self, amount: Option<f64>) -> String {
        let value = match amount {
            Some(v) if v.is_finite() => v,
            _ => return "-".to_string(),
        };
        group_digits(value.round() as i64, self.separator)
    }
}

fn group_digits(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
