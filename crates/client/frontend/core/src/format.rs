//! Text formatting for metric values shown by the summary cards.
use crate::view::{Trend, TrendDirection};

/// Formats a count with comma thousands separators (`1824` -> `"1,824"`).
pub fn count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats a fraction as a percentage with one decimal (`0.86` -> `"86.0%"`).
///
/// Non-finite input is shown as zero.
pub fn percent(fraction: f64) -> String {
    let fraction = if fraction.is_finite() { fraction } else { 0.0 };
    format!("{:.1}%", fraction * 100.0)
}

/// Plain decimal, without trailing zeros (`43.0` -> `"43"`, `4.2` -> `"4.2"`).
pub fn decimal(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    }
}

/// Month-over-month trend line for a fractional change.
pub fn trend(change: f64) -> Trend {
    if change == 0.0 || !change.is_finite() {
        return Trend {
            text: "Stable".to_string(),
            direction: TrendDirection::Stable,
        };
    }

    let (icon, direction) = if change > 0.0 {
        ("▲", TrendDirection::Up)
    } else {
        ("▼", TrendDirection::Down)
    };
    Trend {
        text: format!("{icon} {:.1}% vs previous month", change.abs() * 100.0),
        direction,
    }
}
