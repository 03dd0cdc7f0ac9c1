//! Salaries are stored as integer cents and reported in currency units.

/// Converts stored cents to currency units.
pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Converts an averaged cent value to currency units, rounded to the cent.
/// An empty group (`None`) reports zero.
pub fn average_to_amount(average_cents: Option<f64>) -> f64 {
    average_cents
        .filter(|v| v.is_finite())
        .map(|v| v.round() / 100.0)
        .unwrap_or(0.0)
}

/// Rounds a non-monetary average (e.g. a rating) to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Applies a percentage raise, rounding to the nearest cent.
pub fn apply_percentage(cents: i64, percentage: f64) -> i64 {
    (cents as f64 * (100.0 + percentage) / 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_percent_of_4000() {
        assert_eq!(apply_percentage(400_000, 10.0), 440_000);
    }

    #[test]
    fn fractional_raise_rounds_to_cent() {
        // 1234.56 * 1.035 = 1277.7696
        assert_eq!(apply_percentage(123_456, 3.5), 127_777);
    }

    #[test]
    fn averages_round_to_cent() {
        let avg = (500_000.0 + 600_000.0 + 950_000.0) / 3.0;
        assert_eq!(average_to_amount(Some(avg)), 6833.33);
        assert_eq!(average_to_amount(None), 0.0);
    }

    #[test]
    fn ratings_round_to_two_decimals() {
        assert_eq!(round2(11.0 / 3.0), 3.67);
    }
}
