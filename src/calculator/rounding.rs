//! Cent rounding and tolerance comparison for monetary amounts

/// Round to 2 decimal places, exact halves to the even cent
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round_ties_even() / 100.0
}

/// `|a - b| < tolerance`
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
