//! Ship rating calculation.

use chrono::{DateTime, Datelike, Utc};

/// The fixed "current" year ratings are computed against.
pub const CURRENT_YEAR: i32 = 3019;

/// Domain service computing the derived ship rating.
pub struct RatingService;

impl RatingService {
    /// `80 * speed * k / (CURRENT_YEAR - prod_year + 1)` rounded to two
    /// decimals, where `k` is 0.5 for used ships and 1.0 otherwise.
    pub fn calculate(speed: f64, is_used: bool, prod_date: DateTime<Utc>) -> f64 {
        let wear = if is_used { 0.5 } else { 1.0 };
        let age = f64::from(CURRENT_YEAR - prod_date.year() + 1);
        round_hundredths(80.0 * speed * wear / age)
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
