use crate::domain::market::fibonacci::{FIB_RATIOS, FibLevel, FibonacciLevels};

/// Build the retracement table for a swing leg.
///
/// Bullish bias measures retracements down from `swing_high` (0% anchored at
/// the low, 100% at the high); bearish bias mirrors this up from `swing_low`.
/// An inverted leg (`swing_high < swing_low`) is not rejected: the range goes
/// negative and the levels mirror with it.
pub fn calc_fibonacci(swing_low: f64, swing_high: f64, is_bullish: bool) -> FibonacciLevels {
    let range = swing_high - swing_low;

    let price_at = |ratio: f64| -> f64 {
        match (is_bullish, ratio) {
            (true, r) if r == 0.0 => swing_low,
            (true, r) if r == 1.0 => swing_high,
            (true, r) => swing_high - range * r,
            (false, r) if r == 0.0 => swing_high,
            (false, r) if r == 1.0 => swing_low,
            (false, r) => swing_low + range * r,
        }
    };

    let levels: Vec<FibLevel> = FIB_RATIOS
        .iter()
        .map(|&ratio| FibLevel {
            percentage: ratio_to_percentage(ratio),
            price: price_at(ratio),
        })
        .collect();

    FibonacciLevels {
        swing_low,
        swing_high,
        is_bullish,
        zone50: price_at(0.5),
        zone618: price_at(0.618),
        zone786: price_at(0.786),
        levels,
    }
}

// 0.236 * 100.0 is 23.599999999999998 in binary; round to one decimal so the
// table reads 23.6.
fn ratio_to_percentage(ratio: f64) -> f64 {
    (ratio * 1000.0).round() / 10.0
}
