use crate::domain::market::structure::{SwingKind, SwingPoint, SwingPoints};
use crate::domain::trading::types::Candle;

pub const DEFAULT_SWING_LOOKBACK: usize = 5;

/// Detect fractal swing highs and lows.
///
/// Candle `i` (for `i` in `[lookback, n - lookback)`) is a swing high when its
/// high is strictly greater than the high of every other candle within
/// `lookback` bars on either side; swing lows mirror this on the low.
/// Series shorter than `2 * lookback + 1` (or `lookback == 0`) yield no swings.
pub fn detect_swings(candles: &[Candle], lookback: usize) -> SwingPoints {
    let mut swings = SwingPoints::default();
    let n = candles.len();
    if lookback == 0 || n < 2 * lookback + 1 {
        return swings;
    }

    for i in lookback..n - lookback {
        let candle = &candles[i];
        let window = (i - lookback)..=(i + lookback);

        let is_high = window
            .clone()
            .filter(|&j| j != i)
            .all(|j| candle.high > candles[j].high);
        let is_low = window
            .filter(|&j| j != i)
            .all(|j| candle.low < candles[j].low);

        if is_high {
            swings.highs.push(SwingPoint {
                index: i,
                price: candle.high,
                time: candle.time,
                kind: SwingKind::High,
            });
        }
        if is_low {
            swings.lows.push(SwingPoint {
                index: i,
                price: candle.low,
                time: candle.time,
                kind: SwingKind::Low,
            });
        }
    }

    swings
}
