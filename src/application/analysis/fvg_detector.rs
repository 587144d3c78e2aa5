use crate::domain::market::zones::{FairValueGap, ZoneKind};
use crate::domain::trading::types::Candle;

pub const DEFAULT_FVG_LOOKBACK: usize = 30;

/// Most recent zones kept by the FVG and order-block detectors.
pub const MAX_REPORTED_ZONES: usize = 5;

/// Detect Fair Value Gaps in the last `max_lookback` candles.
///
/// For each triplet (c1, c2, c3):
/// - Bullish: `c1.high < c3.low` and c2 closes above its open. Gap = [c1.high, c3.low].
/// - Bearish: `c1.low > c3.high` and c2 closes below its open. Gap = [c3.high, c1.low].
///
/// `index` is the absolute position of c2. Only the most recent
/// `MAX_REPORTED_ZONES` matches are returned, oldest first.
pub fn detect_fvgs(candles: &[Candle], max_lookback: usize) -> Vec<FairValueGap> {
    let n = candles.len();
    let start = n.saturating_sub(max_lookback);
    let mut gaps = Vec::new();

    for i in (start + 2)..n {
        let c1 = &candles[i - 2];
        let c2 = &candles[i - 1];
        let c3 = &candles[i];

        if c1.high < c3.low && c2.is_bullish() {
            let (low, high) = (c1.high, c3.low);
            gaps.push(FairValueGap {
                kind: ZoneKind::Bullish,
                high,
                low,
                index: i - 1,
                // Price came back down through the bottom of the gap
                filled: candles[i + 1..].iter().any(|c| c.low <= low),
            });
        } else if c1.low > c3.high && c2.is_bearish() {
            let (low, high) = (c3.high, c1.low);
            gaps.push(FairValueGap {
                kind: ZoneKind::Bearish,
                high,
                low,
                index: i - 1,
                filled: candles[i + 1..].iter().any(|c| c.high >= high),
            });
        }
    }

    most_recent(gaps)
}

pub(crate) fn most_recent<T>(mut zones: Vec<T>) -> Vec<T> {
    let excess = zones.len().saturating_sub(MAX_REPORTED_ZONES);
    zones.drain(..excess);
    zones
}
