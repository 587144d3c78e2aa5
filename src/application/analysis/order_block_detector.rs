use super::fvg_detector::most_recent;
use crate::domain::market::zones::{OrderBlock, ZoneKind};
use crate::domain::trading::types::Candle;

pub const DEFAULT_ORDER_BLOCK_LOOKBACK: usize = 50;

/// The impulsive candle's body must exceed this multiple of the order-block body.
pub const DEFAULT_IMPULSE_RATIO: f64 = 1.5;

/// Detect fresh order blocks in the last `max_lookback` candles.
///
/// Uses `DEFAULT_IMPULSE_RATIO`; see [`detect_order_blocks_with_ratio`].
pub fn detect_order_blocks(
    candles: &[Candle],
    max_lookback: usize,
    current_price: f64,
) -> Vec<OrderBlock> {
    detect_order_blocks_with_ratio(candles, max_lookback, current_price, DEFAULT_IMPULSE_RATIO)
}

/// Detect fresh order blocks.
///
/// A bullish OB is a bearish candle immediately followed by a bullish candle
/// whose body is more than `impulse_ratio` times larger; bearish OBs mirror
/// this. The zone spans the OB candle's high/low.
///
/// Freshness is judged against `current_price`: a bullish OB stays fresh
/// while price is above its low, a bearish OB while price is below its high.
/// Stale blocks are dropped; the most recent `MAX_REPORTED_ZONES` fresh blocks
/// are returned, oldest first.
pub fn detect_order_blocks_with_ratio(
    candles: &[Candle],
    max_lookback: usize,
    current_price: f64,
    impulse_ratio: f64,
) -> Vec<OrderBlock> {
    let n = candles.len();
    let start = n.saturating_sub(max_lookback);
    let mut blocks = Vec::new();

    for i in start..n.saturating_sub(1) {
        let prev = &candles[i];
        let next = &candles[i + 1]; // Impulsive candle

        let impulsive = next.body() > impulse_ratio * prev.body();
        if !impulsive {
            continue;
        }

        let kind = if prev.is_bearish() && next.is_bullish() {
            ZoneKind::Bullish
        } else if prev.is_bullish() && next.is_bearish() {
            ZoneKind::Bearish
        } else {
            continue;
        };

        let fresh = match kind {
            ZoneKind::Bullish => current_price > prev.low,
            ZoneKind::Bearish => current_price < prev.high,
        };

        if fresh {
            blocks.push(OrderBlock {
                kind,
                high: prev.high,
                low: prev.low,
                index: i,
                fresh,
            });
        }
    }

    most_recent(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::analysis::fvg_detector::MAX_REPORTED_ZONES;

    fn mock_candle(open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle {
            time: 0,
            open,
            high,
            low,
            close,
            volume: 1000.0,
        }
    }

    fn padding(count: usize) -> Vec<Candle> {
        // Dojis never qualify on either side of a pair
        vec![mock_candle(100.0, 101.0, 99.0, 100.0); count]
    }

    #[test]
    fn test_bullish_ob_detection() {
        let mut candles = padding(5);
        // Bearish candle (OB), body 1.5
        candles.push(mock_candle(102.0, 102.5, 100.0, 100.5));
        // Impulsive bullish candle, body 3.0 > 1.5 * 1.5
        candles.push(mock_candle(101.0, 105.0, 101.0, 104.0));

        let blocks = detect_order_blocks(&candles, DEFAULT_ORDER_BLOCK_LOOKBACK, 104.0);
        assert_eq!(blocks.len(), 1);
        let ob = blocks[0];
        assert_eq!(ob.kind, ZoneKind::Bullish);
        assert_eq!(ob.high, 102.5);
        assert_eq!(ob.low, 100.0);
        assert_eq!(ob.index, 5);
        assert!(ob.fresh);
    }

    #[test]
    fn test_bearish_ob_detection() {
        let mut candles = padding(3);
        candles.push(mock_candle(100.0, 101.5, 99.5, 101.0)); // bullish, body 1
        candles.push(mock_candle(101.0, 101.0, 97.0, 98.0)); // bearish, body 3

        let blocks = detect_order_blocks(&candles, DEFAULT_ORDER_BLOCK_LOOKBACK, 98.0);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, ZoneKind::Bearish);
        assert_eq!(blocks[0].high, 101.5);
        assert_eq!(blocks[0].low, 99.5);
        assert_eq!(blocks[0].index, 3);
    }

    #[test]
    fn test_weak_follow_through_is_ignored() {
        let mut candles = padding(3);
        candles.push(mock_candle(102.0, 102.5, 100.0, 100.0)); // body 2
        candles.push(mock_candle(100.0, 103.5, 100.0, 103.0)); // body 3 == 1.5 * 2, not greater
        assert!(detect_order_blocks(&candles, DEFAULT_ORDER_BLOCK_LOOKBACK, 103.0).is_empty());
    }

    #[test]
    fn test_stale_bullish_ob_is_excluded() {
        let mut candles = padding(3);
        candles.push(mock_candle(102.0, 102.5, 100.0, 100.5));
        candles.push(mock_candle(101.0, 105.0, 101.0, 104.0));

        // Price traded back below the OB low
        assert!(detect_order_blocks(&candles, DEFAULT_ORDER_BLOCK_LOOKBACK, 99.0).is_empty());
        // Touching the low exactly is not above it
        assert!(detect_order_blocks(&candles, DEFAULT_ORDER_BLOCK_LOOKBACK, 100.0).is_empty());
    }

    #[test]
    fn test_stale_bearish_ob_is_excluded() {
        let mut candles = padding(3);
        candles.push(mock_candle(100.0, 101.5, 99.5, 101.0));
        candles.push(mock_candle(101.0, 101.0, 97.0, 98.0));
        assert!(detect_order_blocks(&candles, DEFAULT_ORDER_BLOCK_LOOKBACK, 101.5).is_empty());
    }

    #[test]
    fn test_custom_impulse_ratio() {
        let mut candles = padding(3);
        candles.push(mock_candle(102.0, 102.5, 100.0, 100.5)); // body 1.5
        candles.push(mock_candle(101.0, 105.0, 101.0, 104.0)); // body 3
        assert_eq!(
            detect_order_blocks_with_ratio(&candles, 50, 104.0, 1.9).len(),
            1
        );
        assert!(detect_order_blocks_with_ratio(&candles, 50, 104.0, 2.0).is_empty());
    }

    #[test]
    fn test_lookback_window() {
        let mut candles = Vec::new();
        candles.push(mock_candle(102.0, 102.5, 100.0, 100.5));
        candles.push(mock_candle(101.0, 105.0, 101.0, 104.0));
        candles.extend(padding(10));

        assert_eq!(detect_order_blocks(&candles, 12, 104.0).len(), 1);
        assert!(detect_order_blocks(&candles, 11, 104.0).is_empty());
    }

    #[test]
    fn test_keeps_most_recent_five() {
        let mut candles = Vec::new();
        for _ in 0..8 {
            candles.push(mock_candle(102.0, 102.5, 100.0, 100.5));
            candles.push(mock_candle(101.0, 105.0, 101.0, 104.0));
            candles.push(mock_candle(104.0, 105.0, 103.0, 104.0));
        }
        let blocks = detect_order_blocks(&candles, 100, 104.0);
        assert_eq!(blocks.len(), MAX_REPORTED_ZONES);
        let indices: Vec<usize> = blocks.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![9, 12, 15, 18, 21]);
    }

    #[test]
    fn test_short_series() {
        assert!(detect_order_blocks(&[], 50, 100.0).is_empty());
        assert!(detect_order_blocks(&padding(1), 50, 100.0).is_empty());
    }
}
