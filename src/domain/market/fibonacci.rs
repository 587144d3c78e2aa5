use serde::{Deserialize, Serialize};

/// Retracement ratios, in table order.
pub const FIB_RATIOS: [f64; 7] = [0.0, 0.236, 0.382, 0.5, 0.618, 0.786, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibLevel {
    /// Level expressed in percent (e.g. 61.8)
    pub percentage: f64,
    pub price: f64,
}

/// Retracement table for one swing leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FibonacciLevels {
    pub swing_low: f64,
    pub swing_high: f64,
    pub is_bullish: bool,
    pub levels: Vec<FibLevel>,
    pub zone50: f64,
    pub zone618: f64,
    pub zone786: f64,
}

impl FibonacciLevels {
    pub fn range(&self) -> f64 {
        self.swing_high - self.swing_low
    }

    /// Level whose price is closest to `price`. Ties go to the earlier entry.
    pub fn nearest_level(&self, price: f64) -> Option<FibLevel> {
        let mut best: Option<FibLevel> = None;
        for level in &self.levels {
            match best {
                Some(b) if (b.price - price).abs() <= (level.price - price).abs() => {}
                _ => best = Some(*level),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FibonacciLevels {
        FibonacciLevels {
            swing_low: 90.0,
            swing_high: 100.0,
            is_bullish: true,
            levels: vec![
                FibLevel {
                    percentage: 0.0,
                    price: 90.0,
                },
                FibLevel {
                    percentage: 50.0,
                    price: 95.0,
                },
                FibLevel {
                    percentage: 100.0,
                    price: 100.0,
                },
            ],
            zone50: 95.0,
            zone618: 93.82,
            zone786: 92.14,
        }
    }

    #[test]
    fn test_nearest_level() {
        let fib = sample();
        assert_eq!(fib.nearest_level(96.0).unwrap().percentage, 50.0);
        assert_eq!(fib.nearest_level(150.0).unwrap().percentage, 100.0);
        assert_eq!(fib.range(), 10.0);
    }

    #[test]
    fn test_nearest_level_tie_prefers_first() {
        let fib = sample();
        // 92.5 is equidistant from 90 and 95
        assert_eq!(fib.nearest_level(92.5).unwrap().percentage, 0.0);
    }

    #[test]
    fn test_nearest_level_empty_table() {
        let mut fib = sample();
        fib.levels.clear();
        assert!(fib.nearest_level(95.0).is_none());
    }
}
