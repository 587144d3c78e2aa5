use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a liquidity zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Bullish,
    Bearish,
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneKind::Bullish => write!(f, "Bullish"),
            ZoneKind::Bearish => write!(f, "Bearish"),
        }
    }
}

/// Fair Value Gap - three-candle imbalance left by a displacement candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueGap {
    pub kind: ZoneKind,
    pub high: f64,
    pub low: f64,
    /// Position of the displacement (middle) candle
    pub index: usize,
    /// A later candle traded through the whole gap
    pub filled: bool,
}

impl FairValueGap {
    pub fn size(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }
}

/// Order Block - the last opposite-direction candle before an impulsive move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderBlock {
    pub kind: ZoneKind,
    pub high: f64,
    pub low: f64,
    /// Position of the opposite-direction candle
    pub index: usize,
    /// Price has not traded back through the zone since formation
    pub fresh: bool,
}

impl OrderBlock {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fvg_size_and_contains() {
        let gap = FairValueGap {
            kind: ZoneKind::Bullish,
            high: 106.0,
            low: 102.0,
            index: 1,
            filled: false,
        };
        assert_eq!(gap.size(), 4.0);
        assert!(gap.contains(104.0));
        assert!(gap.contains(102.0));
        assert!(!gap.contains(106.5));
    }

    #[test]
    fn test_zone_kind_display() {
        assert_eq!(ZoneKind::Bullish.to_string(), "Bullish");
        assert_eq!(ZoneKind::Bearish.to_string(), "Bearish");
    }
}
