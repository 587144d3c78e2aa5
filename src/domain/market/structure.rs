use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingKind {
    High,
    Low,
}

/// A fractal extremum: a candle whose high (or low) strictly dominates its
/// symmetric neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    /// Position in the analysed series
    pub index: usize,
    pub price: f64,
    pub time: i64,
    pub kind: SwingKind,
}

/// Swing highs and lows, each in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwingPoints {
    pub highs: Vec<SwingPoint>,
    pub lows: Vec<SwingPoint>,
}

impl SwingPoints {
    pub fn last_high(&self) -> Option<&SwingPoint> {
        self.highs.last()
    }

    pub fn last_low(&self) -> Option<&SwingPoint> {
        self.lows.last()
    }

    pub fn is_empty(&self) -> bool {
        self.highs.is_empty() && self.lows.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Bullish,
    Bearish,
    Range,
}

impl TrendDirection {
    /// Short market-structure label used by alert formatters.
    pub fn structure_label(&self) -> &'static str {
        match self {
            TrendDirection::Bullish => "HH/HL",
            TrendDirection::Bearish => "LH/LL",
            TrendDirection::Range => "Range",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Bullish => write!(f, "Bullish"),
            TrendDirection::Bearish => write!(f, "Bearish"),
            TrendDirection::Range => write!(f, "Range"),
        }
    }
}

/// Higher-high / lower-high and higher-low / lower-low tallies over the
/// recent swing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCounts {
    pub hh: usize,
    pub lh: usize,
    pub hl: usize,
    pub ll: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    pub structure_label: String,
    pub counts: StructureCounts,
    pub recent_highs: Vec<SwingPoint>,
    pub recent_lows: Vec<SwingPoint>,
}

impl Default for TrendResult {
    fn default() -> Self {
        Self {
            direction: TrendDirection::Range,
            structure_label: TrendDirection::Range.structure_label().to_string(),
            counts: StructureCounts::default(),
            recent_highs: Vec::new(),
            recent_lows: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trend_is_range() {
        let trend = TrendResult::default();
        assert_eq!(trend.direction, TrendDirection::Range);
        assert_eq!(trend.structure_label, "Range");
        assert!(trend.recent_highs.is_empty());
    }

    #[test]
    fn test_swing_kind_serializes_as_variant_name() {
        let point = SwingPoint {
            index: 3,
            price: 101.5,
            time: 42,
            kind: SwingKind::High,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"index":3,"price":101.5,"time":42,"kind":"High"}"#);
    }
}
