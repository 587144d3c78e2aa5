use crate::domain::market::structure::{StructureCounts, SwingPoint, TrendDirection, TrendResult};

/// Number of most recent swings per side considered for structure.
pub const TREND_SWING_WINDOW: usize = 4;

fn recent(points: &[SwingPoint]) -> &[SwingPoint] {
    &points[points.len().saturating_sub(TREND_SWING_WINDOW)..]
}

/// Tally HH/LH and HL/LL over consecutive pairs of the recent swings.
pub fn count_structure(highs: &[SwingPoint], lows: &[SwingPoint]) -> StructureCounts {
    let mut counts = StructureCounts::default();

    for pair in recent(highs).windows(2) {
        if pair[1].price > pair[0].price {
            counts.hh += 1;
        } else {
            counts.lh += 1;
        }
    }
    for pair in recent(lows).windows(2) {
        if pair[1].price > pair[0].price {
            counts.hl += 1;
        } else {
            counts.ll += 1;
        }
    }

    counts
}

/// Classify market structure from the counts.
///
/// Rules are checked in order and the first match wins, so a full tie that
/// satisfies both the bullish and bearish rule resolves to Bullish.
pub fn direction_from_counts(counts: &StructureCounts) -> TrendDirection {
    let StructureCounts { hh, lh, hl, ll } = *counts;

    if hh >= lh && hl >= ll && hh + hl > 1 {
        TrendDirection::Bullish
    } else if lh >= hh && ll >= hl && lh + ll > 1 {
        TrendDirection::Bearish
    } else {
        TrendDirection::Range
    }
}

/// Label the trend from chronological swing highs and lows.
pub fn classify_trend(highs: &[SwingPoint], lows: &[SwingPoint]) -> TrendResult {
    let counts = count_structure(highs, lows);
    let direction = direction_from_counts(&counts);

    TrendResult {
        direction,
        structure_label: direction.structure_label().to_string(),
        counts,
        recent_highs: recent(highs).to_vec(),
        recent_lows: recent(lows).to_vec(),
    }
}
