use super::fvg_detector::DEFAULT_FVG_LOOKBACK;
use super::order_block_detector::{DEFAULT_IMPULSE_RATIO, DEFAULT_ORDER_BLOCK_LOOKBACK};
use super::swing_detector::DEFAULT_SWING_LOOKBACK;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub swing_lookback: usize,
    pub fvg_lookback: usize,
    pub order_block_lookback: usize,
    pub order_block_impulse_ratio: f64, // Impulse body / OB body threshold
    pub ema_periods: Vec<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            swing_lookback: DEFAULT_SWING_LOOKBACK,
            fvg_lookback: DEFAULT_FVG_LOOKBACK,
            order_block_lookback: DEFAULT_ORDER_BLOCK_LOOKBACK,
            order_block_impulse_ratio: DEFAULT_IMPULSE_RATIO,
            ema_periods: vec![20, 50, 200],
        }
    }
}
