use super::analysis_config::AnalysisConfig;
use super::ema::{EmaSeries, calc_ema};
use super::fibonacci::calc_fibonacci;
use super::fvg_detector::detect_fvgs;
use super::order_block_detector::detect_order_blocks_with_ratio;
use super::swing_detector::detect_swings;
use super::trend_classifier::classify_trend;
use crate::application::risk_management::sizing_engine::{PositionSize, SizingConfig};
use crate::domain::errors::CandleError;
use crate::domain::market::fibonacci::{FibLevel, FibonacciLevels};
use crate::domain::market::structure::{SwingPoints, TrendDirection, TrendResult};
use crate::domain::market::zones::{FairValueGap, OrderBlock};
use crate::domain::trading::types::{Candle, closes};
use crate::domain::validation::data_quality::StrictCandleValidator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of market structure for one candle series.
///
/// Every field degrades to an empty/default value when history is too short
/// for the corresponding detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStructureReport {
    pub candle_count: usize,
    pub last_price: Option<f64>,
    pub last_time: Option<i64>,
    pub emas: Vec<EmaSeries>,
    pub swings: SwingPoints,
    pub trend: TrendResult,
    pub fibonacci: Option<FibonacciLevels>,
    pub nearest_fib_level: Option<FibLevel>,
    pub fvgs: Vec<FairValueGap>,
    pub order_blocks: Vec<OrderBlock>,
}

/// Stateless market-structure analyzer.
///
/// Holds only configuration; each call is independent and pure.
#[derive(Debug, Clone, Default)]
pub struct MarketStructureAnalyzer {
    config: AnalysisConfig,
}

impl MarketStructureAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a candle series (ascending by time).
    ///
    /// The series is trusted as-is; use [`Self::analyze_checked`] for input
    /// coming from an unvalidated source.
    pub fn analyze(&self, candles: &[Candle]) -> MarketStructureReport {
        let last = candles.last();
        let last_price = last.map(|c| c.close);

        let close_prices = closes(candles);
        let emas = self
            .config
            .ema_periods
            .iter()
            .map(|&period| EmaSeries {
                period,
                values: calc_ema(&close_prices, period),
            })
            .collect();

        let swings = detect_swings(candles, self.config.swing_lookback);
        let trend = classify_trend(&swings.highs, &swings.lows);
        let fibonacci = fibonacci_for(&swings, trend.direction);
        let nearest_fib_level = match (&fibonacci, last_price) {
            (Some(fib), Some(price)) => fib.nearest_level(price),
            _ => None,
        };

        let fvgs = detect_fvgs(candles, self.config.fvg_lookback);
        let order_blocks = match last_price {
            Some(price) => detect_order_blocks_with_ratio(
                candles,
                self.config.order_block_lookback,
                price,
                self.config.order_block_impulse_ratio,
            ),
            None => Vec::new(),
        };

        debug!(
            "MarketStructureAnalyzer: {} candles -> trend={} swings={}H/{}L fvgs={} order_blocks={} fib={}",
            candles.len(),
            trend.direction,
            swings.highs.len(),
            swings.lows.len(),
            fvgs.len(),
            order_blocks.len(),
            fibonacci.is_some()
        );

        MarketStructureReport {
            candle_count: candles.len(),
            last_price,
            last_time: last.map(|c| c.time),
            emas,
            swings,
            trend,
            fibonacci,
            nearest_fib_level,
            fvgs,
            order_blocks,
        }
    }

    /// Validate the series, then analyze it.
    pub fn analyze_checked(
        &self,
        candles: &[Candle],
    ) -> Result<MarketStructureReport, CandleError> {
        StrictCandleValidator::validate_series(candles)?;
        Ok(self.analyze(candles))
    }

    /// Size a position for a caller-chosen entry and stop.
    pub fn size_position(
        &self,
        entry_price: f64,
        stop_price: f64,
        sizing: &SizingConfig,
    ) -> PositionSize {
        PositionSize::calculate(
            sizing.capital,
            sizing.risk_per_trade_percent,
            entry_price,
            stop_price,
        )
    }
}

/// Retracement table for the most recent swing pair.
///
/// Bias follows the trend; in a range it follows the latest leg (low before
/// high is an up-leg).
fn fibonacci_for(swings: &SwingPoints, direction: TrendDirection) -> Option<FibonacciLevels> {
    let high = swings.last_high()?;
    let low = swings.last_low()?;

    let is_bullish = match direction {
        TrendDirection::Bullish => true,
        TrendDirection::Bearish => false,
        TrendDirection::Range => low.index < high.index,
    };

    Some(calc_fibonacci(low.price, high.price, is_bullish))
}
