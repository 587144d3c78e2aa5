//! Market-structure analysis: indicators, swing structure, liquidity zones and
//! the report that aggregates them.

pub mod analysis_config;
pub mod ema;
pub mod fibonacci;
pub mod fvg_detector;
pub mod order_block_detector;
pub mod report;
pub mod swing_detector;
pub mod trend_classifier;

pub use analysis_config::AnalysisConfig;
pub use ema::{EmaSeries, calc_ema};
pub use fibonacci::calc_fibonacci;
pub use fvg_detector::detect_fvgs;
pub use order_block_detector::{detect_order_blocks, detect_order_blocks_with_ratio};
pub use report::{MarketStructureAnalyzer, MarketStructureReport};
pub use swing_detector::detect_swings;
pub use trend_classifier::classify_trend;
