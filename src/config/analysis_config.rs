//! Analysis configuration parsing from environment variables.
//!
//! This module handles loading detector windows and indicator periods.

use super::{Lookup, env_lookup, parse_or};
use crate::application::analysis::AnalysisConfig;
use crate::application::analysis::fvg_detector::DEFAULT_FVG_LOOKBACK;
use crate::application::analysis::order_block_detector::{
    DEFAULT_IMPULSE_RATIO, DEFAULT_ORDER_BLOCK_LOOKBACK,
};
use crate::application::analysis::swing_detector::DEFAULT_SWING_LOOKBACK;
use anyhow::{Context, Result, ensure};

/// Analysis environment configuration
#[derive(Debug, Clone)]
pub struct AnalysisEnvConfig {
    // Swing structure
    pub swing_lookback: usize,

    // Liquidity zones
    pub fvg_lookback: usize,
    pub order_block_lookback: usize,
    pub order_block_impulse_ratio: f64,

    // EMA
    pub ema_periods: Vec<usize>,
}

impl AnalysisEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_source(&env_lookup)
    }

    pub fn from_source(lookup: Lookup<'_>) -> Result<Self> {
        let ema_periods_str = lookup("EMA_PERIODS").unwrap_or_else(|| "20,50,200".to_string());
        let ema_periods: Vec<usize> = ema_periods_str
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().parse())
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to parse EMA_PERIODS")?;
        ensure!(
            ema_periods.iter().all(|&p| p > 0),
            "EMA_PERIODS must all be positive, got {:?}",
            ema_periods
        );

        let config = Self {
            swing_lookback: parse_or(lookup, "SWING_LOOKBACK", DEFAULT_SWING_LOOKBACK)?,
            fvg_lookback: parse_or(lookup, "FVG_LOOKBACK", DEFAULT_FVG_LOOKBACK)?,
            order_block_lookback: parse_or(
                lookup,
                "ORDER_BLOCK_LOOKBACK",
                DEFAULT_ORDER_BLOCK_LOOKBACK,
            )?,
            order_block_impulse_ratio: parse_or(
                lookup,
                "ORDER_BLOCK_IMPULSE_RATIO",
                DEFAULT_IMPULSE_RATIO,
            )?,
            ema_periods,
        };

        ensure!(
            config.swing_lookback > 0,
            "SWING_LOOKBACK must be at least 1"
        );
        ensure!(
            config.order_block_impulse_ratio.is_finite() && config.order_block_impulse_ratio > 0.0,
            "ORDER_BLOCK_IMPULSE_RATIO must be positive, got {}",
            config.order_block_impulse_ratio
        );

        Ok(config)
    }
}

impl From<AnalysisEnvConfig> for AnalysisConfig {
    fn from(env: AnalysisEnvConfig) -> Self {
        Self {
            swing_lookback: env.swing_lookback,
            fvg_lookback: env.fvg_lookback,
            order_block_lookback: env.order_block_lookback,
            order_block_impulse_ratio: env.order_block_impulse_ratio,
            ema_periods: env.ema_periods,
        }
    }
}
