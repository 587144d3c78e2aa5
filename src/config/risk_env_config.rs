//! Risk configuration parsing from environment variables.
//!
//! This module handles loading the account parameters used for position sizing.

use super::{Lookup, env_lookup, parse_or};
use crate::application::risk_management::sizing_engine::SizingConfig;
use anyhow::{Result, ensure};

/// Risk environment configuration
#[derive(Debug, Clone)]
pub struct RiskEnvConfig {
    pub capital: f64,
    pub risk_per_trade_percent: f64,
}

impl RiskEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_source(&env_lookup)
    }

    pub fn from_source(lookup: Lookup<'_>) -> Result<Self> {
        let defaults = SizingConfig::default();
        let capital = parse_or(lookup, "ACCOUNT_CAPITAL", defaults.capital)?;
        let risk_per_trade_percent = parse_or(
            lookup,
            "RISK_PER_TRADE_PERCENT",
            defaults.risk_per_trade_percent,
        )?;

        ensure!(
            capital.is_finite() && capital > 0.0,
            "ACCOUNT_CAPITAL must be positive, got {}",
            capital
        );
        ensure!(
            risk_per_trade_percent > 0.0 && risk_per_trade_percent <= 100.0,
            "RISK_PER_TRADE_PERCENT must be in (0, 100], got {}",
            risk_per_trade_percent
        );

        Ok(Self {
            capital,
            risk_per_trade_percent,
        })
    }
}

impl From<RiskEnvConfig> for SizingConfig {
    fn from(env: RiskEnvConfig) -> Self {
        Self {
            capital: env.capital,
            risk_per_trade_percent: env.risk_per_trade_percent,
        }
    }
}
