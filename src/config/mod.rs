//! Configuration module for the market-structure engine.
//!
//! Configuration is loaded from environment variables, organized by concern:
//! Analysis (detector windows, EMA periods), Risk (position sizing) and
//! Observability (logging).

mod analysis_config;
mod observability_config;
mod risk_env_config;

pub use analysis_config::AnalysisEnvConfig;
pub use observability_config::{LogFormat, ObservabilityEnvConfig};
pub use risk_env_config::RiskEnvConfig;

use crate::application::analysis::AnalysisConfig;
use crate::application::risk_management::sizing_engine::SizingConfig;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Key/value source for configuration lookups.
///
/// `from_env` passes the process environment; tests pass a map.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub(crate) fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

pub(crate) fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .unwrap_or_else(|| default.to_string())
        .trim()
        .parse::<T>()
        .context(format!("Failed to parse {}", key))
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub sizing: SizingConfig,
    pub observability: ObservabilityEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&env_lookup)
    }

    pub fn from_source(lookup: Lookup<'_>) -> Result<Self> {
        let analysis = AnalysisEnvConfig::from_source(lookup)
            .context("Failed to load analysis config")?;
        let risk = RiskEnvConfig::from_source(lookup).context("Failed to load risk config")?;
        let observability = ObservabilityEnvConfig::from_source(lookup)
            .context("Failed to load observability config")?;

        Ok(Self {
            analysis: analysis.into(),
            sizing: risk.into(),
            observability,
        })
    }
}
