//! Market-structure analysis CLI
//!
//! Reads a kline JSON payload (file or stdin), runs the analyzer and prints
//! the report as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//! ```sh
//! cargo run --bin analyze -- klines.json --entry 96500 --stop 95000
//! curl -s "https://api.binance.com/api/v3/klines?symbol=BTCUSDT&interval=1h" | cargo run --bin analyze -- -
//! ```
//!
//! # Environment Variables
//! See `Config::from_env` (SWING_LOOKBACK, EMA_PERIODS, ACCOUNT_CAPITAL, LOG_LEVEL, ...).

use anyhow::{Context, Result};
use clap::Parser;
use market_structure::application::analysis::{MarketStructureAnalyzer, MarketStructureReport};
use market_structure::application::risk_management::sizing_engine::PositionSizeResult;
use market_structure::config::Config;
use market_structure::infrastructure::klines::parse_klines_str;
use market_structure::infrastructure::observability::init_logging;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Kline JSON file, or "-" for stdin
    input: PathBuf,

    /// Entry price for position sizing
    #[arg(long, requires = "stop")]
    entry: Option<f64>,

    /// Stop-loss price for position sizing
    #[arg(long, requires = "entry")]
    stop: Option<f64>,

    /// Account capital (overrides ACCOUNT_CAPITAL)
    #[arg(long)]
    capital: Option<f64>,

    /// Percent of capital risked per trade (overrides RISK_PER_TRADE_PERCENT)
    #[arg(long)]
    risk: Option<f64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output {
    report: MarketStructureReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    position_size: Option<PositionSizeResult>,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read klines from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read klines from {}", path.display()))
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    init_logging(&config.observability);

    if let Some(capital) = cli.capital {
        anyhow::ensure!(capital > 0.0, "--capital must be positive, got {}", capital);
        config.sizing.capital = capital;
    }
    if let Some(risk) = cli.risk {
        anyhow::ensure!(
            risk > 0.0 && risk <= 100.0,
            "--risk must be in (0, 100], got {}",
            risk
        );
        config.sizing.risk_per_trade_percent = risk;
    }

    info!(
        "Market Structure {} - swing lookback {}, EMA periods {:?}",
        env!("CARGO_PKG_VERSION"),
        config.analysis.swing_lookback,
        config.analysis.ema_periods
    );

    let raw = read_input(&cli.input)?;
    let candles = parse_klines_str(&raw).context("Failed to parse klines")?;

    let analyzer = MarketStructureAnalyzer::new(config.analysis.clone());
    let report = analyzer
        .analyze_checked(&candles)
        .context("Candle series rejected")?;

    info!(
        "Analysis complete: {} candles, trend {} ({})",
        report.candle_count, report.trend.direction, report.trend.structure_label
    );

    let position_size = match (cli.entry, cli.stop) {
        (Some(entry), Some(stop)) => Some(
            analyzer
                .size_position(entry, stop, &config.sizing)
                .to_result(),
        ),
        _ => None,
    };

    let output = Output {
        report,
        position_size,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
