use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingConfig {
    pub capital: f64,
    /// Percent of capital risked per trade, in (0, 100]
    pub risk_per_trade_percent: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            capital: 1000.0,
            risk_per_trade_percent: 2.0,
        }
    }
}

/// Fixed-fractional position size, as raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSize {
    pub quantity: f64,
    pub risk_amount: f64,
    pub risk_percent: f64,
    pub stop_distance: f64,
}

/// Position size formatted for alert messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionSizeResult {
    pub quantity: String,
    pub risk_amount: String,
    pub risk_percent: String,
}

impl PositionSize {
    /// Quantity such that hitting the stop loses `risk_percent` of `capital`.
    ///
    /// A zero (or non-numeric) stop distance yields a zero quantity and zero
    /// risk instead of dividing by zero.
    pub fn calculate(capital: f64, risk_percent: f64, entry_price: f64, stop_price: f64) -> Self {
        let stop_distance = (entry_price - stop_price).abs();

        if stop_distance.is_nan() || stop_distance <= 0.0 {
            info!(
                "SizingEngine: Cannot size position - entry {} / stop {} leave no stop distance",
                entry_price, stop_price
            );
            return Self {
                quantity: 0.0,
                risk_amount: 0.0,
                risk_percent,
                stop_distance: 0.0,
            };
        }

        let risk_amount = capital * risk_percent / 100.0;
        let quantity = risk_amount / stop_distance;

        info!(
            "SizingEngine: Risking ${:.2} ({}% of {}) over stop distance {} -> quantity {}",
            risk_amount, risk_percent, capital, stop_distance, quantity
        );

        Self {
            quantity,
            risk_amount,
            risk_percent,
            stop_distance,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.stop_distance.is_nan() || self.stop_distance <= 0.0
    }

    /// Presentation layer: quantity to 4 dp when >= 1 (6 dp otherwise),
    /// risk amount as `$x.xx`, risk percent as `n%`.
    pub fn to_result(&self) -> PositionSizeResult {
        let risk_percent = format!("{}%", self.risk_percent);

        if self.is_degenerate() {
            return PositionSizeResult {
                quantity: "0".to_string(),
                risk_amount: "0".to_string(),
                risk_percent,
            };
        }

        let quantity_dp = if self.quantity >= 1.0 { 4 } else { 6 };
        PositionSizeResult {
            quantity: format_fixed(self.quantity, quantity_dp),
            risk_amount: format!("${}", format_fixed(self.risk_amount, 2)),
            risk_percent,
        }
    }
}

/// Size and format in one step.
pub fn calc_position_size(
    capital: f64,
    risk_percent: f64,
    entry_price: f64,
    stop_price: f64,
) -> PositionSizeResult {
    PositionSize::calculate(capital, risk_percent, entry_price, stop_price).to_result()
}

/// Fixed-point formatting, rounding half away from zero.
///
/// Rounding applies to the shortest decimal form of the f64 (what
/// `Decimal::from_f64` yields), not to its exact binary value, so 2.88 rounds
/// as 2.88 and not as 2.8799999999999998. A midpoint such as 1.00005 rounds
/// up to 1.0001 as written, whatever its binary expansion.
fn format_fixed(value: f64, dp: u32) -> String {
    let precision = dp as usize;
    match Decimal::from_f64(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", precision, rounded)
        }
        // Out of Decimal's range (or non-finite): fall back to float formatting
        None => format!("{:.*}", precision, value),
    }
}
