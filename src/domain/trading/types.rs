use crate::domain::errors::CandleError;
use serde::{Deserialize, Serialize};

/// A single OHLCV bar.
///
/// Fields are public so trusted callers can build candles with a struct literal;
/// `Candle::new` is the checked constructor and enforces that `high`/`low`
/// bound the body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Result<Self, CandleError> {
        let candle = Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        };
        candle.check()?;
        Ok(candle)
    }

    /// Checks the OHLC invariant without constructing a new value.
    pub fn check(&self) -> Result<(), CandleError> {
        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
        ] {
            if !value.is_finite() {
                return Err(CandleError::NonFinite {
                    time: self.time,
                    field,
                });
            }
        }

        let body_top = self.open.max(self.close);
        let body_bottom = self.open.min(self.close);
        if self.high < body_top || self.low > body_bottom || self.low > self.high {
            return Err(CandleError::InvalidRange {
                time: self.time,
                open: self.open,
                high: self.high,
                low: self.low,
                close: self.close,
            });
        }

        if self.volume < 0.0 {
            return Err(CandleError::NegativeVolume {
                time: self.time,
                volume: self.volume,
            });
        }

        Ok(())
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Absolute body size (|close - open|)
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }
}

/// Extracts closing prices in series order.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
