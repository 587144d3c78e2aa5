use crate::domain::errors::CandleError;
use crate::domain::trading::types::Candle;
use tracing::warn;

/// Centralized validator for candle input.
///
/// The analyzer trusts its input; callers holding data from an unvalidated
/// source run the series through here first.
pub struct StrictCandleValidator;

impl StrictCandleValidator {
    /// Validates a single Candle.
    pub fn validate_candle(candle: &Candle) -> Result<(), CandleError> {
        candle.check().inspect_err(|e| {
            warn!("Validation FAILED: {}", e);
        })
    }

    /// Validates every candle and that times strictly ascend.
    pub fn validate_series(candles: &[Candle]) -> Result<(), CandleError> {
        for (index, candle) in candles.iter().enumerate() {
            Self::validate_candle(candle)?;

            if index > 0 {
                let previous = candles[index - 1].time;
                if candle.time <= previous {
                    let err = CandleError::OutOfOrder {
                        index,
                        time: candle.time,
                        previous,
                    };
                    warn!("Validation FAILED: {}", err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}
