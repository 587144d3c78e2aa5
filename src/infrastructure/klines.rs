//! Kline ingestion.
//!
//! Accepts the exchange kline layout `[open_time, open, high, low, close, volume, ...]`
//! where prices may be JSON strings (Binance) or plain numbers, as well as
//! rows already shaped like [`Candle`] objects.

use crate::domain::errors::MarketDataError;
use crate::domain::trading::types::Candle;
use crate::domain::validation::data_quality::StrictCandleValidator;
use serde_json::Value;
use tracing::info;

const PRICE_FIELDS: [&str; 5] = ["open", "high", "low", "close", "volume"];

/// Parse a raw JSON kline payload into a validated, time-ordered candle series.
pub fn parse_klines(payload: &Value) -> Result<Vec<Candle>, MarketDataError> {
    let rows = payload.as_array().ok_or(MarketDataError::NotAnArray)?;

    let candles = rows
        .iter()
        .enumerate()
        .map(|(row, value)| parse_row(row, value))
        .collect::<Result<Vec<_>, _>>()?;

    StrictCandleValidator::validate_series(&candles)?;

    info!("KlineParser: Parsed {} candles", candles.len());
    Ok(candles)
}

/// Parse a JSON document holding a kline payload.
pub fn parse_klines_str(raw: &str) -> Result<Vec<Candle>, MarketDataError> {
    let payload: Value = serde_json::from_str(raw)?;
    parse_klines(&payload)
}

fn parse_row(row: usize, value: &Value) -> Result<Candle, MarketDataError> {
    match value {
        Value::Array(arr) => parse_array_row(row, arr),
        Value::Object(_) => {
            let candle: Candle =
                serde_json::from_value(value.clone()).map_err(|e| MarketDataError::MalformedRow {
                    row,
                    reason: e.to_string(),
                })?;
            candle.check()?;
            Ok(candle)
        }
        other => Err(MarketDataError::MalformedRow {
            row,
            reason: format!("expected array or object, got {}", other),
        }),
    }
}

fn parse_array_row(row: usize, arr: &[Value]) -> Result<Candle, MarketDataError> {
    if arr.len() < 6 {
        return Err(MarketDataError::MalformedRow {
            row,
            reason: format!("expected at least 6 fields, got {}", arr.len()),
        });
    }

    let time = match &arr[0] {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| MarketDataError::InvalidField {
        row,
        field: "time",
        value: arr[0].to_string(),
    })?;

    let mut prices = [0.0; 5];
    for (slot, (field, value)) in prices.iter_mut().zip(PRICE_FIELDS.iter().zip(&arr[1..6])) {
        *slot = number_field(row, *field, value)?;
    }
    let [open, high, low, close, volume] = prices;

    Ok(Candle::new(time, open, high, low, close, volume)?)
}

fn number_field(row: usize, field: &'static str, value: &Value) -> Result<f64, MarketDataError> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| MarketDataError::InvalidField {
        row,
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CandleError;
    use serde_json::json;

    #[test]
    fn test_parse_binance_string_fields() {
        let payload = json!([
            [1700000000000i64, "100.5", "101.0", "99.5", "100.8", "12.3", 1700000059999i64, "1240.1", 42, "6.1", "615.0", "0"],
            [1700000060000i64, "100.8", "102.0", "100.1", "101.9", "8.0", 1700000119999i64, "812.0", 17, "4.0", "406.0", "0"]
        ]);

        let candles = parse_klines(&payload).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].time, 1700000000000);
        assert_eq!(candles[0].open, 100.5);
        assert_eq!(candles[1].close, 101.9);
        assert_eq!(candles[1].volume, 8.0);
    }

    #[test]
    fn test_parse_numeric_fields_and_objects() {
        let payload = json!([
            [1, 10.0, 11.0, 9.0, 10.5, 3],
            {"time": 2, "open": 10.5, "high": 12.0, "low": 10.0, "close": 11.5, "volume": 4.0}
        ]);

        let candles = parse_klines(&payload).unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].volume, 3.0);
        assert_eq!(candles[1].high, 12.0);
    }

    #[test]
    fn test_rejects_non_array_payload() {
        let err = parse_klines(&json!({"code": -1121})).unwrap_err();
        assert!(matches!(err, MarketDataError::NotAnArray));
    }

    #[test]
    fn test_rejects_short_row() {
        let err = parse_klines(&json!([[1, "1", "2"]])).unwrap_err();
        assert!(matches!(err, MarketDataError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn test_rejects_unparseable_price() {
        let err = parse_klines(&json!([[1, "1", "abc", "0.5", "1.5", "1"]])).unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::InvalidField { row: 0, field: "high", .. }
        ));
    }

    #[test]
    fn test_rejects_inconsistent_candle() {
        let err = parse_klines(&json!([[1, "1", "0.9", "0.5", "1.5", "1"]])).unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::InvalidCandle(CandleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_rejects_unordered_rows() {
        let err = parse_klines(&json!([
            [2, "1", "2", "0.5", "1.5", "1"],
            [2, "1", "2", "0.5", "1.5", "1"]
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::InvalidCandle(CandleError::OutOfOrder { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_from_str() {
        let candles = parse_klines_str(r#"[[1, "1", "2", "0.5", "1.5", "1"]]"#).unwrap();
        assert_eq!(candles.len(), 1);
        assert!(parse_klines_str("[]").unwrap().is_empty());
    }

    #[test]
    fn test_syntax_error_is_not_blamed_on_a_row() {
        let err = parse_klines_str("not json").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidJson(_)));
    }
}
