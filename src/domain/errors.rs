use thiserror::Error;

/// Errors raised when a candle (or a candle series) is structurally invalid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CandleError {
    #[error("Non-finite {field} in candle at time {time}")]
    NonFinite { time: i64, field: &'static str },

    #[error("Invalid range at time {time}: high {high} / low {low} do not bound open {open} and close {close}")]
    InvalidRange {
        time: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
    },

    #[error("Negative volume {volume} at time {time}")]
    NegativeVolume { time: i64, volume: f64 },

    #[error("Candle series out of order at index {index}: time {time} <= previous {previous}")]
    OutOfOrder { index: usize, time: i64, previous: i64 },
}

/// Errors related to ingesting raw exchange kline payloads
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Kline payload is not an array")]
    NotAnArray,

    #[error("Malformed kline at row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Invalid field '{field}' at row {row}: {value}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid candle: {0}")]
    InvalidCandle(#[from] CandleError),

    #[error("Invalid kline JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
