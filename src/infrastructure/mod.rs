pub mod klines;
pub mod observability;
