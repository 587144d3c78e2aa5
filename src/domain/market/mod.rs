// Fibonacci retracement tables
pub mod fibonacci;

// Swing points and trend structure
pub mod structure;

// Fair value gaps and order blocks
pub mod zones;
