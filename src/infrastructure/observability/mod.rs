//! Logging setup for the binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the executable.

pub mod logging;

pub use logging::{build_filter, init_logging};
