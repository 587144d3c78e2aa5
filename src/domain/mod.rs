// Market structure value types
pub mod market;

// Core trading types
pub mod trading;

// Input validation
pub mod validation;

// Domain-specific error types
pub mod errors;
