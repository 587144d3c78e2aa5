// Market structure analysis
pub mod analysis;

// Risk management and position sizing
pub mod risk_management;
