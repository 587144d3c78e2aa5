// Position sizing
pub mod sizing_engine;
