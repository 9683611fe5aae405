//! Statistics derived from price history and financial statements.

pub mod beta;
pub mod moving_average;
pub mod ratios;
pub mod returns;

pub use beta::RiskProfile;
pub use moving_average::{simple_moving_average, DEFAULT_SMA_WINDOW};
pub use ratios::{ratios, ratios_by_period, Ratio, RatioValue};
pub use returns::{daily_returns, estimate_volatility, returns_from_closes, volatility};
