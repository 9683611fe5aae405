//! Core data types shared by statistics, simulation and providers.

pub mod config;
pub mod lookback;
pub mod price;
pub mod result;
pub mod snapshot;

pub use config::{SimulationConfig, DEFAULT_SEED, HORIZON_CHOICES};
pub use lookback::{Lookback, TimeInterval};
pub use price::{PriceBar, PriceSeries, ReturnSeries, Volatility};
pub use result::{SimulationPath, SimulationResult};
pub use snapshot::{FinancialSnapshot, Statement, StatementFrequency};
