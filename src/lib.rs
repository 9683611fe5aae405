//! Financial dashboard compute core.
//!
//! Derives daily returns, volatility and financial ratios from data fetched by
//! a [`QuoteProvider`](provider::QuoteProvider), and runs a Monte Carlo
//! price-path simulation seeded from the last close. Rendering and transport
//! stay outside the crate; the optional `python` feature exposes the core to a
//! Python front end.

pub mod error;
pub mod provider;
pub mod simulation;
pub mod stats;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use error::{Error, Result};
pub use provider::{InMemoryProvider, QuoteProvider, SyntheticProvider};
pub use simulation::{
    forecast, simulate, simulate_parallel, Forecast, MonteCarloSimulator, RandomSource,
    SeededSource, SimulationContext,
};
pub use stats::{daily_returns, ratios, volatility, Ratio, RatioValue};
pub use types::{
    FinancialSnapshot, PriceBar, PriceSeries, ReturnSeries, SimulationConfig, SimulationPath,
    SimulationResult, Volatility,
};
