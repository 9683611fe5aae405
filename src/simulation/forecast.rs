//! End-to-end forecast: fetch history, estimate volatility, simulate.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::provider::QuoteProvider;
use crate::simulation::runner::simulate_parallel;
use crate::stats::estimate_volatility;
use crate::types::{SimulationConfig, SimulationResult, Volatility};

/// Simulation output together with the history it was calibrated on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub ticker: String,
    /// Bars used to estimate volatility
    pub series_len: usize,
    pub volatility: Volatility,
    pub result: SimulationResult,
}

/// Fetch `ticker` between `start` and `end`, then run the configured simulation
/// from the last close.
pub fn forecast<P>(
    provider: &P,
    ticker: &str,
    start: NaiveDate,
    end: NaiveDate,
    config: &SimulationConfig,
) -> Result<Forecast>
where
    P: QuoteProvider + ?Sized,
{
    let series = provider.price_history(ticker, start, end)?;
    log::info!("[{ticker}] {} bars from {start} to {end}", series.len());

    let volatility = estimate_volatility(&series)?;
    let last_price = series.last_close().ok_or(Error::InsufficientData {
        needed: 2,
        got: 0,
    })?;

    let result = simulate_parallel(last_price, volatility, config)?;
    log::info!(
        "[{ticker}] simulated {} paths over {} days (volatility {volatility})",
        result.len(),
        result.horizon_days
    );

    Ok(Forecast {
        ticker: ticker.to_string(),
        series_len: series.len(),
        volatility,
        result,
    })
}
