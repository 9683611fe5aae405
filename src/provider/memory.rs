//! Provider backed by preloaded data.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::provider::QuoteProvider;
use crate::types::{FinancialSnapshot, PriceSeries, StatementFrequency};

/// Serves series and snapshots that were loaded up front.
///
/// Used for fixtures and by front ends that fetch data themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    prices: HashMap<String, PriceSeries>,
    snapshots: HashMap<(String, StatementFrequency), Vec<FinancialSnapshot>>,
    betas: HashMap<String, f64>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_prices(&mut self, ticker: &str, series: PriceSeries) {
        self.prices.insert(ticker.to_string(), series);
    }

    pub fn insert_snapshots(
        &mut self,
        ticker: &str,
        frequency: StatementFrequency,
        snapshots: Vec<FinancialSnapshot>,
    ) {
        self.snapshots.insert((ticker.to_string(), frequency), snapshots);
    }

    pub fn insert_beta(&mut self, ticker: &str, beta: f64) {
        self.betas.insert(ticker.to_string(), beta);
    }
}

impl QuoteProvider for InMemoryProvider {
    fn price_history(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries> {
        if start > end {
            return Err(Error::InvalidParameter(format!(
                "start {start} is after end {end}"
            )));
        }
        let series = self
            .prices
            .get(ticker)
            .ok_or_else(|| Error::Provider(format!("no price history for {ticker}")))?;
        Ok(series.between(start, end))
    }

    fn financial_snapshots(
        &self,
        ticker: &str,
        frequency: StatementFrequency,
    ) -> Result<Vec<FinancialSnapshot>> {
        self.snapshots
            .get(&(ticker.to_string(), frequency))
            .cloned()
            .ok_or_else(|| Error::Provider(format!("no {frequency:?} statements for {ticker}")))
    }

    fn beta(&self, ticker: &str) -> Result<Option<f64>> {
        Ok(self.betas.get(ticker).copied())
    }
}
