//! Quote provider seam.
//!
//! Transport (HTTP, cookie/crumb auth, caching) lives behind this trait so the
//! statistics and simulation code only ever see already-fetched data.

pub mod memory;
pub mod synthetic;

use chrono::NaiveDate;

use crate::error::Result;
use crate::types::{FinancialSnapshot, PriceSeries, StatementFrequency};

pub use memory::InMemoryProvider;
pub use synthetic::{GbmPriceProcess, SyntheticProvider};

/// Source of price history and fundamentals for a ticker.
pub trait QuoteProvider {
    /// Daily bars with `start <= date <= end`.
    fn price_history(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries>;

    /// Statement snapshots, most recent period first.
    fn financial_snapshots(
        &self,
        ticker: &str,
        frequency: StatementFrequency,
    ) -> Result<Vec<FinancialSnapshot>>;

    /// Market beta, if the provider publishes one.
    fn beta(&self, ticker: &str) -> Result<Option<f64>>;
}
