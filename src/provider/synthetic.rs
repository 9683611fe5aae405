//! Synthetic quote provider driven by Geometric Brownian Motion.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal, StandardNormal};
use rand_pcg::Pcg64;

use crate::error::{Error, Result};
use crate::provider::QuoteProvider;
use crate::types::{FinancialSnapshot, PriceBar, PriceSeries, StatementFrequency};

/// Log-normal close-to-close walk that feeds [`SyntheticProvider`] bars.
///
/// Each [`step`](Self::step) is one trading day's close, and the previous close
/// becomes the next bar's open. The GBM model: dS = mu * S * dt + sigma * S * dW.
pub struct GbmPriceProcess {
    /// Current price
    current_price: f64,
    /// Pre-computed drift term: (mu - 0.5 * sigma^2) * dt
    drift_term: f64,
    /// Pre-computed volatility term: sigma * sqrt(dt)
    vol_term: f64,
    /// Random number generator
    rng: Pcg64,
}

impl GbmPriceProcess {
    /// Create a new GBM price process.
    pub fn new(initial_price: f64, mu: f64, sigma: f64, dt: f64, seed: u64) -> Self {
        Self {
            current_price: initial_price,
            drift_term: (mu - 0.5 * sigma * sigma) * dt,
            vol_term: sigma * dt.sqrt(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Get current price.
    #[inline]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Generate the next price.
    #[inline]
    pub fn step(&mut self) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        let exponent = self.drift_term + self.vol_term * z;
        self.current_price *= exponent.exp();
        self.current_price
    }
}

/// Deterministic fake market data for demos, benches and tests.
///
/// Each ticker gets its own seeded path; weekends are skipped.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    /// Price on the first generated bar
    pub initial_price: f64,
    /// Daily drift
    pub mu: f64,
    /// Daily volatility
    pub sigma: f64,
    /// Mean daily volume
    pub mean_volume: f64,
    /// Base seed, mixed with the ticker
    pub seed: u64,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            mu: 0.0,
            sigma: 0.02,
            mean_volume: 1_000_000.0,
            seed: 0,
        }
    }
}

impl SyntheticProvider {
    fn ticker_seed(&self, ticker: &str) -> u64 {
        // FNV-1a, stable across runs and platforms
        ticker.bytes().fold(0xcbf2_9ce4_8422_2325u64 ^ self.seed, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        })
    }
}

impl QuoteProvider for SyntheticProvider {
    fn price_history(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries> {
        if start > end {
            return Err(Error::InvalidParameter(format!(
                "start {start} is after end {end}"
            )));
        }
        if !self.initial_price.is_finite() || self.initial_price <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "initial_price must be > 0, got {}",
                self.initial_price
            )));
        }

        let seed = self.ticker_seed(ticker);
        let mut process = GbmPriceProcess::new(self.initial_price, self.mu, self.sigma, 1.0, seed);

        // Volume sizes use a separate stream, as retail sizes do in the price sim
        let mut volume_rng = Pcg64::seed_from_u64(seed.wrapping_add(1));
        let sigma = 0.5;
        let log_mean = self.mean_volume.max(1.0).ln() - 0.5 * sigma * sigma;
        let volume_dist =
            LogNormal::new(log_mean, sigma).map_err(|e| Error::InvalidParameter(e.to_string()))?;

        let mut bars = Vec::new();
        let mut open = process.current_price();
        for date in start.iter_days().take_while(|d| *d <= end) {
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }
            let close = process.step();
            bars.push(PriceBar {
                date,
                open,
                high: open.max(close),
                low: open.min(close),
                close,
                volume: volume_dist.sample(&mut volume_rng) as u64,
            });
            open = close;
        }

        log::debug!("[{ticker}] generated {} synthetic bars", bars.len());
        PriceSeries::new(bars)
    }

    fn financial_snapshots(
        &self,
        ticker: &str,
        _frequency: StatementFrequency,
    ) -> Result<Vec<FinancialSnapshot>> {
        log::warn!("[{ticker}] synthetic provider has no fundamentals; returning no periods");
        Ok(Vec::new())
    }

    fn beta(&self, _ticker: &str) -> Result<Option<f64>> {
        Ok(None)
    }
}
