//! Simulation result types.

use serde::Serialize;

use crate::types::price::Volatility;

/// One simulated price path. The starting price is not included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationPath {
    /// Path index within the run
    pub index: usize,
    /// Simulated closes, one per horizon day
    pub prices: Vec<f64>,
}

impl SimulationPath {
    #[inline]
    pub fn terminal_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// True if any step reached zero or below.
    pub fn went_non_positive(&self) -> bool {
        self.prices.iter().any(|&p| p <= 0.0)
    }
}

/// All paths of one Monte Carlo run, with the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Seed price every path starts from
    pub last_price: f64,
    /// Per-step return standard deviation
    pub volatility: Volatility,
    /// Steps per path
    pub horizon_days: usize,
    /// Paths ordered by index
    pub paths: Vec<SimulationPath>,
}

impl SimulationResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Final price of each path.
    pub fn terminal_prices(&self) -> Vec<f64> {
        self.paths.iter().filter_map(SimulationPath::terminal_price).collect()
    }

    /// Cross-path mean at each step. Empty when there are no paths.
    pub fn mean_path(&self) -> Vec<f64> {
        if self.paths.is_empty() {
            return Vec::new();
        }
        let n = self.paths.len() as f64;
        let mut sums = vec![0.0; self.horizon_days];
        for path in &self.paths {
            for (sum, price) in sums.iter_mut().zip(&path.prices) {
                *sum += price;
            }
        }
        sums.into_iter().map(|s| s / n).collect()
    }

    /// Number of paths that touched zero or a negative price.
    pub fn non_positive_paths(&self) -> usize {
        self.paths.iter().filter(|p| p.went_non_positive()).count()
    }
}
