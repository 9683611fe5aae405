//! Simulation configuration.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Seed used when a config does not name one.
pub const DEFAULT_SEED: u64 = 123;

/// Horizon lengths (trading days) offered by the dashboard.
pub const HORIZON_CHOICES: [i64; 5] = [100, 150, 200, 250, 300];

/// Configuration for a Monte Carlo run.
///
/// Counts are signed so that values coming from a UI or from Python can be
/// validated here rather than silently wrapped.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of independent paths
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub simulation_count: i64,

    /// Steps per path, in trading days
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub horizon_days: i64,

    /// Random seed for reproducibility (None = DEFAULT_SEED)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub seed: Option<u64>,

    /// Number of parallel workers (None = auto-detect)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub n_workers: Option<usize>,

    /// Abort the run after this many milliseconds (None = no deadline)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub deadline_ms: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation_count: 200,
            horizon_days: 200,
            seed: None,
            n_workers: None,
            deadline_ms: None,
        }
    }
}

impl SimulationConfig {
    /// Check counts and return them as `(simulation_count, horizon_days)`.
    pub fn validate(&self) -> Result<(usize, usize)> {
        let simulation_count = usize::try_from(self.simulation_count).map_err(|_| {
            Error::InvalidParameter(format!(
                "simulation_count must be >= 0, got {}",
                self.simulation_count
            ))
        })?;
        if self.horizon_days <= 0 {
            return Err(Error::InvalidParameter(format!(
                "horizon_days must be > 0, got {}",
                self.horizon_days
            )));
        }
        let horizon_days = usize::try_from(self.horizon_days)
            .map_err(|_| Error::InvalidParameter("horizon_days out of range".to_string()))?;
        if self.n_workers == Some(0) {
            return Err(Error::InvalidParameter("n_workers must be > 0".to_string()));
        }
        Ok((simulation_count, horizon_days))
    }

    #[inline]
    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl SimulationConfig {
    #[new]
    #[pyo3(signature = (
        simulation_count = 200,
        horizon_days = 200,
        seed = None,
        n_workers = None,
        deadline_ms = None
    ))]
    pub fn py_new(
        simulation_count: i64,
        horizon_days: i64,
        seed: Option<u64>,
        n_workers: Option<usize>,
        deadline_ms: Option<u64>,
    ) -> Self {
        Self {
            simulation_count,
            horizon_days,
            seed,
            n_workers,
            deadline_ms,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(simulation_count={}, horizon_days={}, seed={:?})",
            self.simulation_count, self.horizon_days, self.seed
        )
    }
}
