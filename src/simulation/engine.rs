//! Monte Carlo price-path engine.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{Error, Result};
use crate::simulation::context::{SimulationContext, CHECK_INTERVAL};
use crate::simulation::random::{RandomSource, SeededSource};
use crate::types::{SimulationConfig, SimulationPath, SimulationResult, Volatility};

/// Generates future price paths by a random walk on daily returns.
///
/// Each step draws `r ~ Normal(0, volatility)` and sets
/// `next = current * (1 + r)`. Prices are not clamped: a draw at or below
/// -100% takes a path to zero or below. That is a property of using normal
/// rather than log-normal returns and is reported, not corrected.
pub struct MonteCarloSimulator {
    config: SimulationConfig,
}

impl MonteCarloSimulator {
    /// Create a new simulator.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run all paths on the calling thread, seeded from the config.
    pub fn simulate(&self, last_price: f64, volatility: Volatility) -> Result<SimulationResult> {
        let source = SeededSource::new(self.config.seed_or_default());
        self.simulate_with_source(last_price, volatility, &source)
    }

    /// Run all paths on the calling thread with an injected random source.
    pub fn simulate_with_source<S: RandomSource>(
        &self,
        last_price: f64,
        volatility: Volatility,
        source: &S,
    ) -> Result<SimulationResult> {
        let ctx = SimulationContext::for_config(&self.config);
        self.simulate_in_context(last_price, volatility, source, &ctx)
    }

    /// Run all paths on the calling thread, honouring `ctx`.
    pub fn simulate_in_context<S: RandomSource>(
        &self,
        last_price: f64,
        volatility: Volatility,
        source: &S,
        ctx: &SimulationContext,
    ) -> Result<SimulationResult> {
        let (simulation_count, horizon_days) = validate_inputs(last_price, &self.config)?;
        let completed = AtomicUsize::new(0);

        let mut paths = Vec::with_capacity(simulation_count);
        for index in 0..simulation_count {
            ctx.check(completed.load(Ordering::Relaxed))?;
            let mut rng = source.stream(index);
            let path = generate_path(
                index,
                last_price,
                volatility,
                horizon_days,
                &mut rng,
                ctx,
                &completed,
            )?;
            completed.fetch_add(1, Ordering::Relaxed);
            paths.push(path);
        }

        Ok(finish(last_price, volatility, horizon_days, paths))
    }
}

/// Simulate `simulation_count` paths of `horizon_days` steps from `last_price`.
pub fn simulate<S: RandomSource>(
    last_price: f64,
    volatility: Volatility,
    simulation_count: i64,
    horizon_days: i64,
    source: &S,
) -> Result<SimulationResult> {
    let config = SimulationConfig {
        simulation_count,
        horizon_days,
        ..SimulationConfig::default()
    };
    MonteCarloSimulator::new(config).simulate_with_source(last_price, volatility, source)
}

/// Check the seed price and config, returning `(simulation_count, horizon_days)`.
pub(crate) fn validate_inputs(
    last_price: f64,
    config: &SimulationConfig,
) -> Result<(usize, usize)> {
    if !last_price.is_finite() || last_price <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "last_price must be > 0, got {last_price}"
        )));
    }
    config.validate()
}

/// Walk one path forward from `last_price`.
pub(crate) fn generate_path<R: RngCore>(
    index: usize,
    last_price: f64,
    volatility: Volatility,
    horizon_days: usize,
    rng: &mut R,
    ctx: &SimulationContext,
    completed: &AtomicUsize,
) -> Result<SimulationPath> {
    let sigma = volatility.value();
    let mut prices = Vec::with_capacity(horizon_days);
    let mut current = last_price;

    for step in 0..horizon_days {
        if step > 0 && step % CHECK_INTERVAL == 0 {
            ctx.check(completed.load(Ordering::Relaxed))?;
        }
        let z: f64 = StandardNormal.sample(rng);
        current *= 1.0 + sigma * z;
        prices.push(current);
    }

    Ok(SimulationPath { index, prices })
}

/// Assemble the result and flag paths that left positive territory.
pub(crate) fn finish(
    last_price: f64,
    volatility: Volatility,
    horizon_days: usize,
    paths: Vec<SimulationPath>,
) -> SimulationResult {
    let result = SimulationResult {
        last_price,
        volatility,
        horizon_days,
        paths,
    };

    let non_positive = result.non_positive_paths();
    if non_positive > 0 {
        log::warn!(
            "{non_positive} of {} simulated paths reached a non-positive price (volatility {volatility})",
            result.len()
        );
    }
    log::debug!(
        "simulated {} paths x {horizon_days} days from {last_price}",
        result.len()
    );
    result
}
