//! Parallel simulation runner using rayon.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::simulation::context::SimulationContext;
use crate::simulation::engine::{finish, generate_path, validate_inputs};
use crate::simulation::random::{RandomSource, SeededSource};
use crate::types::{SimulationConfig, SimulationPath, SimulationResult, Volatility};

/// Run a simulation with paths spread over a worker pool, seeded from the config.
pub fn simulate_parallel(
    last_price: f64,
    volatility: Volatility,
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    let source = SeededSource::new(config.seed_or_default());
    let ctx = SimulationContext::for_config(config);
    simulate_parallel_with(last_price, volatility, config, &source, &ctx)
}

/// Run a simulation in parallel with an injected random source and context.
///
/// Path `i` always draws from `source.stream(i)`, so the result is identical
/// to the sequential engine for the same source.
pub fn simulate_parallel_with<S: RandomSource>(
    last_price: f64,
    volatility: Volatility,
    config: &SimulationConfig,
    source: &S,
    ctx: &SimulationContext,
) -> Result<SimulationResult> {
    let (simulation_count, horizon_days) = validate_inputs(last_price, config)?;

    // Configure thread pool
    let n_workers = config
        .n_workers
        .unwrap_or_else(|| rayon::current_num_threads().min(8));

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    let completed = AtomicUsize::new(0);

    let paths: Result<Vec<SimulationPath>> = pool.install(|| {
        (0..simulation_count)
            .into_par_iter()
            .map(|index| {
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
                Ok(path)
            })
            .collect()
    });

    let paths = paths?;
    log::debug!("{} paths completed on {n_workers} workers", paths.len());

    Ok(finish(last_price, volatility, horizon_days, paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::MonteCarloSimulator;

    fn vol(v: f64) -> Volatility {
        Volatility::from_std_dev(v).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = SimulationConfig {
            simulation_count: 64,
            horizon_days: 100,
            seed: Some(99),
            n_workers: Some(4),
            deadline_ms: None,
        };
        let sequential = MonteCarloSimulator::new(config.clone())
            .simulate(250.0, vol(0.015))
            .unwrap();
        let parallel = simulate_parallel(250.0, vol(0.015), &config).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_worker_count_does_not_change_result() {
        let one = SimulationConfig {
            simulation_count: 16,
            horizon_days: 20,
            n_workers: Some(1),
            ..SimulationConfig::default()
        };
        let many = SimulationConfig {
            n_workers: Some(3),
            ..one.clone()
        };
        assert_eq!(
            simulate_parallel(10.0, vol(0.03), &one).unwrap(),
            simulate_parallel(10.0, vol(0.03), &many).unwrap()
        );
    }

    #[test]
    fn test_parallel_zero_simulations() {
        let config = SimulationConfig {
            simulation_count: 0,
            ..SimulationConfig::default()
        };
        assert!(simulate_parallel(10.0, vol(0.03), &config).unwrap().is_empty());
    }

    #[test]
    fn test_expired_deadline_aborts() {
        let config = SimulationConfig {
            simulation_count: 10,
            horizon_days: 10,
            deadline_ms: Some(0),
            ..SimulationConfig::default()
        };
        let err = simulate_parallel(10.0, vol(0.03), &config).unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded { .. }));
    }

    #[test]
    fn test_rejects_zero_workers() {
        let config = SimulationConfig {
            n_workers: Some(0),
            ..SimulationConfig::default()
        };
        assert!(matches!(
            simulate_parallel(10.0, vol(0.03), &config),
            Err(Error::InvalidParameter(_))
        ));
    }
}
