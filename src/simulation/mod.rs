//! Monte Carlo engine, parallel runner and forecast pipeline.

pub mod context;
pub mod engine;
pub mod forecast;
pub mod random;
pub mod runner;

pub use context::SimulationContext;
pub use engine::{simulate, MonteCarloSimulator};
pub use forecast::{forecast, Forecast};
pub use random::{RandomSource, SeededSource};
pub use runner::{simulate_parallel, simulate_parallel_with};
