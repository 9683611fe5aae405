//! Deadline and cancellation for long simulation runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::types::SimulationConfig;

/// Steps between deadline/cancellation checks inside a path.
pub const CHECK_INTERVAL: usize = 1024;

/// Cooperative abort signal shared by all workers of a run.
///
/// Clones share the same cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct SimulationContext {
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

impl SimulationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            cancelled: Arc::default(),
        }
    }

    /// Context honouring `config.deadline_ms`, if set.
    pub fn for_config(config: &SimulationConfig) -> Self {
        match config.deadline_ms {
            Some(ms) => Self::with_timeout(Duration::from_millis(ms)),
            None => Self::new(),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Fail if the run was cancelled or the deadline has passed.
    pub fn check(&self, completed: usize) -> Result<()> {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                Err(Error::DeadlineExceeded { completed })
            }
            _ => Ok(()),
        }
    }
}
