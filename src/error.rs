//! Crate-wide error type.

use thiserror::Error;

/// Errors returned by the statistics, simulation and provider layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Insufficient data: need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Missing line item: {0}")]
    MissingLineItem(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid price series: {0}")]
    InvalidSeries(String),

    #[error("Deadline exceeded after {completed} paths")]
    DeadlineExceeded { completed: usize },

    #[error("Simulation cancelled")]
    Cancelled,

    #[error("Quote provider failed: {0}")]
    Provider(String),

    #[error("Failed to create thread pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, Error>;
