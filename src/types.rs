/// Core types shared by the counter workloads
use serde::Serialize;
use thiserror::Error;

/// Iteration count of the reference workload
pub const DEFAULT_ITERATIONS: u64 = 100_000;

/// Upper bound on big-integer loop iterations. `mul` grows by one bit per step,
/// so memory is linear and run time quadratic in the count. Fixed-width loops
/// are not capped.
pub const MAX_ITERATIONS: u64 = 10_000_000;

/// Prefix of the single summary line every workload prints
pub const SUMMARY_PREFIX: &str = "dummy: ";

/// Loop configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopConfig {
    /// Number of iterations to run
    pub iterations: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl LoopConfig {
    /// Build a big-integer loop config, rejecting counts above [`MAX_ITERATIONS`]
    pub fn with_iterations(iterations: u64) -> Result<Self> {
        let config = Self { iterations };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations > MAX_ITERATIONS {
            return Err(CounterError::Config(format!(
                "iterations must be at most {}, got {}",
                MAX_ITERATIONS, self.iterations
            )));
        }
        Ok(())
    }
}

/// Point-in-time view of a loop's accumulators
///
/// Big-integer loops render values as decimal strings, native loops as `u64`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot<T> {
    /// Iterations completed so far
    pub completed: u64,
    pub add: T,
    pub sub: T,
    pub mul: T,
    pub div: T,
    /// `add + sub + mul + div`
    pub total: T,
}

/// Custom error types for the counter workloads
#[derive(Error, Debug)]
pub enum CounterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for counter operations
pub type Result<T> = std::result::Result<T, CounterError>;

/// Format the summary line for any displayable total
pub fn summary_line<T: std::fmt::Display>(total: &T) -> String {
    format!("{}{}", SUMMARY_PREFIX, total)
}
