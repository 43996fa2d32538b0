//! Configuration options for the CFR solver.
//!
//! The solver runs plain (vanilla) CFR with full chance enumeration, so the
//! knobs here only control how long it runs, how often progress is sampled,
//! and how the average strategy is cleaned up for output.

use serde::{Deserialize, Serialize};

use crate::cfr::infoset::DEFAULT_THRESHOLD;
use crate::error::ConfigError;

/// Configuration for the CFR solver.
///
/// # Example
/// ```
/// use leduc_cfr::cfr::CFRConfig;
///
/// let config = CFRConfig::default().with_iterations(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CFRConfig {
    /// Number of iterations `solve()` runs.
    pub iterations: u64,

    /// Record the running expected value every this many iterations.
    pub trace_interval: u64,

    /// Average-strategy entries below this are zeroed before renormalizing.
    pub threshold: f64,
}

impl Default for CFRConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            trace_interval: 1_000,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl CFRConfig {
    /// Create a new CFRConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Builder method: set the trace interval.
    pub fn with_trace_interval(mut self, interval: u64) -> Self {
        self.trace_interval = interval;
        self
    }

    /// Builder method: set the average-strategy threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::ZeroInterval("iterations"));
        }
        if self.trace_interval == 0 {
            return Err(ConfigError::ZeroInterval("trace interval"));
        }
        if !(0.0..1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Statistics tracked during CFR training.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CFRStats {
    /// Total number of iterations completed.
    pub iterations: u64,

    /// Number of unique information sets discovered.
    pub info_sets: usize,

    /// Running expected value for player one.
    pub expected_value: f64,

    /// Total time spent training (in seconds).
    pub elapsed_seconds: f64,

    /// Iterations per second.
    pub iterations_per_second: f64,

    /// Running expected value sampled every trace interval.
    pub ev_history: Vec<EvPoint>,
}

/// A single expected-value measurement at a specific iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvPoint {
    /// Iteration number when this measurement was taken.
    pub iteration: u64,
    /// Running expected value for player one.
    pub expected_value: f64,
}

impl CFRStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update iterations per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.iterations_per_second = self.iterations as f64 / self.elapsed_seconds;
        }
    }

    /// Record a running expected value.
    pub fn record_ev(&mut self, iteration: u64, expected_value: f64) {
        self.ev_history.push(EvPoint {
            iteration,
            expected_value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CFRConfig::new();
        assert_eq!(config.iterations, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_settings() {
        assert_eq!(
            CFRConfig::new().with_iterations(0).validate(),
            Err(ConfigError::ZeroInterval("iterations"))
        );
        assert_eq!(
            CFRConfig::new().with_trace_interval(0).validate(),
            Err(ConfigError::ZeroInterval("trace interval"))
        );
        assert_eq!(
            CFRConfig::new().with_threshold(1.0).validate(),
            Err(ConfigError::InvalidThreshold(1.0))
        );
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = CFRConfig::new().with_iterations(42).with_threshold(0.01);
        let json = serde_json::to_string(&config).unwrap();
        let back: CFRConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rate_and_trace() {
        let mut stats = CFRStats::new();
        stats.iterations = 500;
        stats.elapsed_seconds = 2.0;
        stats.update_rate();
        assert_eq!(stats.iterations_per_second, 250.0);

        stats.record_ev(100, -0.05);
        assert_eq!(stats.ev_history.len(), 1);
        assert_eq!(stats.ev_history[0].iteration, 100);
    }
}
