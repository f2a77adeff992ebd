//! Session configuration

use qbloch_gates::DEFAULT_UNITARY_TOLERANCE;
use qbloch_state::DEFAULT_SEPARABILITY_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Default number of states kept for undo
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Tunables for a [`Session`](crate::Session)
///
/// Missing fields take their defaults when loaded from JSON:
///
/// ```
/// use qbloch::SessionConfig;
///
/// let config: SessionConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.history_limit, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seed for the measurement RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Maximum entrywise deviation of U†U from I
    pub unitary_tolerance: f64,
    /// Maximum amplitude reconstruction error for a separable verdict
    pub separability_tolerance: f64,
    /// Undo depth; 0 disables history
    pub history_limit: usize,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_unitary_tolerance(mut self, tolerance: f64) -> Self {
        self.unitary_tolerance = tolerance;
        self
    }

    pub fn with_separability_tolerance(mut self, tolerance: f64) -> Self {
        self.separability_tolerance = tolerance;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            unitary_tolerance: DEFAULT_UNITARY_TOLERANCE,
            separability_tolerance: DEFAULT_SEPARABILITY_TOLERANCE,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
