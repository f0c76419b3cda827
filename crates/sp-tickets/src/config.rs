//! Configuration for Ticket Ordering Subsystem

use serde::{Deserialize, Serialize};

/// Ordering configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Collection size at which the parallel sort takes over
    pub parallel_threshold: usize,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10_000,
        }
    }
}
