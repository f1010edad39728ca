//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an [`crate::AgentRegistry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of agents the registry will hold.
    pub max_agents: usize,
    /// Evict an agent after this many consecutive failures.
    pub max_failures: u32,
    /// Evict an agent not seen for this long (seconds).
    pub stale_after_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_agents: 1000,
            max_failures: 5,
            stale_after_secs: 3600,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the agent capacity.
    #[must_use]
    pub fn max_agents(mut self, max_agents: usize) -> Self {
        self.max_agents = max_agents;
        self
    }

    /// Set the consecutive-failure eviction threshold.
    #[must_use]
    pub fn max_failures(mut self, max_failures: u32) -> Self {
        self.max_failures = max_failures;
        self
    }

    /// Set the staleness eviction window, in seconds.
    #[must_use]
    pub fn stale_after_secs(mut self, secs: u64) -> Self {
        self.stale_after_secs = secs;
        self
    }
}
