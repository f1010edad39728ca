//! The in-memory agent registry.
//!
//! Tracks discovered agents, their health bookkeeping, and capability
//! lookup. All state sits behind a single `RwLock`; every operation is a
//! short critical section with no I/O, so the registry is safe to share
//! across threads. Discovery itself (probing containers or endpoints) is
//! a collaborator's job; the registry only records what callers report.

use std::collections::HashMap;

use chrono::Duration;
use parking_lot::RwLock;
use protonorm_core::{now_utc, Protocol};
use tracing::{debug, info, warn};

use crate::card::AgentCard;
use crate::config::RegistryConfig;
use crate::entry::{AgentEntry, AgentStatus};
use crate::error::{RegistryError, RegistryResult};
use crate::stats::RegistryStats;

/// Thread-safe in-memory registry of agents.
///
/// # Example
///
/// ```rust
/// use protonorm_core::Protocol;
/// use protonorm_registry::{AgentCard, AgentRegistry, Capability};
///
/// let registry = AgentRegistry::new();
/// let card = AgentCard::builder("a2a-math", "http://a2a-math-agent:8002")
///     .protocol(Protocol::A2A)
///     .capability(Capability::new("math", "Solves arithmetic questions"))
///     .build()
///     .unwrap();
///
/// registry.register(card).unwrap();
/// assert_eq!(registry.by_capability("MATH").len(), 1);
/// ```
#[derive(Debug)]
pub struct AgentRegistry {
    config: RegistryConfig,
    entries: RwLock<HashMap<String, AgentEntry>>,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentRegistry {
    /// Create a registry with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// The registry configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register an agent card.
    ///
    /// Re-registering an existing agent ID replaces its card and resets
    /// the failure counter instead of consuming capacity.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::CapacityExceeded`] when the registry is
    /// full and the ID is new.
    pub fn register(&self, card: AgentCard) -> RegistryResult<()> {
        let mut entries = self.entries.write();

        if let Some(entry) = entries.get_mut(&card.id) {
            debug!(agent_id = %card.id, "re-registering agent; card replaced");
            entry.card = card;
            entry.consecutive_failures = 0;
            entry.last_seen = now_utc();
            return Ok(());
        }

        if entries.len() >= self.config.max_agents {
            return Err(RegistryError::CapacityExceeded {
                limit: self.config.max_agents,
            });
        }

        info!(agent_id = %card.id, protocol = %card.protocol, "agent registered");
        entries.insert(card.id.clone(), AgentEntry::new(card));
        Ok(())
    }

    /// Remove an agent, returning its final entry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownAgent`] when the ID is not
    /// registered.
    pub fn deregister(&self, agent_id: &str) -> RegistryResult<AgentEntry> {
        self.entries
            .write()
            .remove(agent_id)
            .ok_or_else(|| RegistryError::unknown_agent(agent_id))
    }

    /// Look up one agent's entry.
    #[must_use]
    pub fn get(&self, agent_id: &str) -> Option<AgentEntry> {
        self.entries.read().get(agent_id).cloned()
    }

    /// All entries, ordered by agent ID.
    #[must_use]
    pub fn all(&self) -> Vec<AgentEntry> {
        let mut entries: Vec<AgentEntry> = self.entries.read().values().cloned().collect();
        entries.sort_by(|a, b| a.card.id.cmp(&b.card.id));
        entries
    }

    /// Cards of currently healthy agents, ordered by agent ID.
    #[must_use]
    pub fn healthy(&self) -> Vec<AgentCard> {
        self.cards_where(|entry| entry.is_healthy())
    }

    /// Cards of agents speaking the given protocol, ordered by agent ID.
    #[must_use]
    pub fn by_protocol(&self, protocol: &Protocol) -> Vec<AgentCard> {
        self.cards_where(|entry| entry.card.protocol == *protocol)
    }

    /// Cards of agents advertising the given capability
    /// (case-insensitive), ordered by agent ID.
    #[must_use]
    pub fn by_capability(&self, capability: &str) -> Vec<AgentCard> {
        self.cards_where(|entry| entry.card.has_capability(capability))
    }

    /// Record that a request was routed to an agent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownAgent`] when the ID is not
    /// registered.
    pub fn mark_request(&self, agent_id: &str) -> RegistryResult<()> {
        self.with_entry(agent_id, AgentEntry::mark_request)
    }

    /// Record a successful health outcome for an agent.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownAgent`] when the ID is not
    /// registered.
    pub fn record_success(&self, agent_id: &str) -> RegistryResult<()> {
        self.with_entry(agent_id, AgentEntry::mark_healthy)
    }

    /// Record a failed health outcome for an agent.
    ///
    /// Once the configured failure threshold is crossed the agent is
    /// marked unhealthy; the next [`prune`](Self::prune) evicts it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownAgent`] when the ID is not
    /// registered.
    pub fn record_failure(&self, agent_id: &str) -> RegistryResult<()> {
        let max_failures = self.config.max_failures;
        self.with_entry(agent_id, |entry| {
            entry.mark_failure();
            if entry.consecutive_failures >= max_failures {
                warn!(
                    agent_id = %entry.card.id,
                    failures = entry.consecutive_failures,
                    "agent exceeded failure threshold"
                );
                entry.status = AgentStatus::Unhealthy;
            }
        })
    }

    /// Evict agents past the failure threshold or idle past the
    /// staleness window. Returns the evicted agent IDs, sorted.
    pub fn prune(&self) -> Vec<String> {
        let cutoff = now_utc() - Duration::seconds(self.config.stale_after_secs as i64);
        let max_failures = self.config.max_failures;

        let mut removed = Vec::new();
        self.entries.write().retain(|agent_id, entry| {
            let keep = entry.consecutive_failures < max_failures && entry.last_seen > cutoff;
            if !keep {
                info!(
                    agent_id = %agent_id,
                    failures = entry.consecutive_failures,
                    "evicting agent from registry"
                );
                removed.push(agent_id.clone());
            }
            keep
        });
        removed.sort();
        removed
    }

    /// Snapshot registry statistics.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let entries = self.entries.read();
        let mut stats = RegistryStats {
            total_agents: entries.len(),
            ..Default::default()
        };
        for entry in entries.values() {
            match entry.status {
                AgentStatus::Healthy => stats.healthy_agents += 1,
                AgentStatus::Degraded => stats.degraded_agents += 1,
                AgentStatus::Unhealthy => stats.unhealthy_agents += 1,
                AgentStatus::Unknown => stats.unknown_agents += 1,
            }
            *stats
                .by_protocol
                .entry(entry.card.protocol.as_str().to_string())
                .or_insert(0) += 1;
            stats.total_requests += entry.request_count;
        }
        stats
    }

    /// Number of registered agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn cards_where(&self, predicate: impl Fn(&AgentEntry) -> bool) -> Vec<AgentCard> {
        let mut cards: Vec<AgentCard> = self
            .entries
            .read()
            .values()
            .filter(|entry| predicate(entry))
            .map(|entry| entry.card.clone())
            .collect();
        cards.sort_by(|a, b| a.id.cmp(&b.id));
        cards
    }

    fn with_entry(
        &self,
        agent_id: &str,
        mutate: impl FnOnce(&mut AgentEntry),
    ) -> RegistryResult<()> {
        let mut entries = self.entries.write();
        let entry = entries
            .get_mut(agent_id)
            .ok_or_else(|| RegistryError::unknown_agent(agent_id))?;
        mutate(entry);
        Ok(())
    }
}
