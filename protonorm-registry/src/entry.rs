//! Registry entries and agent health status.

use chrono::{DateTime, Utc};
use protonorm_core::now_utc;
use serde::{Deserialize, Serialize};

use crate::card::AgentCard;

/// Health status of a registered agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// The agent is responding normally.
    Healthy,
    /// The agent has had recent failures but is still tracked.
    Degraded,
    /// The agent has exceeded the failure threshold.
    Unhealthy,
    /// The agent has never been health-checked.
    Unknown,
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Bookkeeping wrapped around one registered agent card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentEntry {
    /// The agent card.
    pub card: AgentCard,
    /// Current health status.
    pub status: AgentStatus,
    /// When the agent was first registered.
    pub registered_at: DateTime<Utc>,
    /// Last time the agent was seen healthy or (re-)registered.
    pub last_seen: DateTime<Utc>,
    /// Consecutive recorded failures.
    pub consecutive_failures: u32,
    /// Number of requests routed to this agent.
    pub request_count: u64,
    /// Timestamp of the most recent routed request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_request: Option<DateTime<Utc>>,
}

impl AgentEntry {
    /// Create a fresh entry for a card.
    #[must_use]
    pub fn new(card: AgentCard) -> Self {
        let now = now_utc();
        Self {
            card,
            status: AgentStatus::Unknown,
            registered_at: now,
            last_seen: now,
            consecutive_failures: 0,
            request_count: 0,
            last_request: None,
        }
    }

    /// Record that a request was routed to this agent.
    pub fn mark_request(&mut self) {
        self.request_count += 1;
        self.last_request = Some(now_utc());
    }

    /// Record a successful health outcome: resets the failure counter.
    pub fn mark_healthy(&mut self) {
        self.consecutive_failures = 0;
        self.status = AgentStatus::Healthy;
        self.last_seen = now_utc();
    }

    /// Record a failed health outcome.
    ///
    /// The entry degrades; the registry promotes it to
    /// [`AgentStatus::Unhealthy`] once its failure threshold is crossed.
    pub fn mark_failure(&mut self) {
        self.consecutive_failures += 1;
        self.status = AgentStatus::Degraded;
    }

    /// Whether the agent is currently healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == AgentStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protonorm_core::Protocol;

    fn entry() -> AgentEntry {
        AgentEntry::new(
            AgentCard::builder("acp-hello", "http://acp-hello:8000")
                .protocol(Protocol::ACP)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_new_entry_starts_unknown() {
        let entry = entry();
        assert_eq!(entry.status, AgentStatus::Unknown);
        assert_eq!(entry.consecutive_failures, 0);
        assert_eq!(entry.request_count, 0);
        assert!(entry.last_request.is_none());
    }

    #[test]
    fn test_mark_request_counts() {
        let mut entry = entry();
        entry.mark_request();
        entry.mark_request();
        assert_eq!(entry.request_count, 2);
        assert!(entry.last_request.is_some());
    }

    #[test]
    fn test_mark_healthy_resets_failures() {
        let mut entry = entry();
        entry.mark_failure();
        entry.mark_failure();
        assert_eq!(entry.consecutive_failures, 2);
        assert_eq!(entry.status, AgentStatus::Degraded);

        entry.mark_healthy();
        assert_eq!(entry.consecutive_failures, 0);
        assert!(entry.is_healthy());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(AgentStatus::Degraded.to_string(), "degraded");
    }
}
