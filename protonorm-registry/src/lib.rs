//! # protonorm-registry
//!
//! In-memory agent registry with capability lookup for protonorm.
//!
//! This crate tracks the agents an orchestrating caller knows about:
//! their cards, health bookkeeping, and capability index. Actual
//! discovery (probing containers, fetching agent cards over HTTP) is a
//! collaborator's job; the registry only records what callers report.
//!
//! ## Core Concepts
//!
//! - **[`AgentCard`]**: validated description of one agent (identity,
//!   endpoint, protocol family, capabilities), built via [`CardBuilder`]
//!   with provider information passed in explicitly
//! - **[`AgentRegistry`]**: thread-safe map of registered agents with
//!   health counters, capability lookup, and eviction
//! - **[`RegistryConfig`]**: capacity, failure threshold, staleness window
//! - **[`RegistryStats`]**: composition/traffic snapshot
//!
//! ## Example
//!
//! ```rust
//! use protonorm_core::Protocol;
//! use protonorm_registry::{AgentCard, AgentRegistry, Capability};
//!
//! let registry = AgentRegistry::new();
//! registry
//!     .register(
//!         AgentCard::builder("acp-hello", "http://acp-hello:8000")
//!             .name("Hello World Agent")
//!             .protocol(Protocol::ACP)
//!             .capability(Capability::new("greeting", "Says hello"))
//!             .build()
//!             .unwrap(),
//!     )
//!     .unwrap();
//!
//! registry.record_success("acp-hello").unwrap();
//! assert_eq!(registry.healthy().len(), 1);
//! assert_eq!(registry.by_capability("greeting")[0].id, "acp-hello");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod card;
pub mod config;
pub mod entry;
pub mod error;
pub mod registry;
pub mod stats;

// Re-exports
pub use card::{AgentCard, Capability, CardBuilder, Provider};
pub use config::RegistryConfig;
pub use entry::{AgentEntry, AgentStatus};
pub use error::{RegistryError, RegistryResult};
pub use registry::AgentRegistry;
pub use stats::RegistryStats;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::card::{AgentCard, Capability, CardBuilder, Provider};
    pub use crate::config::RegistryConfig;
    pub use crate::entry::{AgentEntry, AgentStatus};
    pub use crate::error::{RegistryError, RegistryResult};
    pub use crate::registry::AgentRegistry;
    pub use crate::stats::RegistryStats;
}
