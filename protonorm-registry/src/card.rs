//! Agent cards.
//!
//! An [`AgentCard`] describes one downstream agent: who it is, where it
//! can be reached, which protocol family it speaks, and what it can do.
//! Cards are built through [`CardBuilder`], which takes provider
//! information as explicit configuration rather than reading any shared
//! provider list, and validates the card before it enters a registry.

use protonorm_core::Protocol;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};

/// A capability an agent advertises.
///
/// Names are normalized to trimmed lowercase so capability lookup is
/// case-insensitive everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    /// Lowercase capability name.
    pub name: String,
    /// What this capability does.
    pub description: String,
    /// Tags for categorization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Capability {
    /// Create a capability, normalizing the name.
    pub fn new(name: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self {
            name: name.as_ref().trim().to_lowercase(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    /// Add tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// Information about an agent's provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Name of the provider.
    pub name: String,
    /// URL to the provider's website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Provider {
    /// Create a provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Set the provider URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A validated description of one downstream agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCard {
    /// Unique agent identifier.
    pub id: String,
    /// Human-readable agent name.
    pub name: String,
    /// Protocol family the agent speaks.
    pub protocol: Protocol,
    /// HTTP(S) endpoint where the agent can be reached.
    pub endpoint: String,
    /// Agent version, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// What this agent does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Capabilities the agent advertises.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl AgentCard {
    /// Start building a card for the given agent ID and endpoint.
    pub fn builder(id: impl Into<String>, endpoint: impl Into<String>) -> CardBuilder {
        CardBuilder::new(id, endpoint)
    }

    /// Capability names, already lowercase.
    #[must_use]
    pub fn capability_names(&self) -> Vec<&str> {
        self.capabilities.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether the agent advertises a capability (case-insensitive).
    #[must_use]
    pub fn has_capability(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.capabilities.iter().any(|c| c.name == name)
    }
}

/// Builder for [`AgentCard`].
///
/// Provider information is passed in explicitly; the builder holds no
/// shared or default provider state.
#[derive(Debug, Clone)]
pub struct CardBuilder {
    id: String,
    name: Option<String>,
    protocol: Protocol,
    endpoint: String,
    version: Option<String>,
    description: Option<String>,
    provider: Option<Provider>,
    capabilities: Vec<Capability>,
}

impl CardBuilder {
    /// Create a builder for the given agent ID and endpoint.
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            protocol: Protocol::UNKNOWN,
            endpoint: endpoint.into(),
            version: None,
            description: None,
            provider: None,
            capabilities: Vec::new(),
        }
    }

    /// Set the human-readable name. Defaults to the agent ID.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the protocol family.
    #[must_use]
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Set the agent version.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the provider.
    #[must_use]
    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Add one capability.
    #[must_use]
    pub fn capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Add several capabilities.
    #[must_use]
    pub fn capabilities(mut self, capabilities: Vec<Capability>) -> Self {
        self.capabilities.extend(capabilities);
        self
    }

    /// Validate and build the card.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidCard`] when the ID is empty, the
    /// endpoint is not an http(s) URL, or a capability name is empty.
    pub fn build(self) -> RegistryResult<AgentCard> {
        let id = self.id.trim().to_string();
        if id.is_empty() {
            return Err(RegistryError::invalid_card("agent ID cannot be empty"));
        }

        let endpoint = self.endpoint.trim().to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(RegistryError::invalid_card(
                "endpoint must be an HTTP/HTTPS URL",
            ));
        }

        if self.capabilities.iter().any(|c| c.name.is_empty()) {
            return Err(RegistryError::invalid_card(
                "capability name cannot be empty",
            ));
        }

        Ok(AgentCard {
            name: self.name.unwrap_or_else(|| id.clone()),
            id,
            protocol: self.protocol,
            endpoint,
            version: self.version,
            description: self.description,
            provider: self.provider,
            capabilities: self.capabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card() -> AgentCard {
        AgentCard::builder("a2a-math", "http://a2a-math-agent:8002")
            .name("Math Agent")
            .protocol(Protocol::A2A)
            .version("1.2.0")
            .capability(Capability::new("Math", "Solves arithmetic questions"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_builds_valid_card() {
        let card = card();
        assert_eq!(card.id, "a2a-math");
        assert_eq!(card.name, "Math Agent");
        assert_eq!(card.protocol, Protocol::A2A);
        assert_eq!(card.capability_names(), vec!["math"]);
    }

    #[test]
    fn test_name_defaults_to_id() {
        let card = AgentCard::builder("acp-hello", "http://acp-hello:8000")
            .build()
            .unwrap();
        assert_eq!(card.name, "acp-hello");
    }

    #[test]
    fn test_capability_names_are_lowercased() {
        let capability = Capability::new("  GREETING  ", "Says hello");
        assert_eq!(capability.name, "greeting");
    }

    #[test]
    fn test_has_capability_is_case_insensitive() {
        assert!(card().has_capability("MATH"));
        assert!(card().has_capability(" math "));
        assert!(!card().has_capability("weather"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = AgentCard::builder("   ", "http://x:1").build().unwrap_err();
        assert!(err.to_string().contains("ID"));
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let err = AgentCard::builder("a", "ftp://x:1").build().unwrap_err();
        assert!(err.to_string().contains("HTTP"));
    }

    #[test]
    fn test_empty_capability_name_rejected() {
        let err = AgentCard::builder("a", "http://x:1")
            .capability(Capability::new("  ", "blank"))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("capability"));
    }

    #[test]
    fn test_provider_is_explicit_configuration() {
        let card = AgentCard::builder("a", "http://x:1")
            .provider(Provider::new("Acme").with_url("https://acme.example"))
            .build()
            .unwrap();
        assert_eq!(card.provider.unwrap().name, "Acme");
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = card();
        let json = serde_json::to_string(&card).unwrap();
        let parsed: AgentCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, parsed);
    }
}
