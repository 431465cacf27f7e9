//! Routing-table value object.
//!
//! An explicit two-level `domain -> scope -> channel` mapping passed to
//! the resolver at construction time, so tests can supply synthetic
//! tables without touching the production mapping.

use std::collections::HashMap;

use mailgram_models::ChannelId;

/// Routes for a single domain: exact scope mappings plus an optional
/// per-domain default for unmapped scopes.
#[derive(Debug, Clone, Default)]
pub struct DomainRoutes {
    scopes: HashMap<String, ChannelId>,
    default_channel: Option<ChannelId>,
}

/// How a table lookup matched, from most to least specific.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMatch {
    /// Exact `domain -> scope` entry.
    Scope(ChannelId),
    /// Domain known, scope unmapped: the domain's default channel.
    DomainDefault(ChannelId),
    /// Domain unknown: the table's global default channel.
    GlobalDefault(ChannelId),
    /// Nothing matched (only possible when the table was built without a
    /// global default).
    Unrouted,
}

/// Two-level routing table with per-domain and global defaults.
#[derive(Debug, Clone)]
pub struct RoutingTable {
    domains: HashMap<String, DomainRoutes>,
    global_default: Option<ChannelId>,
}

impl RoutingTable {
    /// Creates an empty table with no defaults. A lookup against it
    /// always returns [`TableMatch::Unrouted`].
    pub fn new() -> Self {
        Self {
            domains: HashMap::new(),
            global_default: None,
        }
    }

    /// Adds an exact `domain -> scope -> channel` route.
    pub fn with_route(
        mut self,
        domain: impl Into<String>,
        scope: impl Into<String>,
        channel: impl Into<ChannelId>,
    ) -> Self {
        self.domains
            .entry(domain.into())
            .or_default()
            .scopes
            .insert(scope.into(), channel.into());
        self
    }

    /// Sets the default channel for a domain's unmapped scopes.
    pub fn with_domain_default(
        mut self,
        domain: impl Into<String>,
        channel: impl Into<ChannelId>,
    ) -> Self {
        self.domains.entry(domain.into()).or_default().default_channel = Some(channel.into());
        self
    }

    /// Sets the global default channel for unmapped domains.
    pub fn with_global_default(mut self, channel: impl Into<ChannelId>) -> Self {
        self.global_default = Some(channel.into());
        self
    }

    /// Looks up the channel for a domain/scope pair, reporting how
    /// specific the match was.
    pub fn lookup(&self, domain: &str, scope: &str) -> TableMatch {
        if let Some(routes) = self.domains.get(domain) {
            if let Some(channel) = routes.scopes.get(scope) {
                return TableMatch::Scope(channel.clone());
            }
            if let Some(channel) = &routes.default_channel {
                return TableMatch::DomainDefault(channel.clone());
            }
        }
        match &self.global_default {
            Some(channel) => TableMatch::GlobalDefault(channel.clone()),
            None => TableMatch::Unrouted,
        }
    }
}

impl Default for RoutingTable {
    /// The production mapping for the seven vocabulary domains, with a
    /// per-domain default each and a global catch-all.
    fn default() -> Self {
        Self::new()
            .with_route("infra", "sre", "@infra-sre")
            .with_route("infra", "oncall", "@infra-oncall")
            .with_route("infra", "release", "@infra-release")
            .with_domain_default("infra", "@infra-general")
            .with_route("support", "customer", "@support-customer")
            .with_route("support", "billing", "@support-billing")
            .with_route("support", "triage", "@support-triage")
            .with_domain_default("support", "@support-general")
            .with_route("qa", "dev", "@qa-dev")
            .with_route("qa", "release", "@qa-release")
            .with_domain_default("qa", "@qa-general")
            .with_route("dev", "dev", "@dev-team")
            .with_route("dev", "release", "@dev-release")
            .with_domain_default("dev", "@dev-general")
            .with_route("security", "sre", "@security-ops")
            .with_route("security", "triage", "@security-triage")
            .with_domain_default("security", "@security-general")
            .with_route("product", "triage", "@product-triage")
            .with_domain_default("product", "@product-general")
            .with_route("sales", "customer", "@sales-desk")
            .with_domain_default("sales", "@sales-general")
            .with_global_default("@catch-all")
    }
}
