//! Deterministic routing resolver for Mailgram.
//!
//! Maps a parsed grammar record (plus optional enrichment) to exactly one
//! destination channel, or an explicit no-route outcome, via an ordered
//! fallback chain: incident override, on-call override, table lookup.
//! A phishing gate runs after the chain and suppresses any decision whose
//! AI-assessed phishing risk is above threshold.
//!
//! The resolver is stateless, synchronous, and performs no I/O. Callers
//! fetch enrichment data first and pass it in through the collaborator
//! traits in [`lookup`].
//!
//! # Example
//!
//! ```
//! use mailgram_grammar::AddressGrammar;
//! use mailgram_routing::{Enrichment, Resolver};
//!
//! let parsed = AddressGrammar::new().parse("infra.sre.alert.p0.cf@cloudflare.com");
//! let resolver = Resolver::default();
//! let suggestion = resolver.resolve(&parsed, &Enrichment::new());
//! assert_eq!(suggestion.chat_id.as_deref(), Some("@infra-sre"));
//! ```

pub mod lookup;
pub mod resolver;
pub mod table;

pub use lookup::{Enrichment, IncidentLookup, OnCallLookup};
pub use resolver::{Resolver, PHISHING_THRESHOLD};
pub use table::{DomainRoutes, RoutingTable, TableMatch};
