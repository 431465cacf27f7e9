//! Core data models for Mailgram.
//!
//! This crate provides the fundamental data types shared by the grammar
//! parser and the routing resolver: the four-tier urgency scale, the
//! controlled vocabulary for address segments, and the parse/routing
//! result shapes consumed by delivery adapters.

pub mod grammar;
pub mod level;
pub mod routing;
pub mod vocab;

// Re-export main types
pub use grammar::{GrammarConfig, GrammarParseResult};
pub use level::Level;
pub use routing::{AiAnalysis, ChannelId, RoutingSuggestion};
pub use vocab::{
    DEFAULT_DOMAIN_SUFFIX, DEFAULT_HIERARCHY, DEFAULT_META, DOMAINS, HIERARCHIES, META_PATTERNS,
    ONCALL_SCOPE, SCOPES, TYPES,
};
