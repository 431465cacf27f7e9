//! Routing-decision and enrichment shapes.

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Destination channel identifier, opaque to this crate.
///
/// In production these are messenger chat IDs; tests and defaults use
/// readable handles like `@infra-sre`.
pub type ChannelId = String;

/// The resolver's output, handed to an external delivery collaborator.
///
/// Invariant: `chat_id` is `None` if and only if no rule in the fallback
/// chain matched (or the phishing gate fired), in which case
/// `fallback_reason` is populated and `routing_confidence` is `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingSuggestion {
    /// Destination channel, `None` when no route was found.
    pub chat_id: Option<ChannelId>,

    /// How specific the matched resolution step was, in `[0, 1]`.
    pub routing_confidence: f64,

    /// Why no channel was produced; present iff `chat_id` is `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,

    /// AI urgency when it disagrees with the grammar-derived priority.
    /// The discrepancy is surfaced, never silently resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_priority_override: Option<Level>,

    /// Human-readable explanation of which resolution step fired and why.
    pub reasoning: String,
}

/// AI-analysis enrichment signal consumed by the resolver.
///
/// Only these two fields are read; the producing model is an external
/// collaborator and its other outputs are ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// Model-assessed urgency of the message.
    pub urgency: Level,

    /// Phishing likelihood in `[0, 1]`.
    pub phishing_risk: f64,
}
