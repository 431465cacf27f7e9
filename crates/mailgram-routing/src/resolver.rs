//! The routing resolver: ordered fallback chain plus the phishing gate.

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use mailgram_models::vocab::ONCALL_SCOPE;
use mailgram_models::{ChannelId, GrammarParseResult, RoutingSuggestion};

use crate::lookup::Enrichment;
use crate::table::{RoutingTable, TableMatch};

/// Incident identifiers: recognized prefix followed by a numeric suffix.
static INCIDENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^inc(\d+)$").expect("Invalid incident id regex"));

/// Phishing risk above which every routing decision is suppressed.
pub const PHISHING_THRESHOLD: f64 = 0.7;

// Confidence tiers, most to least specific resolution step.
const INCIDENT_CONFIDENCE: f64 = 0.95;
const ONCALL_CONFIDENCE: f64 = 0.9;
const SCOPE_CONFIDENCE: f64 = 0.85;
const DOMAIN_DEFAULT_CONFIDENCE: f64 = 0.75;
const GLOBAL_DEFAULT_CONFIDENCE: f64 = 0.6;

/// One resolved step of the fallback chain, before the phishing gate.
struct ChainMatch {
    chat_id: Option<ChannelId>,
    confidence: f64,
    reasoning: String,
    fallback_reason: Option<String>,
}

/// Maps parsed grammar records to destination channels.
///
/// Stateless per call: each resolution is a pure function of the parsed
/// record, the enrichment, and the table supplied at construction. The
/// only time-varying inputs are the enrichment collaborators, which are
/// owned by the caller.
#[derive(Debug, Clone)]
pub struct Resolver {
    table: RoutingTable,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(RoutingTable::default())
    }
}

impl Resolver {
    /// Creates a resolver over an explicit routing table.
    pub fn new(table: RoutingTable) -> Self {
        Self { table }
    }

    /// Resolves a parsed record to a destination channel, or an explicit
    /// no-route outcome.
    ///
    /// The fallback chain is evaluated in order — incident override,
    /// on-call override, table lookup — and the first definitive match
    /// wins. The phishing gate then runs over whatever matched: no
    /// decision leaves this function without passing it.
    pub fn resolve(
        &self,
        parsed: &GrammarParseResult,
        enrichment: &Enrichment<'_>,
    ) -> RoutingSuggestion {
        let matched = self.run_chain(parsed, enrichment);

        debug!(
            domain = %parsed.domain,
            scope = %parsed.scope,
            from = enrichment.email_from.as_deref().unwrap_or("-"),
            chat_id = matched.chat_id.as_deref().unwrap_or("-"),
            confidence = matched.confidence,
            "Resolved routing chain"
        );

        let suggested_priority_override = enrichment
            .ai
            .filter(|ai| ai.urgency != parsed.priority)
            .map(|ai| ai.urgency);

        // Phishing gate: overrides any matched channel, incident and
        // on-call included.
        if let Some(ai) = &enrichment.ai {
            if ai.phishing_risk > PHISHING_THRESHOLD {
                warn!(
                    phishing_risk = ai.phishing_risk,
                    suppressed = matched.chat_id.as_deref().unwrap_or("-"),
                    "Suppressing routing decision: phishing risk above threshold"
                );
                return RoutingSuggestion {
                    chat_id: None,
                    routing_confidence: 0.0,
                    fallback_reason: Some("high phishing risk".to_string()),
                    suggested_priority_override,
                    reasoning: format!(
                        "phishing risk {:.2} exceeds {:.2}; suppressed decision ({})",
                        ai.phishing_risk, PHISHING_THRESHOLD, matched.reasoning
                    ),
                };
            }
        }

        RoutingSuggestion {
            chat_id: matched.chat_id,
            routing_confidence: matched.confidence,
            fallback_reason: matched.fallback_reason,
            suggested_priority_override,
            reasoning: matched.reasoning,
        }
    }

    /// Evaluates the fallback chain, first definitive match wins.
    fn run_chain(&self, parsed: &GrammarParseResult, enrichment: &Enrichment<'_>) -> ChainMatch {
        // Step 1: incident override from the state ID.
        if !parsed.state_id.is_empty() {
            if let Some(lookup) = enrichment.incidents {
                if let Some(channel) = lookup.resolve(&parsed.state_id) {
                    return ChainMatch {
                        chat_id: Some(channel),
                        confidence: INCIDENT_CONFIDENCE,
                        reasoning: format!(
                            "incident lookup resolved state id '{}'",
                            parsed.state_id
                        ),
                        fallback_reason: None,
                    };
                }
            }
            if let Some(captures) = INCIDENT_ID.captures(&parsed.state_id) {
                let number = &captures[1];
                return ChainMatch {
                    chat_id: Some(format!("@incident-{number}")),
                    confidence: INCIDENT_CONFIDENCE,
                    reasoning: format!(
                        "state id '{}' matches the incident pattern; routed to dedicated channel",
                        parsed.state_id
                    ),
                    fallback_reason: None,
                };
            }
        }

        // Step 2: on-call override, only when a schedule collaborator was
        // supplied; otherwise this step is skipped and the table decides.
        if parsed.scope == ONCALL_SCOPE {
            if let Some(lookup) = enrichment.on_call {
                return match lookup.resolve(&parsed.domain) {
                    Some(channel) => ChainMatch {
                        chat_id: Some(channel),
                        confidence: ONCALL_CONFIDENCE,
                        reasoning: format!(
                            "on-call schedule resolved for domain '{}'",
                            parsed.domain
                        ),
                        fallback_reason: None,
                    },
                    None => ChainMatch {
                        chat_id: Some(lookup.fallback()),
                        confidence: ONCALL_CONFIDENCE,
                        reasoning: format!(
                            "domain '{}' has no on-call mapping; generic on-call channel",
                            parsed.domain
                        ),
                        fallback_reason: None,
                    },
                };
            }
        }

        // Step 3: static table lookup.
        match self.table.lookup(&parsed.domain, &parsed.scope) {
            TableMatch::Scope(channel) => ChainMatch {
                chat_id: Some(channel),
                confidence: SCOPE_CONFIDENCE,
                reasoning: format!(
                    "table match for domain '{}' scope '{}'",
                    parsed.domain, parsed.scope
                ),
                fallback_reason: None,
            },
            TableMatch::DomainDefault(channel) => ChainMatch {
                chat_id: Some(channel),
                confidence: DOMAIN_DEFAULT_CONFIDENCE,
                reasoning: format!(
                    "scope '{}' unmapped; domain '{}' default channel",
                    parsed.scope, parsed.domain
                ),
                fallback_reason: None,
            },
            TableMatch::GlobalDefault(channel) => ChainMatch {
                chat_id: Some(channel),
                confidence: GLOBAL_DEFAULT_CONFIDENCE,
                reasoning: format!("domain '{}' unmapped; global default channel", parsed.domain),
                fallback_reason: None,
            },
            // Step 4: no rule matched (table built without a global default).
            TableMatch::Unrouted => ChainMatch {
                chat_id: None,
                confidence: 0.0,
                reasoning: format!(
                    "no incident or on-call override and no table entry for domain '{}' scope '{}'",
                    parsed.domain, parsed.scope
                ),
                fallback_reason: Some(format!(
                    "no routing rule matched domain '{}' scope '{}'",
                    parsed.domain, parsed.scope
                )),
            },
        }
    }
}
