//! Parse-result and generation-config shapes for the address grammar.

use serde::{Deserialize, Serialize};

use crate::level::Level;
use crate::vocab::{DEFAULT_HIERARCHY, DEFAULT_META};

/// The canonical parsed form of a grammar address.
///
/// When `valid` is true, `domain`/`scope`/`kind`/`hierarchy` are members of
/// their controlled vocabularies, `meta` matched at least one recognized
/// pattern, and `priority`/`severity` are derived from `meta` and
/// `hierarchy` respectively. When `valid` is false, `error` is populated
/// and the remaining fields are best-effort partials that callers must not
/// trust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarParseResult {
    /// Whether the address passed full grammar validation.
    pub valid: bool,

    /// Top-level team namespace (first segment).
    pub domain: String,

    /// Role or process within the domain (second segment).
    pub scope: String,

    /// Event class (third segment).
    #[serde(rename = "type")]
    pub kind: String,

    /// Urgency tier segment, `"general"` when omitted.
    pub hierarchy: String,

    /// Source-system or priority-pattern segment, `"normal"` when omitted.
    pub meta: String,

    /// Optional trailing entity identifier, empty when absent.
    pub state_id: String,

    /// Derived from `meta` alone (substring markers, first match wins).
    pub priority: Level,

    /// Derived from `hierarchy` alone (exact match, medium fallback).
    pub severity: Level,

    /// User-displayable failure description, present iff `valid` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GrammarParseResult {
    /// Creates an invalid result carrying only an error description.
    ///
    /// All segment fields are empty and both derived tiers fall back to
    /// `Level::Medium`.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            domain: String::new(),
            scope: String::new(),
            kind: String::new(),
            hierarchy: String::new(),
            meta: String::new(),
            state_id: String::new(),
            priority: Level::Medium,
            severity: Level::Medium,
            error: Some(error.into()),
        }
    }
}

/// Input for address generation: the configuration a caller wants encoded
/// into an address.
///
/// Generation validates every field with the same predicate the parser
/// uses, so any config that generates successfully round-trips through
/// `parse` without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarConfig {
    /// Top-level team namespace.
    pub domain: String,

    /// Role or process within the domain.
    pub scope: String,

    /// Event class.
    #[serde(rename = "type")]
    pub kind: String,

    /// Urgency tier segment.
    pub hierarchy: String,

    /// Source-system or priority-pattern segment.
    pub meta: String,

    /// Optional trailing entity identifier (e.g. `inc123`, `pr45`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
}

impl GrammarConfig {
    /// Creates a config with the required five segments and no state ID.
    pub fn new(
        domain: impl Into<String>,
        scope: impl Into<String>,
        kind: impl Into<String>,
        hierarchy: impl Into<String>,
        meta: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            scope: scope.into(),
            kind: kind.into(),
            hierarchy: hierarchy.into(),
            meta: meta.into(),
            state_id: None,
        }
    }

    /// Creates a 3-segment config, back-filling the documented defaults
    /// for `hierarchy` and `meta`.
    pub fn minimal(
        domain: impl Into<String>,
        scope: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self::new(domain, scope, kind, DEFAULT_HIERARCHY, DEFAULT_META)
    }

    /// Sets the state ID.
    pub fn with_state_id(mut self, state_id: impl Into<String>) -> Self {
        self.state_id = Some(state_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_result_shape() {
        let result = GrammarParseResult::invalid("Invalid email format");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Invalid email format"));
        assert_eq!(result.priority, Level::Medium);
        assert_eq!(result.severity, Level::Medium);
        assert!(result.domain.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = GrammarConfig::new("infra", "sre", "alert", "p0", "cf").with_state_id("inc42");
        assert_eq!(config.domain, "infra");
        assert_eq!(config.state_id.as_deref(), Some("inc42"));
    }

    #[test]
    fn test_minimal_config_backfills_defaults() {
        let config = GrammarConfig::minimal("qa", "dev", "pr");
        assert_eq!(config.hierarchy, "general");
        assert_eq!(config.meta, "normal");
        assert_eq!(config.state_id, None);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let config = GrammarConfig::minimal("qa", "dev", "pr");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "pr");
        assert!(json.get("kind").is_none());
        assert!(json.get("state_id").is_none());
    }
}
