//! Bidirectional mapping between addresses and grammar records.

use regex::Regex;
use std::sync::LazyLock;

use mailgram_models::vocab::{DEFAULT_DOMAIN_SUFFIX, DEFAULT_HIERARCHY, DEFAULT_META};
use mailgram_models::{GrammarConfig, GrammarParseResult, Level};

use crate::error::{GrammarError, Result};
use crate::validate::{check_field, check_state_id, Field};

/// Regex for a syntactically well-formed email address.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Priority markers checked against `meta` by substring containment.
/// First match wins, so earlier markers take precedence when `meta`
/// contains several.
const PRIORITY_MARKERS: &[(&str, Level)] = &[
    ("p0", Level::Critical),
    ("critical", Level::Critical),
    ("urgent", Level::Critical),
    ("p1", Level::High),
    ("high", Level::High),
    ("p2", Level::Medium),
    ("normal", Level::Medium),
    ("p3", Level::Low),
    ("low", Level::Low),
];

/// Derives priority from the `meta` segment alone.
///
/// Substring containment against the ordered marker list; anything
/// without a recognized marker falls through to `Level::Medium`.
///
/// Note: priority reads only `meta` and severity reads only `hierarchy`.
/// An address like `infra.sre.alert.p0.cf@...` therefore derives
/// priority `medium` even though its hierarchy clearly signals p0. This
/// matches the long-standing production behavior and must not be
/// changed without product sign-off.
pub fn derive_priority(meta: &str) -> Level {
    for (marker, level) in PRIORITY_MARKERS {
        if meta.contains(marker) {
            return *level;
        }
    }
    Level::Medium
}

/// Derives severity from the `hierarchy` segment alone.
///
/// Exact match (not substring) against the four-tier scale, with
/// `Level::Medium` as the fallback for anything unrecognized,
/// `"general"` included.
pub fn derive_severity(hierarchy: &str) -> Level {
    match hierarchy {
        "p0" | "critical" => Level::Critical,
        "p1" | "high" | "urgent" => Level::High,
        "p2" | "normal" => Level::Medium,
        "p3" | "low" => Level::Low,
        _ => Level::Medium,
    }
}

/// The address grammar: parses addresses into structured records and
/// generates addresses from validated configs.
///
/// The domain suffix is only used by generation; parsing accepts any
/// well-formed email address regardless of its domain.
#[derive(Debug, Clone)]
pub struct AddressGrammar {
    domain_suffix: String,
}

impl Default for AddressGrammar {
    fn default() -> Self {
        Self {
            domain_suffix: DEFAULT_DOMAIN_SUFFIX.to_string(),
        }
    }
}

impl AddressGrammar {
    /// Creates a grammar with the default domain suffix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain suffix appended by `generate`.
    pub fn with_domain_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.domain_suffix = suffix.into();
        self
    }

    /// Parses an address into a structured grammar record.
    ///
    /// Never panics and never returns `Err`: every failure is folded into
    /// the result as `valid: false` with a user-displayable `error`. On
    /// failure the segment fields are best-effort partials and must not
    /// be trusted by callers.
    pub fn parse(&self, address: &str) -> GrammarParseResult {
        if !EMAIL_REGEX.is_match(address) {
            return GrammarParseResult::invalid(GrammarError::InvalidFormat.to_string());
        }

        let Some((local_part, _)) = address.split_once('@') else {
            return GrammarParseResult::invalid(GrammarError::InvalidFormat.to_string());
        };

        let local_part = local_part.to_lowercase();
        let segments: Vec<&str> = local_part.split('.').collect();

        if segments.len() < 3 {
            return GrammarParseResult::invalid(GrammarError::InsufficientParts.to_string());
        }
        if segments.len() > 6 {
            return GrammarParseResult::invalid(GrammarError::TooManyParts.to_string());
        }

        // 3-6 segments, back-filling documented defaults for the tail.
        let domain = segments[0];
        let scope = segments[1];
        let kind = segments[2];
        let hierarchy = segments.get(3).copied().unwrap_or(DEFAULT_HIERARCHY);
        let meta = segments.get(4).copied().unwrap_or(DEFAULT_META);
        let state_id = segments.get(5).copied().unwrap_or("");

        let checks = [
            (Field::Domain, domain),
            (Field::Scope, scope),
            (Field::Type, kind),
            (Field::Hierarchy, hierarchy),
            (Field::Meta, meta),
        ];
        let error = checks
            .iter()
            .find_map(|&(field, value)| check_field(field, value).err());

        GrammarParseResult {
            valid: error.is_none(),
            domain: domain.to_string(),
            scope: scope.to_string(),
            kind: kind.to_string(),
            hierarchy: hierarchy.to_string(),
            meta: meta.to_string(),
            state_id: state_id.to_string(),
            priority: derive_priority(meta),
            severity: derive_severity(hierarchy),
            error: error.map(|e| e.to_string()),
        }
    }

    /// Generates an address from a config.
    ///
    /// Every field is validated with the same predicate `parse` uses, so
    /// generation fails outright (never emits a partial address) and any
    /// address it does emit round-trips through `parse` losslessly.
    pub fn generate(&self, config: &GrammarConfig) -> Result<String> {
        check_field(Field::Domain, &config.domain)?;
        check_field(Field::Scope, &config.scope)?;
        check_field(Field::Type, &config.kind)?;
        check_field(Field::Hierarchy, &config.hierarchy)?;
        check_field(Field::Meta, &config.meta)?;

        let mut local_part = format!(
            "{}.{}.{}.{}.{}",
            config.domain, config.scope, config.kind, config.hierarchy, config.meta
        );

        if let Some(state_id) = config.state_id.as_deref() {
            if !state_id.is_empty() {
                check_state_id(state_id)?;
                local_part.push('.');
                local_part.push_str(state_id);
            }
        }

        Ok(format!("{}@{}", local_part, self.domain_suffix))
    }
}
