//! Controlled vocabulary for address-grammar segments.
//!
//! Every enumerable grammar segment is validated against one of these
//! lists. Declaration order matters: typo suggestions tie-break on the
//! first entry achieving the minimum edit distance, and the priority
//! markers are checked first-match-wins.

/// Top-level team namespaces (first grammar segment).
pub const DOMAINS: &[&str] = &[
    "infra", "support", "qa", "dev", "security", "product", "sales",
];

/// Roles or processes within a domain (second grammar segment).
pub const SCOPES: &[&str] = &[
    "sre", "oncall", "dev", "customer", "billing", "triage", "release",
];

/// Event classes (third grammar segment).
pub const TYPES: &[&str] = &[
    "alert", "issue", "pr", "incident", "report", "digest", "question",
];

/// Urgency tiers (fourth grammar segment). Severity is derived from this
/// segment by exact match.
pub const HIERARCHIES: &[&str] = &[
    "p0", "p1", "p2", "p3", "critical", "high", "normal", "low", "general",
];

/// Recognized meta markers (fifth grammar segment). A meta value is valid
/// when it contains at least one of these as a substring; priority is
/// derived from the same containment check.
pub const META_PATTERNS: &[&str] = &[
    "p0", "p1", "p2", "p3", "critical", "urgent", "high", "normal", "low", "gh", "cf", "jira",
    "linear",
];

/// Reserved scope meaning "whoever is currently on call".
pub const ONCALL_SCOPE: &str = "oncall";

/// Default hierarchy back-filled for 3-segment addresses.
pub const DEFAULT_HIERARCHY: &str = "general";

/// Default meta back-filled for 3- and 4-segment addresses.
pub const DEFAULT_META: &str = "normal";

/// Domain suffix appended by the address generator unless overridden.
pub const DEFAULT_DOMAIN_SUFFIX: &str = "cloudflare.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabularies_are_lowercase_alphanumeric() {
        for list in [DOMAINS, SCOPES, TYPES, HIERARCHIES, META_PATTERNS] {
            for entry in list {
                assert!(
                    entry.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                    "vocabulary entry {:?} is not lowercase alphanumeric",
                    entry
                );
            }
        }
    }

    #[test]
    fn test_oncall_is_a_valid_scope() {
        assert!(SCOPES.contains(&ONCALL_SCOPE));
    }

    #[test]
    fn test_defaults_are_valid_segments() {
        assert!(HIERARCHIES.contains(&DEFAULT_HIERARCHY));
        assert!(META_PATTERNS.contains(&DEFAULT_META));
    }
}
