//! Field validation shared by the parser and the generator.
//!
//! A single predicate (`check_field`) backs `parse`, `generate`, and the
//! partial validation entry point, which is what guarantees the
//! round-trip invariant between the two directions.

use serde::{Deserialize, Serialize};

use mailgram_models::vocab::{DOMAINS, HIERARCHIES, META_PATTERNS, SCOPES, TYPES};

use crate::error::{GrammarError, Result};
use crate::suggest::closest_match;

/// An enumerable grammar segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First segment: team namespace.
    Domain,
    /// Second segment: role or process.
    Scope,
    /// Third segment: event class.
    Type,
    /// Fourth segment: urgency tier.
    Hierarchy,
    /// Fifth segment: source-system or priority pattern.
    Meta,
}

impl Field {
    /// The field name used in error messages and suggestion records.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Domain => "domain",
            Field::Scope => "scope",
            Field::Type => "type",
            Field::Hierarchy => "hierarchy",
            Field::Meta => "meta",
        }
    }

    /// The controlled vocabulary (or recognized pattern list) for the field.
    pub fn allowed(&self) -> &'static [&'static str] {
        match self {
            Field::Domain => DOMAINS,
            Field::Scope => SCOPES,
            Field::Type => TYPES,
            Field::Hierarchy => HIERARCHIES,
            Field::Meta => META_PATTERNS,
        }
    }

    /// Whether `value` is acceptable for this field.
    ///
    /// Meta is pattern-recognized by substring containment; every other
    /// field is an exact vocabulary membership check.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Field::Meta => META_PATTERNS.iter().any(|pattern| value.contains(pattern)),
            _ => self.allowed().contains(&value),
        }
    }
}

/// Validates one field value, producing the structured error on failure.
pub fn check_field(field: Field, value: &str) -> Result<()> {
    if field.accepts(value) {
        Ok(())
    } else {
        Err(GrammarError::InvalidField {
            field: field.name(),
            value: value.to_string(),
            allowed: field.allowed(),
        })
    }
}

/// Validates a state ID for round-trip safety.
///
/// State IDs are free-form but must stay within the segment character
/// class (lowercase alphanumeric) or the generated address would not
/// parse back.
pub fn check_state_id(value: &str) -> Result<()> {
    let ok = !value.is_empty()
        && value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(GrammarError::InvalidStateId {
            value: value.to_string(),
        })
    }
}

/// A partial set of grammar components for incremental validation.
///
/// Only supplied fields are checked, which supports UIs validating one
/// segment at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrammarComponents {
    /// Team namespace, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Role or process, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Event class, if supplied.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Urgency tier, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<String>,
    /// Source-system or priority pattern, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

/// A typo-correction proposal for one invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    /// Which field the suggestion applies to.
    pub field: String,
    /// The value the caller supplied.
    pub value: String,
    /// The closest vocabulary entry by edit distance.
    pub suggestion: String,
}

/// Outcome of partial validation.
///
/// `error` carries the first failure message for callers that render a
/// single line; `errors` carries every failure; `suggestions` proposes
/// the closest vocabulary entry for each invalid enumerable field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when every supplied field passed.
    pub valid: bool,
    /// First failure message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// All failure messages, in field order.
    pub errors: Vec<String>,
    /// Closest-match proposals for invalid fields.
    pub suggestions: Vec<FieldSuggestion>,
}

/// Validates whatever subset of fields is supplied, collecting every
/// failure rather than short-circuiting on the first.
pub fn validate_components(components: &GrammarComponents) -> ValidationResult {
    let supplied = [
        (Field::Domain, components.domain.as_deref()),
        (Field::Scope, components.scope.as_deref()),
        (Field::Type, components.kind.as_deref()),
        (Field::Hierarchy, components.hierarchy.as_deref()),
        (Field::Meta, components.meta.as_deref()),
    ];

    let mut errors = Vec::new();
    let mut suggestions = Vec::new();

    for (field, value) in supplied {
        let Some(value) = value else { continue };
        if let Err(err) = check_field(field, value) {
            errors.push(err.to_string());
            if let Some(candidate) = closest_match(field.allowed(), value) {
                suggestions.push(FieldSuggestion {
                    field: field.name().to_string(),
                    value: value.to_string(),
                    suggestion: candidate.to_string(),
                });
            }
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        error: errors.first().cloned(),
        errors,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_field_accepts_vocabulary_members() {
        assert!(check_field(Field::Domain, "infra").is_ok());
        assert!(check_field(Field::Scope, "oncall").is_ok());
        assert!(check_field(Field::Type, "alert").is_ok());
        assert!(check_field(Field::Hierarchy, "p0").is_ok());
    }

    #[test]
    fn test_check_field_rejects_unknown_values() {
        let err = check_field(Field::Domain, "bogus").unwrap_err();
        assert!(matches!(
            err,
            GrammarError::InvalidField { field: "domain", .. }
        ));
    }

    #[test]
    fn test_meta_accepts_substring_patterns() {
        // "gh" is recognized on its own and inside a larger marker.
        assert!(check_field(Field::Meta, "gh").is_ok());
        assert!(check_field(Field::Meta, "ghp0").is_ok());
        assert!(check_field(Field::Meta, "zzz").is_err());
    }

    #[test]
    fn test_check_state_id() {
        assert!(check_state_id("inc123").is_ok());
        assert!(check_state_id("pr45").is_ok());
        assert!(check_state_id("").is_err());
        assert!(check_state_id("INC123").is_err());
        assert!(check_state_id("inc.123").is_err());
    }

    #[test]
    fn test_validate_components_collects_all_errors() {
        let components = GrammarComponents {
            domain: Some("bogus".to_string()),
            scope: Some("nope".to_string()),
            kind: Some("alert".to_string()),
            hierarchy: None,
            meta: None,
        };
        let result = validate_components(&components);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.error.as_deref(), Some(result.errors[0].as_str()));
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_validate_components_suggests_closest_entry() {
        let components = GrammarComponents {
            domain: Some("infr".to_string()),
            ..GrammarComponents::default()
        };
        let result = validate_components(&components);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].field, "domain");
        assert_eq!(result.suggestions[0].suggestion, "infra");
    }

    #[test]
    fn test_validation_result_json_shape() {
        // The validation result is rendered directly by correction UIs,
        // so its JSON field names are a contract.
        let components = GrammarComponents {
            domain: Some("infr".to_string()),
            ..GrammarComponents::default()
        };
        let result = validate_components(&components);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], json["errors"][0]);
        assert_eq!(json["suggestions"][0]["field"], "domain");
        assert_eq!(json["suggestions"][0]["value"], "infr");
        assert_eq!(json["suggestions"][0]["suggestion"], "infra");

        // A clean result omits `error` entirely.
        let clean = serde_json::to_value(validate_components(&GrammarComponents::default())).unwrap();
        assert_eq!(clean["valid"], true);
        assert!(clean.get("error").is_none());
    }

    #[test]
    fn test_components_deserialize_with_type_alias() {
        let components: GrammarComponents =
            serde_json::from_str(r#"{"type":"alert","domain":"infra"}"#).unwrap();
        assert_eq!(components.kind.as_deref(), Some("alert"));
        assert_eq!(components.domain.as_deref(), Some("infra"));
        assert!(components.scope.is_none());
    }

    #[test]
    fn test_validate_components_empty_input_is_valid() {
        let result = validate_components(&GrammarComponents::default());
        assert!(result.valid);
        assert!(result.error.is_none());
        assert!(result.errors.is_empty());
        assert!(result.suggestions.is_empty());
    }
}
