//! Error types for grammar operations.

use thiserror::Error;

/// Errors that can occur while parsing or generating a grammar address.
///
/// `parse` never surfaces these as `Err` — it folds the display form into
/// the result's `error` field so callers can render it directly.
/// `generate` returns them explicitly and never emits a partial address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The input is not a syntactically well-formed email address.
    #[error("Invalid email format")]
    InvalidFormat,

    /// The local-part has fewer than the three required segments.
    #[error("Insufficient grammar parts")]
    InsufficientParts,

    /// The local-part has more than the six segments the grammar allows.
    #[error("Too many grammar parts (at most 6 allowed)")]
    TooManyParts,

    /// A segment is not in its controlled vocabulary.
    #[error("Invalid {field} '{value}': allowed values are [{}]", .allowed.join(", "))]
    InvalidField {
        /// Which segment failed (`domain`, `scope`, `type`, `hierarchy`, `meta`).
        field: &'static str,
        /// The offending value.
        value: String,
        /// The controlled vocabulary for the field.
        allowed: &'static [&'static str],
    },

    /// A state ID contains characters the grammar cannot round-trip.
    #[error("Invalid state_id '{value}': must be lowercase alphanumeric")]
    InvalidStateId {
        /// The offending value.
        value: String,
    },
}

/// Result type alias for grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;
