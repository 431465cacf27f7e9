//! Email-address grammar parser and generator for Mailgram.
//!
//! This crate provides the bidirectional mapping between the dotted
//! micro-language embedded in an email local-part
//! (`domain.scope.type[.hierarchy][.meta][.state_id]@suffix`) and a
//! validated [`GrammarParseResult`](mailgram_models::GrammarParseResult),
//! with typo-correction suggestions on failure.
//!
//! Parsing never panics and never returns `Err`: failures are folded into
//! the result so callers can render them directly. Generation shares the
//! parser's validation predicate, which guarantees that every generated
//! address round-trips losslessly.
//!
//! # Example
//!
//! ```
//! use mailgram_grammar::AddressGrammar;
//!
//! let grammar = AddressGrammar::new();
//! let parsed = grammar.parse("infra.sre.alert.p0.cf@cloudflare.com");
//! assert!(parsed.valid);
//! assert_eq!(parsed.domain, "infra");
//! assert_eq!(parsed.hierarchy, "p0");
//! ```

pub mod error;
pub mod parse;
pub mod suggest;
pub mod validate;

pub use error::{GrammarError, Result};
pub use parse::{derive_priority, derive_severity, AddressGrammar};
pub use suggest::{closest_match, levenshtein};
pub use validate::{
    validate_components, Field, FieldSuggestion, GrammarComponents, ValidationResult,
};
