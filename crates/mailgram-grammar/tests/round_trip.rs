//! Round-trip and purity properties of the address grammar.

use mailgram_grammar::{derive_priority, derive_severity, AddressGrammar};
use mailgram_models::{GrammarConfig, Level};

#[test]
fn test_generate_then_parse_reproduces_every_field() {
    let grammar = AddressGrammar::new();
    let configs = vec![
        GrammarConfig::new("infra", "sre", "alert", "p0", "cf"),
        GrammarConfig::new("support", "customer", "issue", "high", "urgent"),
        GrammarConfig::new("qa", "dev", "pr", "p2", "gh").with_state_id("pr123"),
        GrammarConfig::new("security", "triage", "incident", "critical", "p0")
            .with_state_id("inc42"),
        GrammarConfig::minimal("sales", "customer", "question"),
    ];

    for config in configs {
        let address = grammar.generate(&config).expect("valid config generates");
        let parsed = grammar.parse(&address);

        assert!(parsed.valid, "round-trip of {} failed: {:?}", address, parsed.error);
        assert_eq!(parsed.domain, config.domain);
        assert_eq!(parsed.scope, config.scope);
        assert_eq!(parsed.kind, config.kind);
        assert_eq!(parsed.hierarchy, config.hierarchy);
        assert_eq!(parsed.meta, config.meta);
        assert_eq!(parsed.state_id, config.state_id.clone().unwrap_or_default());
        // Derived tiers are recomputed, not copied.
        assert_eq!(parsed.priority, derive_priority(&config.meta));
        assert_eq!(parsed.severity, derive_severity(&config.hierarchy));
    }
}

#[test]
fn test_parse_is_idempotent_over_its_own_output() {
    let grammar = AddressGrammar::new();
    let first = grammar.parse("qa.dev.pr.p2.gh.pr123@cloudflare.com");
    assert!(first.valid);

    // Re-serialize the parsed record and parse again.
    let config = GrammarConfig::new(
        first.domain.clone(),
        first.scope.clone(),
        first.kind.clone(),
        first.hierarchy.clone(),
        first.meta.clone(),
    )
    .with_state_id(first.state_id.clone());
    let reserialized = grammar.generate(&config).expect("parsed output regenerates");
    let second = grammar.parse(&reserialized);

    assert_eq!(first, second);
}

#[test]
fn test_priority_is_a_pure_function_of_meta() {
    let grammar = AddressGrammar::new();
    // Same meta, different everything else: identical priority.
    let a = grammar.parse("infra.sre.alert.p0.urgent@cloudflare.com");
    let b = grammar.parse("sales.customer.question.low.urgent@cloudflare.com");
    assert!(a.valid && b.valid);
    assert_eq!(a.priority, b.priority);
    assert_eq!(a.priority, Level::Critical);
    // Severity still tracks each hierarchy independently.
    assert_eq!(a.severity, Level::Critical);
    assert_eq!(b.severity, Level::Low);
}

#[test]
fn test_generation_error_blocks_partial_addresses() {
    let grammar = AddressGrammar::new();
    let config = GrammarConfig::new("infra", "sre", "alert", "someday", "cf");
    let err = grammar.generate(&config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("hierarchy"));
    assert!(message.contains("someday"));
    assert!(message.contains("p0"));
}
