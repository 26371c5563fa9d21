//! End-to-end tests for the find-keyword rule behind the host boundary.
//!
//! Drives the rule the way the host engine does: a dispatch table built once
//! from rule manifests, then a file-ordered token stream routed through it.

use pretty_assertions::assert_eq;
use srclint_rule::{Diagnostic, Rule, Span, Token, TokenCategory};
use srclint_rule_find_keyword::{FindKeywordConfig, FindKeywordRule};

/// Minimal stand-in for the host scan loop.
///
/// Manifests are collected once up front; each token is then offered only to
/// the rules registered for its category, in stream order.
fn scan(rules: &[Box<dyn Rule>], tokens: &[Token]) -> Vec<Diagnostic> {
    let manifests: Vec<_> = rules.iter().map(|rule| rule.manifest()).collect();

    let mut diagnostics = Vec::new();
    for token in tokens {
        for (rule, manifest) in rules.iter().zip(&manifests) {
            if manifest.handles(token.category) {
                diagnostics.extend(rule.check(token));
            }
        }
    }
    diagnostics
}

fn default_rules() -> Vec<Box<dyn Rule>> {
    let rule = FindKeywordRule::new(FindKeywordConfig::default())
        .expect("default keywords compile");
    vec![Box::new(rule)]
}

#[test]
fn scan_reports_diagnostics_in_file_order() {
    let tokens = vec![
        Token::comment("// TODO: parse headers", Span::new(0, 22)),
        Token::new(TokenCategory::Whitespace, "\n\n", Span::new(22, 24)),
        Token::comment("// plain comment", Span::new(24, 40)),
        Token::comment("// fixme: off by one", Span::new(41, 61)),
    ];

    let diagnostics = scan(&default_rules(), &tokens);

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].span, Span::new(0, 22));
    assert_eq!(
        diagnostics[0].message(),
        "Comment contains a discouraged keyword \"parse headers\""
    );
    assert_eq!(diagnostics[1].span, Span::new(41, 61));
    assert_eq!(
        diagnostics[1].message(),
        "Comment contains a discouraged keyword \"off by one\""
    );
}

#[test]
fn dispatch_skips_unregistered_categories() {
    let tokens = vec![
        Token::new(TokenCategory::StringLiteral, "\"todo in string\"", Span::new(0, 16)),
        Token::new(TokenCategory::Whitespace, " todo ", Span::new(16, 22)),
    ];

    let diagnostics = scan(&default_rules(), &tokens);

    assert!(diagnostics.is_empty());
}

#[test]
fn doc_comments_are_dispatched_to_the_rule() {
    let tokens = vec![Token::new(
        TokenCategory::DocComment,
        "/// hack: drop once upstream fix lands",
        Span::new(0, 38),
    )];

    let diagnostics = scan(&default_rules(), &tokens);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "Found");
    assert_eq!(
        diagnostics[0].param.as_deref(),
        Some("drop once upstream fix lands")
    );
}

#[test]
fn host_configured_rule_over_json_options() {
    let rule = FindKeywordRule::from_value(serde_json::json!({
        "keywords": ["deprecated"]
    }))
    .expect("valid options");
    let rules: Vec<Box<dyn Rule>> = vec![Box::new(rule)];

    let tokens = vec![
        Token::comment("// DEPRECATED: use v2 endpoint", Span::new(0, 30)),
        Token::comment("// todo is no longer configured", Span::new(31, 62)),
    ];

    let diagnostics = scan(&rules, &tokens);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message(),
        "Comment contains a discouraged keyword \"use v2 endpoint\""
    );
}

#[test]
fn diagnostic_payload_survives_serialization_to_the_sink() {
    let tokens = vec![Token::comment("// TODO: fix this.", Span::new(7, 25))];

    let diagnostics = scan(&default_rules(), &tokens);
    let json = serde_json::to_string(&diagnostics).unwrap();
    let roundtrip: Vec<Diagnostic> = serde_json::from_str(&json).unwrap();

    assert_eq!(roundtrip, diagnostics);
    assert_eq!(roundtrip[0].code, "Found");
    assert_eq!(roundtrip[0].param.as_deref(), Some("fix this"));
    assert_eq!(roundtrip[0].span, Span::new(7, 25));
}

#[test]
fn one_rule_instance_serves_parallel_file_scans() {
    let rule = FindKeywordRule::new(FindKeywordConfig::default())
        .expect("default keywords compile");

    let files: Vec<Vec<Token>> = (0..4)
        .map(|i| {
            vec![
                Token::comment(format!("// todo: file number {i}"), Span::new(0, 22)),
                Token::comment("// nothing to report", Span::new(23, 43)),
            ]
        })
        .collect();

    let rule = &rule;
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = files
            .iter()
            .map(|tokens| {
                scope.spawn(move || tokens.iter().filter_map(|token| rule.check(token)).count())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(counts, vec![1, 1, 1, 1]);
}
