use pattern_sorcerer_rs::{Token, TokenKind, tokenize};
use pretty_assertions::assert_eq;

fn pairs(tokens: &[Token]) -> Vec<(&str, TokenKind)> {
    tokens.iter().map(|t| (t.text.as_str(), t.kind)).collect()
}

#[test]
fn tokenize_when_empty_pattern_then_returns_no_tokens() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_when_shorthand_classes_quantified_then_classifies_each() {
    let tokens = tokenize(r"\d+\w*");
    assert_eq!(
        pairs(&tokens),
        vec![
            (r"\d", TokenKind::CharacterClass),
            ("+", TokenKind::Quantifier),
            (r"\w", TokenKind::CharacterClass),
            ("*", TokenKind::Quantifier),
        ]
    );
    assert_eq!(tokens[2].range, (3, 2));
}

#[test]
fn tokenize_when_anchored_pattern_then_anchors_bound_literals() {
    let tokens = tokenize("^start.*end$");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("^", TokenKind::Anchor),
            ("start.", TokenKind::Literal),
            ("*", TokenKind::Quantifier),
            ("end", TokenKind::Literal),
            ("$", TokenKind::Anchor),
        ]
    );
}

#[test]
fn tokenize_when_escaped_metacharacters_then_emits_escape_sequences() {
    let tokens = tokenize(r"a\.b\(\n");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("a", TokenKind::Literal),
            (r"\.", TokenKind::EscapeSequence),
            ("b", TokenKind::Literal),
            (r"\(", TokenKind::EscapeSequence),
            (r"\n", TokenKind::EscapeSequence),
        ]
    );
}

#[test]
fn tokenize_when_brace_quantifier_then_consumes_through_closing_brace() {
    let tokens = tokenize("a{2,4}b{x}");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("a", TokenKind::Literal),
            ("{2,4}", TokenKind::Quantifier),
            ("b", TokenKind::Literal),
            ("{x}", TokenKind::Quantifier),
        ]
    );
}

#[test]
fn tokenize_when_brace_unterminated_then_quantifier_runs_to_end() {
    let tokens = tokenize("a{3,");
    assert_eq!(
        pairs(&tokens),
        vec![("a", TokenKind::Literal), ("{3,", TokenKind::Quantifier)]
    );
}

#[test]
fn tokenize_when_group_and_alternation_then_splits_delimiters() {
    let tokens = tokenize("(cat|dog)");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("(", TokenKind::CaptureGroup),
            ("cat", TokenKind::Literal),
            ("|", TokenKind::Alternation),
            ("dog", TokenKind::Literal),
            (")", TokenKind::CaptureGroup),
        ]
    );
}

#[test]
fn tokenize_when_lookahead_then_opener_is_plain_group_plus_quantifier() {
    let tokens = tokenize("(?=x)");
    assert_eq!(
        pairs(&tokens),
        vec![
            ("(", TokenKind::CaptureGroup),
            ("?", TokenKind::Quantifier),
            ("=x", TokenKind::Literal),
            (")", TokenKind::CaptureGroup),
        ]
    );
}

#[test]
fn tokenize_when_character_set_contains_escaped_bracket_then_single_set_token() {
    let tokens = tokenize(r"[a\]-]+");
    assert_eq!(
        pairs(&tokens),
        vec![
            (r"[a\]-]", TokenKind::CharacterSet),
            ("+", TokenKind::Quantifier),
        ]
    );
}

#[test]
fn tokenize_when_character_set_unterminated_then_runs_to_end() {
    let tokens = tokenize("x[abc");
    assert_eq!(
        pairs(&tokens),
        vec![("x", TokenKind::Literal), ("[abc", TokenKind::CharacterSet)]
    );
}

#[test]
fn tokenize_when_set_contains_metacharacters_then_they_stay_inside() {
    let tokens = tokenize("[*+?(|)]");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::CharacterSet);
}

#[test]
fn tokenize_when_unicode_literals_then_ranges_slice_pattern() {
    let pattern = "ü+日本$";
    for token in tokenize(pattern) {
        assert_eq!(&pattern[token.byte_range()], token.text);
    }
}

#[test]
fn tokenize_never_emits_special_kind() {
    let pattern = r"^(?:a|b)*[c-d]{1,2}\s\x\.$";
    assert!(tokenize(pattern).iter().all(|t| t.kind != TokenKind::Special));
}

#[test]
fn token_kind_names_are_stable() {
    let names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        vec![
            "characterClass",
            "quantifier",
            "anchor",
            "captureGroup",
            "escapeSequence",
            "alternation",
            "characterSet",
            "literal",
            "special",
        ]
    );
}
