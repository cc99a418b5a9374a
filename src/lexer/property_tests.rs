//! Property-based tests for the lexer.
//!
//! 1. **Lexer never panics** and the stream always ends with exactly one EOF
//! 2. **Spans stay inside the input** and never overlap
//! 3. **Maximal munch** for identifiers and digit runs
//! 4. **Keyword classification** is total
//! 5. **Single-character operators** map to their fixed kinds

use proptest::prelude::*;

use super::{
    lexer::tokenize,
    tokens::{TokenKind, RESERVED_LOOKUP},
};

const SINGLE_CHARACTER_TOKENS: &[(char, TokenKind)] = &[
    ('=', TokenKind::Assign),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('!', TokenKind::Bang),
    ('*', TokenKind::Asterisk),
    ('/', TokenKind::Slash),
    ('<', TokenKind::Lt),
    ('>', TokenKind::Gt),
    (',', TokenKind::Comma),
    (';', TokenKind::Semicolon),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('{', TokenKind::LBrace),
    ('}', TokenKind::RBrace),
];

proptest! {
    #[test]
    fn lexer_never_panics_and_ends_with_eof(input in "\\PC{0,200}") {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        prop_assert_eq!(
            tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(),
            1
        );
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(input in "[a-z0-9 =!+*(){};,<>\\-/@\\n]{0,120}") {
        let tokens = tokenize(&input);
        let len = input.chars().count();
        let mut previous_end = 0;

        for token in &tokens {
            prop_assert!(token.span.start.0 >= previous_end);
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(token.span.end.0 <= len);
            previous_end = token.span.end.0;
        }
    }

    #[test]
    fn identifiers_are_one_token(ident in "[A-Za-z_][A-Za-z0-9_]{0,30}") {
        let tokens = tokenize(&ident);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].literal, &ident);

        let expected = RESERVED_LOOKUP.get(ident.as_str()).copied().unwrap_or(TokenKind::Ident);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn digit_runs_are_one_int(digits in "[0-9]{1,40}") {
        let tokens = tokenize(&digits);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Int);
        prop_assert_eq!(&tokens[0].literal, &digits);
    }

    #[test]
    fn single_character_operators(index in 0..SINGLE_CHARACTER_TOKENS.len(), pad in "[ \\t\\n]{0,3}") {
        let (ch, kind) = SINGLE_CHARACTER_TOKENS[index];
        let tokens = tokenize(&format!("{}{}{}", pad, ch, pad));
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, kind);
        prop_assert_eq!(&tokens[0].literal, &ch.to_string());
    }
}
