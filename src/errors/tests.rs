//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Span;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::RBrace,
        },
        Span::new(10, 11),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::IntegerParse {
            literal: "99999999999999999999".to_string(),
        },
        Span::new(42, 62),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_span(), Span::new(42, 62));
}

#[test]
fn test_error_messages() {
    let cases = [
        (
            ErrorImpl::UnexpectedPeek {
                expected: TokenKind::Ident,
                actual: TokenKind::Assign,
            },
            "expected next token to be IDENT, got = instead",
        ),
        (
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Semicolon,
            },
            "no prefix parse function for ; found",
        ),
        (
            ErrorImpl::IntegerParse {
                literal: "123".to_string(),
            },
            "could not parse 123 as integer",
        ),
    ];

    for (error_impl, message) in cases {
        let error = Error::new(error_impl, Span::null());
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn test_unexpected_peek_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeek {
            expected: TokenKind::Assign,
            actual: TokenKind::Int,
        },
        Span::null(),
    );

    assert_eq!(error.get_error_name(), "UnexpectedPeek");
    assert_eq!(error.get_tip().to_string(), "expected `=`, found `INT`");
}

#[test]
fn test_missing_delimiter_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeek {
            expected: TokenKind::RParen,
            actual: TokenKind::EOF,
        },
        Span::null(),
    );

    assert_eq!(error.get_tip().to_string(), "is a closing delimiter missing?");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::RBrace,
        },
        Span::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        Span::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
