//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with a single character of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token span tracking for error reporting
//! - Whitespace skipping and illegal character reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod property_tests;
