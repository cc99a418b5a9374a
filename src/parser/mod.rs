//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream of a
//! [`Lexer`](crate::lexer::lexer::Lexer) into a [`Program`](crate::ast::ast::Program).
//! It uses a Pratt parser for expressions with operator precedence and handles:
//!
//! - Statement parsing (let, return, expression and block statements)
//! - Expression parsing (prefix/infix operators, grouping, if, functions, calls)
//! - Error accumulation and statement-level recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
