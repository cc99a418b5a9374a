//! Utility macros.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Used by the lexer and by tests that assemble AST nodes by hand.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text, anything convertible into a `String`
/// * `$span` - The source span (defaults to an empty span at offset zero)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42", Span::new(0, 2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: ::std::string::String::from($literal),
            span: $span,
        }
    };
    ($kind:expr, $literal:expr) => {
        $crate::MK_TOKEN!($kind, $literal, $crate::Span::null())
    };
}
