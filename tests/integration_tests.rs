//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser to a reconstructed program or rendered diagnostics.

use monkey::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
    parse, render_error, tokenize, Lexer, Parser,
};

#[test]
fn test_tokenize_and_parse_agree() {
    let source = "let add = fn(a, b) { a + b };\nadd(1, 2 * 3);";

    let tokens = tokenize(source);
    assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Let));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));

    let (program, errors) = parse(source);
    assert!(errors.is_empty());
    assert_eq!(
        program.to_string(),
        "let add = fn(a, b) { (a + b) };\nadd(1, (2 * 3))"
    );
}

#[test]
fn test_parse_program_with_closures() {
    let source = "
let newAdder = fn(x) {
    fn(y) { x + y };
};
let addTwo = newAdder(2);
return addTwo(3) == 5;
";

    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(), "{:?}", parser.error_messages());
    assert_eq!(program.statements.len(), 3);

    let Stmt::Let(new_adder) = &program.statements[0] else {
        panic!("expected let statement");
    };
    let Expr::Function(outer) = &new_adder.value else {
        panic!("expected function literal");
    };
    assert_eq!(outer.parameters.len(), 1);
    assert!(matches!(
        &outer.body.statements[0],
        Stmt::Expression(stmt) if matches!(stmt.expression, Expr::Function(_))
    ));

    assert_eq!(
        program.statements[2].to_string(),
        "return (addTwo(3) == 5);"
    );
}

#[test]
fn test_parse_many_sources_independently() {
    let sources = ["1 + 2", "let x = 5;", "if (a) { b } else { c }", "fn() {}"];

    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || {
                let (program, errors) = parse(&source);
                (program.to_string(), errors.len())
            })
        })
        .collect();

    let results: Vec<(String, usize)> = handles
        .into_iter()
        .map(|handle| handle.join().expect("parser thread panicked"))
        .collect();

    assert_eq!(
        results,
        vec![
            ("(1 + 2)".to_string(), 0),
            ("let x = 5;".to_string(), 0),
            ("if a { b } else { c }".to_string(), 0),
            ("fn() { }".to_string(), 0),
        ]
    );
}

#[test]
fn test_malformed_input_renders_diagnostics() {
    let source = "let x = 1;\nlet y 2;\n";
    let (program, errors) = parse(source);

    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements[0].to_string(), "let x = 1;");

    let rendered = render_error(&errors[0], source, "test.mk");
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines[0],
        "Error: UnexpectedPeek (expected `=`, found `INT`)"
    );
    assert_eq!(lines[1], "-> test.mk");
    assert_eq!(lines[3], "2 | let y 2;");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_error_at_end_of_input_renders() {
    let source = "add(1, 2";
    let (_, errors) = parse(source);

    assert_eq!(
        errors[0].to_string(),
        "expected next token to be ), got EOF instead"
    );

    let rendered = render_error(&errors[0], source, "test.mk");
    assert!(rendered.contains("1 | add(1, 2"));
}
