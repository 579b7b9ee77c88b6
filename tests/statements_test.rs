// Literals, statement lists, blocks and comment handling

mod common;

use common::{id, num, parse_ok, single_expression, statements};
use whisker::ast::factory::*;

#[test]
fn test_numeric_literal() {
    assert_eq!(parse_ok("42;"), single_expression(num(42.0)));
}

#[test]
fn test_string_literal_either_quote_style() {
    let expected = single_expression(string_literal("Hello"));

    assert_eq!(parse_ok(r#""Hello";"#), expected);
    assert_eq!(parse_ok("'Hello';"), expected);
}

#[test]
fn test_string_literal_keeps_inner_text_verbatim() {
    assert_eq!(
        parse_ok(r#"'say "hi" // not a comment';"#),
        single_expression(string_literal(r#"say "hi" // not a comment"#))
    );
}

#[test]
fn test_boolean_and_null_literals() {
    assert_eq!(
        parse_ok("true; false; null;"),
        statements(vec![
            expression_statement(boolean_literal(true)),
            expression_statement(boolean_literal(false)),
            expression_statement(null_literal()),
        ])
    );
}

#[test]
fn test_multiple_statements_with_comments() {
    let source = r#"

    /**
     * Documentation comment:
     */
    "Hello";

    // Number
    42;

    "#;

    assert_eq!(
        parse_ok(source),
        statements(vec![
            expression_statement(string_literal("Hello")),
            expression_statement(num(42.0)),
        ])
    );
}

#[test]
fn test_empty_statement() {
    assert_eq!(parse_ok(";"), statements(vec![empty_statement()]));
}

#[test]
fn test_empty_block() {
    assert_eq!(parse_ok("{ }"), statements(vec![block_statement(vec![]).into()]));
}

#[test]
fn test_nested_blocks() {
    let source = r#"
        {
            42;
            {
                "Hello";
            }
        }
    "#;

    assert_eq!(
        parse_ok(source),
        statements(vec![block_statement(vec![
            expression_statement(num(42.0)),
            block_statement(vec![expression_statement(string_literal("Hello"))]).into(),
        ])
        .into()])
    );
}

#[test]
fn test_comments_and_whitespace_are_transparent() {
    let plain = "let x = a.b(1, 2) + 3; if (x) { y = -x; } else ;";
    let noisy = r#"
        let /* a */ x // b
            = a . /* c */ b ( 1 ,
            2 ) + 3 ;
        if ( x ) /* d */ { y = - x ; }
        // e
        else ;
    "#;

    assert_eq!(parse_ok(plain), parse_ok(noisy));
}

#[test]
fn test_parser_instance_is_reusable() {
    let mut parser = whisker::Parser::new();

    assert_eq!(parser.parse("1;").unwrap(), single_expression(num(1.0)));
    assert_eq!(parser.parse("x;").unwrap(), single_expression(id("x")));
}

#[test]
fn test_parser_reusable_after_error() {
    let mut parser = whisker::Parser::new();

    assert!(parser.parse("1 +;").is_err());
    assert_eq!(parser.parse("2;").unwrap(), single_expression(num(2.0)));
}
