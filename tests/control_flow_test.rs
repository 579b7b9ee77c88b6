// if / while / do-while / for

mod common;

use common::{id, num, parse_ok, statements};
use whisker::ast::factory::*;
use whisker::ast::{Expression, Statement};

fn assign(operator: &str, left: Expression, right: Expression) -> Expression {
    assignment_expression(operator, left, right).expect("valid assignment target")
}

fn empty_block() -> Statement {
    block_statement(vec![]).into()
}

#[test]
fn test_if_with_else() {
    let source = r#"
        if (x) {
            x = 1;
        } else {
            x = 2;
        }
    "#;

    assert_eq!(
        parse_ok(source),
        statements(vec![if_statement(
            id("x"),
            block_statement(vec![expression_statement(assign("=", id("x"), num(1.0)))]).into(),
            Some(block_statement(vec![expression_statement(assign("=", id("x"), num(2.0)))]).into()),
        )])
    );
}

#[test]
fn test_if_without_else() {
    assert_eq!(
        parse_ok("if (x) { x = 1; }"),
        statements(vec![if_statement(
            id("x"),
            block_statement(vec![expression_statement(assign("=", id("x"), num(1.0)))]).into(),
            None,
        )])
    );
}

#[test]
fn test_if_with_unbraced_bodies() {
    assert_eq!(
        parse_ok("if (x) y; else z;"),
        statements(vec![if_statement(
            id("x"),
            expression_statement(id("y")),
            Some(expression_statement(id("z"))),
        )])
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    assert_eq!(
        parse_ok("if (x) if (y) {} else {} else {}"),
        statements(vec![if_statement(
            id("x"),
            if_statement(id("y"), empty_block(), Some(empty_block())),
            Some(empty_block()),
        )])
    );
}

#[test]
fn test_single_else_goes_to_inner_if() {
    assert_eq!(
        parse_ok("if (a) if (b) c; else d;"),
        statements(vec![if_statement(
            id("a"),
            if_statement(
                id("b"),
                expression_statement(id("c")),
                Some(expression_statement(id("d"))),
            ),
            None,
        )])
    );
}

#[test]
fn test_while_loop() {
    let source = r#"
        while (x > 10) {
            x -= 1;
        }
    "#;

    assert_eq!(
        parse_ok(source),
        statements(vec![while_statement(
            binary_expression(">", id("x"), num(10.0)),
            block_statement(vec![expression_statement(assign("-=", id("x"), num(1.0)))]).into(),
        )])
    );
}

#[test]
fn test_do_while_loop() {
    let source = r#"
        do {
            x -= 1;
        } while (x > 10);
    "#;

    let program = parse_ok(source);

    assert_eq!(
        program,
        statements(vec![do_while_statement(
            binary_expression(">", id("x"), num(10.0)),
            block_statement(vec![expression_statement(assign("-=", id("x"), num(1.0)))]).into(),
        )])
    );
    assert!(matches!(program.body[0], Statement::DoWhile { .. }));
}

#[test]
fn test_do_while_requires_semicolon() {
    assert!(whisker::parse("do {} while (x)").is_err());
}

#[test]
fn test_for_loop_with_declarations() {
    let source = r#"
        for (let i = 0, z = 0; i < 10; i += 1) {
            x += 1;
        }
    "#;

    assert_eq!(
        parse_ok(source),
        statements(vec![for_statement(
            Some(
                variable_statement(vec![
                    variable_declaration(identifier("i"), Some(num(0.0))),
                    variable_declaration(identifier("z"), Some(num(0.0))),
                ])
                .into(),
            ),
            Some(binary_expression("<", id("i"), num(10.0))),
            Some(assign("+=", id("i"), num(1.0))),
            block_statement(vec![expression_statement(assign("+=", id("x"), num(1.0)))]).into(),
        )])
    );
}

#[test]
fn test_for_loop_with_expression_init() {
    assert_eq!(
        parse_ok("for (i = 0; i < 3; i += 1) ;"),
        statements(vec![for_statement(
            Some(assign("=", id("i"), num(0.0)).into()),
            Some(binary_expression("<", id("i"), num(3.0))),
            Some(assign("+=", id("i"), num(1.0))),
            empty_statement(),
        )])
    );
}

#[test]
fn test_empty_for_loop() {
    let source = r#"
        for ( ; ; ) {
            x += 1;
        }
    "#;

    assert_eq!(
        parse_ok(source),
        statements(vec![for_statement(
            None,
            None,
            None,
            block_statement(vec![expression_statement(assign("+=", id("x"), num(1.0)))]).into(),
        )])
    );
}
