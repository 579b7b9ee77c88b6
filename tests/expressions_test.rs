// Operator precedence, associativity, members and calls

mod common;

use common::{id, num, parse_ok, single_expression};
use whisker::ast::factory::*;
use whisker::ast::Expression;

fn assign(operator: &str, left: Expression, right: Expression) -> Expression {
    assignment_expression(operator, left, right).expect("valid assignment target")
}

#[test]
fn test_additive_is_left_associative() {
    assert_eq!(
        parse_ok("2+3-1;"),
        single_expression(binary_expression(
            "-",
            binary_expression("+", num(2.0), num(3.0)),
            num(1.0),
        ))
    );
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(
        parse_ok("2 + 2 * 2;"),
        single_expression(binary_expression(
            "+",
            num(2.0),
            binary_expression("*", num(2.0), num(2.0)),
        ))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse_ok("(2 + 2) * 2;"),
        single_expression(binary_expression(
            "*",
            binary_expression("+", num(2.0), num(2.0)),
            num(2.0),
        ))
    );
}

#[test]
fn test_multiplicative_chain() {
    assert_eq!(
        parse_ok("8 / 4 * 2;"),
        single_expression(binary_expression(
            "*",
            binary_expression("/", num(8.0), num(4.0)),
            num(2.0),
        ))
    );
}

#[test]
fn test_simple_assignment() {
    assert_eq!(parse_ok("x = 42;"), single_expression(assign("=", id("x"), num(42.0))));
}

#[test]
fn test_chained_assignment_is_right_associative() {
    assert_eq!(
        parse_ok("x = y = 42;"),
        single_expression(assign("=", id("x"), assign("=", id("y"), num(42.0))))
    );
}

#[test]
fn test_compound_assignment() {
    for op in ["+=", "-=", "*=", "/="] {
        let source = format!("x {} 1;", op);

        assert_eq!(parse_ok(&source), single_expression(assign(op, id("x"), num(1.0))));
    }
}

#[test]
fn test_relational_binds_tighter_than_equality() {
    assert_eq!(
        parse_ok("x > 0 == true;"),
        single_expression(binary_expression(
            "==",
            binary_expression(">", id("x"), num(0.0)),
            boolean_literal(true),
        ))
    );

    assert_eq!(
        parse_ok("x > 0 != false;"),
        single_expression(binary_expression(
            "!=",
            binary_expression(">", id("x"), num(0.0)),
            boolean_literal(false),
        ))
    );
}

#[test]
fn test_relational_operators() {
    for op in [">", "<", ">=", "<="] {
        let source = format!("x {} 0;", op);

        assert_eq!(
            parse_ok(&source),
            single_expression(binary_expression(op, id("x"), num(0.0)))
        );
    }
}

#[test]
fn test_additive_binds_tighter_than_relational() {
    assert_eq!(
        parse_ok("x + 5 > 3;"),
        single_expression(binary_expression(
            ">",
            binary_expression("+", id("x"), num(5.0)),
            num(3.0),
        ))
    );
}

#[test]
fn test_logical_and() {
    assert_eq!(
        parse_ok("x > 0 && y <= 1;"),
        single_expression(logical_expression(
            "&&",
            binary_expression(">", id("x"), num(0.0)),
            binary_expression("<=", id("y"), num(1.0)),
        ))
    );
}

#[test]
fn test_logical_or_is_loosest() {
    assert_eq!(
        parse_ok("a || b && c;"),
        single_expression(logical_expression(
            "||",
            id("a"),
            logical_expression("&&", id("b"), id("c")),
        ))
    );
}

#[test]
fn test_assignment_of_logical_expression() {
    assert_eq!(
        parse_ok("ok = a || b;"),
        single_expression(assign("=", id("ok"), logical_expression("||", id("a"), id("b"))))
    );
}

#[test]
fn test_unary_operators() {
    assert_eq!(parse_ok("-x;"), single_expression(unary_expression("-", id("x"))));
    assert_eq!(parse_ok("!x;"), single_expression(unary_expression("!", id("x"))));
}

#[test]
fn test_unary_operators_stack() {
    assert_eq!(
        parse_ok("--x;"),
        single_expression(unary_expression("-", unary_expression("-", id("x"))))
    );
    assert_eq!(
        parse_ok("!!x;"),
        single_expression(unary_expression("!", unary_expression("!", id("x"))))
    );
}

#[test]
fn test_unary_binds_tighter_than_multiplication() {
    assert_eq!(
        parse_ok("+x * 2;"),
        single_expression(binary_expression("*", unary_expression("+", id("x")), num(2.0)))
    );
}

#[test]
fn test_member_property() {
    assert_eq!(
        parse_ok("x.y;"),
        single_expression(member_expression(false, id("x"), id("y")))
    );
}

#[test]
fn test_assignment_to_members() {
    assert_eq!(
        parse_ok("x.y = 1;"),
        single_expression(assign("=", member_expression(false, id("x"), id("y")), num(1.0)))
    );

    assert_eq!(
        parse_ok("x[0] = 1;"),
        single_expression(assign("=", member_expression(true, id("x"), num(0.0)), num(1.0)))
    );
}

#[test]
fn test_member_chain_folds_left() {
    assert_eq!(
        parse_ok("a.b.c['d'];"),
        single_expression(member_expression(
            true,
            member_expression(false, member_expression(false, id("a"), id("b")), id("c")),
            string_literal("d"),
        ))
    );
}

#[test]
fn test_computed_member_with_expression() {
    assert_eq!(
        parse_ok("a[i + 1];"),
        single_expression(member_expression(
            true,
            id("a"),
            binary_expression("+", id("i"), num(1.0)),
        ))
    );
}

#[test]
fn test_function_call() {
    assert_eq!(
        parse_ok("foo(x);"),
        single_expression(call_expression(id("foo"), vec![id("x")]))
    );
}

#[test]
fn test_chained_function_calls() {
    assert_eq!(
        parse_ok("foo(x)();"),
        single_expression(call_expression(call_expression(id("foo"), vec![id("x")]), vec![]))
    );
}

#[test]
fn test_method_call() {
    assert_eq!(
        parse_ok("console.log(x, y);"),
        single_expression(call_expression(
            member_expression(false, id("console"), id("log")),
            vec![id("x"), id("y")],
        ))
    );
}

#[test]
fn test_call_arguments_are_assignment_expressions() {
    assert_eq!(
        parse_ok("f(a = 1, b + 2);"),
        single_expression(call_expression(
            id("f"),
            vec![assign("=", id("a"), num(1.0)), binary_expression("+", id("b"), num(2.0))],
        ))
    );
}

#[test]
fn test_call_result_in_arithmetic() {
    assert_eq!(
        parse_ok("super() + this.z;"),
        single_expression(binary_expression(
            "+",
            call_expression(super_expression(), vec![]),
            member_expression(false, this_expression(), id("z")),
        ))
    );
}

#[test]
fn test_new_expression() {
    assert_eq!(
        parse_ok("new Point3D(10, 20, 30);"),
        single_expression(new_expression(id("Point3D"), vec![num(10.0), num(20.0), num(30.0)]))
    );
}

#[test]
fn test_new_expression_with_member_callee() {
    assert_eq!(
        parse_ok("new Namespace.Point3D(10, 20, 30);"),
        single_expression(new_expression(
            member_expression(false, id("Namespace"), id("Point3D")),
            vec![num(10.0), num(20.0), num(30.0)],
        ))
    );
}
