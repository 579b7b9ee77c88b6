// Shared helpers for the integration suites

#![allow(dead_code)]

use whisker::ast::factory::{expression_statement, identifier_expression, numeric_literal, program};
use whisker::ast::{Expression, Program, Statement};

/// Parses `source`, failing the test with the rendered error otherwise.
pub fn parse_ok(source: &str) -> Program {
    match whisker::parse(source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed for {:?}: {}", source, err),
    }
}

/// A program made of a single expression statement.
pub fn single_expression(expression: Expression) -> Program {
    program(vec![expression_statement(expression)])
}

/// A program made of the given statements.
pub fn statements(body: Vec<Statement>) -> Program {
    program(body)
}

pub fn id(name: &str) -> Expression {
    identifier_expression(name)
}

pub fn num(value: f64) -> Expression {
    numeric_literal(value)
}
