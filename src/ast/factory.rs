/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
 * Node Factory
 *
 * One constructor per AST node shape. The parser never builds nodes by
 * hand; it goes through these functions so every shape is assembled in a
 * single place. Constructors only assemble (and box) their children. The
 * one exception is `assignment_expression`, which enforces the
 * assignment-target rule at construction time.
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the WHISKER parser project.
 *
 * WHISKER is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * ==========================================================================
 */

use crate::ast::expr::{Expression, Identifier};
use crate::ast::stmt::{
    BlockStatement, ForInit, Program, Statement, VariableDeclaration, VariableStatement,
};
use crate::error::{ParseError, ParseResult};

/* ----------------------------- */
/* PROGRAM & STATEMENTS          */
/* ----------------------------- */

pub fn program(body: Vec<Statement>) -> Program {
    Program { body }
}

pub fn expression_statement(expression: Expression) -> Statement {
    Statement::Expression { expression }
}

pub fn block_statement(body: Vec<Statement>) -> BlockStatement {
    BlockStatement { body }
}

pub fn empty_statement() -> Statement {
    Statement::Empty
}

pub fn variable_statement(declarations: Vec<VariableDeclaration>) -> VariableStatement {
    VariableStatement { declarations }
}

pub fn variable_declaration(id: Identifier, init: Option<Expression>) -> VariableDeclaration {
    VariableDeclaration { id, init }
}

pub fn if_statement(
    test: Expression,
    consequent: Statement,
    alternate: Option<Statement>,
) -> Statement {
    Statement::If {
        test,
        consequent: Box::new(consequent),
        alternate: alternate.map(Box::new),
    }
}

pub fn while_statement(test: Expression, body: Statement) -> Statement {
    Statement::While {
        test,
        body: Box::new(body),
    }
}

/// Do-while loops carry their own `DoWhileStatement` tag; consumers can
/// tell them apart from `while` without inspecting the source.
pub fn do_while_statement(test: Expression, body: Statement) -> Statement {
    Statement::DoWhile {
        test,
        body: Box::new(body),
    }
}

pub fn for_statement(
    init: Option<ForInit>,
    test: Option<Expression>,
    update: Option<Expression>,
    body: Statement,
) -> Statement {
    Statement::For {
        init,
        test,
        update,
        body: Box::new(body),
    }
}

pub fn function_declaration(
    name: Identifier,
    params: Option<Vec<Identifier>>,
    body: BlockStatement,
) -> Statement {
    Statement::FunctionDeclaration { name, params, body }
}

pub fn return_statement(argument: Option<Expression>) -> Statement {
    Statement::Return { argument }
}

pub fn class_declaration(
    id: Identifier,
    super_class: Option<Identifier>,
    body: BlockStatement,
) -> Statement {
    Statement::ClassDeclaration {
        id,
        super_class,
        body,
    }
}

/* ----------------------------- */
/* EXPRESSIONS                   */
/* ----------------------------- */

/// Builds an assignment, refusing any target other than an identifier or
/// a member expression.
///
/// # Errors
/// `InvalidAssignmentTarget` naming the offending node type.
pub fn assignment_expression(
    operator: impl Into<String>,
    left: Expression,
    right: Expression,
) -> ParseResult<Expression> {
    if !left.is_assignment_target() {
        return Err(ParseError::invalid_assignment_target(left.node_type()));
    }

    Ok(Expression::Assignment {
        operator: operator.into(),
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn logical_expression(
    operator: impl Into<String>,
    left: Expression,
    right: Expression,
) -> Expression {
    Expression::Logical {
        operator: operator.into(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn binary_expression(
    operator: impl Into<String>,
    left: Expression,
    right: Expression,
) -> Expression {
    Expression::Binary {
        operator: operator.into(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn unary_expression(operator: impl Into<String>, argument: Expression) -> Expression {
    Expression::Unary {
        operator: operator.into(),
        argument: Box::new(argument),
    }
}

pub fn member_expression(computed: bool, object: Expression, property: Expression) -> Expression {
    Expression::Member {
        computed,
        object: Box::new(object),
        property: Box::new(property),
    }
}

pub fn call_expression(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        callee: Box::new(callee),
        arguments,
    }
}

pub fn new_expression(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::New {
        callee: Box::new(callee),
        arguments,
    }
}

pub fn this_expression() -> Expression {
    Expression::This
}

pub fn super_expression() -> Expression {
    Expression::Super
}

/// Typed identifier, for declaration names and parameters.
pub fn identifier(name: impl Into<String>) -> Identifier {
    Identifier::new(name)
}

/// Identifier in expression position.
pub fn identifier_expression(name: impl Into<String>) -> Expression {
    Expression::Identifier { name: name.into() }
}

pub fn numeric_literal(value: f64) -> Expression {
    Expression::NumericLiteral { value }
}

pub fn string_literal(value: impl Into<String>) -> Expression {
    Expression::StringLiteral {
        value: value.into(),
    }
}

pub fn boolean_literal(value: bool) -> Expression {
    Expression::BooleanLiteral { value }
}

pub fn null_literal() -> Expression {
    Expression::NullLiteral
}
