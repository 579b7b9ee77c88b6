/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
 * File:     stmt.rs
 * Purpose:  Statement nodes and the program root
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

use serde::Serialize;

use crate::ast::expr::{Expression, Identifier};

/// Root of every parse. Owns the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    /// Compact JSON form of the tree.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON form of the tree.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// All WHISKER statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    #[serde(rename = "ExpressionStatement")]
    Expression { expression: Expression },

    /* ----------------------------- */
    /* BLOCKS                        */
    /* ----------------------------- */

    #[serde(rename = "BlockStatement")]
    Block { body: Vec<Statement> },

    #[serde(rename = "EmptyStatement")]
    Empty,

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    #[serde(rename = "VariableStatement")]
    Variable { declarations: Vec<VariableDeclaration> },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    #[serde(rename = "IfStatement")]
    If {
        test: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },

    #[serde(rename = "WhileStatement")]
    While {
        test: Expression,
        body: Box<Statement>,
    },

    #[serde(rename = "DoWhileStatement")]
    DoWhile {
        test: Expression,
        body: Box<Statement>,
    },

    #[serde(rename = "ForStatement")]
    For {
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
    },

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    /// `params` is `None` for an empty parameter list.
    FunctionDeclaration {
        name: Identifier,
        params: Option<Vec<Identifier>>,
        body: BlockStatement,
    },

    #[serde(rename = "ReturnStatement")]
    Return { argument: Option<Expression> },

    /* ----------------------------- */
    /* CLASSES                       */
    /* ----------------------------- */

    ClassDeclaration {
        id: Identifier,
        #[serde(rename = "superClass")]
        super_class: Option<Identifier>,
        body: BlockStatement,
    },
}

/// A `{ ... }` block where the grammar requires one (function and class
/// bodies). Converts into `Statement::Block` anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

impl From<BlockStatement> for Statement {
    fn from(block: BlockStatement) -> Self {
        Statement::Block { body: block.body }
    }
}

/// `let a = 1, b` without the trailing semicolon. Used both as a full
/// statement and as a `for` loop head.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableStatement {
    pub declarations: Vec<VariableDeclaration>,
}

impl From<VariableStatement> for Statement {
    fn from(stmt: VariableStatement) -> Self {
        Statement::Variable {
            declarations: stmt.declarations,
        }
    }
}

/// One `name` or `name = init` inside a `let`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub init: Option<Expression>,
}

/// The first clause of a `for (init; test; update)` head.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    Variable(VariableStatement),
    Expression(Expression),
}

impl From<VariableStatement> for ForInit {
    fn from(stmt: VariableStatement) -> Self {
        ForInit::Variable(stmt)
    }
}

impl From<Expression> for ForInit {
    fn from(expr: Expression) -> Self {
        ForInit::Expression(expr)
    }
}
