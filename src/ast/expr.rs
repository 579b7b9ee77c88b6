/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
 * File:     expr.rs
 * Purpose:  Expression nodes of the WHISKER AST
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

use serde::{Serialize, Serializer};

/// Every expression form the parser can produce.
///
/// Serializes as an object tagged with `"type"`, e.g.
/// `{"type":"Identifier","name":"x"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// `left = right`, `left += right`, …
    ///
    /// `left` is always an `Identifier` or `Member`; the factory refuses
    /// anything else.
    #[serde(rename = "AssignmentExpression")]
    Assignment {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// `&&` and `||`
    #[serde(rename = "LogicalExpression")]
    Logical {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Arithmetic, relational and equality operators.
    #[serde(rename = "BinaryExpression")]
    Binary {
        operator: String,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Prefix `+`, `-`, `!`
    #[serde(rename = "UnaryExpression")]
    Unary {
        operator: String,
        argument: Box<Expression>,
    },

    /// `object.property` (`computed == false`) or `object[property]`
    /// (`computed == true`).
    #[serde(rename = "MemberExpression")]
    Member {
        computed: bool,
        object: Box<Expression>,
        property: Box<Expression>,
    },

    #[serde(rename = "CallExpression")]
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },

    #[serde(rename = "NewExpression")]
    New {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },

    #[serde(rename = "ThisExpression")]
    This,

    #[serde(rename = "Super")]
    Super,

    Identifier {
        name: String,
    },

    NumericLiteral {
        #[serde(serialize_with = "serialize_number")]
        value: f64,
    },

    /// Quotes already stripped.
    StringLiteral {
        value: String,
    },

    BooleanLiteral {
        value: bool,
    },

    NullLiteral,
}

impl Expression {
    /// The `"type"` tag this node serializes under.
    pub fn node_type(&self) -> &'static str {
        match self {
            Expression::Assignment { .. } => "AssignmentExpression",
            Expression::Logical { .. } => "LogicalExpression",
            Expression::Binary { .. } => "BinaryExpression",
            Expression::Unary { .. } => "UnaryExpression",
            Expression::Member { .. } => "MemberExpression",
            Expression::Call { .. } => "CallExpression",
            Expression::New { .. } => "NewExpression",
            Expression::This => "ThisExpression",
            Expression::Super => "Super",
            Expression::Identifier { .. } => "Identifier",
            Expression::NumericLiteral { .. } => "NumericLiteral",
            Expression::StringLiteral { .. } => "StringLiteral",
            Expression::BooleanLiteral { .. } => "BooleanLiteral",
            Expression::NullLiteral => "NullLiteral",
        }
    }

    /// Whether this node may stand on the left of an assignment.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Expression::Identifier { .. } | Expression::Member { .. })
    }
}

/// A bare name in a position where the grammar allows nothing else:
/// declaration names, parameters, class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<Identifier> for Expression {
    fn from(id: Identifier) -> Self {
        Expression::Identifier { name: id.name }
    }
}

/// Writes integral values without a fractional part (`42`, not `42.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
