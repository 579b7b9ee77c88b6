/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
 * Expression Parsing
 *
 * It is responsible for parsing:
 *  - Assignments (simple and compound)
 *  - Logical, equality, relational and arithmetic operators
 *  - Prefix unary operators
 *  - Member access (`a.b`, `a[b]`)
 *  - Calls, chained calls and `super(...)`
 *  - `new` constructor calls
 *  - Literals, `this`, parenthesized expressions, identifiers
 *
 * Parsing order follows strict precedence, loosest first:
 *
 *   assignment → logical_or → logical_and → equality → relational
 *              → additive → multiplicative → unary → left_hand_side
 *              → member / call → primary
 *
 * Every binary tier goes through the same left fold, so all of them are
 * left-associative. Assignment recurses into itself on the right and is
 * right-associative.
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

use crate::ast::factory;
use crate::ast::{Expression, Identifier};
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;

/// Builds the node for one fold step of a binary tier.
type BuildBinary = fn(String, Expression, Expression) -> Expression;

impl Parser {
    /// expression → assignment
    pub(crate) fn expression(&mut self) -> ParseResult<Expression> {
        self.assignment_expression()
    }

    /// assignment → logical_or ( ( "=" | "+=" | "-=" | "*=" | "/=" ) assignment )?
    pub(crate) fn assignment_expression(&mut self) -> ParseResult<Expression> {
        let left = self.logical_or_expression()?;

        let kind = match self.lookahead_kind() {
            Some(kind) if kind.is_assignment_operator() => kind,
            _ => return Ok(left),
        };

        if !left.is_assignment_target() {
            return Err(ParseError::invalid_assignment_target(left.node_type()));
        }

        let operator = self.eat(kind)?.lexeme;
        let right = self.assignment_expression()?;

        factory::assignment_expression(operator, left, right)
    }

    /// logical_or → logical_and ( "||" logical_and )*
    fn logical_or_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(
            Self::logical_and_expression,
            TokenKind::LogicalOr,
            |op, left, right| factory::logical_expression(op, left, right),
        )
    }

    /// logical_and → equality ( "&&" equality )*
    fn logical_and_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(
            Self::equality_expression,
            TokenKind::LogicalAnd,
            |op, left, right| factory::logical_expression(op, left, right),
        )
    }

    /// equality → relational ( ( "==" | "!=" ) relational )*
    fn equality_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(
            Self::relational_expression,
            TokenKind::EqualityOperator,
            |op, left, right| factory::binary_expression(op, left, right),
        )
    }

    /// relational → additive ( ( "<" | ">" | "<=" | ">=" ) additive )*
    fn relational_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(
            Self::additive_expression,
            TokenKind::RelationalOperator,
            |op, left, right| factory::binary_expression(op, left, right),
        )
    }

    /// additive → multiplicative ( ( "+" | "-" ) multiplicative )*
    fn additive_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(
            Self::multiplicative_expression,
            TokenKind::AdditiveOperator,
            |op, left, right| factory::binary_expression(op, left, right),
        )
    }

    /// multiplicative → unary ( ( "*" | "/" ) unary )*
    fn multiplicative_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(
            Self::unary_expression,
            TokenKind::MultiplicativeOperator,
            |op, left, right| factory::binary_expression(op, left, right),
        )
    }

    /// Shared left fold for every binary tier.
    ///
    /// Parses one operand, then, while the lookahead is `operator_kind`,
    /// consumes the operator and another operand and folds
    /// `left = build(operator, left, right)`.
    fn binary_expression(
        &mut self,
        operand: fn(&mut Self) -> ParseResult<Expression>,
        operator_kind: TokenKind,
        build: BuildBinary,
    ) -> ParseResult<Expression> {
        let mut left = operand(self)?;

        while self.check(operator_kind) {
            let operator = self.eat(operator_kind)?.lexeme;
            let right = operand(self)?;

            left = build(operator, left, right);
        }

        Ok(left)
    }

    /// unary → ( "+" | "-" | "!" ) unary | left_hand_side
    fn unary_expression(&mut self) -> ParseResult<Expression> {
        let kind = match self.lookahead_kind() {
            Some(kind @ (TokenKind::AdditiveOperator | TokenKind::LogicalNot)) => kind,
            _ => return self.left_hand_side_expression(),
        };

        let operator = self.eat(kind)?.lexeme;
        let argument = self.unary_expression()?;

        Ok(factory::unary_expression(operator, argument))
    }

    /// left_hand_side → call_member
    fn left_hand_side_expression(&mut self) -> ParseResult<Expression> {
        self.call_member_expression()
    }

    /// call_member → "super" call | member call?
    ///
    /// `super` may only appear as a callee, so it skips member access and
    /// goes straight to the argument list.
    fn call_member_expression(&mut self) -> ParseResult<Expression> {
        if self.check(TokenKind::Super) {
            let callee = self.super_expression()?;
            return self.call_expression(callee);
        }

        let member = self.member_expression()?;

        if self.check(TokenKind::LeftParen) {
            return self.call_expression(member);
        }

        Ok(member)
    }

    /// call → callee arguments ( arguments )*
    ///
    /// `foo(x)()` folds into `Call(Call(foo, [x]), [])`.
    fn call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let arguments = self.arguments()?;
        let mut call = factory::call_expression(callee, arguments);

        while self.check(TokenKind::LeftParen) {
            let arguments = self.arguments()?;
            call = factory::call_expression(call, arguments);
        }

        Ok(call)
    }

    /// arguments → "(" argument_list? ")"
    fn arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.eat(TokenKind::LeftParen)?;

        let arguments = if self.check(TokenKind::RightParen) {
            Vec::new()
        } else {
            self.argument_list()?
        };

        self.eat(TokenKind::RightParen)?;

        Ok(arguments)
    }

    /// argument_list → assignment ( "," assignment )*
    fn argument_list(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = vec![self.assignment_expression()?];

        while self.eat_if(TokenKind::Comma)? {
            arguments.push(self.assignment_expression()?);
        }

        Ok(arguments)
    }

    /// member → primary ( "." identifier | "[" expression "]" )*
    fn member_expression(&mut self) -> ParseResult<Expression> {
        let mut object = self.primary_expression()?;

        loop {
            match self.lookahead_kind() {
                // property access: obj.prop
                Some(TokenKind::Dot) => {
                    self.eat(TokenKind::Dot)?;
                    let property = self.identifier()?;

                    object = factory::member_expression(false, object, property.into());
                }

                // computed access: obj[expr]
                Some(TokenKind::LeftBracket) => {
                    self.eat(TokenKind::LeftBracket)?;
                    let property = self.expression()?;
                    self.eat(TokenKind::RightBracket)?;

                    object = factory::member_expression(true, object, property);
                }

                _ => return Ok(object),
            }
        }
    }

    /// primary → literal | "(" expression ")" | "this" | new | identifier
    fn primary_expression(&mut self) -> ParseResult<Expression> {
        match self.lookahead_kind() {
            Some(kind) if kind.is_literal() => self.literal(),
            Some(TokenKind::LeftParen) => self.parenthesized_expression(),
            Some(TokenKind::This) => self.this_expression(),
            Some(TokenKind::New) => self.new_expression(),
            _ => Ok(self.identifier()?.into()),
        }
    }

    /// "(" expression ")"; the parentheses leave no node behind.
    fn parenthesized_expression(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::LeftParen)?;
        let expression = self.expression()?;
        self.eat(TokenKind::RightParen)?;

        Ok(expression)
    }

    /// new → "new" member arguments
    fn new_expression(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::New)?;

        let callee = self.member_expression()?;
        let arguments = self.arguments()?;

        Ok(factory::new_expression(callee, arguments))
    }

    fn this_expression(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::This)?;
        Ok(factory::this_expression())
    }

    fn super_expression(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::Super)?;
        Ok(factory::super_expression())
    }

    pub(crate) fn identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.eat(TokenKind::Identifier)?;
        Ok(factory::identifier(token.lexeme))
    }

    /// literal → NUMBER | STRING | "true" | "false" | "null"
    pub(crate) fn literal(&mut self) -> ParseResult<Expression> {
        match self.lookahead_kind() {
            Some(TokenKind::Number) => self.numeric_literal(),
            Some(TokenKind::String) => self.string_literal(),
            Some(TokenKind::True) => self.boolean_literal(TokenKind::True),
            Some(TokenKind::False) => self.boolean_literal(TokenKind::False),
            Some(TokenKind::Null) => self.null_literal(),
            _ => {
                let found = self
                    .lookahead
                    .as_ref()
                    .map_or("end of input", |t| t.lexeme.as_str());

                Err(ParseError::unknown_literal_production(found))
            }
        }
    }

    /// Digit runs too long to fit a finite `f64` are rejected rather than
    /// stored as infinity.
    fn numeric_literal(&mut self) -> ParseResult<Expression> {
        let token = self.eat(TokenKind::Number)?;

        let value = token
            .lexeme
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::unknown_literal_production(&token.lexeme))?;

        Ok(factory::numeric_literal(value))
    }

    /// Drops the first and last character, whichever quote style was used.
    fn string_literal(&mut self) -> ParseResult<Expression> {
        let token = self.eat(TokenKind::String)?;

        let mut chars = token.lexeme.chars();
        chars.next();
        chars.next_back();

        Ok(factory::string_literal(chars.as_str()))
    }

    fn boolean_literal(&mut self, kind: TokenKind) -> ParseResult<Expression> {
        self.eat(kind)?;
        Ok(factory::boolean_literal(kind == TokenKind::True))
    }

    fn null_literal(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::Null)?;
        Ok(factory::null_literal())
    }
}
