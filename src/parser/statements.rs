/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains all grammar rules responsible for parsing WHISKER
 * statements into their AST forms.
 *
 * It handles:
 * - Blocks and empty statements
 * - Variables (`let`)
 * - Control flow (`if`, `while`, `do`, `for`)
 * - Functions (`def`, `return`)
 * - Classes (`class`, `extends`)
 * - Expression-backed statements
 *
 * This module forms the **top layer of the recursive-descent grammar** and
 * drives overall program structure.
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
use crate::ast::{
    BlockStatement, Expression, ForInit, Identifier, Statement, VariableDeclaration,
    VariableStatement,
};
use crate::error::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    /// StatementList
    ///  : Statement
    ///  | StatementList Statement
    ///  ;
    ///
    /// Always parses at least one statement, then keeps going until the
    /// input runs out or the lookahead is `stop`.
    pub(crate) fn statement_list(&mut self, stop: Option<TokenKind>) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];

        while let Some(kind) = self.lookahead_kind() {
            if Some(kind) == stop {
                break;
            }

            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// This is the **main dispatcher** for all statement grammar forms. It
    /// inspects the lookahead kind once and routes to the matching
    /// production, falling back to an expression statement.
    pub(crate) fn statement(&mut self) -> ParseResult<Statement> {
        match self.lookahead_kind() {
            Some(TokenKind::LeftBrace) => Ok(self.block_statement()?.into()),
            Some(TokenKind::Semicolon) => self.empty_statement(),
            Some(TokenKind::Let) => self.variable_statement(),
            Some(TokenKind::If) => self.if_statement(),
            Some(TokenKind::While | TokenKind::Do | TokenKind::For) => {
                self.iteration_statement()
            }
            Some(TokenKind::Def) => self.function_declaration(),
            Some(TokenKind::Return) => self.return_statement(),
            Some(TokenKind::Class) => self.class_declaration(),
            _ => self.expression_statement(),
        }
    }

    /* ----------------------------- */
    /* BLOCKS                        */
    /* ----------------------------- */

    /// BlockStatement
    ///  : '{' OptStatementList '}'
    ///  ;
    pub(crate) fn block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.eat(TokenKind::LeftBrace)?;

        let body = if self.check(TokenKind::RightBrace) {
            Vec::new()
        } else {
            self.statement_list(Some(TokenKind::RightBrace))?
        };

        self.eat(TokenKind::RightBrace)?;

        Ok(factory::block_statement(body))
    }

    /// EmptyStatement
    ///  : ';'
    ///  ;
    fn empty_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Semicolon)?;
        Ok(factory::empty_statement())
    }

    /// ExpressionStatement
    ///  : Expression ';'
    ///  ;
    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.expression()?;
        self.eat(TokenKind::Semicolon)?;

        Ok(factory::expression_statement(expression))
    }

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    /// VariableStatement
    ///  : VariableStatementInit ';'
    ///  ;
    fn variable_statement(&mut self) -> ParseResult<Statement> {
        let statement = self.variable_statement_init()?;
        self.eat(TokenKind::Semicolon)?;

        Ok(statement.into())
    }

    /// VariableStatementInit
    ///  : 'let' VariableDeclarationList
    ///  ;
    ///
    /// Shared with the `for` loop head, which has no trailing `;` of its own.
    fn variable_statement_init(&mut self) -> ParseResult<VariableStatement> {
        self.eat(TokenKind::Let)?;
        let declarations = self.variable_declaration_list()?;

        Ok(factory::variable_statement(declarations))
    }

    /// VariableDeclarationList
    ///  : VariableDeclaration
    ///  | VariableDeclarationList ',' VariableDeclaration
    ///  ;
    fn variable_declaration_list(&mut self) -> ParseResult<Vec<VariableDeclaration>> {
        let mut declarations = vec![self.variable_declaration()?];

        while self.eat_if(TokenKind::Comma)? {
            declarations.push(self.variable_declaration()?);
        }

        Ok(declarations)
    }

    /// VariableDeclaration
    ///  : Identifier OptVariableInitializer
    ///  ;
    ///
    /// Anything other than `,` or `;` after the name must be an initializer.
    fn variable_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let id = self.identifier()?;

        let init = if self.check(TokenKind::Comma) || self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.variable_initializer()?)
        };

        Ok(factory::variable_declaration(id, init))
    }

    /// VariableInitializer
    ///  : SIMPLE_ASSIGN AssignmentExpression
    ///  ;
    fn variable_initializer(&mut self) -> ParseResult<Expression> {
        self.eat(TokenKind::SimpleAssign)?;
        self.assignment_expression()
    }

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    /// IfStatement
    ///  : 'if' '(' Expression ')' Statement
    ///  | 'if' '(' Expression ')' Statement 'else' Statement
    ///  ;
    ///
    /// The consequent is parsed before looking for `else`, so a dangling
    /// `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::If)?;
        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;

        let consequent = self.statement()?;

        let alternate = if self.eat_if(TokenKind::Else)? {
            Some(self.statement()?)
        } else {
            None
        };

        Ok(factory::if_statement(test, consequent, alternate))
    }

    /// IterationStatement
    ///  : WhileStatement
    ///  | DoWhileStatement
    ///  | ForStatement
    ///  ;
    fn iteration_statement(&mut self) -> ParseResult<Statement> {
        match self.lookahead_kind() {
            Some(TokenKind::Do) => self.do_while_statement(),
            Some(TokenKind::For) => self.for_statement(),
            _ => self.while_statement(),
        }
    }

    /// WhileStatement
    ///  : 'while' '(' Expression ')' Statement
    ///  ;
    fn while_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::While)?;
        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;

        let body = self.statement()?;

        Ok(factory::while_statement(test, body))
    }

    /// DoWhileStatement
    ///  : 'do' Statement 'while' '(' Expression ')' ';'
    ///  ;
    fn do_while_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Do)?;
        let body = self.statement()?;

        self.eat(TokenKind::While)?;
        self.eat(TokenKind::LeftParen)?;
        let test = self.expression()?;
        self.eat(TokenKind::RightParen)?;
        self.eat(TokenKind::Semicolon)?;

        Ok(factory::do_while_statement(test, body))
    }

    /// ForStatement
    ///  : 'for' '(' OptForStatementInit ';' OptExpression ';' OptExpression ')' Statement
    ///  ;
    fn for_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::For)?;
        self.eat(TokenKind::LeftParen)?;

        let init = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.for_statement_init()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::Semicolon)?;

        let update = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::RightParen)?;

        let body = self.statement()?;

        Ok(factory::for_statement(init, test, update, body))
    }

    /// ForStatementInit
    ///  : VariableStatementInit
    ///  | Expression
    ///  ;
    fn for_statement_init(&mut self) -> ParseResult<ForInit> {
        if self.check(TokenKind::Let) {
            return Ok(self.variable_statement_init()?.into());
        }

        Ok(self.expression()?.into())
    }

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    /// FunctionDeclaration
    ///  : 'def' Identifier '(' OptFormalParameterList ')' BlockStatement
    ///  ;
    ///
    /// An empty parameter list is recorded as `None`.
    fn function_declaration(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Def)?;
        let name = self.identifier()?;

        self.eat(TokenKind::LeftParen)?;
        let params = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.formal_parameter_list()?)
        };
        self.eat(TokenKind::RightParen)?;

        let body = self.block_statement()?;

        Ok(factory::function_declaration(name, params, body))
    }

    /// FormalParameterList
    ///  : Identifier
    ///  | FormalParameterList ',' Identifier
    ///  ;
    fn formal_parameter_list(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut params = vec![self.identifier()?];

        while self.eat_if(TokenKind::Comma)? {
            params.push(self.identifier()?);
        }

        Ok(params)
    }

    /// ReturnStatement
    ///  : 'return' OptExpression ';'
    ///  ;
    fn return_statement(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Return)?;

        let argument = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::Semicolon)?;

        Ok(factory::return_statement(argument))
    }

    /* ----------------------------- */
    /* CLASSES                       */
    /* ----------------------------- */

    /// ClassDeclaration
    ///  : 'class' Identifier OptClassExtends BlockStatement
    ///  ;
    fn class_declaration(&mut self) -> ParseResult<Statement> {
        self.eat(TokenKind::Class)?;
        let id = self.identifier()?;

        let super_class = if self.eat_if(TokenKind::Extends)? {
            Some(self.identifier()?)
        } else {
            None
        };

        let body = self.block_statement()?;

        Ok(factory::class_declaration(id, super_class, body))
    }
}
