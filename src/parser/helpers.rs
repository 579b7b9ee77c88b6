/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
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
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::{ParseError, ParseResult};
use crate::lexer::keywords::is_keyword;
use crate::lexer::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Kind of the lookahead token, `None` at end of input.
    pub(crate) fn lookahead_kind(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|t| t.kind)
    }

    /// Checks the lookahead kind without consuming it.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.lookahead_kind() == Some(kind)
    }

    /// Consumes the lookahead, which must be of `kind`, and pulls the next
    /// token from the tokenizer.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if there is no lookahead
    /// - `UnexpectedToken` if the lookahead has a different kind
    /// - `UnrecognizedCharacter` if scanning the following token fails
    pub(crate) fn eat(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let token = self
            .lookahead
            .take()
            .ok_or_else(|| ParseError::unexpected_end_of_input(kind))?;

        if token.kind != kind {
            return Err(Self::mismatch(&token, kind));
        }

        self.lookahead = self.tokenizer.next_token()?;
        Ok(token)
    }

    /// Consumes `kind` only if it is the lookahead.
    pub(crate) fn eat_if(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if !self.check(kind) {
            return Ok(false);
        }

        self.eat(kind)?;
        Ok(true)
    }

    fn mismatch(found: &Token, expected: TokenKind) -> ParseError {
        let err = ParseError::unexpected_token(&found.lexeme, expected);

        if expected == TokenKind::Identifier && is_keyword(&found.lexeme) {
            return err.with_help(format!(
                "`{}` is a reserved word and cannot be used as a name",
                found.lexeme
            ));
        }

        err
    }
}
