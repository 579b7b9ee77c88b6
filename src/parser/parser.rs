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

use crate::ast::factory;
use crate::ast::Program;
use crate::error::ParseResult;
use crate::lexer::{Token, Tokenizer};

/// The WHISKER recursive-descent parser.
///
/// This structure maintains:
/// - The tokenizer, which owns the source and the scan cursor
/// - A single-token lookahead slot (`None` once input is exhausted)
///
/// Every production takes `&mut self`, so one instance can only run one
/// parse at a time. The grammar itself lives in extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser`
/// blocks.
#[derive(Debug, Default)]
pub struct Parser {
    /// Source scanner, pulled one token at a time.
    pub(crate) tokenizer: Tokenizer,

    /// The next not-yet-consumed token.
    pub(crate) lookahead: Option<Token>,
}

/// Public entry point for the WHISKER parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Tokenizer → Token → Parser → AST
/// ```
///
/// # Example
/// ```rust
/// let program = whisker::parse("let x = 42;").unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    Parser::new().parse(source)
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a full source string into a `Program`.
    ///
    /// The tokenizer is re-initialized on every call, so one parser can be
    /// reused for many inputs in sequence.
    ///
    /// # Errors
    /// The first lexical or syntax error aborts the parse; no partial tree
    /// is returned.
    pub fn parse(&mut self, source: &str) -> ParseResult<Program> {
        self.begin(source)?;
        self.program()
    }

    /// Loads `source` and primes the lookahead slot.
    pub(crate) fn begin(&mut self, source: &str) -> ParseResult<()> {
        self.tokenizer.init(source);
        self.lookahead = self.tokenizer.next_token()?;
        Ok(())
    }

    /// Program
    ///  : StatementList
    ///  ;
    fn program(&mut self) -> ParseResult<Program> {
        let body = self.statement_list(None)?;
        Ok(factory::program(body))
    }
}
