/*
 * ==========================================================================
 * WHISKER - Sharp little parser
 * ==========================================================================
 *
 * Tokenizer
 *
 * Turns raw source text into one lexeme at a time. Scanning is driven by an
 * ORDERED table of anchored regular expressions: the first rule that matches
 * at the cursor wins, so the table order is the precedence between
 * overlapping lexical classes (keywords before identifiers, `==` before `=`).
 *
 * Rules without a token kind (whitespace, comments) are consumed silently.
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

use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ParseError, ParseResult};
use crate::lexer::keywords::KEYWORDS;
use crate::lexer::token::{Token, TokenKind};

/// One entry of the scanning table. `kind == None` means "skip".
struct Rule {
    pattern: Regex,
    kind: Option<TokenKind>,
}

impl Rule {
    fn new(pattern: &str, kind: Option<TokenKind>) -> Self {
        // Anchored so a rule only matches at the cursor.
        let pattern = Regex::new(&format!("^(?:{})", pattern))
            .unwrap_or_else(|e| panic!("invalid token rule {:?}: {}", pattern, e));

        Self { pattern, kind }
    }
}

lazy_static! {
    static ref RULES: Vec<Rule> = build_rules();
}

fn build_rules() -> Vec<Rule> {
    let mut rules = vec![
        // Whitespace
        Rule::new(r"\s+", None),

        // Comments
        Rule::new(r"//.*", None),
        Rule::new(r"/\*[\s\S]*?\*/", None),

        // Symbols, delimiters
        Rule::new(r";", Some(TokenKind::Semicolon)),
        Rule::new(r"\{", Some(TokenKind::LeftBrace)),
        Rule::new(r"\}", Some(TokenKind::RightBrace)),
        Rule::new(r"\(", Some(TokenKind::LeftParen)),
        Rule::new(r"\)", Some(TokenKind::RightParen)),
        Rule::new(r"\[", Some(TokenKind::LeftBracket)),
        Rule::new(r"\]", Some(TokenKind::RightBracket)),
        Rule::new(r",", Some(TokenKind::Comma)),
        Rule::new(r"\.", Some(TokenKind::Dot)),
    ];

    // Keywords
    for (word, kind) in KEYWORDS {
        rules.push(Rule::new(&format!(r"{}\b", word), Some(kind)));
    }

    rules.extend([
        // Numbers
        Rule::new(r"[0-9]+", Some(TokenKind::Number)),

        // Identifiers
        Rule::new(r"[A-Za-z0-9_]+", Some(TokenKind::Identifier)),

        // Equality operators
        Rule::new(r"[=!]=", Some(TokenKind::EqualityOperator)),

        // Assignment operators
        Rule::new(r"=", Some(TokenKind::SimpleAssign)),
        Rule::new(r"[*/+\-]=", Some(TokenKind::ComplexAssign)),

        // Math operators
        Rule::new(r"[+\-]", Some(TokenKind::AdditiveOperator)),
        Rule::new(r"[*/]", Some(TokenKind::MultiplicativeOperator)),

        // Relational operators
        Rule::new(r"[<>]=?", Some(TokenKind::RelationalOperator)),

        // Logical operators
        Rule::new(r"&&", Some(TokenKind::LogicalAnd)),
        Rule::new(r"\|\|", Some(TokenKind::LogicalOr)),
        Rule::new(r"!", Some(TokenKind::LogicalNot)),

        // Strings
        Rule::new(r#""[^"]*""#, Some(TokenKind::String)),
        Rule::new(r"'[^']*'", Some(TokenKind::String)),
    ]);

    rules
}

/// Produces tokens on demand from a source string.
///
/// The tokenizer holds no grammar knowledge. Its state is the source, a
/// byte cursor and whether iteration has already yielded an error, so `init`
/// can be called again at any point between scans to reuse the instance on
/// new input.
#[derive(Debug, Default)]
pub struct Tokenizer {
    source: String,
    cursor: usize,
    failed: bool,
}

impl Tokenizer {
    /// Creates a tokenizer over an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `source` and resets the cursor to the beginning.
    pub fn init(&mut self, source: &str) {
        self.source = source.to_string();
        self.cursor = 0;
        self.failed = false;
    }

    /// Whether unscanned input remains (which may still be only whitespace).
    pub fn has_more_input(&self) -> bool {
        self.cursor < self.source.len()
    }

    /// Whether the cursor sits exactly at the end of the source.
    pub fn is_eof(&self) -> bool {
        self.cursor == self.source.len()
    }

    /// Scans and returns the next token.
    ///
    /// # Returns
    /// - `Ok(Some(token))` for the next lexeme
    /// - `Ok(None)` once the input (including trailing whitespace and
    ///   comments) is exhausted
    ///
    /// # Errors
    /// `UnrecognizedCharacter` when no rule matches at the cursor.
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        'scan: while self.has_more_input() {
            let rest = &self.source[self.cursor..];

            for rule in RULES.iter() {
                let Some(found) = rule.pattern.find(rest) else {
                    continue;
                };

                if found.end() == 0 {
                    continue;
                }

                self.cursor += found.end();

                match rule.kind {
                    Some(kind) => return Ok(Some(Token::new(kind, found.as_str()))),
                    None => continue 'scan,
                }
            }

            let ch = rest.chars().next().unwrap_or('\0');
            return Err(ParseError::unrecognized_character(ch));
        }

        Ok(None)
    }
}

/// Yields tokens until the input runs out. A scan error is yielded once and
/// ends the iteration; the cursor stays on the offending character, so
/// `next_token` still reports it.
impl Iterator for Tokenizer {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.next_token().transpose();
        self.failed = matches!(item, Some(Err(_)));
        item
    }
}

impl FusedIterator for Tokenizer {}

/// Tokenizes a whole source string into a flat list.
///
/// # Example
/// ```rust
/// let tokens = whisker::lexer::tokenize("let x = 42;").unwrap();
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.init(source);
    tokenizer.collect()
}
