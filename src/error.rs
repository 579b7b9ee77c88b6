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

use std::fmt;

/// The closed set of failures the front end can report.
///
/// Every kind is fatal: the first one raised aborts the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No lexical rule matched at the tokenizer cursor.
    UnrecognizedCharacter,

    /// The parser needed a token but the input was exhausted.
    UnexpectedEndOfInput,

    /// The lookahead did not match what the production required.
    UnexpectedToken,

    /// The left side of `=` or a compound assignment is not an
    /// identifier or member expression.
    InvalidAssignmentTarget,

    /// A literal was required but the lookahead cannot start one.
    UnknownLiteralProduction,
}

impl ErrorKind {
    /// Stable error code (W0001, W0002, …)
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UnrecognizedCharacter => "W0001",
            ErrorKind::UnexpectedEndOfInput => "W0002",
            ErrorKind::UnexpectedToken => "W0003",
            ErrorKind::InvalidAssignmentTarget => "W0004",
            ErrorKind::UnknownLiteralProduction => "W0005",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Which failure this is.
    pub kind: ErrorKind,

    /// Stable error code, derived from `kind`.
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: message.into(),
            help: None,
        }
    }

    /// The tokenizer found no rule for the character at its cursor.
    pub fn unrecognized_character(ch: char) -> Self {
        Self::new(
            ErrorKind::UnrecognizedCharacter,
            format!("unexpected character \"{}\"", ch),
        )
    }

    /// A token of kind `expected` was required but the input ran out.
    pub fn unexpected_end_of_input(expected: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnexpectedEndOfInput,
            format!("unexpected end of input, expected: {}", expected),
        )
    }

    /// The lookahead `found` does not match the required kind.
    pub fn unexpected_token(found: &str, expected: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnexpectedToken,
            format!("unexpected token \"{}\", expected: {}", found, expected),
        )
    }

    /// Left-hand side of an assignment is not assignable.
    pub fn invalid_assignment_target(node_type: &str) -> Self {
        Self::new(
            ErrorKind::InvalidAssignmentTarget,
            format!("invalid left-hand side in assignment expression: {}", node_type),
        )
        .with_help("only identifiers and member expressions can be assigned to")
    }

    /// The lookahead cannot begin a literal.
    pub fn unknown_literal_production(found: &str) -> Self {
        Self::new(
            ErrorKind::UnknownLiteralProduction,
            format!("literal: unexpected literal production \"{}\"", found),
        )
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Result alias used by every tokenizer and parser production.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_follows_kind() {
        let err = ParseError::unexpected_token("=", "\";\"");
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.code, "W0003");
        assert_eq!(
            err.to_string(),
            "error[W0003]: unexpected token \"=\", expected: \";\""
        );
    }

    #[test]
    fn invalid_target_carries_help() {
        let err = ParseError::invalid_assignment_target("NumericLiteral");
        assert_eq!(err.code, "W0004");
        assert!(err.help.is_some());
    }
}
