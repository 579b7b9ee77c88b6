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

/// Represents the **category of a lexical token** in WHISKER source.
///
/// Punctuation and reserved words each get their own kind so the parser can
/// dispatch on a single `match`. Operators are grouped by the precedence tier
/// that consumes them; the exact operator is kept in the token's lexeme.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Tokenizer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /* ----------------------------- */
    /* PUNCTUATION                   */
    /* ----------------------------- */
    Semicolon,
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,

    /* ----------------------------- */
    /* RESERVED WORDS                */
    /* ----------------------------- */
    Let,
    True,
    False,
    Null,
    If,
    Else,
    While,
    Do,
    For,
    Def,
    Return,
    Class,
    Extends,
    New,
    This,
    Super,

    /* ----------------------------- */
    /* LITERALS & NAMES              */
    /* ----------------------------- */

    /// An unsigned run of decimal digits: `42`
    Number,

    /// A user-defined name made of word characters.
    Identifier,

    /// A quoted string literal, quotes included in the lexeme.
    ///
    /// Examples:
    /// - `"hello"`
    /// - `'world'`
    String,

    /* ----------------------------- */
    /* OPERATORS                     */
    /* ----------------------------- */

    /// `==`, `!=`
    EqualityOperator,

    /// `=`
    SimpleAssign,

    /// `+=`, `-=`, `*=`, `/=`
    ComplexAssign,

    /// `+`, `-`
    AdditiveOperator,

    /// `*`, `/`
    MultiplicativeOperator,

    /// `<`, `>`, `<=`, `>=`
    RelationalOperator,

    /// `&&`
    LogicalAnd,

    /// `||`
    LogicalOr,

    /// `!`
    LogicalNot,
}

impl TokenKind {
    /// True for the kinds that open a literal production.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// True for `=` and the compound assignment operators.
    pub fn is_assignment_operator(self) -> bool {
        matches!(self, TokenKind::SimpleAssign | TokenKind::ComplexAssign)
    }
}

impl fmt::Display for TokenKind {
    /// Spells a kind the way diagnostics refer to it.
    ///
    /// Fixed tokens print as their quoted source text (`";"`, `"let"`);
    /// token classes print as an upper-case category name (`NUMBER`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Semicolon => "\";\"",
            TokenKind::LeftBrace => "\"{\"",
            TokenKind::RightBrace => "\"}\"",
            TokenKind::LeftParen => "\"(\"",
            TokenKind::RightParen => "\")\"",
            TokenKind::LeftBracket => "\"[\"",
            TokenKind::RightBracket => "\"]\"",
            TokenKind::Comma => "\",\"",
            TokenKind::Dot => "\".\"",
            TokenKind::Let => "\"let\"",
            TokenKind::True => "\"true\"",
            TokenKind::False => "\"false\"",
            TokenKind::Null => "\"null\"",
            TokenKind::If => "\"if\"",
            TokenKind::Else => "\"else\"",
            TokenKind::While => "\"while\"",
            TokenKind::Do => "\"do\"",
            TokenKind::For => "\"for\"",
            TokenKind::Def => "\"def\"",
            TokenKind::Return => "\"return\"",
            TokenKind::Class => "\"class\"",
            TokenKind::Extends => "\"extends\"",
            TokenKind::New => "\"new\"",
            TokenKind::This => "\"this\"",
            TokenKind::Super => "\"super\"",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::EqualityOperator => "EQUALITY_OPERATOR",
            TokenKind::SimpleAssign => "SIMPLE_ASSIGN",
            TokenKind::ComplexAssign => "COMPLEX_ASSIGN",
            TokenKind::AdditiveOperator => "ADDITIVE_OPERATOR",
            TokenKind::MultiplicativeOperator => "MULTIPLICATIVE_OPERATOR",
            TokenKind::RelationalOperator => "RELATIONAL_OPERATOR",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalNot => "LOGICAL_NOT",
        };

        f.write_str(text)
    }
}

/// Represents a **single lexical token** produced by the tokenizer.
///
/// # Example Tokens
/// ```text
/// let      →  { kind: Let,        lexeme: "let" }
/// age      →  { kind: Identifier, lexeme: "age" }
/// 42       →  { kind: Number,     lexeme: "42" }
/// 'hi'     →  { kind: String,     lexeme: "'hi'" }
/// ```
///
/// Tokens live only in the parser's one-token lookahead slot and are
/// dropped as soon as they are eaten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// Literal conversion (numbers, quote stripping) is left to the parser.
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme, which is what users wrote.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
