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

use crate::lexer::token::TokenKind;

/// Every reserved word, in the order the tokenizer tries them.
///
/// Each keyword is matched on word boundaries before the generic identifier
/// rule, so `do` is a keyword while `done` stays an identifier.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("for", TokenKind::For),
    ("def", TokenKind::Def),
    ("return", TokenKind::Return),
    ("class", TokenKind::Class),
    ("extends", TokenKind::Extends),
    ("new", TokenKind::New),
    ("this", TokenKind::This),
    ("super", TokenKind::Super),
];

/// Determines whether a given word is a **reserved keyword**.
///
/// # Examples
/// ```text
/// class     -> keyword
/// extends   -> keyword
/// Point     -> identifier
/// classy    -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|(kw, _)| *kw == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_are_keywords() {
        for word in ["let", "def", "class", "extends", "super", "this", "new"] {
            assert!(is_keyword(word), "{} should be reserved", word);
        }
    }

    #[test]
    fn near_misses_are_identifiers() {
        for word in ["classy", "done", "letter", "Let", "iffy"] {
            assert!(!is_keyword(word), "{} should not be reserved", word);
        }
    }
}
