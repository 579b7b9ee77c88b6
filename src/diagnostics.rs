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

use crate::error::ParseError;

/// Renders compiler-style diagnostics for parse errors.
///
/// The parser itself never prints; hosts hand errors to this printer.
/// Tokens carry no positions, so the report names the file and quotes the
/// source only when it is a single line, where the error must sit.
pub struct DiagnosticPrinter {
    /// Full source text that was parsed.
    source: String,

    /// Display name of the source (e.g. `main.wsk`).
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats `error` as a diagnostic block.
    ///
    /// # Output Example
    /// ```text
    /// error[W0004]: invalid left-hand side in assignment expression: NumericLiteral
    ///   --> main.wsk
    ///    |
    ///    | 42 = 42;
    ///    |
    /// help: only identifiers and member expressions can be assigned to
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let mut out = format!("{}\n  --> {}\n", error, self.file_name);

        if let Some(line) = self.single_line() {
            out.push_str("   |\n");
            out.push_str(&format!("   | {}\n", line));
            out.push_str("   |\n");
        }

        if let Some(help) = &error.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// The only non-blank line of the source, if there is exactly one.
    fn single_line(&self) -> Option<&str> {
        let mut lines = self.source.lines().map(str::trim).filter(|l| !l.is_empty());

        match (lines.next(), lines.next()) {
            (Some(line), None) => Some(line),
            _ => None,
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }
}
