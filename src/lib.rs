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

//! WHISKER front end: source text in, abstract syntax tree out.
//!
//! ```text
//! Source → Tokenizer → Token → Parser → AST (Program)
//! ```
//!
//! ```rust
//! use whisker::ast::factory;
//!
//! let program = whisker::parse("x = y = 42;").unwrap();
//!
//! let expected = factory::program(vec![factory::expression_statement(
//!     factory::assignment_expression(
//!         "=",
//!         factory::identifier_expression("x"),
//!         factory::assignment_expression(
//!             "=",
//!             factory::identifier_expression("y"),
//!             factory::numeric_literal(42.0),
//!         )
//!         .unwrap(),
//!     )
//!     .unwrap(),
//! )]);
//!
//! assert_eq!(program, expected);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::Program;
pub use diagnostics::DiagnosticPrinter;
pub use error::{ErrorKind, ParseError, ParseResult};
pub use parser::{parse, Parser};
