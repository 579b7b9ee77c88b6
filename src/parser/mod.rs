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

/// Core parser orchestration:
/// - Owns the `Parser` struct (tokenizer + lookahead)
/// - Exposes the main `parse(source)` entry point
pub mod parser;

/// Statement-level parsing:
/// - blocks, empty statements
/// - let / if / while / do / for
/// - def / return / class
pub mod statements;

/// Expression-level parsing:
/// - assignment → logical → equality → relational → additive
///   → multiplicative → unary → call/member → primary
pub mod expressions;

/// Shared parser helpers:
/// - lookahead checks
/// - token consumption
pub mod helpers;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Parser};
