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

/// Expression nodes and the typed `Identifier`.
pub mod expr;

/// Statement nodes and the `Program` root.
pub mod stmt;

/// Pure node constructors used by the parser.
pub mod factory;

pub use expr::{Expression, Identifier};
pub use stmt::{
    BlockStatement, ForInit, Program, Statement, VariableDeclaration, VariableStatement,
};
