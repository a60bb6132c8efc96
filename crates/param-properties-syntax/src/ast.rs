//! Abstract Syntax Tree (AST) consumed by the transform.
//!
//! The tree covers the class-oriented subset of a TypeScript-like language:
//! - Module structure
//! - Statements (declarations, control flow)
//! - Expressions (the shapes a constructor body is made of)
//! - Patterns (parameter bindings)
//!
//! Every AST node includes a `Span` for source location tracking.

use crate::interner::Symbol;
use crate::span::Span;

pub mod builder;
pub mod expression;
pub mod pattern;
pub mod statement;
pub mod visitor;

pub use builder::*;
pub use expression::*;
pub use pattern::*;
pub use statement::*;
pub use visitor::*;

/// Root node: one source file
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Top-level statements
    pub statements: Vec<Statement>,

    /// Span covering the entire module
    pub span: Span,
}

impl Module {
    /// Create a new module
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }
}

/// Identifier
///
/// Represents a name for a variable, function, class, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: Symbol,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }
}
