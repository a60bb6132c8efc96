//! Pattern AST nodes
//!
//! Patterns are used in variable declarations, function parameters, and destructuring.

use super::*;
use crate::span::Span;

/// Pattern (for destructuring and binding)
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Simple identifier: x
    Identifier(Identifier),

    /// Array destructuring: [x, y]
    Array(ArrayPattern),

    /// Object destructuring: { x, y }
    Object(ObjectPattern),

    /// Rest binding: ...args
    Rest(RestPattern),
}

/// Array destructuring pattern: [a, , b = 1, ...rest]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    /// `None` marks a hole
    pub elements: Vec<Option<PatternElement>>,
    pub rest: Option<Box<Pattern>>,
    pub span: Span,
}

/// One element of an array pattern, with an optional default
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElement {
    pub pattern: Pattern,
    pub default: Option<Expression>,
}

/// Object destructuring pattern: { x, y: renamed, ...rest }
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternProperty>,
    pub rest: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPatternProperty {
    pub key: Identifier,
    pub value: Pattern,
    pub default: Option<Expression>,
    pub span: Span,
}

/// Rest pattern: ...args
#[derive(Debug, Clone, PartialEq)]
pub struct RestPattern {
    pub argument: Box<Pattern>,
    pub span: Span,
}
