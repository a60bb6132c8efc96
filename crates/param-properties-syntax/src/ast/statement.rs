//! Statement AST nodes
//!
//! This module defines the statement types the transform walks through:
//! - Variable, function and class declarations
//! - Export declarations wrapping another declaration
//! - Expression statements (including `super(...)` calls)
//! - The control flow statements that may contain nested classes

use super::*;
use crate::span::Span;

/// Top-level or block-level statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Variable declaration: let/const
    VariableDecl(VariableDecl),

    /// Function declaration
    FunctionDecl(FunctionDecl),

    /// Class declaration
    ClassDecl(ClassDecl),

    /// Export statement
    ExportDecl(ExportDecl),

    /// Expression statement (e.g., function call)
    Expression(ExpressionStatement),

    /// If statement
    If(IfStatement),

    /// While loop
    While(WhileStatement),

    /// Return statement
    Return(ReturnStatement),

    /// Throw statement
    Throw(ThrowStatement),

    /// Block statement
    Block(BlockStatement),

    /// Empty statement (;)
    Empty(Span),
}

impl Statement {
    /// Check if this statement is a call to the parent-class constructor:
    /// `super(...);`
    pub fn is_super_call(&self) -> bool {
        match self {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Call(call) => matches!(call.callee.as_ref(), Expression::Super(_)),
                _ => false,
            },
            _ => false,
        }
    }
}

// ============================================================================
// Variable Declaration
// ============================================================================

/// Variable declaration: let x = 42; or const y = 10;
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    /// let or const
    pub kind: VariableKind,

    /// Pattern (identifier or destructuring)
    pub pattern: Pattern,

    /// Initializer expression (required for const)
    pub initializer: Option<Expression>,

    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Let,
    Const,
}

// ============================================================================
// Function Declaration
// ============================================================================

/// Function declaration
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Identifier,
    pub params: Vec<Parameter>,
    pub body: BlockStatement,
    pub is_async: bool,
    pub span: Span,
}

/// Function, method or constructor parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Decorators (@pp, @inject, etc.)
    pub decorators: Vec<Decorator>,

    pub pattern: Pattern,

    /// Default value for the parameter (e.g., `x = 10`)
    pub default_value: Option<Expression>,

    pub span: Span,
}

impl Parameter {
    /// The bound name, if the parameter is a plain identifier
    pub fn identifier(&self) -> Option<&Identifier> {
        match &self.pattern {
            Pattern::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// Class Declaration
// ============================================================================

/// Class declaration
///
/// # Example
/// ```text
/// @paramProperties
/// class Circle extends Shape {
///     constructor(@pp radius) { super(); }
///
///     area() {
///         return Math.PI * this.radius ** 2;
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Decorators (@paramProperties, @sealed, etc.)
    pub decorators: Vec<Decorator>,

    pub name: Identifier,

    /// Superclass expression after `extends`
    pub extends: Option<Expression>,

    pub members: Vec<ClassMember>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
}

/// Field declaration
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub decorators: Vec<Decorator>,
    pub name: Identifier,
    pub initializer: Option<Expression>,
    pub is_static: bool,
    pub span: Span,
}

/// Method declaration
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub decorators: Vec<Decorator>,
    pub name: Identifier,
    pub params: Vec<Parameter>,

    /// None for abstract methods
    pub body: Option<BlockStatement>,

    pub is_static: bool,
    pub is_async: bool,
    pub span: Span,
}

/// Constructor declaration
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub params: Vec<Parameter>,
    pub body: BlockStatement,
    pub span: Span,
}

// ============================================================================
// Decorators
// ============================================================================

/// Decorator: @decorator or @decorator(arg1, arg2)
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    /// Decorator name/expression
    pub expression: Expression,
    pub span: Span,
}

impl Decorator {
    /// The decorator's name when it is a bare identifier (`@name`).
    ///
    /// Call-form (`@name()`) and member-form (`@ns.name`) decorators have no
    /// bare name.
    pub fn bare_name(&self) -> Option<Symbol> {
        match &self.expression {
            Expression::Identifier(id) => Some(id.name),
            _ => None,
        }
    }
}

// ============================================================================
// Control Flow Statements
// ============================================================================

/// If statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// While loop
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Return statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

/// Throw statement
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub value: Expression,
    pub span: Span,
}

/// Block statement - a sequence of statements wrapped in { }.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Expression statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

// ============================================================================
// Module System
// ============================================================================

/// Export declaration
#[derive(Debug, Clone, PartialEq)]
pub enum ExportDecl {
    /// export class Foo {}
    Declaration(Box<Statement>),

    /// export { foo, bar };
    Named {
        specifiers: Vec<ExportSpecifier>,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSpecifier {
    pub name: Identifier,
    pub alias: Option<Identifier>,
}
