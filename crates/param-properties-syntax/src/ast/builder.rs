//! Node construction helpers
//!
//! `AstBuilder` owns the interner that names are resolved against, so every
//! tree it builds can be handed to the transform together with
//! [`AstBuilder::finish`]'s interner. All methods take `&self`, which lets
//! calls nest freely.

use std::cell::{Cell, RefCell};

use super::*;
use crate::interner::Interner;
use crate::span::Span;

/// Builds AST nodes against a single interner.
#[derive(Debug, Default)]
pub struct AstBuilder {
    interner: RefCell<Interner>,
    span: Cell<Option<Span>>,
}

impl AstBuilder {
    /// Create a builder with a fresh interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give every node built from now on this span.
    pub fn at(&self, span: Span) -> &Self {
        self.span.set(Some(span));
        self
    }

    /// Consume the builder, returning the interner.
    pub fn finish(self) -> Interner {
        self.interner.into_inner()
    }

    fn span(&self) -> Span {
        self.span.get().unwrap_or_else(Span::synthetic)
    }

    pub fn intern(&self, name: &str) -> Symbol {
        self.interner.borrow_mut().intern(name)
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub fn ident(&self, name: &str) -> Identifier {
        Identifier::new(self.intern(name), self.span())
    }

    pub fn ident_expr(&self, name: &str) -> Expression {
        Expression::Identifier(self.ident(name))
    }

    pub fn int(&self, value: i64) -> Expression {
        Expression::IntLiteral(IntLiteral {
            value,
            span: self.span(),
        })
    }

    pub fn string(&self, value: &str) -> Expression {
        Expression::StringLiteral(StringLiteral {
            value: self.intern(value),
            span: self.span(),
        })
    }

    pub fn this_expr(&self) -> Expression {
        Expression::This(self.span())
    }

    pub fn super_expr(&self) -> Expression {
        Expression::Super(self.span())
    }

    pub fn call(&self, callee: Expression, arguments: Vec<Expression>) -> Expression {
        Expression::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
            span: self.span(),
        })
    }

    pub fn member(&self, object: Expression, property: &str) -> Expression {
        Expression::Member(MemberExpression {
            object: Box::new(object),
            property: self.ident(property),
            optional: false,
            span: self.span(),
        })
    }

    pub fn assign(&self, left: Expression, right: Expression) -> Expression {
        Expression::Assignment(AssignmentExpression {
            operator: AssignmentOperator::Assign,
            left: Box::new(left),
            right: Box::new(right),
            span: self.span(),
        })
    }

    pub fn paren(&self, expression: Expression) -> Expression {
        Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            span: self.span(),
        })
    }

    /// Block-bodied arrow function
    pub fn arrow(&self, params: Vec<Parameter>, body: Vec<Statement>) -> Expression {
        Expression::Arrow(ArrowFunction {
            params,
            body: ArrowBody::Block(self.block(body)),
            is_async: false,
            span: self.span(),
        })
    }

    // ------------------------------------------------------------------
    // Decorators and parameters
    // ------------------------------------------------------------------

    /// `@name`
    pub fn decorator(&self, name: &str) -> Decorator {
        Decorator {
            expression: self.ident_expr(name),
            span: self.span(),
        }
    }

    /// `@name(args...)`
    pub fn decorator_call(&self, name: &str, arguments: Vec<Expression>) -> Decorator {
        Decorator {
            expression: self.call(self.ident_expr(name), arguments),
            span: self.span(),
        }
    }

    /// Plain identifier parameter
    pub fn param(&self, name: &str) -> Parameter {
        self.param_with(Pattern::Identifier(self.ident(name)), vec![])
    }

    /// Identifier parameter carrying bare-name decorators
    pub fn decorated_param(&self, name: &str, decorators: &[&str]) -> Parameter {
        let decorators = decorators.iter().map(|d| self.decorator(d)).collect();
        self.param_with(Pattern::Identifier(self.ident(name)), decorators)
    }

    pub fn param_with(&self, pattern: Pattern, decorators: Vec<Decorator>) -> Parameter {
        Parameter {
            decorators,
            pattern,
            default_value: None,
            span: self.span(),
        }
    }

    /// `...name`
    pub fn rest_pattern(&self, name: &str) -> Pattern {
        Pattern::Rest(RestPattern {
            argument: Box::new(Pattern::Identifier(self.ident(name))),
            span: self.span(),
        })
    }

    /// `{ a, b }`
    pub fn object_pattern(&self, names: &[&str]) -> Pattern {
        let properties = names
            .iter()
            .map(|name| ObjectPatternProperty {
                key: self.ident(name),
                value: Pattern::Identifier(self.ident(name)),
                default: None,
                span: self.span(),
            })
            .collect();
        Pattern::Object(ObjectPattern {
            properties,
            rest: None,
            span: self.span(),
        })
    }

    /// `[a, b]`
    pub fn array_pattern(&self, names: &[&str]) -> Pattern {
        let elements = names
            .iter()
            .map(|name| {
                Some(PatternElement {
                    pattern: Pattern::Identifier(self.ident(name)),
                    default: None,
                })
            })
            .collect();
        Pattern::Array(ArrayPattern {
            elements,
            rest: None,
            span: self.span(),
        })
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    pub fn expr_stmt(&self, expression: Expression) -> Statement {
        Statement::Expression(ExpressionStatement {
            expression,
            span: self.span(),
        })
    }

    /// `super(args...);`
    pub fn super_call(&self, arguments: Vec<Expression>) -> Statement {
        self.expr_stmt(self.call(self.super_expr(), arguments))
    }

    pub fn return_stmt(&self, value: Option<Expression>) -> Statement {
        Statement::Return(ReturnStatement {
            value,
            span: self.span(),
        })
    }

    pub fn let_decl(&self, name: &str, initializer: Option<Expression>) -> Statement {
        Statement::VariableDecl(VariableDecl {
            kind: VariableKind::Let,
            pattern: Pattern::Identifier(self.ident(name)),
            initializer,
            span: self.span(),
        })
    }

    pub fn if_stmt(&self, condition: Expression, then_branch: Vec<Statement>) -> Statement {
        Statement::If(IfStatement {
            condition,
            then_branch: Box::new(Statement::Block(self.block(then_branch))),
            else_branch: None,
            span: self.span(),
        })
    }

    pub fn block(&self, statements: Vec<Statement>) -> BlockStatement {
        BlockStatement {
            statements,
            span: self.span(),
        }
    }

    pub fn function(&self, name: &str, params: Vec<Parameter>, body: Vec<Statement>) -> Statement {
        Statement::FunctionDecl(FunctionDecl {
            name: self.ident(name),
            params,
            body: self.block(body),
            is_async: false,
            span: self.span(),
        })
    }

    pub fn export(&self, declaration: Statement) -> Statement {
        Statement::ExportDecl(ExportDecl::Declaration(Box::new(declaration)))
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    pub fn constructor(&self, params: Vec<Parameter>, body: Vec<Statement>) -> ClassMember {
        ClassMember::Constructor(ConstructorDecl {
            params,
            body: self.block(body),
            span: self.span(),
        })
    }

    pub fn method(&self, name: &str, params: Vec<Parameter>, body: Vec<Statement>) -> ClassMember {
        ClassMember::Method(MethodDecl {
            decorators: vec![],
            name: self.ident(name),
            params,
            body: Some(self.block(body)),
            is_static: false,
            is_async: false,
            span: self.span(),
        })
    }

    pub fn field(&self, name: &str, initializer: Option<Expression>) -> ClassMember {
        ClassMember::Field(FieldDecl {
            decorators: vec![],
            name: self.ident(name),
            initializer,
            is_static: false,
            span: self.span(),
        })
    }

    /// `class name [extends parent] { members }` with no decorators
    pub fn class(&self, name: &str, extends: Option<&str>, members: Vec<ClassMember>) -> ClassDecl {
        ClassDecl {
            decorators: vec![],
            name: self.ident(name),
            extends: extends.map(|parent| self.ident_expr(parent)),
            members,
            span: self.span(),
        }
    }

    /// Class carrying bare-name decorators, in order
    pub fn decorated_class(
        &self,
        decorators: &[&str],
        name: &str,
        extends: Option<&str>,
        members: Vec<ClassMember>,
    ) -> ClassDecl {
        let mut decl = self.class(name, extends, members);
        decl.decorators = decorators.iter().map(|d| self.decorator(d)).collect();
        decl
    }

    pub fn module(&self, statements: Vec<Statement>) -> Module {
        Module::new(statements, self.span())
    }
}
