//! Mutable AST visitor for in-place transformation passes
//!
//! Visitors get exclusive access to each node while it is visited. Override
//! the `visit_*` methods you care about and call the matching `walk_*`
//! function to keep descending.
//!
//! # Example
//!
//! ```ignore
//! use param_properties_syntax::ast::*;
//!
//! struct StripDecorators;
//!
//! impl VisitorMut for StripDecorators {
//!     fn visit_class_decl(&mut self, decl: &mut ClassDecl) {
//!         decl.decorators.clear();
//!         walk_class_decl(self, decl);
//!     }
//! }
//! ```

use super::*;

/// Mutable AST visitor trait
///
/// Each visit method has a default implementation that calls the
/// corresponding walk function.
pub trait VisitorMut: Sized {
    // Top-level
    fn visit_module(&mut self, module: &mut Module) {
        walk_module(self, module);
    }

    // Statements
    fn visit_statement(&mut self, stmt: &mut Statement) {
        walk_statement(self, stmt);
    }

    fn visit_variable_decl(&mut self, decl: &mut VariableDecl) {
        walk_variable_decl(self, decl);
    }

    fn visit_function_decl(&mut self, decl: &mut FunctionDecl) {
        walk_function_decl(self, decl);
    }

    fn visit_class_decl(&mut self, decl: &mut ClassDecl) {
        walk_class_decl(self, decl);
    }

    fn visit_class_member(&mut self, member: &mut ClassMember) {
        walk_class_member(self, member);
    }

    fn visit_parameter(&mut self, param: &mut Parameter) {
        walk_parameter(self, param);
    }

    fn visit_decorator(&mut self, decorator: &mut Decorator) {
        walk_decorator(self, decorator);
    }

    fn visit_block_statement(&mut self, block: &mut BlockStatement) {
        walk_block_statement(self, block);
    }

    // Expressions
    fn visit_expression(&mut self, expr: &mut Expression) {
        walk_expression(self, expr);
    }

    fn visit_arrow_function(&mut self, func: &mut ArrowFunction) {
        walk_arrow_function(self, func);
    }

    // Common
    fn visit_identifier(&mut self, _id: &mut Identifier) {
        // Leaf node - no traversal needed
    }

    fn visit_pattern(&mut self, pattern: &mut Pattern) {
        walk_pattern(self, pattern);
    }
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

pub fn walk_module<V: VisitorMut>(visitor: &mut V, module: &mut Module) {
    for stmt in &mut module.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<V: VisitorMut>(visitor: &mut V, stmt: &mut Statement) {
    match stmt {
        Statement::VariableDecl(decl) => visitor.visit_variable_decl(decl),
        Statement::FunctionDecl(decl) => visitor.visit_function_decl(decl),
        Statement::ClassDecl(decl) => visitor.visit_class_decl(decl),
        Statement::ExportDecl(decl) => match decl {
            ExportDecl::Declaration(inner) => visitor.visit_statement(inner),
            ExportDecl::Named { .. } => {}
        },
        Statement::Expression(stmt) => visitor.visit_expression(&mut stmt.expression),
        Statement::If(stmt) => {
            visitor.visit_expression(&mut stmt.condition);
            visitor.visit_statement(&mut stmt.then_branch);
            if let Some(else_branch) = &mut stmt.else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&mut stmt.condition);
            visitor.visit_statement(&mut stmt.body);
        }
        Statement::Return(stmt) => {
            if let Some(value) = &mut stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Throw(stmt) => visitor.visit_expression(&mut stmt.value),
        Statement::Block(block) => visitor.visit_block_statement(block),
        Statement::Empty(_) => {}
    }
}

pub fn walk_variable_decl<V: VisitorMut>(visitor: &mut V, decl: &mut VariableDecl) {
    visitor.visit_pattern(&mut decl.pattern);
    if let Some(init) = &mut decl.initializer {
        visitor.visit_expression(init);
    }
}

pub fn walk_function_decl<V: VisitorMut>(visitor: &mut V, decl: &mut FunctionDecl) {
    visitor.visit_identifier(&mut decl.name);
    for param in &mut decl.params {
        visitor.visit_parameter(param);
    }
    visitor.visit_block_statement(&mut decl.body);
}

pub fn walk_class_decl<V: VisitorMut>(visitor: &mut V, decl: &mut ClassDecl) {
    for decorator in &mut decl.decorators {
        visitor.visit_decorator(decorator);
    }
    visitor.visit_identifier(&mut decl.name);
    if let Some(extends) = &mut decl.extends {
        visitor.visit_expression(extends);
    }
    for member in &mut decl.members {
        visitor.visit_class_member(member);
    }
}

pub fn walk_class_member<V: VisitorMut>(visitor: &mut V, member: &mut ClassMember) {
    match member {
        ClassMember::Field(field) => {
            for decorator in &mut field.decorators {
                visitor.visit_decorator(decorator);
            }
            visitor.visit_identifier(&mut field.name);
            if let Some(init) = &mut field.initializer {
                visitor.visit_expression(init);
            }
        }
        ClassMember::Method(method) => {
            for decorator in &mut method.decorators {
                visitor.visit_decorator(decorator);
            }
            visitor.visit_identifier(&mut method.name);
            for param in &mut method.params {
                visitor.visit_parameter(param);
            }
            // Body is None for abstract methods
            if let Some(body) = &mut method.body {
                visitor.visit_block_statement(body);
            }
        }
        ClassMember::Constructor(ctor) => {
            for param in &mut ctor.params {
                visitor.visit_parameter(param);
            }
            visitor.visit_block_statement(&mut ctor.body);
        }
    }
}

pub fn walk_parameter<V: VisitorMut>(visitor: &mut V, param: &mut Parameter) {
    for decorator in &mut param.decorators {
        visitor.visit_decorator(decorator);
    }
    visitor.visit_pattern(&mut param.pattern);
    if let Some(default) = &mut param.default_value {
        visitor.visit_expression(default);
    }
}

pub fn walk_decorator<V: VisitorMut>(visitor: &mut V, decorator: &mut Decorator) {
    visitor.visit_expression(&mut decorator.expression);
}

pub fn walk_block_statement<V: VisitorMut>(visitor: &mut V, block: &mut BlockStatement) {
    for statement in &mut block.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_expression<V: VisitorMut>(visitor: &mut V, expr: &mut Expression) {
    match expr {
        Expression::IntLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::This(_)
        | Expression::Super(_) => {}
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Array(arr) => {
            for elem in &mut arr.elements {
                visitor.visit_expression(elem);
            }
        }
        Expression::Assignment(assign) => {
            visitor.visit_expression(&mut assign.left);
            visitor.visit_expression(&mut assign.right);
        }
        Expression::Call(call) => {
            visitor.visit_expression(&mut call.callee);
            for arg in &mut call.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::Member(member) => {
            visitor.visit_expression(&mut member.object);
            visitor.visit_identifier(&mut member.property);
        }
        Expression::New(new) => {
            visitor.visit_expression(&mut new.callee);
            for arg in &mut new.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::Arrow(func) => visitor.visit_arrow_function(func),
        Expression::Parenthesized(paren) => visitor.visit_expression(&mut paren.expression),
    }
}

pub fn walk_arrow_function<V: VisitorMut>(visitor: &mut V, func: &mut ArrowFunction) {
    for param in &mut func.params {
        visitor.visit_parameter(param);
    }
    match &mut func.body {
        ArrowBody::Expression(expr) => visitor.visit_expression(expr),
        ArrowBody::Block(block) => visitor.visit_block_statement(block),
    }
}

pub fn walk_pattern<V: VisitorMut>(visitor: &mut V, pattern: &mut Pattern) {
    match pattern {
        Pattern::Identifier(id) => visitor.visit_identifier(id),
        Pattern::Array(arr) => {
            for elem in arr.elements.iter_mut().flatten() {
                visitor.visit_pattern(&mut elem.pattern);
                if let Some(default) = &mut elem.default {
                    visitor.visit_expression(default);
                }
            }
            if let Some(rest) = &mut arr.rest {
                visitor.visit_pattern(rest);
            }
        }
        Pattern::Object(obj) => {
            for prop in &mut obj.properties {
                visitor.visit_identifier(&mut prop.key);
                visitor.visit_pattern(&mut prop.value);
                if let Some(default) = &mut prop.default {
                    visitor.visit_expression(default);
                }
            }
            if let Some(rest) = &mut obj.rest {
                visitor.visit_identifier(rest);
            }
        }
        Pattern::Rest(rest) => visitor.visit_pattern(&mut rest.argument),
    }
}
