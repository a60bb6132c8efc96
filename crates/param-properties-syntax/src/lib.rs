//! Syntax tree for the parameter-properties transform.
//!
//! This crate does not parse source text. A front end builds the tree (or a
//! test builds it through [`ast::AstBuilder`]), the transform mutates it in
//! place, and a code generator serializes the result.
//!
//! # Example
//!
//! ```ignore
//! use param_properties_syntax::ast::AstBuilder;
//!
//! let b = AstBuilder::new();
//! let param = b.param("radius");
//! let ctor = b.constructor(vec![param], vec![]);
//! let class = b.class("Circle", None, vec![ctor]);
//! ```

pub mod ast;
pub mod interner;
pub mod span;

pub use interner::{Interner, Symbol};
pub use span::Span;
