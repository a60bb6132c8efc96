//! Marker detection and stripping.
//!
//! A marker is a bare-identifier decorator (`@paramProperties`, `@pp`).
//! Call-form (`@paramProperties()`) and member-form (`@ns.paramProperties`)
//! decorators never count as markers.

use param_properties_syntax::ast::{ClassDecl, Decorator, Parameter};
use param_properties_syntax::{Interner, Symbol};

use crate::{CLASS_MARKER, PARAM_MARKER};

/// The marker names, resolved against one interner.
///
/// A name the interner has never seen resolves to `None`: nothing built
/// against that interner can carry it, so every check short-circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    class: Option<Symbol>,
    param: Option<Symbol>,
}

impl Markers {
    /// Look up both marker names without interning them.
    pub fn resolve(interner: &Interner) -> Self {
        Self {
            class: interner.get(CLASS_MARKER),
            param: interner.get(PARAM_MARKER),
        }
    }

    fn is_class_marker(&self, decorator: &Decorator) -> bool {
        self.class.is_some() && decorator.bare_name() == self.class
    }

    fn is_param_marker(&self, decorator: &Decorator) -> bool {
        self.param.is_some() && decorator.bare_name() == self.param
    }
}

/// First `@paramProperties` decorator on the class, in declaration order.
pub fn find_class_marker<'a>(decl: &'a ClassDecl, markers: &Markers) -> Option<&'a Decorator> {
    decl.decorators.iter().find(|d| markers.is_class_marker(d))
}

/// Remove every `@paramProperties` decorator, keeping the others in order.
///
/// Returns how many were removed; zero leaves the list untouched.
pub fn strip_class_markers(decl: &mut ClassDecl, markers: &Markers) -> usize {
    let before = decl.decorators.len();
    decl.decorators.retain(|d| !markers.is_class_marker(d));
    before - decl.decorators.len()
}

/// Whether the parameter carries `@pp`.
pub fn has_param_marker(param: &Parameter, markers: &Markers) -> bool {
    param.decorators.iter().any(|d| markers.is_param_marker(d))
}

/// Remove every `@pp` decorator from the parameter, keeping the others in
/// order. Returns how many were removed.
pub fn strip_param_markers(param: &mut Parameter, markers: &Markers) -> usize {
    let before = param.decorators.len();
    param.decorators.retain(|d| !markers.is_param_marker(d));
    before - param.decorators.len()
}
