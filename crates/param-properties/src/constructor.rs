//! Constructor lookup.

use param_properties_syntax::ast::{ClassDecl, ClassMember, ConstructorDecl};

/// First constructor in the class body, in member order.
pub fn find_constructor(decl: &ClassDecl) -> Option<&ConstructorDecl> {
    decl.members.iter().find_map(|member| match member {
        ClassMember::Constructor(ctor) => Some(ctor),
        ClassMember::Field(_) | ClassMember::Method(_) => None,
    })
}

/// Mutable variant of [`find_constructor`].
pub fn find_constructor_mut(decl: &mut ClassDecl) -> Option<&mut ConstructorDecl> {
    decl.members.iter_mut().find_map(|member| match member {
        ClassMember::Constructor(ctor) => Some(ctor),
        ClassMember::Field(_) | ClassMember::Method(_) => None,
    })
}
