//! Insertion point resolution.
//!
//! Promoted assignments must run after the parent constructor, so they go
//! right after the first top-level `super(...)` statement of the body, or at
//! the very start when there is none. Only a direct `super` callee counts;
//! calls nested in other statements are not anchors.

use param_properties_syntax::ast::Statement;

/// Index of the first `super(...);` statement, if any.
pub fn find_super_call(statements: &[Statement]) -> Option<usize> {
    statements.iter().position(Statement::is_super_call)
}

/// Index at which promoted assignments are inserted.
pub fn insertion_index(statements: &[Statement]) -> usize {
    find_super_call(statements).map_or(0, |index| index + 1)
}

/// Splice `assignments` into `statements` at the insertion point, keeping
/// their order. Returns the index of the first inserted statement.
///
/// Everything before the insertion point and everything after it keeps its
/// original relative order.
pub fn insert_assignments(statements: &mut Vec<Statement>, assignments: Vec<Statement>) -> usize {
    let at = insertion_index(statements);
    if !assignments.is_empty() {
        statements.splice(at..at, assignments);
    }
    at
}
