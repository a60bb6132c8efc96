//! Assignment synthesis: `this.<name> = <name>;`

use param_properties_syntax::ast::{
    AssignmentExpression, AssignmentOperator, Expression, ExpressionStatement, Identifier,
    MemberExpression, Statement,
};

/// Build `this.<name> = <name>;` for a parameter name.
///
/// Both occurrences of the name are fresh nodes; every synthesized node
/// carries the parameter's span.
pub fn synthesize_assignment(param: &Identifier) -> Statement {
    let span = param.span;

    let target = Expression::Member(MemberExpression {
        object: Box::new(Expression::This(span)),
        property: param.clone(),
        optional: false,
        span,
    });

    let assignment = Expression::Assignment(AssignmentExpression {
        operator: AssignmentOperator::Assign,
        left: Box::new(target),
        right: Box::new(Expression::Identifier(param.clone())),
        span,
    });

    Statement::Expression(ExpressionStatement {
        expression: assignment,
        span,
    })
}

/// If `stmt` is `this.<name> = <name>;`, return the name.
pub fn promoted_name(stmt: &Statement) -> Option<&Identifier> {
    let Statement::Expression(ExpressionStatement {
        expression: Expression::Assignment(assign),
        ..
    }) = stmt
    else {
        return None;
    };
    if assign.operator != AssignmentOperator::Assign {
        return None;
    }
    let (Expression::Member(member), Expression::Identifier(value)) =
        (assign.left.as_ref(), assign.right.as_ref())
    else {
        return None;
    };
    let is_this = matches!(member.object.as_ref(), Expression::This(_));
    (is_this && !member.optional && member.property.name == value.name).then_some(value)
}
