//! End-to-end tests for the per-class transform

use param_properties::assignment::promoted_name;
use param_properties::{ClassOutcome, ParamProperties, CLASS_MARKER, PARAM_MARKER};
use param_properties_syntax::ast::{AstBuilder, ClassDecl, ClassMember, ConstructorDecl, Expression, Statement};
use param_properties_syntax::Interner;

fn ctor(decl: &ClassDecl) -> &ConstructorDecl {
    decl.members
        .iter()
        .find_map(|m| match m {
            ClassMember::Constructor(c) => Some(c),
            _ => None,
        })
        .expect("class has a constructor")
}

fn assigned(interner: &Interner, stmt: &Statement) -> Option<String> {
    promoted_name(stmt).map(|id| interner.resolve(id.name).to_string())
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_scenario_single_marked_param() {
    // @paramProperties class C { constructor(@pp a, b) {} }
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &[CLASS_MARKER],
        "C",
        None,
        vec![b.constructor(vec![b.decorated_param("a", &[PARAM_MARKER]), b.param("b")], vec![])],
    );
    let param_b = ctor(&decl).params[1].clone();
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    assert!(decl.decorators.is_empty());
    let c = ctor(&decl);
    assert_eq!(c.body.statements.len(), 1);
    assert_eq!(assigned(&interner, &c.body.statements[0]).as_deref(), Some("a"));
    assert!(c.params[0].decorators.is_empty());
    assert_eq!(c.params[1], param_b);
}

#[test]
fn test_scenario_after_super() {
    // @paramProperties class C extends P { constructor(@pp a, @pp b) { super(); } }
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &[CLASS_MARKER],
        "C",
        Some("P"),
        vec![b.constructor(
            vec![b.decorated_param("a", &[PARAM_MARKER]), b.decorated_param("b", &[PARAM_MARKER])],
            vec![b.super_call(vec![])],
        )],
    );
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let stmts = &ctor(&decl).body.statements;
    assert_eq!(stmts.len(), 3);
    assert!(stmts[0].is_super_call());
    assert_eq!(assigned(&interner, &stmts[1]).as_deref(), Some("a"));
    assert_eq!(assigned(&interner, &stmts[2]).as_deref(), Some("b"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_unmarked_class_is_unchanged() {
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &["sealed", "logged"],
        "Plain",
        Some("Base"),
        vec![
            b.field("count", Some(b.int(0))),
            b.constructor(
                vec![b.decorated_param("a", &[PARAM_MARKER]), b.param("b")],
                vec![b.super_call(vec![]), b.let_decl("x", None)],
            ),
        ],
    );
    b.intern(CLASS_MARKER);
    let original = decl.clone();
    let interner = b.finish();

    let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
    assert_eq!(outcome, ClassOutcome::Untouched);
    assert_eq!(decl, original);
}

#[test]
fn test_other_class_decorators_keep_order() {
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &["first", CLASS_MARKER, "second", CLASS_MARKER, "third"],
        "C",
        None,
        vec![b.constructor(vec![], vec![])],
    );
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let names: Vec<_> = decl
        .decorators
        .iter()
        .filter_map(|d| d.bare_name())
        .map(|s| interner.resolve(s))
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_no_super_assignments_precede_original_body() {
    let b = AstBuilder::new();
    let original_body = vec![
        b.let_decl("x", Some(b.int(1))),
        b.expr_stmt(b.call(b.ident_expr("setup"), vec![])),
    ];
    let params = (0..4).map(|i| b.decorated_param(&format!("p{i}"), &[PARAM_MARKER])).collect();
    let mut decl = b.decorated_class(
        &[CLASS_MARKER],
        "C",
        None,
        vec![b.constructor(params, original_body.clone())],
    );
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let stmts = &ctor(&decl).body.statements;
    assert_eq!(stmts.len(), 6);
    for (i, stmt) in stmts[..4].iter().enumerate() {
        assert_eq!(assigned(&interner, stmt), Some(format!("p{i}")));
    }
    assert_eq!(&stmts[4..], original_body.as_slice());
}

#[test]
fn test_super_in_middle_splits_body() {
    let b = AstBuilder::new();
    let head = vec![b.let_decl("tmp", Some(b.int(2))), b.let_decl("other", None)];
    let sup = b.super_call(vec![b.ident_expr("tmp")]);
    let tail = vec![
        b.expr_stmt(b.call(b.member(b.this_expr(), "init"), vec![])),
        b.return_stmt(None),
    ];
    let mut body = head.clone();
    body.push(sup.clone());
    body.extend(tail.clone());

    let ctor_decl = b.constructor(
        vec![
            b.decorated_param("x", &[PARAM_MARKER]),
            b.param("y"),
            b.decorated_param("z", &[PARAM_MARKER]),
        ],
        body,
    );
    let mut decl = b.decorated_class(&[CLASS_MARKER], "C", Some("P"), vec![ctor_decl]);
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let stmts = &ctor(&decl).body.statements;
    assert_eq!(stmts.len(), head.len() + 1 + 2 + tail.len());
    assert_eq!(&stmts[..2], head.as_slice());
    assert_eq!(stmts[2], sup);
    assert_eq!(assigned(&interner, &stmts[3]).as_deref(), Some("x"));
    assert_eq!(assigned(&interner, &stmts[4]).as_deref(), Some("z"));
    assert_eq!(&stmts[5..], tail.as_slice());
}

#[test]
fn test_only_first_super_call_anchors() {
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &[CLASS_MARKER],
        "C",
        Some("P"),
        vec![b.constructor(
            vec![b.decorated_param("a", &[PARAM_MARKER])],
            vec![b.super_call(vec![]), b.let_decl("x", None), b.super_call(vec![])],
        )],
    );
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let stmts = &ctor(&decl).body.statements;
    assert_eq!(stmts.len(), 4);
    assert_eq!(assigned(&interner, &stmts[1]).as_deref(), Some("a"));
    assert!(stmts[3].is_super_call());
}

#[test]
fn test_transform_is_idempotent() {
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &[CLASS_MARKER],
        "C",
        Some("P"),
        vec![b.constructor(
            vec![b.decorated_param("a", &[PARAM_MARKER]), b.decorated_param("b", &[PARAM_MARKER])],
            vec![b.super_call(vec![])],
        )],
    );
    let interner = b.finish();
    let transform = ParamProperties::new(&interner);

    transform.transform_class(&mut decl).unwrap();
    let once = decl.clone();
    transform.transform_class(&mut decl).unwrap();

    assert_eq!(decl, once);
}

#[test]
fn test_synthesized_sides_are_distinct_nodes() {
    let b = AstBuilder::new();
    let mut decl = b.decorated_class(
        &[CLASS_MARKER],
        "C",
        None,
        vec![b.constructor(vec![b.decorated_param("a", &[PARAM_MARKER])], vec![])],
    );
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let Statement::Expression(stmt) = &ctor(&decl).body.statements[0] else {
        panic!("Expected expression statement");
    };
    let Expression::Assignment(assign) = &stmt.expression else {
        panic!("Expected assignment");
    };
    let (Expression::Member(left), Expression::Identifier(right)) = (assign.left.as_ref(), assign.right.as_ref())
    else {
        panic!("Expected this.a = a");
    };
    assert_eq!(left.property, *right);
    assert!(!std::ptr::eq(&left.property, right));
}

#[test]
fn test_default_valued_param_is_promoted() {
    let b = AstBuilder::new();
    let mut param = b.decorated_param("size", &[PARAM_MARKER]);
    param.default_value = Some(b.int(10));
    let mut decl = b.decorated_class(&[CLASS_MARKER], "Box", None, vec![b.constructor(vec![param], vec![])]);
    let interner = b.finish();

    ParamProperties::new(&interner).transform_class(&mut decl).unwrap();

    let c = ctor(&decl);
    assert_eq!(assigned(&interner, &c.body.statements[0]).as_deref(), Some("size"));
    assert!(c.params[0].default_value.is_some());
}
