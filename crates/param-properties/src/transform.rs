//! The per-class transform.

use std::fmt;

use param_properties_syntax::ast::{ClassDecl, Parameter, Pattern};
use param_properties_syntax::{Interner, Span, Symbol};

use crate::assignment::synthesize_assignment;
use crate::config::{Eligibility, MissingConstructor, TransformConfig};
use crate::constructor::find_constructor_mut;
use crate::error::TransformError;
use crate::insertion::{find_super_call, insert_assignments};
use crate::marker::{self, Markers};

/// What the transform did to one class declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassOutcome {
    /// No `@paramProperties` marker; the declaration was not touched.
    Untouched,
    /// The marker was stripped but the class has no constructor.
    NoConstructor { class: Symbol, span: Span },
    /// The marker was stripped and eligible parameters were promoted.
    Transformed(Promotion),
}

impl ClassOutcome {
    /// Whether the class carried the marker.
    pub fn was_marked(&self) -> bool {
        !matches!(self, ClassOutcome::Untouched)
    }

    /// Number of promoted parameters.
    pub fn promoted(&self) -> usize {
        match self {
            ClassOutcome::Transformed(promotion) => promotion.properties.len(),
            ClassOutcome::Untouched | ClassOutcome::NoConstructor { .. } => 0,
        }
    }
}

/// Details of a transformed class.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub class: Symbol,
    pub span: Span,
    /// Promoted parameter names, in declaration order
    pub properties: Vec<Symbol>,
    /// Index of the anchoring `super(...)` statement in the original body
    pub super_call: Option<usize>,
    /// Marked parameters whose shape cannot be promoted
    pub skipped: Vec<SkippedParameter>,
}

/// A `@pp` parameter left alone because it does not bind a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedParameter {
    pub class: Symbol,
    pub shape: ParameterShape,
    pub span: Span,
}

/// Parameter shapes the transform cannot promote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterShape {
    ArrayPattern,
    ObjectPattern,
    Rest,
}

impl ParameterShape {
    fn of(pattern: &Pattern) -> Option<Self> {
        match pattern {
            Pattern::Identifier(_) => None,
            Pattern::Array(_) => Some(ParameterShape::ArrayPattern),
            Pattern::Object(_) => Some(ParameterShape::ObjectPattern),
            Pattern::Rest(_) => Some(ParameterShape::Rest),
        }
    }
}

impl fmt::Display for ParameterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterShape::ArrayPattern => write!(f, "array destructuring pattern"),
            ParameterShape::ObjectPattern => write!(f, "object destructuring pattern"),
            ParameterShape::Rest => write!(f, "rest parameter"),
        }
    }
}

/// Applies parameter properties to class declarations built against one
/// interner.
pub struct ParamProperties<'a> {
    interner: &'a Interner,
    markers: Markers,
    config: TransformConfig,
}

impl<'a> ParamProperties<'a> {
    /// Create a transform with the default configuration.
    pub fn new(interner: &'a Interner) -> Self {
        Self::with_config(interner, TransformConfig::default())
    }

    /// Create a transform with the given configuration.
    pub fn with_config(interner: &'a Interner, config: TransformConfig) -> Self {
        Self {
            interner,
            markers: Markers::resolve(interner),
            config,
        }
    }

    /// Transform one class declaration in place.
    ///
    /// Unmarked classes are left exactly as they were. On a marked class
    /// every `@paramProperties` decorator is removed before anything else,
    /// so a second run is always a no-op.
    pub fn transform_class(&self, decl: &mut ClassDecl) -> Result<ClassOutcome, TransformError> {
        if marker::find_class_marker(decl, &self.markers).is_none() {
            return Ok(ClassOutcome::Untouched);
        }
        marker::strip_class_markers(decl, &self.markers);

        let class = decl.name.name;
        let span = decl.span;
        let class_name = self.interner.resolve(class);

        let Some(ctor) = find_constructor_mut(decl) else {
            return match self.config.missing_constructor {
                MissingConstructor::Ignore => {
                    tracing::debug!(class = class_name, "marked class has no constructor");
                    Ok(ClassOutcome::NoConstructor { class, span })
                }
                MissingConstructor::Error => Err(TransformError::MissingConstructor {
                    class: class_name.to_string(),
                    span,
                }),
            };
        };

        let mut assignments = Vec::new();
        let mut properties = Vec::new();
        let mut skipped = Vec::new();

        for param in &mut ctor.params {
            if !self.is_eligible(param) {
                continue;
            }
            if let Some(id) = param.identifier() {
                tracing::trace!(
                    class = class_name,
                    property = self.interner.resolve(id.name),
                    "promoting parameter"
                );
                assignments.push(synthesize_assignment(id));
                properties.push(id.name);
                marker::strip_param_markers(param, &self.markers);
                continue;
            }
            // Under promote-all, unmarked patterns land here too
            if !marker::has_param_marker(param, &self.markers) {
                continue;
            }
            if let Some(shape) = ParameterShape::of(&param.pattern) {
                tracing::warn!(
                    class = class_name,
                    line = param.span.line,
                    column = param.span.column,
                    "cannot promote {shape}; parameter left unchanged"
                );
                skipped.push(SkippedParameter {
                    class,
                    shape,
                    span: param.span,
                });
            }
        }

        let super_call = find_super_call(&ctor.body.statements);
        insert_assignments(&mut ctor.body.statements, assignments);

        tracing::debug!(
            class = class_name,
            promoted = properties.len(),
            super_call = ?super_call,
            "applied parameter properties"
        );

        Ok(ClassOutcome::Transformed(Promotion {
            class,
            span,
            properties,
            super_call,
            skipped,
        }))
    }

    fn is_eligible(&self, param: &Parameter) -> bool {
        match self.config.eligibility {
            Eligibility::PerParameter => marker::has_param_marker(param, &self.markers),
            Eligibility::AllParameters => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::promoted_name;
    use crate::{CLASS_MARKER, PARAM_MARKER};
    use param_properties_syntax::ast::{AstBuilder, ClassMember, Statement};

    fn body(decl: &ClassDecl) -> &[Statement] {
        match decl.members.iter().find(|m| matches!(m, ClassMember::Constructor(_))) {
            Some(ClassMember::Constructor(ctor)) => &ctor.body.statements,
            _ => panic!("Expected constructor"),
        }
    }

    fn params(decl: &ClassDecl) -> &[Parameter] {
        match decl.members.iter().find(|m| matches!(m, ClassMember::Constructor(_))) {
            Some(ClassMember::Constructor(ctor)) => &ctor.params,
            _ => panic!("Expected constructor"),
        }
    }

    fn promoted(interner: &Interner, stmts: &[Statement]) -> Vec<String> {
        stmts
            .iter()
            .filter_map(promoted_name)
            .map(|id| interner.resolve(id.name).to_string())
            .collect()
    }

    #[test]
    fn test_unmarked_class_untouched() {
        let b = AstBuilder::new();
        let mut decl = b.decorated_class(
            &["baddecorator"],
            "DoNotCare",
            None,
            vec![b.constructor(vec![b.decorated_param("prop1", &[PARAM_MARKER])], vec![])],
        );
        b.intern(CLASS_MARKER);
        let original = decl.clone();
        let interner = b.finish();

        let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        assert_eq!(outcome, ClassOutcome::Untouched);
        assert_eq!(decl, original);
    }

    #[test]
    fn test_inserts_one_assignment_per_marked_param() {
        let b = AstBuilder::new();
        let params = (0..3)
            .map(|i| b.decorated_param(&format!("prop{i}"), &[PARAM_MARKER]))
            .collect();
        let mut decl =
            b.decorated_class(&[CLASS_MARKER], "MyClass", None, vec![b.constructor(params, vec![])]);
        let interner = b.finish();

        let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        assert_eq!(outcome.promoted(), 3);
        assert!(decl.decorators.is_empty());
        assert_eq!(promoted(&interner, body(&decl)), vec!["prop0", "prop1", "prop2"]);
        assert_eq!(body(&decl).len(), 3);
    }

    #[test]
    fn test_unmarked_params_are_not_promoted() {
        let b = AstBuilder::new();
        let ctor = b.constructor(
            vec![b.decorated_param("prop0", &[PARAM_MARKER]), b.param("prop1"), b.param("prop2")],
            vec![],
        );
        let mut decl = b.decorated_class(&[CLASS_MARKER], "MyClass", None, vec![ctor]);
        let interner = b.finish();

        ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        assert_eq!(promoted(&interner, body(&decl)), vec!["prop0"]);
        assert!(params(&decl).iter().all(|p| p.decorators.is_empty()));
    }

    #[test]
    fn test_param_keeps_other_decorators() {
        let b = AstBuilder::new();
        let ctor = b.constructor(vec![b.decorated_param("a", &["inject", PARAM_MARKER, "validate"])], vec![]);
        let mut decl = b.decorated_class(&[CLASS_MARKER], "C", None, vec![ctor]);
        let interner = b.finish();

        ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        let names: Vec<_> = params(&decl)[0]
            .decorators
            .iter()
            .filter_map(|d| d.bare_name())
            .map(|s| interner.resolve(s))
            .collect();
        assert_eq!(names, vec!["inject", "validate"]);
    }

    #[test]
    fn test_inserts_after_super() {
        let b = AstBuilder::new();
        let params = (0..2)
            .map(|i| b.decorated_param(&format!("prop{i}"), &[PARAM_MARKER]))
            .collect();
        let ctor = b.constructor(params, vec![b.super_call(vec![])]);
        let mut decl = b.decorated_class(&[CLASS_MARKER], "Child", Some("Parent"), vec![ctor]);
        let interner = b.finish();

        let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        let stmts = body(&decl);
        assert_eq!(stmts.len(), 3);
        assert!(stmts[0].is_super_call());
        assert_eq!(promoted(&interner, &stmts[1..]), vec!["prop0", "prop1"]);

        match outcome {
            ClassOutcome::Transformed(promotion) => assert_eq!(promotion.super_call, Some(0)),
            other => panic!("Expected transformed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_constructor_ignored_by_default() {
        let b = AstBuilder::new();
        let mut decl = b.decorated_class(&[CLASS_MARKER, "sealed"], "NoCtor", None, vec![]);
        let interner = b.finish();

        let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        assert!(matches!(outcome, ClassOutcome::NoConstructor { .. }));
        assert_eq!(decl.decorators.len(), 1);
    }

    #[test]
    fn test_missing_constructor_error_policy_still_strips() {
        let b = AstBuilder::new();
        let mut decl = b.decorated_class(&[CLASS_MARKER], "NoCtor", None, vec![]);
        let interner = b.finish();
        let config = TransformConfig::new().with_missing_constructor(MissingConstructor::Error);

        let err = ParamProperties::with_config(&interner, config)
            .transform_class(&mut decl)
            .unwrap_err();
        assert_eq!(
            err,
            TransformError::MissingConstructor {
                class: "NoCtor".to_string(),
                span: decl.span,
            }
        );
        assert!(decl.decorators.is_empty());
    }

    #[test]
    fn test_destructured_param_is_skipped() {
        let b = AstBuilder::new();
        let marker = vec![b.decorator(PARAM_MARKER)];
        let ctor = b.constructor(
            vec![
                b.param_with(b.object_pattern(&["x", "y"]), marker.clone()),
                b.decorated_param("label", &[PARAM_MARKER]),
                b.param_with(b.rest_pattern("rest"), marker),
            ],
            vec![],
        );
        let mut decl = b.decorated_class(&[CLASS_MARKER], "Point", None, vec![ctor]);
        let interner = b.finish();

        let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        let ClassOutcome::Transformed(promotion) = outcome else {
            panic!("Expected transformed outcome");
        };
        assert_eq!(promoted(&interner, body(&decl)), vec!["label"]);
        let shapes: Vec<_> = promotion.skipped.iter().map(|s| s.shape).collect();
        assert_eq!(shapes, vec![ParameterShape::ObjectPattern, ParameterShape::Rest]);

        // Skipped parameters keep their marker so the host can report them
        assert_eq!(params(&decl)[0].decorators.len(), 1);
        assert!(params(&decl)[1].decorators.is_empty());
        assert_eq!(params(&decl)[2].decorators.len(), 1);
    }

    #[test]
    fn test_all_parameters_policy() {
        let b = AstBuilder::new();
        let ctor = b.constructor(
            vec![b.param("a"), b.decorated_param("b", &[PARAM_MARKER]), b.param("c")],
            vec![b.super_call(vec![])],
        );
        let mut decl = b.decorated_class(&[CLASS_MARKER], "Legacy", Some("Base"), vec![ctor]);
        let interner = b.finish();
        let config = TransformConfig::new().with_eligibility(Eligibility::AllParameters);

        ParamProperties::with_config(&interner, config)
            .transform_class(&mut decl)
            .unwrap();
        assert_eq!(promoted(&interner, &body(&decl)[1..]), vec!["a", "b", "c"]);
        assert!(params(&decl).iter().all(|p| p.decorators.is_empty()));
    }

    #[test]
    fn test_all_parameters_ignores_unmarked_patterns() {
        let b = AstBuilder::new();
        let ctor = b.constructor(
            vec![b.param("x"), b.param_with(b.rest_pattern("rest"), vec![])],
            vec![],
        );
        let mut decl = b.decorated_class(&[CLASS_MARKER], "Legacy", None, vec![ctor]);
        let interner = b.finish();
        let config = TransformConfig::new().with_eligibility(Eligibility::AllParameters);

        let outcome = ParamProperties::with_config(&interner, config)
            .transform_class(&mut decl)
            .unwrap();
        let ClassOutcome::Transformed(promotion) = outcome else {
            panic!("Expected transformed outcome, got {:?}", outcome);
        };
        assert_eq!(promoted(&interner, body(&decl)), vec!["x"]);
        assert!(promotion.skipped.is_empty());
    }

    #[test]
    fn test_all_parameters_still_reports_marked_patterns() {
        let b = AstBuilder::new();
        let marker = vec![b.decorator(PARAM_MARKER)];
        let ctor = b.constructor(vec![b.param_with(b.object_pattern(&["w", "h"]), marker)], vec![]);
        let mut decl = b.decorated_class(&[CLASS_MARKER], "Legacy", None, vec![ctor]);
        let interner = b.finish();
        let config = TransformConfig::new().with_eligibility(Eligibility::AllParameters);

        let outcome = ParamProperties::with_config(&interner, config)
            .transform_class(&mut decl)
            .unwrap();
        let ClassOutcome::Transformed(promotion) = outcome else {
            panic!("Expected transformed outcome, got {:?}", outcome);
        };
        assert_eq!(promotion.skipped.len(), 1);
        assert_eq!(promotion.skipped[0].shape, ParameterShape::ObjectPattern);
    }

    #[test]
    fn test_second_run_is_noop() {
        let b = AstBuilder::new();
        let ctor = b.constructor(
            vec![b.decorated_param("a", &[PARAM_MARKER]), b.decorated_param("b", &[PARAM_MARKER])],
            vec![b.super_call(vec![])],
        );
        let mut decl = b.decorated_class(&[CLASS_MARKER], "C", Some("P"), vec![ctor]);
        let interner = b.finish();
        let transform = ParamProperties::new(&interner);

        transform.transform_class(&mut decl).unwrap();
        let once = decl.clone();
        let outcome = transform.transform_class(&mut decl).unwrap();

        assert_eq!(outcome, ClassOutcome::Untouched);
        assert_eq!(decl, once);
    }

    #[test]
    fn test_zero_params_leaves_body() {
        let b = AstBuilder::new();
        let ctor = b.constructor(vec![], vec![b.let_decl("x", Some(b.int(0)))]);
        let mut decl = b.decorated_class(&[CLASS_MARKER], "C", None, vec![ctor]);
        let interner = b.finish();
        let original_body = body(&decl).to_vec();

        let outcome = ParamProperties::new(&interner).transform_class(&mut decl).unwrap();
        assert!(outcome.was_marked());
        assert_eq!(outcome.promoted(), 0);
        assert_eq!(body(&decl), original_body.as_slice());
    }
}
