//! Module pass — walks the AST once and transforms every class declaration.

use param_properties_syntax::ast::{self, visitor, VisitorMut};
use param_properties_syntax::Interner;

use crate::config::{Eligibility, TransformConfig};
use crate::diagnostic::Diagnostic;
use crate::error::TransformError;
use crate::transform::{ClassOutcome, ParamProperties, SkippedParameter};

/// Result of running the pass over a single file.
#[derive(Debug)]
pub struct PassResult {
    /// File path that was transformed.
    pub file_path: String,
    /// One entry per class that carried the marker, in walk order.
    pub outcomes: Vec<ClassOutcome>,
    /// Classes that could not be transformed.
    pub errors: Vec<TransformError>,
}

impl PassResult {
    /// Whether every marked class was handled.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of classes whose constructor was rewritten.
    pub fn classes_transformed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ClassOutcome::Transformed(_)))
            .count()
    }

    /// Total number of promoted parameters across all classes.
    pub fn properties_promoted(&self) -> usize {
        self.outcomes.iter().map(ClassOutcome::promoted).sum()
    }

    /// Marked parameters that were left alone because of their shape.
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedParameter> {
        self.outcomes.iter().flat_map(|outcome| {
            let skipped: &[SkippedParameter] = match outcome {
                ClassOutcome::Transformed(promotion) => &promotion.skipped,
                ClassOutcome::Untouched | ClassOutcome::NoConstructor { .. } => &[],
            };
            skipped
        })
    }

    /// Diagnostics for every error and skipped parameter, errors first.
    pub fn diagnostics(&self, file_id: usize, interner: &Interner) -> Vec<Diagnostic> {
        let errors = self
            .errors
            .iter()
            .map(|e| Diagnostic::from_transform_error(e, file_id));
        let skipped = self
            .skipped()
            .map(|s| Diagnostic::from_skipped_parameter(s, interner, file_id));
        errors.chain(skipped).collect()
    }
}

/// Applies the transform to every class declaration of a module.
#[derive(Debug, Clone, Default)]
pub struct ParamPropertiesPass {
    config: TransformConfig,
}

impl ParamPropertiesPass {
    /// Create a pass with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pass with configuration overrides.
    pub fn with_config(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Transform `module` in place.
    ///
    /// Classes are visited in source order, outer classes before the classes
    /// nested in their members. An error on one class does not stop the walk.
    pub fn run(&self, module: &mut ast::Module, interner: &Interner, file_path: &str) -> PassResult {
        let _span = tracing::debug_span!("param_properties", file = file_path).entered();

        if self.config.eligibility == Eligibility::AllParameters {
            tracing::warn!(
                "eligibility = \"all-parameters\" is deprecated; mark parameters with @pp instead"
            );
        }

        let mut runner = PassRunner {
            transform: ParamProperties::with_config(interner, self.config),
            outcomes: Vec::new(),
            errors: Vec::new(),
        };
        runner.visit_module(module);

        let result = PassResult {
            file_path: file_path.to_string(),
            outcomes: runner.outcomes,
            errors: runner.errors,
        };
        tracing::debug!(
            classes = result.classes_transformed(),
            properties = result.properties_promoted(),
            errors = result.errors.len(),
            "pass complete"
        );
        result
    }
}

struct PassRunner<'a> {
    transform: ParamProperties<'a>,
    outcomes: Vec<ClassOutcome>,
    errors: Vec<TransformError>,
}

impl<'a> VisitorMut for PassRunner<'a> {
    fn visit_class_decl(&mut self, decl: &mut ast::ClassDecl) {
        match self.transform.transform_class(decl) {
            Ok(outcome) if outcome.was_marked() => self.outcomes.push(outcome),
            Ok(_) => {}
            Err(err) => self.errors.push(err),
        }
        visitor::walk_class_decl(self, decl);
    }
}
