//! Diagnostic reporting for transform errors and skipped parameters.
//!
//! The transform itself never prints anything. Hosts turn a
//! [`PassResult`](crate::PassResult) into diagnostics and render them next
//! to their own, either to a terminal or as JSON for IDE integration.

use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label, Severity};
use codespan_reporting::files::Files;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::WriteColor;
use param_properties_syntax::{Interner, Span};
use serde::{Deserialize, Serialize};

use crate::error::TransformError;
use crate::transform::SkippedParameter;

/// Error code for a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    /// Marked class without a constructor
    pub const MISSING_CONSTRUCTOR: ErrorCode = ErrorCode("PP0001");
    /// Marked parameter that does not bind a single name
    pub const UNSUPPORTED_PARAMETER: ErrorCode = ErrorCode("PP0002");
}

/// A diagnostic positioned in one source file
#[derive(Debug, Clone)]
pub struct Diagnostic {
    inner: CsDiagnostic<usize>,
    code: ErrorCode,
    span: Span,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        code: ErrorCode,
        message: impl Into<String>,
        file_id: usize,
        span: Span,
        label: impl Into<String>,
    ) -> Self {
        let inner = CsDiagnostic::new(severity)
            .with_message(message)
            .with_code(code.0)
            .with_labels(vec![Label::primary(file_id, span.start..span.end).with_message(label)]);
        Diagnostic { inner, code, span }
    }

    /// Create diagnostic from a TransformError
    pub fn from_transform_error(error: &TransformError, file_id: usize) -> Self {
        match error {
            TransformError::MissingConstructor { class, span } => Diagnostic::new(
                Severity::Error,
                ErrorCode::MISSING_CONSTRUCTOR,
                error.to_string(),
                file_id,
                *span,
                format!("'{}' declares no constructor", class),
            )
            .with_help("add a constructor, or remove @paramProperties"),
        }
    }

    /// Create a warning for a marked parameter that was not promoted
    pub fn from_skipped_parameter(skipped: &SkippedParameter, interner: &Interner, file_id: usize) -> Self {
        Diagnostic::new(
            Severity::Warning,
            ErrorCode::UNSUPPORTED_PARAMETER,
            format!(
                "@pp has no effect on a {} in class '{}'",
                skipped.shape,
                interner.resolve(skipped.class)
            ),
            file_id,
            skipped.span,
            "not promoted to a property",
        )
        .with_help("only parameters that bind a single name can be promoted")
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.inner.notes.push(format!("help: {}", help.into()));
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.inner.severity
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the underlying codespan diagnostic (for custom rendering)
    pub fn inner(&self) -> &CsDiagnostic<usize> {
        &self.inner
    }

    /// Render the diagnostic with source context
    pub fn emit<'files, F>(
        &self,
        writer: &mut dyn WriteColor,
        files: &'files F,
    ) -> Result<(), codespan_reporting::files::Error>
    where
        F: Files<'files, FileId = usize>,
    {
        let config = term::Config::default();
        term::emit(writer, &config, files, &self.inner)
    }

    /// Convert to JSON representation for IDE integration
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&JsonDiagnostic::from(self))
    }
}

/// JSON representation of a diagnostic
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    pub code: String,
    pub severity: String,
    pub message: String,
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
    pub notes: Vec<String>,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(diag: &Diagnostic) -> Self {
        let severity = match diag.inner.severity {
            Severity::Bug => "bug",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Help => "help",
        };
        JsonDiagnostic {
            code: diag.code.0.to_string(),
            severity: severity.to_string(),
            message: diag.inner.message.clone(),
            start: diag.span.start,
            end: diag.span.end,
            line: diag.span.line,
            column: diag.span.column,
            notes: diag.inner.notes.clone(),
        }
    }
}
