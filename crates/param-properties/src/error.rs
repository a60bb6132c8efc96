//! Error types for the transform and its configuration.

use param_properties_syntax::Span;
use thiserror::Error;

/// Errors raised while transforming a class declaration
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// A class opted in with `@paramProperties` but declares no constructor
    #[error("Class '{class}' is marked with @paramProperties but has no constructor")]
    MissingConstructor {
        /// Class name
        class: String,
        /// Location of the class declaration
        span: Span,
    },
}

impl TransformError {
    /// Get the span of this error
    pub fn span(&self) -> Span {
        match self {
            TransformError::MissingConstructor { span, .. } => *span,
        }
    }
}

/// Errors raised while loading [`TransformConfig`](crate::TransformConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The manifest is not valid TOML, or the table has unknown values
    #[error("invalid [param-properties] configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_constructor_message() {
        let err = TransformError::MissingConstructor {
            class: "Point".to_string(),
            span: Span::new(0, 30, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "Class 'Point' is marked with @paramProperties but has no constructor"
        );
        assert_eq!(err.span(), Span::new(0, 30, 1, 1));
    }
}
