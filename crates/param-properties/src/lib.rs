//! Parameter properties
//!
//! Promotes decorated constructor parameters to instance fields. Given
//!
//! ```text
//! @paramProperties
//! class Circle extends Shape {
//!     constructor(@pp radius, label) { super(label); }
//! }
//! ```
//!
//! the transform strips both markers and rewrites the constructor body to
//! `super(label); this.radius = radius;`.
//!
//! # Architecture
//!
//! - [`marker`] finds and strips the `@paramProperties` / `@pp` decorators.
//! - [`constructor`] locates the constructor in a class body.
//! - [`insertion`] finds the `super(...)` anchor and splices statements in.
//! - [`assignment`] synthesizes `this.<name> = <name>` statements.
//! - [`ParamProperties`] ties them together for one class declaration.
//! - [`ParamPropertiesPass`] walks a whole module and applies the transform
//!   to every class declaration it finds.
//!
//! # Example
//!
//! ```ignore
//! use codespan_reporting::files::SimpleFiles;
//! use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
//! use param_properties::{ParamPropertiesPass, TransformConfig};
//!
//! let mut files = SimpleFiles::new();
//! let file_id = files.add("shapes.ts", source);
//!
//! let config = TransformConfig::from_toml_str(&manifest)?;
//! let result = ParamPropertiesPass::with_config(config).run(&mut module, &interner, "shapes.ts");
//!
//! let mut stderr = StandardStream::stderr(ColorChoice::Auto);
//! for diagnostic in result.diagnostics(file_id, &interner) {
//!     diagnostic.emit(&mut stderr, &files)?;
//! }
//! ```

pub mod assignment;
pub mod config;
pub mod constructor;
pub mod diagnostic;
pub mod error;
pub mod insertion;
pub mod marker;
mod pass;
mod transform;

pub use config::{Eligibility, MissingConstructor, TransformConfig};
pub use diagnostic::Diagnostic;
pub use error::{ConfigError, TransformError};
pub use pass::{ParamPropertiesPass, PassResult};
pub use transform::{ClassOutcome, ParamProperties, ParameterShape, Promotion, SkippedParameter};

/// Class decorator that opts a class in: `@paramProperties`
pub const CLASS_MARKER: &str = "paramProperties";

/// Parameter decorator that marks one parameter for promotion: `@pp`
pub const PARAM_MARKER: &str = "pp";
