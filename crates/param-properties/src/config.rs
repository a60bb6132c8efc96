//! Transform configuration, loaded from `[param-properties]` in the host
//! manifest.
//!
//! ```toml
//! [param-properties]
//! eligibility = "per-parameter"     # or "all-parameters" (deprecated)
//! missing-constructor = "ignore"    # or "error"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which constructor parameters of a marked class get promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Eligibility {
    /// Only parameters decorated with `@pp`.
    #[default]
    PerParameter,
    /// Every parameter, decorated or not.
    ///
    /// Deprecated: mark parameters with `@pp` instead. The pass logs a
    /// warning whenever it runs with this policy.
    AllParameters,
}

/// What to do when a marked class has no constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingConstructor {
    /// Strip the marker and leave the class alone.
    #[default]
    Ignore,
    /// Strip the marker and report a [`TransformError`](crate::TransformError).
    Error,
}

/// Configuration for the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TransformConfig {
    pub eligibility: Eligibility,
    pub missing_constructor: MissingConstructor,
}

#[derive(Deserialize)]
struct Manifest {
    #[serde(rename = "param-properties", default)]
    param_properties: TransformConfig,
}

impl TransformConfig {
    /// Create the default config (per-parameter opt-in, ignore missing
    /// constructors).
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the `[param-properties]` table from a manifest. Other tables are
    /// ignored; a missing table yields the defaults.
    pub fn from_toml_str(manifest: &str) -> Result<Self, ConfigError> {
        let manifest: Manifest = toml::from_str(manifest)?;
        Ok(manifest.param_properties)
    }

    /// Set the eligibility policy.
    pub fn with_eligibility(mut self, eligibility: Eligibility) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Set the missing-constructor policy.
    pub fn with_missing_constructor(mut self, policy: MissingConstructor) -> Self {
        self.missing_constructor = policy;
        self
    }
}
