//! Resolver configuration.
//!
//! Options arrive from the analysis driver as JSON (camelCase keys); every
//! field has a default so `{}` is a valid configuration.

use serde::Deserialize;
use thiserror::Error;

/// Which view of elements the resolver hands back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NullSafetyMode {
    #[default]
    Sound,
    /// Units compiled without null safety see members through their legacy
    /// (nullability-erased) views.
    Legacy,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverOptions {
    pub null_safety: NullSafetyMode,
    /// Report members reached through a nullable receiver without `?.`.
    pub report_unchecked_nullable: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            null_safety: NullSafetyMode::Sound,
            report_unchecked_nullable: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid resolver options: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResolverOptions {
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn legacy() -> Self {
        Self {
            null_safety: NullSafetyMode::Legacy,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
