//! Parser options.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::SentinelMatch;

/// Failure to load [`ParseOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text did not describe a valid option set.
    #[error("invalid parse options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Knobs for [`crate::core::parser::Parser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// How sentinel lines are recognized.
    pub sentinel_match: SentinelMatch,
    /// Skip fields the validator rejects instead of keeping them.
    pub drop_invalid_fields: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sentinel_match: SentinelMatch::Substring,
            drop_invalid_fields: false,
        }
    }
}

impl ParseOptions {
    /// Reads options from JSON; missing keys take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}
