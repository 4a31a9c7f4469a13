//! Negotiator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a [`Negotiator`](crate::Negotiator).
///
/// All fields have defaults, so a config file only needs the values it
/// changes:
///
/// ```
/// let config = haggle::NegotiatorConfig::from_json(r#"{ "default_spacing": 8 }"#).unwrap();
/// assert_eq!(config.default_spacing, 8.0);
/// assert_eq!(config.fill_fallback, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiatorConfig {
    /// Length a filling leaf reports on an axis it was not proposed.
    pub fill_fallback: f32,

    /// Spacing between directional-stack children when the stack sets none.
    pub default_spacing: f32,

    /// Emit a `trace!` event for every negotiated node.
    pub trace_conversation: bool,

    /// Record a warning whenever a node reports more than it was proposed.
    pub collect_warnings: bool,
}

impl Default for NegotiatorConfig {
    fn default() -> Self {
        Self {
            fill_fallback: 10.0,
            default_spacing: 0.0,
            trace_conversation: true,
            collect_warnings: true,
        }
    }
}

impl NegotiatorConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("loading negotiator config from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("fill_fallback", self.fill_fallback),
            ("default_spacing", self.default_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} = {value}")));
            }
        }
        Ok(())
    }
}
