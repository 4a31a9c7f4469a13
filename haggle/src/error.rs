//! Negotiation and configuration error types.

use thiserror::Error;

use crate::primitives::Axis;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid proposal: {axis} = {value}")]
    InvalidProposal { axis: Axis, value: f32 },

    #[error("invalid constraint on {node}: {detail}")]
    InvalidConstraint { node: &'static str, detail: String },

    #[error("{node} requires a child")]
    MissingChild { node: &'static str },

    #[error("{node} accepts at most {max} children, found {found}")]
    UnexpectedChildren {
        node: &'static str,
        max: usize,
        found: usize,
    },
}

impl LayoutError {
    pub(crate) fn constraint(node: &'static str, detail: impl Into<String>) -> Self {
        LayoutError::InvalidConstraint {
            node,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Checks shared by every node kind.
pub(crate) mod check {
    use super::LayoutError;

    /// A finite length that is zero or more.
    pub(crate) fn length(node: &'static str, field: &str, value: f32) -> Result<(), LayoutError> {
        if value.is_nan() || value < 0.0 || value.is_infinite() {
            return Err(LayoutError::constraint(node, format!("{field} = {value}")));
        }
        Ok(())
    }

    /// Like [`length`], but `+inf` is allowed.
    pub(crate) fn upper_bound(node: &'static str, field: &str, value: f32) -> Result<(), LayoutError> {
        if value.is_nan() || value < 0.0 {
            return Err(LayoutError::constraint(node, format!("{field} = {value}")));
        }
        Ok(())
    }

    pub(crate) fn finite(node: &'static str, field: &str, value: f32) -> Result<(), LayoutError> {
        if !value.is_finite() {
            return Err(LayoutError::constraint(node, format!("{field} = {value}")));
        }
        Ok(())
    }

    pub(crate) fn ordered(
        node: &'static str,
        min_field: &str,
        min: Option<f32>,
        max_field: &str,
        max: Option<f32>,
    ) -> Result<(), LayoutError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(LayoutError::constraint(
                    node,
                    format!("{min_field} = {lo} exceeds {max_field} = {hi}"),
                ));
            }
        }
        Ok(())
    }
}
