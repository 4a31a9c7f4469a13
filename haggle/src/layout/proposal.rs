//! Proposed and reported sizes.
//!
//! A proposal flows down the tree: each dimension is either a concrete
//! nonnegative length or absent, meaning "unconstrained". A report flows
//! back up and is always concrete.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::primitives::{Axis, Size};

/// The size a node commits to after seeing a proposal.
pub type ReportedSize = Size;

/// The size a parent offers a child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProposedSize {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ProposedSize {
    /// No constraint on either axis.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Build a proposal. `Some(f32::INFINITY)` is normalised to `None`.
    #[inline]
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            width: width.and_then(bounded),
            height: height.and_then(bounded),
        }
    }

    /// Both dimensions proposed.
    #[inline]
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(Some(width), Some(height))
    }

    #[inline]
    pub fn width_only(width: f32) -> Self {
        Self::new(Some(width), None)
    }

    #[inline]
    pub fn height_only(height: f32) -> Self {
        Self::new(None, Some(height))
    }

    /// The proposed dimension on `axis`, if any.
    #[inline]
    pub fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The proposed dimension on `axis`, with an absent dimension read as `+inf`.
    #[inline]
    pub fn dimension(&self, axis: Axis) -> f32 {
        self.get(axis).unwrap_or(f32::INFINITY)
    }

    /// Replace one dimension. An infinite value means unconstrained.
    #[inline]
    pub fn with(self, axis: Axis, value: Option<f32>) -> Self {
        let value = value.and_then(bounded);
        match axis {
            Axis::Horizontal => Self { width: value, ..self },
            Axis::Vertical => Self { height: value, ..self },
        }
    }

    /// Build a proposal from stack-axis and cross-axis dimensions.
    #[inline]
    pub fn from_axes(axis: Axis, main: Option<f32>, cross: Option<f32>) -> Self {
        Self::UNSPECIFIED.with(axis, main).with(axis.cross(), cross)
    }

    /// Reject negative and NaN dimensions.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            if let Some(value) = self.get(axis) {
                if value.is_nan() || value < 0.0 {
                    return Err(LayoutError::InvalidProposal { axis, value });
                }
            }
        }
        Ok(())
    }

    /// Whether `size` exceeds this proposal on `axis`.
    #[inline]
    pub fn is_exceeded_by(&self, size: Size, axis: Axis) -> bool {
        self.get(axis).is_some_and(|p| size.get(axis) > p)
    }
}

impl From<Size> for ProposedSize {
    fn from(size: Size) -> Self {
        Self::fixed(size.width, size.height)
    }
}

impl fmt::Display for ProposedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            Some(w) => write!(f, "{w}")?,
            None => f.write_str("nil")?,
        }
        f.write_str("x")?;
        match self.height {
            Some(h) => write!(f, "{h}"),
            None => f.write_str("nil"),
        }
    }
}

/// `None` for `+inf`, otherwise the value unchanged (negatives are left for `validate`).
#[inline]
pub(crate) fn bounded(value: f32) -> Option<f32> {
    if value == f32::INFINITY { None } else { Some(value) }
}
