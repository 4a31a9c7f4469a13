//! FixedFrame - overrides or clamps the proposal for a single child.
//!
//! On each axis a frame either fixes the dimension (`width`/`height`) or
//! clamps it (`min_*`/`max_*`). The child is proposed the effective size and
//! whatever it answers, a fixed axis is reported verbatim: parents propose,
//! they never enforce.

use crate::error::{check, LayoutError};
use crate::primitives::{Axis, Size};

use super::context::NegotiationContext;
use super::length::Alignment;
use super::negotiator::Negotiated;
use super::node::LayoutNode;
use super::proposal::{bounded, ProposedSize};

const NODE: &str = "FixedFrame";

/// Per-axis frame constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisFrame {
    pub fixed: Option<f32>,
    pub min: Option<f32>,
    pub max: Option<f32>,
}

impl AxisFrame {
    fn validate(&self, axis: Axis) -> Result<(), LayoutError> {
        let (fixed, min, max) = match axis {
            Axis::Horizontal => ("width", "min_width", "max_width"),
            Axis::Vertical => ("height", "min_height", "max_height"),
        };
        if let Some(v) = self.fixed {
            check::length(NODE, fixed, v)?;
        }
        if let Some(v) = self.min {
            check::length(NODE, min, v)?;
        }
        if let Some(v) = self.max {
            check::upper_bound(NODE, max, v)?;
        }
        check::ordered(NODE, min, self.min, max, self.max)
    }

    #[inline]
    fn is_clamped(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    #[inline]
    fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min.unwrap_or(0.0), self.max.unwrap_or(f32::INFINITY))
    }

    /// The dimension proposed to the child.
    fn effective(&self, incoming: Option<f32>) -> Option<f32> {
        if let Some(fixed) = self.fixed {
            return Some(fixed);
        }
        if self.is_clamped() {
            return bounded(self.clamp(incoming.unwrap_or(f32::INFINITY)));
        }
        incoming
    }

    /// The dimension this frame reports, given the child's.
    fn report(&self, child: f32) -> f32 {
        match self.fixed {
            Some(fixed) => fixed,
            None => self.clamp(child),
        }
    }
}

/// Parameters of a frame node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameSpec {
    pub horizontal: AxisFrame,
    pub vertical: AxisFrame,
    pub alignment: Alignment,
}

impl FrameSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both dimensions fixed.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new().width(width).height(height)
    }

    pub fn width(mut self, width: f32) -> Self {
        self.horizontal.fixed = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.vertical.fixed = Some(height);
        self
    }

    pub fn min_width(mut self, value: f32) -> Self {
        self.horizontal.min = Some(value);
        self
    }

    pub fn max_width(mut self, value: f32) -> Self {
        self.horizontal.max = Some(value);
        self
    }

    pub fn min_height(mut self, value: f32) -> Self {
        self.vertical.min = Some(value);
        self
    }

    pub fn max_height(mut self, value: f32) -> Self {
        self.vertical.max = Some(value);
        self
    }

    /// Where the child sits inside the frame. Centred by default.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    fn axis(&self, axis: Axis) -> &AxisFrame {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        self.horizontal.validate(Axis::Horizontal)?;
        self.vertical.validate(Axis::Vertical)
    }

    /// The proposal the child receives.
    pub fn effective_proposal(&self, incoming: ProposedSize) -> ProposedSize {
        ProposedSize::new(
            self.horizontal.effective(incoming.width),
            self.vertical.effective(incoming.height),
        )
    }

    pub(crate) fn negotiate<'a>(
        &self,
        child: &'a LayoutNode,
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Negotiated, LayoutError> {
        let child = child.measure(self.effective_proposal(proposal), ctx)?;
        let size = Size::new(
            self.axis(Axis::Horizontal).report(child.size.width),
            self.axis(Axis::Vertical).report(child.size.height),
        );
        Ok((size, vec![child]))
    }
}
