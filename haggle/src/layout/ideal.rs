//! IdealOverride - opting out of the proposal on one or both axes.
//!
//! An opted-out axis ignores whatever the parent proposed. The child is
//! proposed the ideal value (or nothing, letting it pick its natural size)
//! and the ideal value is reported. Axes that are not opted out pass
//! straight through.

use crate::error::{check, LayoutError};
use crate::primitives::{Axis, Size};

use super::context::NegotiationContext;
use super::negotiator::Negotiated;
use super::node::LayoutNode;
use super::proposal::ProposedSize;

const NODE: &str = "IdealOverride";

/// Ideal dimensions and which axes use them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdealOverride {
    pub ideal_width: Option<f32>,
    pub ideal_height: Option<f32>,
    pub horizontal: bool,
    pub vertical: bool,
}

impl IdealOverride {
    /// No ideal values, no axis opted out.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ideal_width(mut self, width: f32) -> Self {
        self.ideal_width = Some(width);
        self
    }

    pub fn ideal_height(mut self, height: f32) -> Self {
        self.ideal_height = Some(height);
        self
    }

    /// Opt the horizontal axis out of the proposal.
    pub fn horizontal(mut self, opted_out: bool) -> Self {
        self.horizontal = opted_out;
        self
    }

    /// Opt the vertical axis out of the proposal.
    pub fn vertical(mut self, opted_out: bool) -> Self {
        self.vertical = opted_out;
        self
    }

    fn opted_out(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn ideal(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.ideal_width,
            Axis::Vertical => self.ideal_height,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        if let Some(w) = self.ideal_width {
            check::length(NODE, "ideal_width", w)?;
        }
        if let Some(h) = self.ideal_height {
            check::length(NODE, "ideal_height", h)?;
        }
        Ok(())
    }

    fn child_dimension(&self, axis: Axis, incoming: ProposedSize) -> Option<f32> {
        if self.opted_out(axis) {
            self.ideal(axis)
        } else {
            incoming.get(axis)
        }
    }

    fn reported_dimension(&self, axis: Axis, child: Size) -> f32 {
        match (self.opted_out(axis), self.ideal(axis)) {
            (true, Some(ideal)) => ideal,
            _ => child.get(axis),
        }
    }

    pub(crate) fn negotiate<'a>(
        &self,
        child: &'a LayoutNode,
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Negotiated, LayoutError> {
        let child_proposal = ProposedSize::new(
            self.child_dimension(Axis::Horizontal, proposal),
            self.child_dimension(Axis::Vertical, proposal),
        );
        let child = child.measure(child_proposal, ctx)?;
        let size = Size::new(
            self.reported_dimension(Axis::Horizontal, child.size),
            self.reported_dimension(Axis::Vertical, child.size),
        );
        Ok((size, vec![child]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::negotiator::{layout, negotiate};

    #[test]
    fn test_fixed_size_text_is_not_truncated() {
        let text = LayoutNode::text(500.0, 40.0).fixed_size();
        let size = negotiate(&text, ProposedSize::fixed(375.0, 600.0)).unwrap();
        assert_eq!(size, Size::new(500.0, 40.0));
    }

    #[test]
    fn test_vertical_only_opt_out_uses_proposed_width() {
        let text = LayoutNode::text(500.0, 20.0).fixed_size_axes(false, true);
        // Width is proposed 100 -> 5 lines, height opts out of the 30 proposed.
        let size = negotiate(&text, ProposedSize::fixed(100.0, 30.0)).unwrap();
        assert_eq!(size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_ideal_values_reported_on_opted_out_axes() {
        let marbles = LayoutNode::shape()
            .ideal(IdealOverride::new().ideal_width(280.0).ideal_height(28.0).horizontal(true).vertical(true))
            .label("marbles");
        let snapshot = layout(&marbles, ProposedSize::fixed(100.0, 100.0)).unwrap();

        let root = snapshot.root().unwrap();
        assert_eq!(root.size(), Size::new(280.0, 28.0));
        let shape = &snapshot.nodes()[1];
        assert_eq!(shape.proposal, ProposedSize::fixed(280.0, 28.0));
    }

    #[test]
    fn test_ideal_ignored_without_opt_out() {
        let node = LayoutNode::shape().ideal(IdealOverride::new().ideal_width(280.0));
        let size = negotiate(&node, ProposedSize::fixed(100.0, 50.0)).unwrap();
        assert_eq!(size, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_opt_out_without_ideal_proposes_nil() {
        let node = LayoutNode::shape().fixed_size();
        let size = negotiate(&node, ProposedSize::fixed(100.0, 50.0)).unwrap();
        assert_eq!(size, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_negative_ideal_rejected() {
        let node = LayoutNode::shape().ideal(IdealOverride::new().ideal_height(-3.0).vertical(true));
        assert!(matches!(
            negotiate(&node, ProposedSize::UNSPECIFIED).unwrap_err(),
            LayoutError::InvalidConstraint { node: "IdealOverride", .. }
        ));
    }
}
