//! Stacks - directional (HStack/VStack) and overlay (ZStack) containers.
//!
//! Directional stacks hand out space in priority groups:
//!
//! ```text
//! remaining = proposed stack-axis length - spacing
//! for group in groups (highest priority first):
//!     share = remaining / group.len()          // even split, same for every member
//!     each member is proposed (share, full cross axis)
//!     remaining -= sum of the members' reports
//! ```
//!
//! So a higher-priority child gets first pick, and a child that takes less
//! than its share leaves the rest to the groups after it.

use std::cmp::Reverse;

use crate::config::NegotiatorConfig;
use crate::error::{check, LayoutError};
use crate::primitives::{Axis, Point, Rect, Size};

use super::context::NegotiationContext;
use super::length::Alignment;
use super::negotiator::{Measured, Negotiated};
use super::node::LayoutNode;
use super::proposal::{bounded, ProposedSize};

/// Direction a stack arranges its children in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAxis {
    Horizontal,
    Vertical,
    /// All children share the full proposal, drawn on top of each other.
    Overlay,
}

impl StackAxis {
    /// The stack axis, or `None` for overlays.
    pub fn axis(self) -> Option<Axis> {
        match self {
            StackAxis::Horizontal => Some(Axis::Horizontal),
            StackAxis::Vertical => Some(Axis::Vertical),
            StackAxis::Overlay => None,
        }
    }
}

/// Parameters of a stack node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSpec {
    pub axis: StackAxis,
    /// Gap between children; `None` uses the configured default.
    pub spacing: Option<f32>,
    /// Cross-axis alignment (directional) or full alignment (overlay).
    pub alignment: Alignment,
}

impl StackSpec {
    pub fn new(axis: StackAxis) -> Self {
        Self {
            axis,
            spacing: None,
            alignment: Alignment::CENTER,
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        match self.spacing {
            Some(spacing) => check::length("Stack", "spacing", spacing),
            None => Ok(()),
        }
    }

    fn resolved_spacing(&self, config: &NegotiatorConfig) -> f32 {
        match self.axis {
            StackAxis::Overlay => 0.0,
            _ => self.spacing.unwrap_or(config.default_spacing),
        }
    }

    pub(crate) fn negotiate<'a>(
        &self,
        children: &'a [LayoutNode],
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Negotiated, LayoutError> {
        match self.axis.axis() {
            None => negotiate_overlay(children, proposal, ctx),
            Some(axis) => {
                let spacing = self.resolved_spacing(ctx.config);
                negotiate_directional(axis, spacing, children, proposal, ctx)
            }
        }
    }

    pub(crate) fn child_origins(
        &self,
        bounds: Rect,
        children: &[Measured],
        config: &NegotiatorConfig,
    ) -> Vec<Point> {
        let Some(axis) = self.axis.axis() else {
            return children
                .iter()
                .map(|c| bounds.origin() + self.alignment.offset(bounds.size(), c.size))
                .collect();
        };

        let spacing = self.resolved_spacing(config);
        let mut cursor = 0.0;
        children
            .iter()
            .map(|child| {
                let (x, y) = match axis {
                    Axis::Horizontal => {
                        let y = self.alignment.vertical.offset(bounds.height, child.size.height);
                        (cursor, y)
                    }
                    Axis::Vertical => {
                        let x = self.alignment.horizontal.offset(bounds.width, child.size.width);
                        (x, cursor)
                    }
                };
                cursor += child.size.get(axis) + spacing;
                bounds.origin() + Point::new(x, y)
            })
            .collect()
    }
}

/// Children indices grouped by effective priority, highest group first.
///
/// Within a group, children keep their declaration order.
pub fn priority_groups(children: &[LayoutNode]) -> Vec<(i32, Vec<usize>)> {
    let mut order: Vec<usize> = (0..children.len()).collect();
    order.sort_by_key(|&i| Reverse(children[i].effective_priority()));

    order
        .chunk_by(|&a, &b| children[a].effective_priority() == children[b].effective_priority())
        .map(|group| (children[group[0]].effective_priority(), group.to_vec()))
        .collect()
}

fn negotiate_overlay<'a>(
    children: &'a [LayoutNode],
    proposal: ProposedSize,
    ctx: &mut NegotiationContext<'a>,
) -> Result<Negotiated, LayoutError> {
    let mut size = Size::ZERO;
    let mut measured = Vec::with_capacity(children.len());
    for child in children {
        let m = child.measure(proposal, ctx)?;
        size = size.max(m.size);
        measured.push(m);
    }
    Ok((size, measured))
}

fn negotiate_directional<'a>(
    axis: Axis,
    spacing: f32,
    children: &'a [LayoutNode],
    proposal: ProposedSize,
    ctx: &mut NegotiationContext<'a>,
) -> Result<Negotiated, LayoutError> {
    if children.is_empty() {
        return Ok((Size::ZERO, Vec::new()));
    }

    let total_spacing = spacing * (children.len() - 1) as f32;
    let cross = proposal.get(axis.cross());
    let mut remaining = (proposal.dimension(axis) - total_spacing).max(0.0);
    let mut results: Vec<Option<Measured>> = (0..children.len()).map(|_| None).collect();

    for (priority, group) in priority_groups(children) {
        let share = remaining / group.len() as f32;
        let child_proposal = ProposedSize::from_axes(axis, bounded(share), cross);
        if ctx.config.trace_conversation {
            tracing::trace!(
                target: "haggle::conversation",
                priority,
                members = group.len(),
                "group offered {} of {} remaining",
                share,
                remaining
            );
        }

        let mut consumed = 0.0;
        for index in group {
            let m = children[index].measure(child_proposal, ctx)?;
            consumed += m.size.get(axis);
            results[index] = Some(m);
        }
        remaining = (remaining - consumed).max(0.0);
    }

    let measured: Vec<Measured> = results.into_iter().flatten().collect();
    let mut main = measured.iter().map(|m| m.size.get(axis)).sum::<f32>() + total_spacing;

    // Even shares can sum a rounding step past the proposal. Only real
    // overflow (a child over its share, or spacing alone) may exceed it.
    if let Some(limit) = proposal.get(axis) {
        let within_shares = measured.iter().all(|m| !m.proposal.is_exceeded_by(m.size, axis));
        if within_shares && total_spacing <= limit {
            main = main.min(limit);
        }
    }
    let cross_size = measured
        .iter()
        .map(|m| m.size.get(axis.cross()))
        .fold(0.0f32, f32::max);

    Ok((Size::from_axes(axis, main, cross_size), measured))
}
