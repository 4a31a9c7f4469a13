//! Single-child modifiers: padding, aspect ratio, offset, position.

use crate::error::{check, LayoutError};
use crate::primitives::{Point, Rect, Size};

use super::context::NegotiationContext;
use super::length::{ContentMode, EdgeInsets};
use super::negotiator::{Measured, Negotiated};
use super::node::LayoutNode;
use super::proposal::ProposedSize;

// =========================================================================
// Padding
// =========================================================================

/// Deflate the proposal by the insets, inflate the child's report by them.
pub(crate) fn negotiate_padding<'a>(
    insets: &EdgeInsets,
    child: &'a LayoutNode,
    proposal: ProposedSize,
    ctx: &mut NegotiationContext<'a>,
) -> Result<Negotiated, LayoutError> {
    let inner = ProposedSize::new(
        proposal.width.map(|w| (w - insets.horizontal()).max(0.0)),
        proposal.height.map(|h| (h - insets.vertical()).max(0.0)),
    );
    let child = child.measure(inner, ctx)?;
    let size = Size::new(
        child.size.width + insets.horizontal(),
        child.size.height + insets.vertical(),
    );
    Ok((size, vec![child]))
}

// =========================================================================
// AspectRatio
// =========================================================================

/// Constrains a child to a width/height ratio.
///
/// Without an explicit ratio the child is measured once more, unconstrained,
/// to read its ideal size; see [`LayoutNode::aspect_ratio`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    /// Width divided by height. `None` borrows the child's ideal ratio.
    pub ratio: Option<f32>,
    pub mode: ContentMode,
}

impl AspectRatio {
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        match self.ratio {
            Some(r) if !r.is_finite() || r <= 0.0 => {
                Err(LayoutError::constraint("AspectRatio", format!("ratio = {r}")))
            }
            _ => Ok(()),
        }
    }

    /// The proposal of `ratio` derived from `proposal`, or `None` when nothing is proposed.
    fn fitted(&self, ratio: f32, proposal: ProposedSize) -> Option<Size> {
        match (proposal.width, proposal.height) {
            (Some(w), Some(h)) => {
                let width = match self.mode {
                    ContentMode::Fit => w.min(h * ratio),
                    ContentMode::Fill => w.max(h * ratio),
                };
                Some(Size::new(width, width / ratio))
            }
            (Some(w), None) => Some(Size::new(w, w / ratio)),
            (None, Some(h)) => Some(Size::new(h * ratio, h)),
            (None, None) => None,
        }
    }

    pub(crate) fn negotiate<'a>(
        &self,
        child: &'a LayoutNode,
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Negotiated, LayoutError> {
        let ratio = match self.ratio {
            Some(ratio) => Some(ratio),
            None => {
                // Probe for the child's ideal size; the probe result is discarded.
                let ideal = child.measure(ProposedSize::UNSPECIFIED, ctx)?.size;
                (ideal.width > 0.0 && ideal.height > 0.0).then(|| ideal.width / ideal.height)
            }
        };

        // No usable ratio, or nothing proposed: the child sees the proposal unchanged.
        let child_proposal = ratio
            .and_then(|r| self.fitted(r, proposal))
            .map_or(proposal, ProposedSize::from);
        let child = child.measure(child_proposal, ctx)?;
        Ok((child.size, vec![child]))
    }
}

// =========================================================================
// Offset / Position
// =========================================================================

/// Shifts a child after layout. Sizes are untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        check::finite("Offset", "x", self.x)?;
        check::finite("Offset", "y", self.y)
    }
}

/// Centres a child on a point in the parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        check::finite("Position", "x", self.x)?;
        check::finite("Position", "y", self.y)
    }

    /// Takes the whole proposal; unconstrained axes fall back to the child's size.
    pub(crate) fn negotiate<'a>(
        &self,
        child: &'a LayoutNode,
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Negotiated, LayoutError> {
        let child = child.measure(proposal, ctx)?;
        let size = Size::new(
            proposal.width.unwrap_or(child.size.width),
            proposal.height.unwrap_or(child.size.height),
        );
        Ok((size, vec![child]))
    }

    pub(crate) fn child_origins(&self, bounds: Rect, children: &[Measured]) -> Vec<Point> {
        children
            .iter()
            .map(|c| {
                bounds.origin()
                    + Point::new(self.x - c.size.width / 2.0, self.y - c.size.height / 2.0)
            })
            .collect()
    }
}
