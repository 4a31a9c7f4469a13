//! The negotiator: one recursive propose-then-report pass over a tree.
//!
//! # Architecture
//!
//! ```text
//! negotiate(root, proposal)
//!   └─ measure(node, proposal)        top-down: parent proposes
//!        ├─ rule for node.behavior    may measure children with derived proposals
//!        └─ Measured { size, .. }     bottom-up: child reports, final for this call
//! layout(root, proposal)
//!   └─ measure, then place            placement only reads reported sizes
//! ```
//!
//! No node is re-asked for a proposal it already answered and nothing is
//! kept between calls.

use crate::config::NegotiatorConfig;
use crate::error::{ConfigError, LayoutError};
use crate::primitives::{Point, Rect, Size};

use super::context::NegotiationContext;
use super::node::{Behavior, LayoutNode};
use super::proposal::{ProposedSize, ReportedSize};
use super::snapshot::{LayoutSnapshot, PlacedNode};

/// The answer of one node, plus the answers of the children it asked.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Measured {
    pub(crate) proposal: ProposedSize,
    pub(crate) size: Size,
    pub(crate) children: Vec<Measured>,
}

/// What a sizing rule hands back: the node's own report and its children's results.
pub(crate) type Negotiated = (ReportedSize, Vec<Measured>);

impl LayoutNode {
    /// Propose `proposal` to this node and collect its (final) report.
    pub(crate) fn measure<'a>(
        &'a self,
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Measured, LayoutError> {
        proposal.validate()?;
        self.behavior.validate()?;
        self.check_arity()?;

        ctx.enter(self.kind(), self.label_str());
        let result = self.apply_rule(proposal, ctx);
        if let Ok((size, _)) = &result {
            ctx.report(proposal, *size);
        }
        ctx.exit();

        let (size, children) = result?;
        Ok(Measured {
            proposal,
            size,
            children,
        })
    }

    fn apply_rule<'a>(
        &'a self,
        proposal: ProposedSize,
        ctx: &mut NegotiationContext<'a>,
    ) -> Result<Negotiated, LayoutError> {
        match &self.behavior {
            Behavior::FixedFrame(frame) => frame.negotiate(self.only_child()?, proposal, ctx),
            Behavior::Stack(stack) => stack.negotiate(&self.children, proposal, ctx),
            Behavior::IntrinsicLeaf(leaf) => Ok((leaf.report(proposal, ctx.config), Vec::new())),
            Behavior::IdealOverride(ideal) => ideal.negotiate(self.only_child()?, proposal, ctx),
            Behavior::Padding(insets) => super::modifiers::negotiate_padding(
                insets,
                self.only_child()?,
                proposal,
                ctx,
            ),
            Behavior::AspectRatio(aspect) => aspect.negotiate(self.only_child()?, proposal, ctx),
            Behavior::Offset(_) => {
                let child = self.only_child()?.measure(proposal, ctx)?;
                Ok((child.size, vec![child]))
            }
            Behavior::Position(position) => position.negotiate(self.only_child()?, proposal, ctx),
        }
    }

    /// Origins of this node's children, given its own bounds.
    fn child_origins(&self, bounds: Rect, measured: &Measured, config: &NegotiatorConfig) -> Vec<Point> {
        let children = &measured.children;
        match &self.behavior {
            Behavior::Stack(stack) => stack.child_origins(bounds, children, config),
            Behavior::IntrinsicLeaf(_) => Vec::new(),
            Behavior::FixedFrame(frame) => aligned(bounds, children, frame.alignment),
            Behavior::Padding(insets) => children
                .iter()
                .map(|_| bounds.origin() + Point::new(insets.leading, insets.top))
                .collect(),
            Behavior::Offset(offset) => children
                .iter()
                .map(|_| bounds.origin() + Point::new(offset.x, offset.y))
                .collect(),
            Behavior::Position(position) => position.child_origins(bounds, children),
            Behavior::IdealOverride(_) | Behavior::AspectRatio(_) => {
                aligned(bounds, children, Default::default())
            }
        }
    }
}

fn aligned(bounds: Rect, children: &[Measured], alignment: super::length::Alignment) -> Vec<Point> {
    children
        .iter()
        .map(|c| bounds.origin() + alignment.offset(bounds.size(), c.size))
        .collect()
}

/// Runs negotiation passes with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Negotiator {
    config: NegotiatorConfig,
}

impl Negotiator {
    /// Fails if `config` holds a negative or non-finite length.
    pub fn new(config: NegotiatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NegotiatorConfig {
        &self.config
    }

    /// Negotiate `root` against `proposal` and return the root's report.
    pub fn negotiate(&self, root: &LayoutNode, proposal: ProposedSize) -> Result<ReportedSize, LayoutError> {
        let mut ctx = NegotiationContext::new(&self.config);
        let measured = root.measure(proposal, &mut ctx)?;
        Ok(measured.size)
    }

    /// Negotiate `root` and place every node, root at the origin.
    pub fn layout(&self, root: &LayoutNode, proposal: ProposedSize) -> Result<LayoutSnapshot, LayoutError> {
        let mut ctx = NegotiationContext::new(&self.config);
        let measured = root.measure(proposal, &mut ctx)?;
        let visits = ctx.visits();

        let mut snapshot = LayoutSnapshot::with_capacity(root.node_count());
        self.place(root, &measured, Point::ORIGIN, None, 0, &mut snapshot);
        snapshot.set_warnings(ctx.take_warnings());

        tracing::debug!(
            nodes = snapshot.len(),
            visits,
            warnings = snapshot.warnings().len(),
            "layout pass complete: {} -> {}",
            proposal,
            measured.size
        );
        Ok(snapshot)
    }

    fn place(
        &self,
        node: &LayoutNode,
        measured: &Measured,
        origin: Point,
        parent: Option<usize>,
        depth: u32,
        snapshot: &mut LayoutSnapshot,
    ) {
        let rect = Rect::from_origin_size(origin, measured.size);
        let index = snapshot.push(PlacedNode {
            index: snapshot.len(),
            parent,
            depth,
            kind: node.kind(),
            label: node.label_str().map(str::to_owned),
            proposal: measured.proposal,
            rect,
        });

        let origins = node.child_origins(rect, measured, &self.config);
        for ((child, child_measured), child_origin) in
            node.children.iter().zip(&measured.children).zip(origins)
        {
            self.place(child, child_measured, child_origin, Some(index), depth + 1, snapshot);
        }
    }
}

/// Negotiate with the default configuration.
pub fn negotiate(root: &LayoutNode, proposal: ProposedSize) -> Result<ReportedSize, LayoutError> {
    Negotiator::default().negotiate(root, proposal)
}

/// Lay out with the default configuration.
pub fn layout(root: &LayoutNode, proposal: ProposedSize) -> Result<LayoutSnapshot, LayoutError> {
    Negotiator::default().layout(root, proposal)
}
