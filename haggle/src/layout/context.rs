//! Negotiation context for tracing and diagnostics.
//!
//! The NegotiationContext carries per-pass state through the tree:
//! - The configuration the pass runs with
//! - Depth tracking for the conversation log
//! - Overflow warnings collected along the way
//!
//! It never influences a node's size. Siblings see the same configuration
//! and nothing they report to each other.

use serde::Serialize;

use crate::config::NegotiatorConfig;
use crate::primitives::{Axis, Size};

use super::proposal::ProposedSize;

/// A node reported more than it was proposed on a bounded axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutWarning {
    pub depth: u32,
    pub node: &'static str,
    pub label: Option<String>,
    pub axis: Axis,
    pub proposed: f32,
    pub reported: f32,
}

impl LayoutWarning {
    pub fn message(&self) -> String {
        format!(
            "{} reported {} {} but only {} was proposed",
            self.label.as_deref().unwrap_or(self.node),
            self.reported,
            self.axis,
            self.proposed
        )
    }
}

struct Frame<'n> {
    node: &'static str,
    label: Option<&'n str>,
}

/// Ephemeral state for one negotiation pass.
pub struct NegotiationContext<'a> {
    pub(crate) config: &'a NegotiatorConfig,
    stack: Vec<Frame<'a>>,
    warnings: Vec<LayoutWarning>,
    visits: usize,
}

impl<'a> NegotiationContext<'a> {
    pub fn new(config: &'a NegotiatorConfig) -> Self {
        Self {
            config,
            stack: Vec::with_capacity(16),
            warnings: Vec::new(),
            visits: 0,
        }
    }

    /// Enter a node's scope.
    pub fn enter(&mut self, node: &'static str, label: Option<&'a str>) {
        self.stack.push(Frame { node, label });
        self.visits += 1;
    }

    /// Leave the current node's scope.
    pub fn exit(&mut self) {
        self.stack.pop();
    }

    /// Depth of the current node (root is 0).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.stack.len().saturating_sub(1) as u32
    }

    /// Number of node negotiations so far in this pass.
    pub fn visits(&self) -> usize {
        self.visits
    }

    /// Record the current node's answer to `proposal`.
    pub fn report(&mut self, proposal: ProposedSize, size: Size) {
        debug_assert!(size.width >= 0.0 && size.height >= 0.0, "negative report {size}");

        let Some(frame) = self.stack.last() else {
            return;
        };
        let (node, label) = (frame.node, frame.label);
        let depth = self.depth();

        if self.config.trace_conversation {
            tracing::trace!(
                target: "haggle::conversation",
                depth,
                node,
                label = label.unwrap_or(""),
                "{}{} offered {} -> takes {}",
                "  ".repeat(depth as usize),
                label.unwrap_or(node),
                proposal,
                size,
            );
        }

        if !self.config.collect_warnings {
            return;
        }
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let Some(proposed) = proposal.get(axis) else {
                continue;
            };
            if !proposal.is_exceeded_by(size, axis) {
                continue;
            }
            let warning = LayoutWarning {
                depth,
                node,
                label: label.map(str::to_owned),
                axis,
                proposed,
                reported: size.get(axis),
            };
            tracing::debug!("{}", warning.message());
            self.warnings.push(warning);
        }
    }

    /// Take collected warnings.
    pub fn take_warnings(&mut self) -> Vec<LayoutWarning> {
        std::mem::take(&mut self.warnings)
    }
}
