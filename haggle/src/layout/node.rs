//! Layout nodes - the tree the negotiator walks.
//!
//! A `LayoutNode` pairs a [`Behavior`] (which sizing rule applies) with the
//! children it owns. Modifiers such as `frame` or `padding` are ordinary
//! nodes wrapping exactly one child, so a chain like
//!
//! ```
//! use haggle::{FrameSpec, LayoutNode};
//!
//! let node = LayoutNode::image((20.0, 20.0).into())
//!     .resizable()
//!     .frame(FrameSpec::new().width(150.0).height(150.0))
//!     .padding(8.0);
//! assert_eq!(node.kind(), "Padding");
//! ```
//!
//! builds the tree `Padding -> FixedFrame -> IntrinsicLeaf` eagerly, before
//! any negotiation happens.

use crate::error::LayoutError;
use crate::primitives::Size;

use super::frame::FrameSpec;
use super::ideal::IdealOverride;
use super::leaf::IntrinsicLeaf;
use super::length::{Alignment, ContentMode, EdgeInsets};
use super::modifiers::{AspectRatio, Offset, Position};
use super::stack::{StackAxis, StackSpec};

/// Which sizing rule a node follows.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    /// Overrides or clamps the proposal for its single child.
    FixedFrame(FrameSpec),
    /// Arranges any number of children along an axis, or on top of each other.
    Stack(StackSpec),
    /// A primitive with a natural size (text, shape, spacer, image, path).
    IntrinsicLeaf(IntrinsicLeaf),
    /// Opts one or both axes out of the proposal in favour of an ideal size.
    IdealOverride(IdealOverride),
    /// Insets its single child.
    Padding(EdgeInsets),
    /// Constrains its single child to a width/height ratio.
    AspectRatio(AspectRatio),
    /// Shifts its single child without affecting size.
    Offset(Offset),
    /// Takes the full proposal and centres its single child on a point.
    Position(Position),
}

/// How many children a behavior accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    None,
    One,
    Any,
}

impl Behavior {
    pub(crate) fn arity(&self) -> Arity {
        match self {
            Behavior::IntrinsicLeaf(_) => Arity::None,
            Behavior::Stack(_) => Arity::Any,
            _ => Arity::One,
        }
    }

    /// Short name used in logs, errors and snapshots.
    pub fn kind(&self) -> &'static str {
        match self {
            Behavior::FixedFrame(_) => "FixedFrame",
            Behavior::Stack(s) => match s.axis {
                StackAxis::Horizontal => "HStack",
                StackAxis::Vertical => "VStack",
                StackAxis::Overlay => "ZStack",
            },
            Behavior::IntrinsicLeaf(_) => "IntrinsicLeaf",
            Behavior::IdealOverride(_) => "IdealOverride",
            Behavior::Padding(_) => "Padding",
            Behavior::AspectRatio(_) => "AspectRatio",
            Behavior::Offset(_) => "Offset",
            Behavior::Position(_) => "Position",
        }
    }

    /// Check the behavior's own parameters.
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        match self {
            Behavior::FixedFrame(f) => f.validate(),
            Behavior::Stack(s) => s.validate(),
            Behavior::IntrinsicLeaf(l) => l.validate(),
            Behavior::IdealOverride(i) => i.validate(),
            Behavior::Padding(insets) => insets.validate(),
            Behavior::AspectRatio(a) => a.validate(),
            Behavior::Offset(o) => o.validate(),
            Behavior::Position(p) => p.validate(),
        }
    }
}

/// A node in a layout tree. Parents exclusively own their children.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub(crate) behavior: Behavior,
    pub(crate) children: Vec<LayoutNode>,
    priority: Option<i32>,
    label: Option<String>,
}

impl LayoutNode {
    /// Create a node from a behavior and its children.
    ///
    /// No checks happen here; a malformed node fails when negotiated, or
    /// earlier through [`LayoutNode::validate`].
    pub fn new(behavior: Behavior, children: Vec<LayoutNode>) -> Self {
        Self {
            behavior,
            children,
            priority: None,
            label: None,
        }
    }

    // =====================================================================
    // Leaves
    // =====================================================================

    pub fn leaf(leaf: IntrinsicLeaf) -> Self {
        Self::new(Behavior::IntrinsicLeaf(leaf), Vec::new())
    }

    /// A single line of text `width` wide that wraps onto lines of `line_height`.
    pub fn text(width: f32, line_height: f32) -> Self {
        Self::leaf(IntrinsicLeaf::text(width, line_height))
    }

    /// A shape or colour that fills whatever it is offered.
    pub fn shape() -> Self {
        Self::leaf(IntrinsicLeaf::shape())
    }

    /// Flexible space.
    pub fn spacer() -> Self {
        Self::leaf(IntrinsicLeaf::spacer())
    }

    /// A non-resizable image. Use [`LayoutNode::resizable`] to let it fill.
    pub fn image(natural: Size) -> Self {
        Self::leaf(IntrinsicLeaf::image(natural))
    }

    /// A path drawn at fixed coordinates; it never shrinks.
    pub fn path(natural: Size) -> Self {
        Self::leaf(IntrinsicLeaf::path(natural))
    }

    /// Switch a leaf to filling on both axes. No effect on other nodes.
    pub fn resizable(mut self) -> Self {
        if let Behavior::IntrinsicLeaf(leaf) = &mut self.behavior {
            *leaf = leaf.resizable();
        }
        self
    }

    // =====================================================================
    // Stacks
    // =====================================================================

    pub fn stack(spec: StackSpec, children: Vec<LayoutNode>) -> Self {
        Self::new(Behavior::Stack(spec), children)
    }

    pub fn hstack(children: Vec<LayoutNode>) -> Self {
        Self::stack(StackSpec::new(StackAxis::Horizontal), children)
    }

    pub fn vstack(children: Vec<LayoutNode>) -> Self {
        Self::stack(StackSpec::new(StackAxis::Vertical), children)
    }

    pub fn zstack(children: Vec<LayoutNode>) -> Self {
        Self::stack(StackSpec::new(StackAxis::Overlay), children)
    }

    // =====================================================================
    // Modifiers (each wraps `self` in a new node)
    // =====================================================================

    fn wrap(self, behavior: Behavior) -> Self {
        Self::new(behavior, vec![self])
    }

    pub fn frame(self, spec: FrameSpec) -> Self {
        self.wrap(Behavior::FixedFrame(spec))
    }

    /// Shorthand for a frame with fixed width and height.
    pub fn frame_size(self, width: f32, height: f32) -> Self {
        self.frame(FrameSpec::new().width(width).height(height))
    }

    pub fn ideal(self, spec: IdealOverride) -> Self {
        self.wrap(Behavior::IdealOverride(spec))
    }

    /// Opt out of the proposal on both axes and report the ideal size.
    pub fn fixed_size(self) -> Self {
        self.fixed_size_axes(true, true)
    }

    /// Opt out of the proposal on the selected axes.
    pub fn fixed_size_axes(self, horizontal: bool, vertical: bool) -> Self {
        self.ideal(IdealOverride::new().horizontal(horizontal).vertical(vertical))
    }

    /// Uniform padding.
    pub fn padding(self, value: f32) -> Self {
        self.padding_insets(EdgeInsets::all(value))
    }

    pub fn padding_insets(self, insets: EdgeInsets) -> Self {
        self.wrap(Behavior::Padding(insets))
    }

    /// Constrain to `ratio` (width / height), or the child's own ideal ratio when `None`.
    ///
    /// With `None` the child subtree is negotiated twice: once unconstrained
    /// to learn its ideal size, then with the fitted proposal. Nesting `k`
    /// such modifiers costs `2^k` negotiations of the innermost subtree, and
    /// each one appears in the `haggle::conversation` trace. Pass an explicit
    /// ratio when it is known.
    pub fn aspect_ratio(self, ratio: Option<f32>, mode: ContentMode) -> Self {
        self.wrap(Behavior::AspectRatio(AspectRatio { ratio, mode }))
    }

    pub fn offset(self, x: f32, y: f32) -> Self {
        self.wrap(Behavior::Offset(Offset { x, y }))
    }

    pub fn position(self, x: f32, y: f32) -> Self {
        self.wrap(Behavior::Position(Position { x, y }))
    }

    /// Frame alignment shorthand: a frame with no size constraints that only aligns.
    pub fn align(self, alignment: Alignment) -> Self {
        self.frame(FrameSpec::new().alignment(alignment))
    }

    // =====================================================================
    // Attributes
    // =====================================================================

    pub fn layout_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Attach a label, used in logs and for [`LayoutSnapshot::find`](crate::LayoutSnapshot::find).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // =====================================================================
    // Accessors
    // =====================================================================

    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    pub fn kind(&self) -> &'static str {
        self.behavior.kind()
    }

    pub fn label_str(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Priority used when this node sits in a directional stack.
    ///
    /// An explicit priority wins; otherwise wrappers inherit their child's,
    /// so `.frame(..)` does not hide a priority set underneath it.
    pub fn effective_priority(&self) -> i32 {
        if let Some(priority) = self.priority {
            return priority;
        }
        match self.behavior.arity() {
            Arity::One => self.children.first().map_or(0, LayoutNode::effective_priority),
            _ => 0,
        }
    }

    /// The single child of a wrapper node.
    pub(crate) fn only_child(&self) -> Result<&LayoutNode, LayoutError> {
        self.check_arity()?;
        self.children.first().ok_or(LayoutError::MissingChild { node: self.kind() })
    }

    pub(crate) fn check_arity(&self) -> Result<(), LayoutError> {
        let (max, found) = match self.behavior.arity() {
            Arity::None => (0, self.children.len()),
            Arity::One => (1, self.children.len()),
            Arity::Any => return Ok(()),
        };
        if found > max {
            return Err(LayoutError::UnexpectedChildren {
                node: self.kind(),
                max,
                found,
            });
        }
        if max == 1 && found == 0 {
            return Err(LayoutError::MissingChild { node: self.kind() });
        }
        Ok(())
    }

    /// Check the whole tree without negotiating it.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.behavior.validate()?;
        self.check_arity()?;
        self.children.iter().try_for_each(LayoutNode::validate)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }
}
