//! Layout negotiation for Haggle
//!
//! A parent proposes a size to its child, the child decides and reports,
//! and the parent builds its own report from its children's answers.
//!
//! # Architecture
//!
//! ```text
//! builders build the LayoutNode tree -> negotiate() walks it once -> layout() places the answers
//! ```
//!
//! Nothing survives a pass: the tree is described, negotiated and dropped.

pub mod proposal;
pub mod length;
pub mod context;

// node must come before the rules (the rules take &LayoutNode children)
pub mod node;
pub mod frame;
pub mod stack;
pub mod leaf;
pub mod ideal;
pub mod modifiers;

pub mod negotiator;
pub mod snapshot;

// Re-export core types
pub use proposal::{ProposedSize, ReportedSize};
pub use length::{Alignment, ContentMode, EdgeInsets, HorizontalAlignment, VerticalAlignment};
pub use context::{LayoutWarning, NegotiationContext};

// Re-export node types
pub use node::{Behavior, LayoutNode};
pub use frame::{AxisFrame, FrameSpec};
pub use stack::{priority_groups, StackAxis, StackSpec};
pub use leaf::{IntrinsicLeaf, LeafSizing};
pub use ideal::IdealOverride;
pub use modifiers::{AspectRatio, Offset, Position};

// Re-export entry points
pub use negotiator::{layout, negotiate, Negotiator};
pub use snapshot::{LayoutSnapshot, PlacedNode};
