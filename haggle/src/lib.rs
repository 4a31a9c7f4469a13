//! Haggle: propose-then-report size negotiation for declarative layout trees
//!
//! Haggle reproduces the sizing conversation of a declarative UI framework:
//! - A parent proposes a size; either dimension may be unconstrained
//! - The child decides, and its report is final for that proposal
//! - Frames fix or clamp, stacks share space by layout priority, leaves fill,
//!   fit or overflow, and fixed-size opt-outs ignore the proposal entirely
//!
//! # Usage
//!
//! ```
//! use haggle::{FrameSpec, LayoutNode, ProposedSize, Size};
//!
//! // VStack { Image.resizable().frame(width: 150, height: 150) }.frame(width: 75, height: 75)
//! let tree = LayoutNode::vstack(vec![
//!     LayoutNode::image(Size::new(20.0, 20.0))
//!         .resizable()
//!         .frame(FrameSpec::fixed(150.0, 150.0))
//!         .label("star"),
//! ])
//! .frame(FrameSpec::fixed(75.0, 75.0));
//!
//! let snapshot = haggle::layout(&tree, ProposedSize::fixed(375.0, 667.0)).unwrap();
//! assert_eq!(snapshot.root().unwrap().size(), Size::new(75.0, 75.0));
//! // Parents propose, they never enforce.
//! assert_eq!(snapshot.find("star").unwrap().size(), Size::new(150.0, 150.0));
//! ```

// Core primitives
pub mod primitives;
pub mod error;
pub mod config;

// Negotiation (node model, sizing rules, placement)
pub mod layout;

// Re-export core types
pub use primitives::{Axis, Point, Rect, Size};
pub use error::{ConfigError, LayoutError};
pub use config::NegotiatorConfig;
pub use layout::{
    layout, negotiate, priority_groups, Alignment, AspectRatio, AxisFrame, Behavior, ContentMode,
    EdgeInsets, FrameSpec, HorizontalAlignment, IdealOverride, IntrinsicLeaf, LayoutNode,
    LayoutSnapshot, LayoutWarning, LeafSizing, NegotiationContext, Negotiator, Offset, PlacedNode,
    Position, ProposedSize, ReportedSize, StackAxis, StackSpec, VerticalAlignment,
};
