//! Alignment, insets and content-mode types used by placement and modifiers.

use serde::{Deserialize, Serialize};

use crate::error::{check, LayoutError};
use crate::primitives::{Point, Size};

/// Horizontal placement of a child inside its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// X offset of content of width `content` inside `container`.
    #[inline]
    pub fn offset(self, container: f32, content: f32) -> f32 {
        match self {
            HorizontalAlignment::Leading => 0.0,
            HorizontalAlignment::Center => (container - content) / 2.0,
            HorizontalAlignment::Trailing => container - content,
        }
    }
}

/// Vertical placement of a child inside its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// Y offset of content of height `content` inside `container`.
    #[inline]
    pub fn offset(self, container: f32, content: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => (container - content) / 2.0,
            VerticalAlignment::Bottom => container - content,
        }
    }
}

/// Two-axis alignment. Everything is centred unless told otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const CENTER: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    pub const TOP_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    pub const TOP: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Top);
    pub const TOP_TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    pub const LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Center);
    pub const TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Center);
    pub const BOTTOM_LEADING: Self = Self::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    pub const BOTTOM: Self = Self::new(HorizontalAlignment::Center, VerticalAlignment::Bottom);
    pub const BOTTOM_TRAILING: Self = Self::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self { horizontal, vertical }
    }

    /// Offset of `content` inside `container`. Negative when the content overflows.
    #[inline]
    pub fn offset(&self, container: Size, content: Size) -> Point {
        Point::new(
            self.horizontal.offset(container.width, content.width),
            self.vertical.offset(container.height, content.height),
        )
    }
}

/// Insets applied by the padding modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    /// Create insets with explicit values for each side.
    pub fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Uniform insets on all sides.
    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric insets (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        check::length("Padding", "top", self.top)?;
        check::length("Padding", "leading", self.leading)?;
        check::length("Padding", "bottom", self.bottom)?;
        check::length("Padding", "trailing", self.trailing)
    }
}

/// How an aspect-ratio modifier resolves a proposal that does not match its ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentMode {
    /// Largest size of the ratio inside the proposal.
    #[default]
    Fit,
    /// Smallest size of the ratio covering the proposal. May overflow.
    Fill,
}
