//! Intrinsic leaves - the "atoms" of a layout tree.
//!
//! Leaves stand in for text, shapes, spacers, images and paths. Each axis
//! answers a proposal in one of three ways:
//!
//! | sizing    | proposed `p`        | unconstrained      |
//! |-----------|---------------------|--------------------|
//! | `Fit`     | `min(natural, p)`   | natural            |
//! | `Fill`    | `p`                 | `fill_fallback`    |
//! | `Overflow`| natural             | natural            |

use crate::config::NegotiatorConfig;
use crate::error::{check, LayoutError};
use crate::primitives::Size;

use super::proposal::ProposedSize;

const NODE: &str = "IntrinsicLeaf";

/// How a leaf answers a proposal on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafSizing {
    /// Natural size if it fits, otherwise truncated to the proposal.
    Fit,
    /// Takes the whole proposal.
    Fill,
    /// Natural size regardless of the proposal.
    Overflow,
}

impl LeafSizing {
    #[inline]
    fn resolve(self, natural: f32, proposed: Option<f32>, fallback: f32) -> f32 {
        match (self, proposed) {
            (LeafSizing::Fit, Some(p)) => natural.min(p),
            (LeafSizing::Fit, None) => natural,
            (LeafSizing::Fill, Some(p)) => p,
            (LeafSizing::Fill, None) => fallback,
            (LeafSizing::Overflow, _) => natural,
        }
    }
}

/// A leaf with a natural size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicLeaf {
    pub natural: Size,
    pub horizontal: LeafSizing,
    pub vertical: LeafSizing,
    /// Set for text: wraps onto more lines when narrowed, and never shows less than one.
    pub line_height: Option<f32>,
}

impl IntrinsicLeaf {
    pub fn new(natural: Size, horizontal: LeafSizing, vertical: LeafSizing) -> Self {
        Self {
            natural,
            horizontal,
            vertical,
            line_height: None,
        }
    }

    /// Single-line text of the given width.
    pub fn text(width: f32, line_height: f32) -> Self {
        Self {
            line_height: Some(line_height),
            ..Self::new(Size::new(width, line_height), LeafSizing::Fit, LeafSizing::Fit)
        }
    }

    pub fn shape() -> Self {
        Self::new(Size::ZERO, LeafSizing::Fill, LeafSizing::Fill)
    }

    pub fn spacer() -> Self {
        Self::new(Size::ZERO, LeafSizing::Fill, LeafSizing::Fill)
    }

    pub fn image(natural: Size) -> Self {
        Self::new(natural, LeafSizing::Overflow, LeafSizing::Overflow)
    }

    pub fn path(natural: Size) -> Self {
        Self::new(natural, LeafSizing::Overflow, LeafSizing::Overflow)
    }

    /// Fill on both axes. The natural size is kept as the ideal aspect.
    pub fn resizable(self) -> Self {
        Self {
            horizontal: LeafSizing::Fill,
            vertical: LeafSizing::Fill,
            line_height: None,
            ..self
        }
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        check::length(NODE, "natural width", self.natural.width)?;
        check::length(NODE, "natural height", self.natural.height)?;
        if let Some(line_height) = self.line_height {
            check::length(NODE, "line_height", line_height)?;
        }
        Ok(())
    }

    /// The leaf's answer to `proposal`.
    pub fn report(&self, proposal: ProposedSize, config: &NegotiatorConfig) -> Size {
        let fallback = config.fill_fallback;
        let width = self.horizontal.resolve(self.natural.width, proposal.width, fallback);

        let Some(line_height) = self.line_height else {
            let height = self.vertical.resolve(self.natural.height, proposal.height, fallback);
            return Size::new(width, height);
        };

        // Text: narrowing wraps, and at least one line always shows.
        let lines = if width >= self.natural.width || width <= 0.0 {
            1.0
        } else {
            (self.natural.width / width).ceil()
        };
        let wrapped = lines * line_height;
        let height = self
            .vertical
            .resolve(wrapped, proposal.height, fallback)
            .max(line_height);
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(leaf: IntrinsicLeaf, proposal: ProposedSize) -> Size {
        leaf.report(proposal, &NegotiatorConfig::default())
    }

    #[test]
    fn test_fit_reports_natural_when_it_fits() {
        let leaf = IntrinsicLeaf::new(Size::new(20.0, 20.0), LeafSizing::Fit, LeafSizing::Fit);
        assert_eq!(report(leaf, ProposedSize::fixed(100.0, 100.0)), Size::new(20.0, 20.0));
        assert_eq!(report(leaf, ProposedSize::fixed(10.0, 5.0)), Size::new(10.0, 5.0));
        assert_eq!(report(leaf, ProposedSize::UNSPECIFIED), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_fill_takes_proposal() {
        assert_eq!(report(IntrinsicLeaf::shape(), ProposedSize::fixed(300.0, 2.0)), Size::new(300.0, 2.0));
    }

    #[test]
    fn test_fill_uses_fallback_when_unconstrained() {
        assert_eq!(report(IntrinsicLeaf::shape(), ProposedSize::width_only(40.0)), Size::new(40.0, 10.0));

        let config = NegotiatorConfig {
            fill_fallback: 0.0,
            ..NegotiatorConfig::default()
        };
        assert_eq!(IntrinsicLeaf::spacer().report(ProposedSize::UNSPECIFIED, &config), Size::ZERO);
    }

    #[test]
    fn test_overflow_ignores_proposal() {
        let path = IntrinsicLeaf::path(Size::new(130.0, 300.0));
        assert_eq!(report(path, ProposedSize::fixed(100.0, 100.0)), Size::new(130.0, 300.0));
    }

    #[test]
    fn test_resizable_image_fills() {
        let image = IntrinsicLeaf::image(Size::new(20.0, 20.0)).resizable();
        assert_eq!(report(image, ProposedSize::fixed(150.0, 150.0)), Size::new(150.0, 150.0));
    }

    #[test]
    fn test_text_single_line_when_it_fits() {
        let text = IntrinsicLeaf::text(120.0, 18.0);
        assert_eq!(report(text, ProposedSize::fixed(400.0, 400.0)), Size::new(120.0, 18.0));
        assert_eq!(report(text, ProposedSize::UNSPECIFIED), Size::new(120.0, 18.0));
    }

    #[test]
    fn test_text_wraps_when_narrowed() {
        let text = IntrinsicLeaf::text(120.0, 18.0);
        // 120 / 50 = 2.4 -> 3 lines
        assert_eq!(report(text, ProposedSize::fixed(50.0, 400.0)), Size::new(50.0, 54.0));
        // Width-only proposal: as tall as it needs
        assert_eq!(report(text, ProposedSize::width_only(40.0)), Size::new(40.0, 54.0));
    }

    #[test]
    fn test_text_truncates_height_but_keeps_one_line() {
        let text = IntrinsicLeaf::text(120.0, 18.0);
        assert_eq!(report(text, ProposedSize::fixed(50.0, 30.0)), Size::new(50.0, 30.0));
        assert_eq!(report(text, ProposedSize::fixed(50.0, 5.0)), Size::new(50.0, 18.0));
        assert_eq!(report(text, ProposedSize::fixed(0.0, 100.0)), Size::new(0.0, 18.0));
    }

    #[test]
    fn test_negative_natural_rejected() {
        assert!(IntrinsicLeaf::image(Size::new(-1.0, 4.0)).validate().is_err());
        assert!(IntrinsicLeaf::text(10.0, f32::NAN).validate().is_err());
    }
}
