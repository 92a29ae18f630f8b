//! Named layout patterns that expand to ordered primitive expressions
//!
//! Each [`ConvenienceAnchors`] value names a common arrangement (fill a
//! container with insets, center in a container, take a fixed size) and
//! [`expand`](ConvenienceAnchors::expand)s to the primitive expressions
//! that realize it. Expansion is pure and deterministic; applying the
//! result is the caller's move (usually via
//! [`Constrain::constrain_with`](crate::builder::Constrain::constrain_with)).

use crate::anchor::{Constant, LayoutAnchor};
use crate::item::{AnchorOf, LayoutItem};

/// Distances inward from each edge of a containing item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four edges.
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// A displacement from a centered position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Offset {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// A width and height in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A named layout pattern over another item.
pub enum ConvenienceAnchors<'a, I: LayoutItem> {
    /// Pin all four edges inside `of`, inset by `insets`.
    ///
    /// Expands in `[leading, top, trailing, bottom]` order.
    Inside {
        of: &'a I,
        insets: Constant<EdgeInsets>,
    },
    /// Align both centers with `of`, displaced by `offset`.
    ///
    /// Expands in `[center_x, center_y]` order.
    Centered { of: &'a I, offset: Constant<Offset> },
    /// Fix the item's own size.
    ///
    /// Expands in `[width, height]` order.
    Sized(Constant<Size>),
}

impl<I: LayoutItem> ConvenienceAnchors<'_, I> {
    /// Expand the pattern to primitive anchor expressions.
    pub fn expand(&self) -> Vec<AnchorOf<I>> {
        match self {
            Self::Inside { of, insets } => match insets {
                Constant::Equal(insets) => vec![
                    LayoutAnchor::Leading(of.leading(), Constant::Equal(insets.left)),
                    LayoutAnchor::Top(of.top(), Constant::Equal(insets.top)),
                    LayoutAnchor::Trailing(of.trailing(), Constant::Equal(-insets.right)),
                    LayoutAnchor::Bottom(of.bottom(), Constant::Equal(-insets.bottom)),
                ],
                // Inequality insets mirror on the far edges: "at most K in"
                // from the right edge means the trailing anchor sits at
                // least `-K` from the container's trailing anchor. Without
                // the flip the item could escape the container.
                Constant::LessOrEqual(insets) => vec![
                    LayoutAnchor::Leading(of.leading(), Constant::LessOrEqual(insets.left)),
                    LayoutAnchor::Top(of.top(), Constant::LessOrEqual(insets.top)),
                    LayoutAnchor::Trailing(of.trailing(), Constant::GreaterOrEqual(-insets.right)),
                    LayoutAnchor::Bottom(of.bottom(), Constant::GreaterOrEqual(-insets.bottom)),
                ],
                Constant::GreaterOrEqual(insets) => vec![
                    LayoutAnchor::Leading(of.leading(), Constant::GreaterOrEqual(insets.left)),
                    LayoutAnchor::Top(of.top(), Constant::GreaterOrEqual(insets.top)),
                    LayoutAnchor::Trailing(of.trailing(), Constant::LessOrEqual(-insets.right)),
                    LayoutAnchor::Bottom(of.bottom(), Constant::LessOrEqual(-insets.bottom)),
                ],
            },
            Self::Centered { of, offset } => {
                let relation = offset.relation();
                let offset = offset.value();
                vec![
                    LayoutAnchor::CenterX(
                        of.center_x(),
                        Constant::new(relation, offset.horizontal),
                    ),
                    LayoutAnchor::CenterY(of.center_y(), Constant::new(relation, offset.vertical)),
                ]
            }
            Self::Sized(size) => {
                let relation = size.relation();
                let size = size.value();
                vec![
                    LayoutAnchor::WidthConstant(Constant::new(relation, size.width)),
                    LayoutAnchor::HeightConstant(Constant::new(relation, size.height)),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_insets() {
        let insets = EdgeInsets::uniform(6.0);
        assert_eq!(insets, EdgeInsets::new(6.0, 6.0, 6.0, 6.0));
    }

    #[test]
    fn test_default_insets_are_zero() {
        let insets = EdgeInsets::default();
        assert_eq!(insets, EdgeInsets::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_size_fields() {
        let size = Size::new(100.0, 40.0);
        assert_eq!(size.width, 100.0);
        assert_eq!(size.height, 40.0);
    }
}
