//! Anchoring an item against one side of another
//!
//! [`SideAnchors`] describes "sit next to that item": which side, how much
//! spacing, and how to place the item along the cross axis. Like the
//! patterns in [`crate::convenience`], it expands to an ordered list of
//! primitive expressions and leaves applying them to the caller.

use crate::anchor::{Constant, DimensionConstant, LayoutAnchor};
use crate::convenience::Size;
use crate::item::{AnchorOf, LayoutItem};

/// The side of the other item to sit against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Cross-axis placement relative to the other item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SidePosition {
    /// Align the leading/top edge with the other item's leading/top edge.
    FirstCorner,
    /// Align centers.
    Center,
    /// Align the trailing/bottom edge with the other item's trailing/bottom
    /// edge.
    SecondCorner,
}

/// Configuration for placing an item adjacent to one side of another.
///
/// Built in the usual chained style:
///
/// `SideAnchors::new(&toolbar, Side::Bottom).with_spacing(8.0).with_position(SidePosition::Center)`
pub struct SideAnchors<'a, I: LayoutItem> {
    of: &'a I,
    side: Side,
    spacing: f64,
    position: SidePosition,
    size: Option<Size>,
    equal_dimension: bool,
}

impl<'a, I: LayoutItem> SideAnchors<'a, I> {
    /// Anchor against `side` of `of`, with no spacing, first-corner
    /// placement, and no explicit size.
    pub fn new(of: &'a I, side: Side) -> Self {
        Self {
            of,
            side,
            spacing: 0.0,
            position: SidePosition::FirstCorner,
            size: None,
            equal_dimension: false,
        }
    }

    /// Set the gap between the two items.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the cross-axis placement.
    pub fn with_position(mut self, position: SidePosition) -> Self {
        self.position = position;
        self
    }

    /// Give the item a fixed size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Match the other item's cross-axis edges and primary-axis dimension
    /// instead of positioning by corner. An explicit size is ignored in
    /// this mode.
    pub fn with_equal_dimension(mut self, equal_dimension: bool) -> Self {
        self.equal_dimension = equal_dimension;
        self
    }

    /// Expand to primitive anchor expressions: size first (when given and
    /// not in equal-dimension mode), then the primary-axis gap, then the
    /// cross-axis placement.
    pub fn expand(&self) -> Vec<AnchorOf<I>> {
        let mut anchors = Vec::new();

        if let Some(size) = self.size {
            if !self.equal_dimension {
                anchors.push(LayoutAnchor::WidthConstant(Constant::Equal(size.width)));
                anchors.push(LayoutAnchor::HeightConstant(Constant::Equal(size.height)));
            }
        }

        // Primary axis: one gap expression. Sides that place the item before
        // the other item (top, left) need a negated spacing, since the
        // item's far edge sits spacing points short of the other's near edge.
        match self.side {
            Side::Top => anchors.push(LayoutAnchor::Bottom(
                self.of.top(),
                Constant::Equal(-self.spacing),
            )),
            Side::Bottom => anchors.push(LayoutAnchor::Top(
                self.of.bottom(),
                Constant::Equal(self.spacing),
            )),
            Side::Left => anchors.push(LayoutAnchor::Trailing(
                self.of.leading(),
                Constant::Equal(-self.spacing),
            )),
            Side::Right => anchors.push(LayoutAnchor::Leading(
                self.of.trailing(),
                Constant::Equal(self.spacing),
            )),
        }

        match self.side {
            Side::Top | Side::Bottom => {
                if self.equal_dimension {
                    anchors.push(LayoutAnchor::Leading(
                        self.of.leading(),
                        Constant::Equal(0.0),
                    ));
                    anchors.push(LayoutAnchor::Trailing(
                        self.of.trailing(),
                        Constant::Equal(0.0),
                    ));
                    anchors.push(LayoutAnchor::Height(
                        self.of.height(),
                        Constant::Equal(DimensionConstant::default()),
                    ));
                } else {
                    anchors.push(match self.position {
                        SidePosition::FirstCorner => {
                            LayoutAnchor::Leading(self.of.leading(), Constant::Equal(0.0))
                        }
                        SidePosition::Center => {
                            LayoutAnchor::CenterX(self.of.center_x(), Constant::Equal(0.0))
                        }
                        SidePosition::SecondCorner => {
                            LayoutAnchor::Trailing(self.of.trailing(), Constant::Equal(0.0))
                        }
                    });
                }
            }
            Side::Left | Side::Right => {
                if self.equal_dimension {
                    anchors.push(LayoutAnchor::Top(self.of.top(), Constant::Equal(0.0)));
                    anchors.push(LayoutAnchor::Bottom(
                        self.of.bottom(),
                        Constant::Equal(0.0),
                    ));
                    anchors.push(LayoutAnchor::Width(
                        self.of.width(),
                        Constant::Equal(DimensionConstant::default()),
                    ));
                } else {
                    anchors.push(match self.position {
                        SidePosition::FirstCorner => {
                            LayoutAnchor::Top(self.of.top(), Constant::Equal(0.0))
                        }
                        SidePosition::Center => {
                            LayoutAnchor::CenterY(self.of.center_y(), Constant::Equal(0.0))
                        }
                        SidePosition::SecondCorner => {
                            LayoutAnchor::Bottom(self.of.bottom(), Constant::Equal(0.0))
                        }
                    });
                }
            }
        }

        anchors
    }
}
