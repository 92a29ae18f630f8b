//! Translation from anchor expressions to host constraints
//!
//! The heart of the crate: a total mapping from (anchor kind, relation) to
//! exactly one native factory call. Twelve kinds times three relations,
//! every pair spelled out, so a new kind or relation fails to compile until
//! every combination is handled.

use crate::anchor::{Constant, LayoutAnchor};
use crate::convenience::ConvenienceAnchors;
use crate::item::{AnchorOf, AxisAnchor, ConstraintHandle, DimensionAnchor, LayoutItem};
use crate::side::SideAnchors;

/// Create and activate the constraint described by `anchor`.
///
/// Enables programmatic layout on `item` first, then dispatches to the one
/// factory call matching the expression and activates the result before
/// returning it. Each call creates a fresh host constraint; applying the
/// same expression twice installs two of them.
pub fn apply<I: LayoutItem>(item: &I, anchor: AnchorOf<I>) -> I::Constraint {
    item.enable_programmatic_layout();
    let constraint = create(item, anchor);
    constraint.set_active(true);
    constraint
}

/// Apply each expression in input order; the results match that order.
pub fn apply_all<I: LayoutItem>(item: &I, anchors: Vec<AnchorOf<I>>) -> Vec<I::Constraint> {
    anchors
        .into_iter()
        .map(|anchor| apply(item, anchor))
        .collect()
}

/// Same dispatch as [`apply`], skipping the activation step.
///
/// For callers that batch-activate or store constraints for later toggling.
/// The item is still switched to programmatic layout, since the returned
/// constraint is meant to be activated eventually.
pub fn create_inactive<I: LayoutItem>(item: &I, anchor: AnchorOf<I>) -> I::Constraint {
    item.enable_programmatic_layout();
    create(item, anchor)
}

fn create<I: LayoutItem>(item: &I, anchor: AnchorOf<I>) -> I::Constraint {
    match anchor {
        LayoutAnchor::Leading(source, constant) => match constant {
            Constant::Equal(value) => item.leading().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.leading().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.leading().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::Trailing(source, constant) => match constant {
            Constant::Equal(value) => item.trailing().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.trailing().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.trailing().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::Left(source, constant) => match constant {
            Constant::Equal(value) => item.left().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.left().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.left().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::Right(source, constant) => match constant {
            Constant::Equal(value) => item.right().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.right().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.right().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::Top(source, constant) => match constant {
            Constant::Equal(value) => item.top().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.top().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.top().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::Bottom(source, constant) => match constant {
            Constant::Equal(value) => item.bottom().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.bottom().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.bottom().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::CenterX(source, constant) => match constant {
            Constant::Equal(value) => item.center_x().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.center_x().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.center_x().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::CenterY(source, constant) => match constant {
            Constant::Equal(value) => item.center_y().equal_to(&source, value),
            Constant::LessOrEqual(value) => item.center_y().less_or_equal_to(&source, value),
            Constant::GreaterOrEqual(value) => item.center_y().greater_or_equal_to(&source, value),
        },
        LayoutAnchor::Width(source, constant) => match constant {
            Constant::Equal(value) => {
                item.width().equal_to(&source, value.multiplier, value.constant)
            }
            Constant::LessOrEqual(value) => {
                item.width()
                    .less_or_equal_to(&source, value.multiplier, value.constant)
            }
            Constant::GreaterOrEqual(value) => {
                item.width()
                    .greater_or_equal_to(&source, value.multiplier, value.constant)
            }
        },
        LayoutAnchor::WidthConstant(constant) => match constant {
            Constant::Equal(value) => item.width().equal_to_constant(value),
            Constant::LessOrEqual(value) => item.width().less_or_equal_to_constant(value),
            Constant::GreaterOrEqual(value) => item.width().greater_or_equal_to_constant(value),
        },
        LayoutAnchor::Height(source, constant) => match constant {
            Constant::Equal(value) => {
                item.height()
                    .equal_to(&source, value.multiplier, value.constant)
            }
            Constant::LessOrEqual(value) => {
                item.height()
                    .less_or_equal_to(&source, value.multiplier, value.constant)
            }
            Constant::GreaterOrEqual(value) => {
                item.height()
                    .greater_or_equal_to(&source, value.multiplier, value.constant)
            }
        },
        LayoutAnchor::HeightConstant(constant) => match constant {
            Constant::Equal(value) => item.height().equal_to_constant(value),
            Constant::LessOrEqual(value) => item.height().less_or_equal_to_constant(value),
            Constant::GreaterOrEqual(value) => item.height().greater_or_equal_to_constant(value),
        },
    }
}

/// Ergonomic entry points on any layout item.
///
/// Blanket-implemented, so `use anchorkit::Constrain` is all a caller needs
/// to write `child.constrain(...)` instead of going through the module
/// functions.
pub trait Constrain: LayoutItem + Sized {
    /// Create and activate one constraint. See [`apply`].
    fn constrain(&self, anchor: AnchorOf<Self>) -> Self::Constraint {
        apply(self, anchor)
    }

    /// Create and activate several constraints in input order. See [`apply_all`].
    fn constrain_all(&self, anchors: Vec<AnchorOf<Self>>) -> Vec<Self::Constraint> {
        apply_all(self, anchors)
    }

    /// Create one constraint without activating it. See [`create_inactive`].
    fn constrain_inactive(&self, anchor: AnchorOf<Self>) -> Self::Constraint {
        create_inactive(self, anchor)
    }

    /// Expand a convenience pattern and apply the result in expansion order.
    fn constrain_with<O>(&self, anchors: ConvenienceAnchors<'_, O>) -> Vec<Self::Constraint>
    where
        O: LayoutItem<
            XAnchor = Self::XAnchor,
            YAnchor = Self::YAnchor,
            Dimension = Self::Dimension,
            Constraint = Self::Constraint,
        >,
    {
        apply_all(self, anchors.expand())
    }

    /// Expand a side-anchoring description and apply the result in expansion
    /// order.
    fn constrain_to_side<O>(&self, anchors: SideAnchors<'_, O>) -> Vec<Self::Constraint>
    where
        O: LayoutItem<
            XAnchor = Self::XAnchor,
            YAnchor = Self::YAnchor,
            Dimension = Self::Dimension,
            Constraint = Self::Constraint,
        >,
    {
        apply_all(self, anchors.expand())
    }
}

impl<T: LayoutItem> Constrain for T {}
