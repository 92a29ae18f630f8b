//! Capability traits a host toolkit supplies
//!
//! The builder never touches a concrete toolkit: it works against a
//! [`LayoutItem`], whose anchors know how to manufacture the host's native
//! constraint objects, and against a [`ConstraintHandle`] that toggles a
//! constraint in and out of the host's layout computation. Implementing
//! these four traits for a toolkit's view and guide types is all it takes
//! to point the whole expression layer at it; the bundled
//! [`crate::solver`] module is one such implementation.

use crate::anchor::LayoutAnchor;

/// An edge or center-line anchor on one axis.
///
/// The three methods mirror the host's native factory overloads, one per
/// relation: each builds (without activating) a constraint of the form
/// `self <relation> source + constant`.
pub trait AxisAnchor: Clone {
    type Constraint: ConstraintHandle;

    fn equal_to(&self, source: &Self, constant: f64) -> Self::Constraint;
    fn less_or_equal_to(&self, source: &Self, constant: f64) -> Self::Constraint;
    fn greater_or_equal_to(&self, source: &Self, constant: f64) -> Self::Constraint;
}

/// A width or height anchor.
///
/// Dimension anchors support two families of factory calls: relating to
/// another dimension (`self <relation> source * multiplier + constant`) and
/// relating to a literal (`self <relation> constant`).
pub trait DimensionAnchor: Clone {
    type Constraint: ConstraintHandle;

    fn equal_to(&self, source: &Self, multiplier: f64, constant: f64) -> Self::Constraint;
    fn less_or_equal_to(&self, source: &Self, multiplier: f64, constant: f64) -> Self::Constraint;
    fn greater_or_equal_to(&self, source: &Self, multiplier: f64, constant: f64)
        -> Self::Constraint;

    fn equal_to_constant(&self, constant: f64) -> Self::Constraint;
    fn less_or_equal_to_constant(&self, constant: f64) -> Self::Constraint;
    fn greater_or_equal_to_constant(&self, constant: f64) -> Self::Constraint;
}

/// A created host constraint.
///
/// Activation installs the constraint into the host's layout computation and
/// transfers ownership of its lifecycle to the host; deactivation removes it
/// again. Both directions are idempotent. Activation itself never fails:
/// hosts surface unsatisfiable systems through their own diagnostics, the
/// way the platform layout engines do.
pub trait ConstraintHandle {
    fn set_active(&self, active: bool);
    fn is_active(&self) -> bool;
}

/// Anything that can be constrained: a view, a region, a layout guide.
///
/// Exposes the ten standard anchors read-only. Two items can be constrained
/// against each other when their anchor families match, which the associated
/// types enforce at compile time.
pub trait LayoutItem {
    type XAnchor: AxisAnchor<Constraint = Self::Constraint>;
    type YAnchor: AxisAnchor<Constraint = Self::Constraint>;
    type Dimension: DimensionAnchor<Constraint = Self::Constraint>;
    type Constraint: ConstraintHandle;

    fn leading(&self) -> Self::XAnchor;
    fn trailing(&self) -> Self::XAnchor;
    fn left(&self) -> Self::XAnchor;
    fn right(&self) -> Self::XAnchor;
    fn top(&self) -> Self::YAnchor;
    fn bottom(&self) -> Self::YAnchor;
    fn center_x(&self) -> Self::XAnchor;
    fn center_y(&self) -> Self::YAnchor;
    fn width(&self) -> Self::Dimension;
    fn height(&self) -> Self::Dimension;

    /// Opt the item out of whatever automatic placement the host would
    /// otherwise apply. Called before the first constraint on the item is
    /// created; calling it again is a no-op.
    fn enable_programmatic_layout(&self);
}

/// The anchor-expression type matching a layout item's anchor family.
pub type AnchorOf<I> = LayoutAnchor<
    <I as LayoutItem>::XAnchor,
    <I as LayoutItem>::YAnchor,
    <I as LayoutItem>::Dimension,
>;
