//! Anchorkit - anchor-expression layout constraints
//!
//! This library turns declarative anchor expressions ("this item's leading
//! edge equals that item's leading edge plus 8", "this width is at most
//! 240") into native constraints of a host layout engine, created and
//! activated in one step. The solving itself (Cassowary/simplex resolution
//! of the constraint system) belongs entirely to the host; this crate only
//! constructs constraint objects and toggles their activation.
//!
//! The core is host-agnostic: anything implementing the capability traits
//! in [`item`] can be constrained. The [`solver`] module bundles a
//! reference host backed by the kasuari solver, which the examples and
//! tests use.
//!
//! Hosts are single-threaded. The bundled host shares its solver through
//! `Rc`, so its handles cannot leave the creating thread; drive every
//! operation here from the thread that owns the host's layout pass.
//!
//! # Example
//!
//! ```rust
//! use anchorkit::{Constant, Constrain, ConvenienceAnchors, EdgeInsets, Rect, Space};
//!
//! let space = Space::new();
//! let window = space.region_with_frame("window", Rect::new(0.0, 0.0, 320.0, 200.0));
//! let content = space.region("content");
//!
//! content.constrain_with(ConvenienceAnchors::Inside {
//!     of: &window,
//!     insets: Constant::Equal(EdgeInsets::uniform(10.0)),
//! });
//!
//! space.layout();
//! let frame = content.frame();
//! assert!((frame.x - 10.0).abs() < 1e-6);
//! assert!((frame.width - 300.0).abs() < 1e-6);
//! ```

pub mod anchor;
pub mod builder;
pub mod convenience;
pub mod item;
pub mod side;
pub mod solver;

pub use anchor::{Constant, DimensionConstant, LayoutAnchor, Relation};
pub use builder::Constrain;
pub use convenience::{ConvenienceAnchors, EdgeInsets, Offset, Size};
pub use item::{AnchorOf, AxisAnchor, ConstraintHandle, DimensionAnchor, LayoutItem};
pub use side::{Side, SideAnchors, SidePosition};
pub use solver::{
    InstallError, LayoutDirection, Rect, Region, SizeAnchor, SolverConstraint, Space, XAnchor,
    YAnchor,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_read_back() {
        let space = Space::new();
        let window = space.region_with_frame("window", Rect::new(0.0, 0.0, 320.0, 200.0));
        let content = space.region("content");

        let constraints = content.constrain_with(ConvenienceAnchors::Inside {
            of: &window,
            insets: Constant::Equal(EdgeInsets::default()),
        });
        assert_eq!(constraints.len(), 4);

        space.layout();
        let frame = content.frame();
        assert!((frame.width - 320.0).abs() < 1e-6);
        assert!((frame.height - 200.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_constraint_round_trip() {
        let space = Space::new();
        let window = space.region_with_frame("window", Rect::new(0.0, 0.0, 320.0, 200.0));
        let badge = space.region("badge");

        let constraint = badge.constrain(LayoutAnchor::Leading(
            window.leading(),
            Constant::Equal(24.0),
        ));
        assert!(constraint.is_active());

        space.layout();
        assert!((badge.frame().x - 24.0).abs() < 1e-6);
    }
}
