//! The bundled reference host, backed by the kasuari Cassowary solver
//!
//! A [`Space`] owns one solver and hands out [`Region`]s (constrainable
//! rectangles) and layout guides. Regions implement
//! [`LayoutItem`](crate::item::LayoutItem), so the whole expression layer
//! targets them directly. The solving itself is entirely kasuari's; this
//! module only builds constraint objects from anchors and moves them in
//! and out of the solver.

mod anchors;
mod region;
mod space;

pub use anchors::{SizeAnchor, SolverConstraint, XAnchor, YAnchor};
pub use region::{Rect, Region};
pub use space::{InstallError, LayoutDirection, Space};
