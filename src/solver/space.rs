//! The layout universe: one solver, one set of solved values

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kasuari::{Solver, Variable};
use thiserror::Error;

use crate::solver::region::{Rect, Region};

/// Resolution of leading/trailing anchors to concrete edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Leading is the left edge, trailing the right.
    #[default]
    LeftToRight,
    /// Leading is the right edge, trailing the left. Constants on
    /// leading/trailing constraints are mirrored so positive values keep
    /// moving in the reading direction.
    RightToLeft,
}

/// A constraint the solver refused to install.
///
/// Activation itself never fails (see
/// [`ConstraintHandle`](crate::item::ConstraintHandle)); rejected
/// constraints are logged and collected here instead, the way the platform
/// engines report unsatisfiable systems out-of-band.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstallError {
    #[error("unsatisfiable constraint: {description} conflicts with the active set")]
    Unsatisfiable { description: String },

    #[error("solver failure while installing {description}: {message}")]
    Internal {
        description: String,
        message: String,
    },
}

pub(crate) struct SpaceInner {
    pub(crate) solver: Solver,
    pub(crate) values: HashMap<Variable, f64>,
    pub(crate) direction: LayoutDirection,
    pub(crate) install_failures: Vec<InstallError>,
}

impl SpaceInner {
    pub(crate) fn value(&self, variable: Variable) -> f64 {
        self.values.get(&variable).copied().unwrap_or(0.0)
    }
}

/// The host layout universe.
///
/// Single-threaded by construction: regions, anchors, and constraint
/// handles all share the space through `Rc`, so none of them leave the
/// thread the space was created on. Run every mutation and [`layout`]
/// pass from that thread.
///
/// [`layout`]: Space::layout
pub struct Space {
    inner: Rc<RefCell<SpaceInner>>,
}

impl Space {
    pub fn new() -> Self {
        Self::with_direction(LayoutDirection::LeftToRight)
    }

    pub fn with_direction(direction: LayoutDirection) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SpaceInner {
                solver: Solver::new(),
                values: HashMap::new(),
                direction,
                install_failures: Vec::new(),
            })),
        }
    }

    pub fn direction(&self) -> LayoutDirection {
        self.inner.borrow().direction
    }

    /// Create a region with a zero automatic frame.
    pub fn region(&self, name: impl Into<String>) -> Region {
        self.region_with_frame(name, Rect::default())
    }

    /// Create a region pinned to `frame` until programmatic layout is
    /// enabled on it.
    pub fn region_with_frame(&self, name: impl Into<String>, frame: Rect) -> Region {
        Region::automatic(Rc::clone(&self.inner), name.into(), frame)
    }

    /// Create a layout guide: a region with no automatic frame and nothing
    /// to disable, for composing constraints without a rendered surface.
    pub fn guide(&self, name: impl Into<String>) -> Region {
        Region::guide(Rc::clone(&self.inner), name.into())
    }

    /// Run one synchronous layout pass, folding the solver's pending
    /// changes into the readable frames.
    pub fn layout(&self) {
        let mut inner = self.inner.borrow_mut();
        let SpaceInner { solver, values, .. } = &mut *inner;
        for (variable, value) in solver.fetch_changes() {
            values.insert(*variable, *value);
        }
    }

    /// Drain the constraints the solver has refused so far.
    pub fn take_install_failures(&self) -> Vec<InstallError> {
        std::mem::take(&mut self.inner.borrow_mut().install_failures)
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::new()
    }
}
