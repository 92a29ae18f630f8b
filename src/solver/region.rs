//! Constrainable rectangular items

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use kasuari::{Strength, Variable};

use crate::item::LayoutItem;
use crate::solver::anchors::{SizeAnchor, SolverConstraint, XAnchor, YAnchor};
use crate::solver::space::{LayoutDirection, SpaceInner};

/// A solved frame: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A constrainable rectangle in a [`Space`](crate::solver::Space).
///
/// Four solver variables (x, y, width, height) back the ten anchors.
/// Regions start under automatic layout: strong edit-variable suggestions
/// pin the creation frame until [`enable_programmatic_layout`] lifts them.
/// Guides skip the automatic frame entirely.
///
/// [`enable_programmatic_layout`]: LayoutItem::enable_programmatic_layout
pub struct Region {
    space: Rc<RefCell<SpaceInner>>,
    name: String,
    x: Variable,
    y: Variable,
    width: Variable,
    height: Variable,
    automatic: Cell<bool>,
}

impl Region {
    pub(crate) fn automatic(space: Rc<RefCell<SpaceInner>>, name: String, frame: Rect) -> Self {
        let region = Self::bare(space, name, true);
        region.install_automatic_frame(frame);
        region
    }

    pub(crate) fn guide(space: Rc<RefCell<SpaceInner>>, name: String) -> Self {
        Self::bare(space, name, false)
    }

    fn bare(space: Rc<RefCell<SpaceInner>>, name: String, automatic: bool) -> Self {
        Self {
            space,
            name,
            x: Variable::new(),
            y: Variable::new(),
            width: Variable::new(),
            height: Variable::new(),
            automatic: Cell::new(automatic),
        }
    }

    fn install_automatic_frame(&self, frame: Rect) {
        let mut inner = self.space.borrow_mut();
        for (variable, value) in self.frame_values(frame) {
            if let Err(err) = inner.solver.add_edit_variable(variable, Strength::STRONG) {
                log::error!("{}: automatic frame rejected: {}", self.name, err);
                continue;
            }
            if let Err(err) = inner.solver.suggest_value(variable, value) {
                log::error!("{}: frame suggestion rejected: {}", self.name, err);
            }
        }
    }

    fn frame_values(&self, frame: Rect) -> [(Variable, f64); 4] {
        [
            (self.x, frame.x),
            (self.y, frame.y),
            (self.width, frame.width),
            (self.height, frame.height),
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Re-pin the automatic frame. Ignored once programmatic layout is
    /// enabled, like a frame assignment on a constrained view.
    pub fn set_frame(&self, frame: Rect) {
        if !self.automatic.get() {
            log::debug!("{}: set_frame ignored under programmatic layout", self.name);
            return;
        }
        let mut inner = self.space.borrow_mut();
        for (variable, value) in self.frame_values(frame) {
            if let Err(err) = inner.solver.suggest_value(variable, value) {
                log::error!("{}: frame suggestion rejected: {}", self.name, err);
            }
        }
    }

    /// The frame as of the owning space's last layout pass.
    pub fn frame(&self) -> Rect {
        let inner = self.space.borrow();
        Rect::new(
            inner.value(self.x),
            inner.value(self.y),
            inner.value(self.width),
            inner.value(self.height),
        )
    }

    fn label(&self, anchor: &str) -> String {
        format!("{}.{}", self.name, anchor)
    }

    fn x_anchor(&self, name: &str, expr: kasuari::Expression, mirrors: bool) -> XAnchor {
        XAnchor::new(Rc::clone(&self.space), self.label(name), expr, mirrors)
    }

    fn y_anchor(&self, name: &str, expr: kasuari::Expression) -> YAnchor {
        YAnchor::new(Rc::clone(&self.space), self.label(name), expr)
    }
}

impl LayoutItem for Region {
    type XAnchor = XAnchor;
    type YAnchor = YAnchor;
    type Dimension = SizeAnchor;
    type Constraint = SolverConstraint;

    fn leading(&self) -> XAnchor {
        match self.space.borrow().direction {
            LayoutDirection::LeftToRight => self.x_anchor("leading", self.x.into(), false),
            LayoutDirection::RightToLeft => {
                self.x_anchor("leading", self.x + self.width, true)
            }
        }
    }

    fn trailing(&self) -> XAnchor {
        match self.space.borrow().direction {
            LayoutDirection::LeftToRight => {
                self.x_anchor("trailing", self.x + self.width, false)
            }
            LayoutDirection::RightToLeft => self.x_anchor("trailing", self.x.into(), true),
        }
    }

    fn left(&self) -> XAnchor {
        self.x_anchor("left", self.x.into(), false)
    }

    fn right(&self) -> XAnchor {
        self.x_anchor("right", self.x + self.width, false)
    }

    fn top(&self) -> YAnchor {
        self.y_anchor("top", self.y.into())
    }

    fn bottom(&self) -> YAnchor {
        self.y_anchor("bottom", self.y + self.height)
    }

    fn center_x(&self) -> XAnchor {
        self.x_anchor("center_x", self.x + self.width * 0.5, false)
    }

    fn center_y(&self) -> YAnchor {
        self.y_anchor("center_y", self.y + self.height * 0.5)
    }

    fn width(&self) -> SizeAnchor {
        SizeAnchor::new(
            Rc::clone(&self.space),
            self.label("width"),
            self.width.into(),
        )
    }

    fn height(&self) -> SizeAnchor {
        SizeAnchor::new(
            Rc::clone(&self.space),
            self.label("height"),
            self.height.into(),
        )
    }

    fn enable_programmatic_layout(&self) {
        if !self.automatic.get() {
            return;
        }
        self.automatic.set(false);
        let mut inner = self.space.borrow_mut();
        for variable in [self.x, self.y, self.width, self.height] {
            if let Err(err) = inner.solver.remove_edit_variable(variable) {
                log::error!("{}: automatic frame removal failed: {}", self.name, err);
            }
        }
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name)
            .field("automatic", &self.automatic.get())
            .finish()
    }
}
