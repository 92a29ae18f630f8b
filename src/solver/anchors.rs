//! Concrete anchors and constraint handles over solver expressions

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use kasuari::{
    AddConstraintError, Constraint as RawConstraint, Expression, Strength, WeightedRelation,
};

use crate::anchor::Relation;
use crate::item::{AxisAnchor, ConstraintHandle, DimensionAnchor};
use crate::solver::space::{InstallError, SpaceInner};

fn weighted(relation: Relation) -> WeightedRelation {
    match relation {
        Relation::Equal => WeightedRelation::EQ(Strength::REQUIRED),
        Relation::LessOrEqual => WeightedRelation::LE(Strength::REQUIRED),
        Relation::GreaterOrEqual => WeightedRelation::GE(Strength::REQUIRED),
    }
}

fn symbol(relation: Relation) -> &'static str {
    match relation {
        Relation::Equal => "=",
        Relation::LessOrEqual => "<=",
        Relation::GreaterOrEqual => ">=",
    }
}

fn describe_axis(target: &str, relation: Relation, source: &str, constant: f64) -> String {
    if constant == 0.0 {
        format!("{} {} {}", target, symbol(relation), source)
    } else {
        format!("{} {} {} {:+}", target, symbol(relation), source, constant)
    }
}

fn describe_dimension(
    target: &str,
    relation: Relation,
    source: &str,
    multiplier: f64,
    constant: f64,
) -> String {
    let mut description = format!("{} {} {}", target, symbol(relation), source);
    if multiplier != 1.0 {
        description.push_str(&format!(" * {}", multiplier));
    }
    if constant != 0.0 {
        description.push_str(&format!(" {:+}", constant));
    }
    description
}

fn describe_constant(target: &str, relation: Relation, constant: f64) -> String {
    format!("{} {} {}", target, symbol(relation), constant)
}

/// A horizontal-axis anchor: an edge or center line over solver variables.
#[derive(Clone)]
pub struct XAnchor {
    space: Rc<RefCell<SpaceInner>>,
    label: String,
    expr: Expression,
    /// Leading/trailing anchors under right-to-left resolution negate the
    /// constant so positive values keep moving in the reading direction.
    mirrors_constant: bool,
}

impl XAnchor {
    pub(crate) fn new(
        space: Rc<RefCell<SpaceInner>>,
        label: String,
        expr: Expression,
        mirrors_constant: bool,
    ) -> Self {
        Self {
            space,
            label,
            expr,
            mirrors_constant,
        }
    }

    fn relate(&self, relation: Relation, source: &Self, constant: f64) -> SolverConstraint {
        let effective = if self.mirrors_constant {
            -constant
        } else {
            constant
        };
        let raw = self.expr.clone() | weighted(relation) | source.expr.clone() + effective;
        SolverConstraint::new(
            Rc::clone(&self.space),
            raw,
            relation,
            describe_axis(&self.label, relation, &source.label, constant),
        )
    }
}

impl AxisAnchor for XAnchor {
    type Constraint = SolverConstraint;

    fn equal_to(&self, source: &Self, constant: f64) -> SolverConstraint {
        self.relate(Relation::Equal, source, constant)
    }

    fn less_or_equal_to(&self, source: &Self, constant: f64) -> SolverConstraint {
        self.relate(Relation::LessOrEqual, source, constant)
    }

    fn greater_or_equal_to(&self, source: &Self, constant: f64) -> SolverConstraint {
        self.relate(Relation::GreaterOrEqual, source, constant)
    }
}

impl fmt::Debug for XAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("XAnchor").field(&self.label).finish()
    }
}

/// A vertical-axis anchor: an edge or center line over solver variables.
#[derive(Clone)]
pub struct YAnchor {
    space: Rc<RefCell<SpaceInner>>,
    label: String,
    expr: Expression,
}

impl YAnchor {
    pub(crate) fn new(space: Rc<RefCell<SpaceInner>>, label: String, expr: Expression) -> Self {
        Self { space, label, expr }
    }

    fn relate(&self, relation: Relation, source: &Self, constant: f64) -> SolverConstraint {
        let raw = self.expr.clone() | weighted(relation) | source.expr.clone() + constant;
        SolverConstraint::new(
            Rc::clone(&self.space),
            raw,
            relation,
            describe_axis(&self.label, relation, &source.label, constant),
        )
    }
}

impl AxisAnchor for YAnchor {
    type Constraint = SolverConstraint;

    fn equal_to(&self, source: &Self, constant: f64) -> SolverConstraint {
        self.relate(Relation::Equal, source, constant)
    }

    fn less_or_equal_to(&self, source: &Self, constant: f64) -> SolverConstraint {
        self.relate(Relation::LessOrEqual, source, constant)
    }

    fn greater_or_equal_to(&self, source: &Self, constant: f64) -> SolverConstraint {
        self.relate(Relation::GreaterOrEqual, source, constant)
    }
}

impl fmt::Debug for YAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("YAnchor").field(&self.label).finish()
    }
}

/// A width or height anchor over a solver variable.
#[derive(Clone)]
pub struct SizeAnchor {
    space: Rc<RefCell<SpaceInner>>,
    label: String,
    expr: Expression,
}

impl SizeAnchor {
    pub(crate) fn new(space: Rc<RefCell<SpaceInner>>, label: String, expr: Expression) -> Self {
        Self { space, label, expr }
    }

    fn relate(
        &self,
        relation: Relation,
        source: &Self,
        multiplier: f64,
        constant: f64,
    ) -> SolverConstraint {
        let raw =
            self.expr.clone() | weighted(relation) | multiplier * source.expr.clone() + constant;
        SolverConstraint::new(
            Rc::clone(&self.space),
            raw,
            relation,
            describe_dimension(&self.label, relation, &source.label, multiplier, constant),
        )
    }

    fn relate_constant(&self, relation: Relation, constant: f64) -> SolverConstraint {
        let raw = self.expr.clone() | weighted(relation) | constant;
        SolverConstraint::new(
            Rc::clone(&self.space),
            raw,
            relation,
            describe_constant(&self.label, relation, constant),
        )
    }
}

impl DimensionAnchor for SizeAnchor {
    type Constraint = SolverConstraint;

    fn equal_to(&self, source: &Self, multiplier: f64, constant: f64) -> SolverConstraint {
        self.relate(Relation::Equal, source, multiplier, constant)
    }

    fn less_or_equal_to(&self, source: &Self, multiplier: f64, constant: f64) -> SolverConstraint {
        self.relate(Relation::LessOrEqual, source, multiplier, constant)
    }

    fn greater_or_equal_to(
        &self,
        source: &Self,
        multiplier: f64,
        constant: f64,
    ) -> SolverConstraint {
        self.relate(Relation::GreaterOrEqual, source, multiplier, constant)
    }

    fn equal_to_constant(&self, constant: f64) -> SolverConstraint {
        self.relate_constant(Relation::Equal, constant)
    }

    fn less_or_equal_to_constant(&self, constant: f64) -> SolverConstraint {
        self.relate_constant(Relation::LessOrEqual, constant)
    }

    fn greater_or_equal_to_constant(&self, constant: f64) -> SolverConstraint {
        self.relate_constant(Relation::GreaterOrEqual, constant)
    }
}

impl fmt::Debug for SizeAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SizeAnchor").field(&self.label).finish()
    }
}

/// A created constraint over the space's solver.
///
/// Activating hands the constraint to the solver; deactivating takes it
/// back out. The handle keeps only enough to do that plus a description
/// for diagnostics.
pub struct SolverConstraint {
    space: Rc<RefCell<SpaceInner>>,
    raw: RawConstraint,
    relation: Relation,
    description: String,
    active: Cell<bool>,
}

impl SolverConstraint {
    fn new(
        space: Rc<RefCell<SpaceInner>>,
        raw: RawConstraint,
        relation: Relation,
        description: String,
    ) -> Self {
        Self {
            space,
            raw,
            relation,
            description,
            active: Cell::new(false),
        }
    }

    /// The relation this constraint was built with.
    pub fn relation(&self) -> Relation {
        self.relation
    }

    /// Human-readable form, e.g. `"child.leading = parent.leading +5"`.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl ConstraintHandle for SolverConstraint {
    fn set_active(&self, active: bool) {
        if active == self.active.get() {
            return;
        }
        let mut inner = self.space.borrow_mut();
        if active {
            match inner.solver.add_constraint(self.raw.clone()) {
                Ok(()) => {}
                Err(AddConstraintError::DuplicateConstraint) => {}
                Err(AddConstraintError::UnsatisfiableConstraint) => {
                    log::error!("unsatisfiable constraint: {}", self.description);
                    inner.install_failures.push(InstallError::Unsatisfiable {
                        description: self.description.clone(),
                    });
                }
                Err(AddConstraintError::InternalSolverError(message)) => {
                    log::error!(
                        "solver failure while installing {}: {}",
                        self.description,
                        message
                    );
                    inner.install_failures.push(InstallError::Internal {
                        description: self.description.clone(),
                        message: message.to_string(),
                    });
                }
            }
        } else if let Err(err) = inner.solver.remove_constraint(&self.raw) {
            log::debug!("constraint {} was not installed: {}", self.description, err);
        }
        self.active.set(active);
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl fmt::Debug for SolverConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverConstraint")
            .field("description", &self.description)
            .field("active", &self.active.get())
            .finish()
    }
}
