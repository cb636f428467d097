//! Linear constraints.

use std::fmt;

use super::expr::LinExpr;
use super::solver::Assignment;

/// The relation between a constraint's expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `expr <= rhs`
    Le,
    /// `expr >= rhs`
    Ge,
    /// `expr == rhs`
    Eq,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Le => write!(f, "<="),
            ComparisonOp::Ge => write!(f, ">="),
            ComparisonOp::Eq => write!(f, "=="),
        }
    }
}

/// A named linear constraint, `expr op rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    name: String,
    expr: LinExpr,
    op: ComparisonOp,
    rhs: f64,
}

impl Constraint {
    /// Creates a constraint.
    pub fn new(name: impl Into<String>, expr: LinExpr, op: ComparisonOp, rhs: f64) -> Self {
        Self {
            name: name.into(),
            expr,
            op,
            rhs,
        }
    }

    /// The constraint's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The left-hand-side expression.
    pub fn expr(&self) -> &LinExpr {
        &self.expr
    }

    /// The comparison relation.
    pub fn op(&self) -> ComparisonOp {
        self.op
    }

    /// The right-hand-side constant.
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Checks the constraint against an assignment within `tol`.
    ///
    /// Returns `None` when the assignment lacks a value for some variable in
    /// the expression.
    pub fn is_satisfied(&self, assignment: &Assignment, tol: f64) -> Option<bool> {
        let lhs = assignment.eval(&self.expr)?;
        Some(match self.op {
            ComparisonOp::Le => lhs <= self.rhs + tol,
            ComparisonOp::Ge => lhs >= self.rhs - tol,
            ComparisonOp::Eq => (lhs - self.rhs).abs() <= tol,
        })
    }
}
