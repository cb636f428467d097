//! Solver-agnostic model container.

use std::fmt;

use super::constraint::{ComparisonOp, Constraint};
use super::expr::LinExpr;
use super::solver::Assignment;
use super::variable::{VarId, Variable};

/// Whether the objective is minimized or maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

/// A record of one constraint an assignment fails to satisfy.
///
/// Produced by [`MipModel::violations`]; the left-hand side is NaN when the
/// assignment lacks a value for some variable in the constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelViolation {
    /// Name of the violated constraint.
    pub constraint: String,
    /// Evaluated left-hand side.
    pub lhs: f64,
    /// The constraint's relation.
    pub op: ComparisonOp,
    /// The constraint's right-hand side.
    pub rhs: f64,
}

impl fmt::Display for ModelViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {} does not hold",
            self.constraint, self.lhs, self.op, self.rhs
        )
    }
}

/// An integer program: variables, linear constraints, and a linear objective.
///
/// The model is plain data. It is built once, handed to a
/// [`MipSolver`](crate::mip::MipSolver), and never mutated afterwards; it
/// carries no solving logic of its own.
///
/// # Examples
///
/// ```
/// use tsp_mip::mip::{ComparisonOp, Direction, LinExpr, MipModel};
///
/// let mut model = MipModel::new("knapsack", Direction::Maximize);
/// let x = model.add_binary("x");
/// let y = model.add_binary("y");
/// model.add_constraint(
///     "weight",
///     LinExpr::new().with(x, 2.0).with(y, 3.0),
///     ComparisonOp::Le,
///     4.0,
/// );
/// model.set_objective(LinExpr::new().with(x, 1.0).with(y, 2.0));
/// assert_eq!(model.num_vars(), 2);
/// assert_eq!(model.num_constraints(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MipModel {
    name: String,
    direction: Direction,
    objective: LinExpr,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl MipModel {
    /// Creates an empty model with the given objective direction.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
            objective: LinExpr::new(),
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Adds a variable and returns its handle.
    pub fn add_variable(&mut self, variable: Variable) -> VarId {
        let id = VarId(self.variables.len());
        self.variables.push(variable);
        id
    }

    /// Adds a binary variable.
    pub fn add_binary(&mut self, name: impl Into<String>) -> VarId {
        self.add_variable(Variable::binary(name))
    }

    /// Adds a bounded integer variable.
    pub fn add_integer(&mut self, name: impl Into<String>, lower: f64, upper: f64) -> VarId {
        self.add_variable(Variable::integer(name, lower, upper))
    }

    /// Adds a constraint `expr op rhs`.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        expr: LinExpr,
        op: ComparisonOp,
        rhs: f64,
    ) {
        self.constraints.push(Constraint::new(name, expr, op, rhs));
    }

    /// Replaces the objective expression.
    pub fn set_objective(&mut self, objective: LinExpr) {
        self.objective = objective;
    }

    /// The model's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The objective direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The objective expression.
    pub fn objective(&self) -> &LinExpr {
        &self.objective
    }

    /// All variables in creation order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The variable behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this model.
    pub fn variable(&self, id: VarId) -> &Variable {
        &self.variables[id.index()]
    }

    /// All constraints in creation order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of variables.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluates the objective under an assignment.
    ///
    /// Returns `None` when the assignment lacks a value for some variable in
    /// the objective.
    pub fn objective_value(&self, assignment: &Assignment) -> Option<f64> {
        assignment.eval(&self.objective)
    }

    /// Audits an assignment and returns every constraint it violates.
    ///
    /// A constraint that cannot be evaluated (missing variable value) is
    /// reported as violated with a NaN left-hand side.
    pub fn violations(&self, assignment: &Assignment, tol: f64) -> Vec<ModelViolation> {
        self.constraints
            .iter()
            .filter(|c| c.is_satisfied(assignment, tol) != Some(true))
            .map(|c| ModelViolation {
                constraint: c.name().to_string(),
                lhs: assignment.eval(c.expr()).unwrap_or(f64::NAN),
                op: c.op(),
                rhs: c.rhs(),
            })
            .collect()
    }
}
