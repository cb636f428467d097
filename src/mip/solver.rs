//! The boundary to external MIP solving backends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::expr::LinExpr;
use super::model::MipModel;
use super::variable::VarId;

/// Variable values produced by a backend, indexed by [`VarId`].
///
/// The vector follows the model's variable creation order. Lookups are
/// fallible so that decoding can report a backend that returned fewer values
/// than the model has variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    values: Vec<f64>,
}

impl Assignment {
    /// Wraps a value vector in creation order.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// The value of a variable, if the backend produced one.
    pub fn value(&self, var: VarId) -> Option<f64> {
        self.values.get(var.index()).copied()
    }

    /// Evaluates a linear expression, `None` if any variable is missing.
    pub fn eval(&self, expr: &LinExpr) -> Option<f64> {
        expr.terms()
            .iter()
            .map(|&(var, coeff)| self.value(var).map(|v| coeff * v))
            .sum()
    }

    /// Number of values carried.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are carried.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of one solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveResult {
    /// The backend proved optimality and returned the assignment.
    Optimal {
        /// Objective value reported by the backend.
        objective: f64,
        /// Values for every model variable.
        assignment: Assignment,
    },
    /// The backend proved that no feasible assignment exists.
    Infeasible,
    /// The backend stopped without a definitive answer.
    ///
    /// Budget exhaustion, numerical trouble, and backend-internal failures
    /// all land here; `reason` carries the backend's own wording.
    Unknown {
        /// The backend's status text.
        reason: String,
    },
}

/// Resource budgets passed through to a backend.
///
/// Budgets are advisory. A backend honors what it supports and must warn
/// (via `log`) about a requested budget it ignores; a budget that trips
/// surfaces as [`SolveResult::Unknown`] with the backend's reason.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tsp_mip::mip::SolveLimits;
///
/// let limits = SolveLimits::default().with_time_limit(Duration::from_secs(30));
/// assert_eq!(limits.time_limit, Some(Duration::from_secs(30)));
/// assert_eq!(limits.node_limit, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolveLimits {
    /// Wall-clock budget for the solve call.
    pub time_limit: Option<Duration>,
    /// Branch-and-bound node budget.
    pub node_limit: Option<u64>,
}

impl SolveLimits {
    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the node budget.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Returns `true` if no budget is set.
    pub fn is_unlimited(&self) -> bool {
        self.time_limit.is_none() && self.node_limit.is_none()
    }
}

/// A mixed-integer solving backend.
///
/// Implementations translate the solver-agnostic [`MipModel`] into their own
/// representation, run one solve attempt, and map the engine's status onto
/// [`SolveResult`]. No retry, repair, or warm-start logic belongs here; a
/// backend is a translator, not a policy layer. `Send + Sync` so one backend
/// handle can be shared across caller threads.
pub trait MipSolver: Send + Sync {
    /// Runs one solve attempt on the model.
    fn solve(&self, model: &MipModel, limits: &SolveLimits) -> SolveResult;

    /// A short backend name for logs and reports.
    fn name(&self) -> &str;
}
