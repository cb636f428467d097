//! Bridge to the `microlp` branch-and-bound backend.

use microlp::{ComparisonOp as MicroOp, OptimizationDirection, Problem};

use super::constraint::ComparisonOp;
use super::model::{Direction, MipModel};
use super::solver::{Assignment, MipSolver, SolveLimits, SolveResult};
use super::variable::VarKind;

/// Pure-Rust backend built on the `microlp` crate.
///
/// Translates a [`MipModel`] one-to-one into a `microlp::Problem` (binary
/// variables become integer variables bounded by `[0, 1]`), runs it to
/// completion, and copies the values back in variable creation order. The
/// engine has no budget support, so any requested [`SolveLimits`] are
/// ignored with a warning.
///
/// # Examples
///
/// ```
/// use tsp_mip::mip::{
///     ComparisonOp, Direction, LinExpr, MicrolpSolver, MipModel, MipSolver,
///     SolveLimits, SolveResult,
/// };
///
/// let mut model = MipModel::new("pick", Direction::Maximize);
/// let x = model.add_binary("x");
/// let y = model.add_binary("y");
/// model.add_constraint(
///     "one",
///     LinExpr::new().with(x, 1.0).with(y, 1.0),
///     ComparisonOp::Le,
///     1.0,
/// );
/// model.set_objective(LinExpr::new().with(x, 1.0).with(y, 2.0));
///
/// match MicrolpSolver::new().solve(&model, &SolveLimits::default()) {
///     SolveResult::Optimal { objective, .. } => assert!((objective - 2.0).abs() < 1e-6),
///     other => panic!("expected an optimum, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl MipSolver for MicrolpSolver {
    fn solve(&self, model: &MipModel, limits: &SolveLimits) -> SolveResult {
        if !limits.is_unlimited() {
            log::warn!("microlp backend has no budget support, solving to completion");
        }

        let direction = match model.direction() {
            Direction::Minimize => OptimizationDirection::Minimize,
            Direction::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        // Objective coefficients are attached at variable creation, so
        // accumulate them per handle first.
        let mut obj_coeffs = vec![0.0; model.num_vars()];
        for &(var, coeff) in model.objective().terms() {
            obj_coeffs[var.index()] += coeff;
        }
        let vars: Vec<microlp::Variable> = model
            .variables()
            .iter()
            .zip(&obj_coeffs)
            .map(|(v, &coeff)| match v.kind() {
                VarKind::Binary => problem.add_integer_var(coeff, (0, 1)),
                VarKind::Integer => {
                    problem.add_integer_var(coeff, (v.lower() as i32, v.upper() as i32))
                }
            })
            .collect();

        for constraint in model.constraints() {
            let mut expr = microlp::LinearExpr::empty();
            for &(var, coeff) in constraint.expr().terms() {
                expr.add(vars[var.index()], coeff);
            }
            let op = match constraint.op() {
                ComparisonOp::Le => MicroOp::Le,
                ComparisonOp::Ge => MicroOp::Ge,
                ComparisonOp::Eq => MicroOp::Eq,
            };
            problem.add_constraint(expr, op, constraint.rhs());
        }

        match problem.solve() {
            Ok(solution) => {
                let values = vars.iter().map(|&v| solution[v]).collect();
                SolveResult::Optimal {
                    objective: solution.objective(),
                    assignment: Assignment::new(values),
                }
            }
            Err(microlp::Error::Infeasible) => SolveResult::Infeasible,
            Err(other) => SolveResult::Unknown {
                reason: other.to_string(),
            },
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
