//! End-to-end exact solving.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{DecodeError, SolveError};
use crate::mip::{MipSolver, SolveLimits, SolveResult};
use crate::mtz::build_model;
use crate::tour::{decode, Tour};

/// Relative tolerance for the reported-objective cross-check.
const COST_TOLERANCE: f64 = 1e-6;

/// A proven-optimal tour together with the objective the backend reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspSolution {
    /// The optimal closed tour.
    pub tour: Tour,
    /// Objective value reported by the backend.
    pub objective: f64,
}

/// Solves a matrix to proven optimality with no resource budget.
///
/// Builds the MTZ formulation, delegates one solve attempt to the backend,
/// and decodes the result. Anything short of a proven optimum is an error;
/// there is no fallback and no retry.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "microlp")] {
/// use tsp_mip::distance::DistanceMatrix;
/// use tsp_mip::exact::solve;
/// use tsp_mip::mip::MicrolpSolver;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 9.0, 9.0],
///     vec![1.0, 0.0, 9.0, 9.0],
///     vec![9.0, 9.0, 0.0, 1.0],
///     vec![9.0, 9.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let solution = solve(&dm, &MicrolpSolver::new()).unwrap();
/// assert!((solution.objective - 20.0).abs() < 1e-6);
/// assert_eq!(solution.tour.sequence()[0], 0);
/// # }
/// ```
pub fn solve(matrix: &DistanceMatrix, solver: &dyn MipSolver) -> Result<TspSolution, SolveError> {
    solve_with_limits(matrix, solver, &SolveLimits::default())
}

/// Solves a matrix to proven optimality under the given budgets.
///
/// Budgets are advisory (see [`SolveLimits`]); a budget that trips surfaces
/// as [`SolveError::Unknown`] with the backend's reason. On an optimal
/// answer the reported objective is cross-checked against the decoded
/// tour's recomputed cost and any disagreement beyond `1e-6` (relative)
/// fails with [`DecodeError::CostMismatch`] rather than being papered over.
pub fn solve_with_limits(
    matrix: &DistanceMatrix,
    solver: &dyn MipSolver,
    limits: &SolveLimits,
) -> Result<TspSolution, SolveError> {
    let model = build_model(matrix);
    log::info!(
        "solving {} over {} locations with {} ({} variables, {} constraints)",
        model.model().name(),
        matrix.size(),
        solver.name(),
        model.model().num_vars(),
        model.model().num_constraints()
    );
    match solver.solve(model.model(), limits) {
        SolveResult::Optimal {
            objective,
            assignment,
        } => {
            let tour = decode(&model, &assignment)?;
            let computed = tour.cost(model.matrix());
            if (objective - computed).abs() > COST_TOLERANCE * (1.0 + objective.abs()) {
                return Err(DecodeError::CostMismatch {
                    reported: objective,
                    computed,
                }
                .into());
            }
            log::info!("optimal tour {} with cost {}", tour, computed);
            Ok(TspSolution { tour, objective })
        }
        SolveResult::Infeasible => {
            log::warn!("{} reports the model infeasible", solver.name());
            Err(SolveError::Infeasible)
        }
        SolveResult::Unknown { reason } => {
            log::warn!("{} gave no definitive answer: {}", solver.name(), reason);
            Err(SolveError::Unknown(reason))
        }
    }
}
