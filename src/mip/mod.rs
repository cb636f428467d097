//! Solver-agnostic integer-programming primitives and the backend boundary.

mod constraint;
mod expr;
#[cfg(feature = "microlp")]
mod microlp;
mod model;
mod solver;
mod variable;

pub use constraint::{ComparisonOp, Constraint};
pub use expr::LinExpr;
#[cfg(feature = "microlp")]
pub use microlp::MicrolpSolver;
pub use model::{Direction, MipModel, ModelViolation};
pub use solver::{Assignment, MipSolver, SolveLimits, SolveResult};
pub use variable::{VarId, VarKind, Variable};
