//! Error types for matrix validation, solving, and tour decoding.

use thiserror::Error;

/// Rejection of a malformed input matrix.
///
/// Raised only by [`DistanceMatrix`](crate::distance::DistanceMatrix)
/// constructors, before any model exists. A matrix that passes construction
/// never fails shape checks again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// The input contains no rows.
    #[error("distance matrix must have at least one row")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("distance matrix must be square: {rows} rows but row {row} has {len} entries")]
    NotSquare {
        /// Total number of rows.
        rows: usize,
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
    },
    /// A cost is negative, NaN, or infinite.
    #[error("cost({row},{col}) = {value} but costs must be finite and non-negative")]
    InvalidCost {
        /// Row index of the offending entry.
        row: usize,
        /// Column index of the offending entry.
        col: usize,
        /// The rejected value.
        value: f64,
    },
    /// A diagonal entry is nonzero.
    #[error("cost({index},{index}) = {value} but the diagonal must be zero")]
    NonzeroDiagonal {
        /// Location index of the offending diagonal entry.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}

/// A solved assignment that is inconsistent with the tour invariants.
///
/// Indicates either a modeling bug or a backend returning values outside its
/// contract (for example, order values that are not a permutation of
/// `1..=n`). Never produced by a conformant solver on a correctly built
/// model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The assignment has no value for a location's order variable.
    #[error("assignment is missing a value for the order variable of location {index}")]
    MissingValue {
        /// Location whose order value is absent.
        index: usize,
    },
    /// An order value is too far from any integer.
    #[error("order value for location {index} is {value}, not integral within {tolerance}")]
    NonIntegral {
        /// Location whose order value is fractional.
        index: usize,
        /// The raw value returned by the solver.
        value: f64,
        /// The tolerance that was applied.
        tolerance: f64,
    },
    /// A rounded order value lies outside `1..=n`.
    #[error("order value {position} for location {index} is outside 1..={n}")]
    PositionOutOfRange {
        /// Location holding the out-of-range position.
        index: usize,
        /// The rounded position.
        position: i64,
        /// Number of locations.
        n: usize,
    },
    /// Two locations claim the same visiting position.
    #[error("locations {first} and {second} both hold visiting position {position}")]
    DuplicatePosition {
        /// First location found at the position.
        first: usize,
        /// Second location found at the same position.
        second: usize,
        /// The contested position.
        position: usize,
    },
    /// The first visiting position is not held by location 0.
    #[error("visiting position 1 is held by location {found}, expected the depot (0)")]
    DepotNotFirst {
        /// Location found at position 1.
        found: usize,
    },
    /// The backend's objective disagrees with the decoded tour's length.
    #[error("solver reported objective {reported} but the decoded tour costs {computed}")]
    CostMismatch {
        /// Objective value reported by the backend.
        reported: f64,
        /// Tour length recomputed from the distance matrix.
        computed: f64,
    },
}

/// Outcome of a solve attempt that did not produce a usable tour.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The backend proved that no feasible tour exists.
    ///
    /// The degree and ordering constraints are satisfiable by construction
    /// for every valid matrix, so this signals an upstream defect rather
    /// than a hard instance; it is still surfaced as a first-class outcome.
    #[error("no feasible tour exists; the model or input matrix is inconsistent")]
    Infeasible,
    /// The backend stopped without a definitive answer.
    ///
    /// Carries the backend's own status text (resource budget reached,
    /// internal error, and so on). The caller may rebuild and re-solve with
    /// different limits; this crate never retries on its own.
    #[error("solver stopped without a definitive answer: {0}")]
    Unknown(String),
    /// The backend answered, but its assignment failed decoding.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
