//! # tsp-mip
//!
//! Exact traveling salesman solving over a pluggable mixed-integer
//! programming boundary. A validated distance matrix is compiled into the
//! Miller–Tucker–Zemlin integer formulation, handed to a solver backend,
//! and the solved order variables are decoded back into a single closed
//! tour, with every invariant checked rather than repaired.
//!
//! ## Modules
//!
//! - [`distance`] — Validated dense travel-cost matrix
//! - [`error`] — Shape, decode, and solve error taxonomy
//! - [`exact`] — The build, solve, decode pipeline
//! - [`mip`] — Solver-agnostic model primitives and the backend boundary
//! - [`mtz`] — Miller–Tucker–Zemlin formulation building
//! - [`tour`] — Closed tours and order-variable decoding

pub mod distance;
pub mod error;
pub mod exact;
pub mod mip;
pub mod mtz;
pub mod tour;
