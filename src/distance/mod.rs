//! Travel-cost input handling.

mod matrix;

pub use matrix::DistanceMatrix;
