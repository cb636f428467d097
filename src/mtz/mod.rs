//! Miller–Tucker–Zemlin formulation of the traveling salesman problem.

mod builder;
mod model;

pub use builder::build_model;
pub use model::TspModel;
