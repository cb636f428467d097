//! Linear expressions over decision variables.

use super::variable::VarId;

/// A linear combination of variables, `Σ coeff · var`.
///
/// Terms are kept in insertion order and are not merged; the model layer
/// never emits the same variable twice in one expression, and backends that
/// need merged coefficients do their own accumulation.
///
/// # Examples
///
/// ```
/// use tsp_mip::mip::{Direction, LinExpr, MipModel};
///
/// let mut model = MipModel::new("demo", Direction::Minimize);
/// let x = model.add_binary("x");
/// let y = model.add_binary("y");
/// let expr = LinExpr::new().with(x, 1.0).with(y, -2.0);
/// assert_eq!(expr.terms().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinExpr {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a term, builder style.
    pub fn with(mut self, var: VarId, coeff: f64) -> Self {
        self.push(var, coeff);
        self
    }

    /// Appends a term in place.
    pub fn push(&mut self, var: VarId, coeff: f64) {
        self.terms.push((var, coeff));
    }

    /// The terms in insertion order.
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    /// Returns `true` if the expression has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
