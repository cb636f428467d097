//! The assembled formulation and its semantic variable handles.

use crate::distance::DistanceMatrix;
use crate::mip::{MipModel, VarId};

/// An MTZ formulation bound to the matrix it was built from.
///
/// Owns the generic [`MipModel`] plus the handles that give the variables
/// their traveling-salesman meaning: the arc grid `x[i][j]` (with `None` on
/// the diagonal, since self-arcs are never created) and one order variable
/// `u[i]` per location. Decoding needs the handles; the matrix copy lets
/// the pipeline recompute a tour's cost without re-threading the input.
#[derive(Debug, Clone, PartialEq)]
pub struct TspModel {
    model: MipModel,
    arcs: Vec<Vec<Option<VarId>>>,
    orders: Vec<VarId>,
    matrix: DistanceMatrix,
}

impl TspModel {
    pub(crate) fn new(
        model: MipModel,
        arcs: Vec<Vec<Option<VarId>>>,
        orders: Vec<VarId>,
        matrix: DistanceMatrix,
    ) -> Self {
        Self {
            model,
            arcs,
            orders,
            matrix,
        }
    }

    /// Number of locations.
    pub fn n(&self) -> usize {
        self.matrix.size()
    }

    /// The underlying solver-agnostic model.
    pub fn model(&self) -> &MipModel {
        &self.model
    }

    /// Handle of the arc variable `x[from][to]`, `None` on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn arc(&self, from: usize, to: usize) -> Option<VarId> {
        self.arcs[from][to]
    }

    /// Handle of the order variable `u[i]`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn order(&self, i: usize) -> VarId {
        self.orders[i]
    }

    /// The matrix the model was built from.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}
