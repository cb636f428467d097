//! Formulation building.

use crate::distance::DistanceMatrix;
use crate::mip::{ComparisonOp, Direction, LinExpr, MipModel, VarId};

use super::model::TspModel;

/// Builds the Miller–Tucker–Zemlin integer formulation for a matrix.
///
/// Emits, in order: one binary arc variable `x[i][j]` per ordered pair of
/// distinct locations, one integer order variable `u[i]` in `[0, n]` per
/// location, the outgoing and incoming degree constraints, the subtour
/// elimination block (`u[0] = 1`, `2 <= u[i] <= n` for the others, and the
/// linking rows `u[i] - u[j] + (n-1)·x[i][j] <= n - 2`), and the minimizing
/// objective over all arc costs. For a single location no arcs exist, so
/// the degree families are vacuous and skipped; only the anchor remains.
///
/// Building is pure construction. Nothing is solved here.
///
/// # Examples
///
/// ```
/// use tsp_mip::distance::DistanceMatrix;
/// use tsp_mip::mtz::build_model;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// let model = build_model(&dm);
/// assert_eq!(model.model().num_vars(), 9); // 6 arcs + 3 orders
/// assert_eq!(model.model().num_constraints(), 13);
/// ```
pub fn build_model(matrix: &DistanceMatrix) -> TspModel {
    let mut builder = ModelBuilder::new(matrix);
    builder.arc_variables();
    builder.order_variables();
    builder.degree_constraints();
    builder.subtour_elimination();
    builder.objective();
    let model = builder.finish();
    log::debug!(
        "built MTZ model for {} locations: {} variables, {} constraints",
        model.n(),
        model.model().num_vars(),
        model.model().num_constraints()
    );
    model
}

struct ModelBuilder<'a> {
    matrix: &'a DistanceMatrix,
    n: usize,
    model: MipModel,
    arcs: Vec<Vec<Option<VarId>>>,
    orders: Vec<VarId>,
}

impl<'a> ModelBuilder<'a> {
    fn new(matrix: &'a DistanceMatrix) -> Self {
        let n = matrix.size();
        Self {
            matrix,
            n,
            model: MipModel::new("tsp_mtz", Direction::Minimize),
            arcs: Vec::with_capacity(n),
            orders: Vec::with_capacity(n),
        }
    }

    fn arc_variables(&mut self) {
        for i in 0..self.n {
            let mut row = Vec::with_capacity(self.n);
            for j in 0..self.n {
                if i == j {
                    row.push(None);
                } else {
                    row.push(Some(self.model.add_binary(format!("x_{i}_{j}"))));
                }
            }
            self.arcs.push(row);
        }
    }

    fn order_variables(&mut self) {
        for i in 0..self.n {
            let id = self.model.add_integer(format!("u_{i}"), 0.0, self.n as f64);
            self.orders.push(id);
        }
    }

    fn degree_constraints(&mut self) {
        // Vacuous without arcs; emitting empty sums would make n == 1
        // infeasible.
        if self.n < 2 {
            return;
        }
        for i in 0..self.n {
            let mut expr = LinExpr::new();
            for j in 0..self.n {
                if let Some(x) = self.arcs[i][j] {
                    expr.push(x, 1.0);
                }
            }
            self.model
                .add_constraint(format!("out_{i}"), expr, ComparisonOp::Eq, 1.0);
        }
        for j in 0..self.n {
            let mut expr = LinExpr::new();
            for i in 0..self.n {
                if let Some(x) = self.arcs[i][j] {
                    expr.push(x, 1.0);
                }
            }
            self.model
                .add_constraint(format!("in_{j}"), expr, ComparisonOp::Eq, 1.0);
        }
    }

    fn subtour_elimination(&mut self) {
        let n = self.n as f64;
        self.model.add_constraint(
            "anchor",
            LinExpr::new().with(self.orders[0], 1.0),
            ComparisonOp::Eq,
            1.0,
        );
        for i in 1..self.n {
            self.model.add_constraint(
                format!("u_{i}_min"),
                LinExpr::new().with(self.orders[i], 1.0),
                ComparisonOp::Ge,
                2.0,
            );
            self.model.add_constraint(
                format!("u_{i}_max"),
                LinExpr::new().with(self.orders[i], 1.0),
                ComparisonOp::Le,
                n,
            );
        }
        // u[i] - u[j] + 1 <= (n-1)(1 - x[i][j]) for nonzero i != j, in
        // linear form. Any arc taken forces u[j] >= u[i] + 1.
        for i in 1..self.n {
            for j in 1..self.n {
                if let Some(x) = self.arcs[i][j] {
                    let expr = LinExpr::new()
                        .with(self.orders[i], 1.0)
                        .with(self.orders[j], -1.0)
                        .with(x, n - 1.0);
                    self.model.add_constraint(
                        format!("mtz_{i}_{j}"),
                        expr,
                        ComparisonOp::Le,
                        n - 2.0,
                    );
                }
            }
        }
    }

    fn objective(&mut self) {
        let mut expr = LinExpr::new();
        for i in 0..self.n {
            for j in 0..self.n {
                if let Some(x) = self.arcs[i][j] {
                    expr.push(x, self.matrix.get(i, j));
                }
            }
        }
        self.model.set_objective(expr);
    }

    fn finish(self) -> TspModel {
        TspModel::new(self.model, self.arcs, self.orders, self.matrix.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mip::Assignment;

    fn uniform_matrix(n: usize) -> DistanceMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        DistanceMatrix::from_rows(rows).expect("valid")
    }

    /// Assignment with the given arcs set to 1 and the given order values.
    fn assignment_for(model: &TspModel, taken: &[(usize, usize)], u: &[f64]) -> Assignment {
        let mut values = vec![0.0; model.model().num_vars()];
        for &(i, j) in taken {
            values[model.arc(i, j).expect("off-diagonal").index()] = 1.0;
        }
        for (i, &value) in u.iter().enumerate() {
            values[model.order(i).index()] = value;
        }
        Assignment::new(values)
    }

    #[test]
    fn test_model_size() {
        for n in 2..=5 {
            let model = build_model(&uniform_matrix(n));
            assert_eq!(model.model().num_vars(), n * n, "vars for n={n}");
            let expected = 2 * n + 1 + 2 * (n - 1) + (n - 1) * (n - 2);
            assert_eq!(
                model.model().num_constraints(),
                expected,
                "constraints for n={n}"
            );
        }
    }

    #[test]
    fn test_single_location_model() {
        let model = build_model(&uniform_matrix(1));
        assert_eq!(model.n(), 1);
        assert_eq!(model.model().num_vars(), 1);
        assert_eq!(model.model().num_constraints(), 1);
        assert_eq!(model.model().constraints()[0].name(), "anchor");
        assert!(model.model().objective().is_empty());
    }

    #[test]
    fn test_arc_grid_shape() {
        let model = build_model(&uniform_matrix(3));
        for i in 0..3 {
            assert_eq!(model.arc(i, i), None);
        }
        assert!(model.arc(0, 1).is_some());
        assert!(model.arc(2, 0).is_some());
        assert_ne!(model.arc(0, 1), model.arc(1, 0));
    }

    #[test]
    fn test_objective_uses_matrix_costs() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 7.0, 2.0],
            vec![3.0, 0.0, 5.0],
            vec![4.0, 6.0, 0.0],
        ])
        .expect("valid");
        let model = build_model(&dm);
        let objective = model.model().objective();
        assert_eq!(objective.terms().len(), 6);
        let x_0_1 = model.arc(0, 1).expect("off-diagonal");
        let coeff = objective
            .terms()
            .iter()
            .find(|&&(var, _)| var == x_0_1)
            .map(|&(_, c)| c)
            .expect("term for x_0_1");
        assert_eq!(coeff, 7.0);
    }

    #[test]
    fn test_builder_is_deterministic() {
        let dm = uniform_matrix(4);
        assert_eq!(build_model(&dm), build_model(&dm));
    }

    #[test]
    fn test_model_name() {
        let model = build_model(&uniform_matrix(3));
        assert_eq!(model.model().name(), "tsp_mtz");
    }

    #[test]
    fn test_canonical_tour_satisfies_all_constraints() {
        let model = build_model(&uniform_matrix(3));
        let a = assignment_for(&model, &[(0, 1), (1, 2), (2, 0)], &[1.0, 2.0, 3.0]);
        assert!(model.model().violations(&a, 1e-9).is_empty());
    }

    #[test]
    fn test_reversed_tour_satisfies_all_constraints() {
        let model = build_model(&uniform_matrix(4));
        let a = assignment_for(
            &model,
            &[(0, 3), (3, 2), (2, 1), (1, 0)],
            &[1.0, 4.0, 3.0, 2.0],
        );
        assert!(model.model().violations(&a, 1e-9).is_empty());
    }

    #[test]
    fn test_two_cycles_always_violate_some_constraint() {
        // The arcs 0->1->0 and 2->3->2 satisfy every degree constraint, so
        // only the ordering block can reject them. No choice of order values
        // may rescue the split tour.
        let model = build_model(&uniform_matrix(4));
        for u2 in 1..=4 {
            for u3 in 1..=4 {
                let a = assignment_for(
                    &model,
                    &[(0, 1), (1, 0), (2, 3), (3, 2)],
                    &[1.0, 2.0, u2 as f64, u3 as f64],
                );
                let degree_ok = model
                    .model()
                    .violations(&a, 1e-9)
                    .iter()
                    .all(|v| !v.constraint.starts_with("out_") && !v.constraint.starts_with("in_"));
                assert!(degree_ok, "degree rows hold for the split tour");
                assert!(
                    !model.model().violations(&a, 1e-9).is_empty(),
                    "u2={u2} u3={u3} escaped the ordering block"
                );
            }
        }
    }

    #[test]
    fn test_missing_arc_violates_degree() {
        let model = build_model(&uniform_matrix(3));
        let a = assignment_for(&model, &[(0, 1), (1, 2)], &[1.0, 2.0, 3.0]);
        let violations = model.model().violations(&a, 1e-9);
        assert!(violations.iter().any(|v| v.constraint == "out_2"));
        assert!(violations.iter().any(|v| v.constraint == "in_0"));
    }
}
