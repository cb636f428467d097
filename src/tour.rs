//! Tours and their reconstruction from solved models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::DecodeError;
use crate::mip::Assignment;
use crate::mtz::TspModel;

/// Largest distance from the nearest integer an order value may have
/// before decoding rejects it as fractional.
pub const ORDER_TOLERANCE: f64 = 1e-6;

/// A closed tour: every location once, in visiting order, starting at the
/// depot (location 0). The closing arc back to the start is implied and is
/// included in [`cost`](Self::cost).
///
/// # Examples
///
/// ```
/// use tsp_mip::distance::DistanceMatrix;
/// use tsp_mip::tour::Tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![2.0, 0.0, 1.0],
///     vec![1.0, 9.0, 0.0],
/// ])
/// .unwrap();
/// let tour = Tour::new(vec![0, 1, 2]);
/// assert_eq!(tour.cost(&dm), 3.0);
/// assert_eq!(tour.to_string(), "0 -> 1 -> 2 -> 0");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    sequence: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting sequence.
    ///
    /// The sequence is taken as given; [`decode`] is the validating path
    /// from solver output to a tour.
    pub fn new(sequence: Vec<usize>) -> Self {
        Self { sequence }
    }

    /// The visiting sequence, closing arc implied.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Total travel cost around the closed loop.
    ///
    /// # Panics
    ///
    /// Panics if the sequence refers to a location outside the matrix.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        let mut total = 0.0;
        for leg in self.sequence.windows(2) {
            total += matrix.get(leg[0], leg[1]);
        }
        if let (Some(&last), Some(&first)) = (self.sequence.last(), self.sequence.first()) {
            total += matrix.get(last, first);
        }
        total
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, loc) in self.sequence.iter().enumerate() {
            if k > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{loc}")?;
        }
        if let Some(first) = self.sequence.first() {
            write!(f, " -> {first}")?;
        }
        Ok(())
    }
}

/// Reads the order variables out of an assignment and inverts them into
/// the visiting sequence.
///
/// Each `u[i]` is rounded to the nearest integer within
/// [`ORDER_TOLERANCE`]; the rounded positions must form a permutation of
/// `1..=n` with position 1 held by the depot. Any deviation is an error,
/// never repaired. A single location decodes to `[0]` without consulting
/// the order variables at all.
///
/// The caller is expected to pass the assignment of an optimal result for
/// the model the handles came from.
pub fn decode(model: &TspModel, assignment: &Assignment) -> Result<Tour, DecodeError> {
    let n = model.n();
    if n == 1 {
        return Ok(Tour::new(vec![0]));
    }

    let mut slots: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        let value = assignment
            .value(model.order(i))
            .ok_or(DecodeError::MissingValue { index: i })?;
        let nearest = value.round();
        if (value - nearest).abs() > ORDER_TOLERANCE {
            return Err(DecodeError::NonIntegral {
                index: i,
                value,
                tolerance: ORDER_TOLERANCE,
            });
        }
        let position = nearest as i64;
        if position < 1 || position > n as i64 {
            return Err(DecodeError::PositionOutOfRange { index: i, position, n });
        }
        let slot = (position - 1) as usize;
        if let Some(first) = slots[slot] {
            return Err(DecodeError::DuplicatePosition {
                first,
                second: i,
                position: slot + 1,
            });
        }
        slots[slot] = Some(i);
    }

    // n distinct positions over n slots leave none empty.
    let sequence: Vec<usize> = slots.into_iter().flatten().collect();
    debug_assert_eq!(sequence.len(), n);
    if sequence[0] != 0 {
        return Err(DecodeError::DepotNotFirst { found: sequence[0] });
    }
    Ok(Tour::new(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mtz::build_model;

    fn setup() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 4.0],
            vec![2.0, 0.0, 1.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("valid")
    }

    fn uniform_model(n: usize) -> TspModel {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        build_model(&DistanceMatrix::from_rows(rows).expect("valid"))
    }

    /// Full-length assignment with arcs zeroed and the given order values.
    fn order_assignment(model: &TspModel, u: &[f64]) -> Assignment {
        let mut values = vec![0.0; model.model().num_vars()];
        for (i, &value) in u.iter().enumerate() {
            values[model.order(i).index()] = value;
        }
        Assignment::new(values)
    }

    #[test]
    fn test_cost_includes_closing_arc() {
        let tour = Tour::new(vec![0, 1, 2]);
        assert_eq!(tour.cost(&setup()), 3.0);
    }

    #[test]
    fn test_cost_direction_matters() {
        let tour = Tour::new(vec![0, 2, 1]);
        assert_eq!(tour.cost(&setup()), 15.0);
    }

    #[test]
    fn test_cost_single_location() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        assert_eq!(Tour::new(vec![0]).cost(&dm), 0.0);
    }

    #[test]
    fn test_display_closes_the_loop() {
        let tour = Tour::new(vec![0, 2, 1]);
        assert_eq!(tour.to_string(), "0 -> 2 -> 1 -> 0");
    }

    #[test]
    fn test_display_single_location() {
        assert_eq!(Tour::new(vec![0]).to_string(), "0 -> 0");
    }

    #[test]
    fn test_accessors() {
        let tour = Tour::new(vec![0, 1, 2]);
        assert_eq!(tour.sequence(), &[0, 1, 2]);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_decode_identity_order() {
        let model = uniform_model(4);
        let a = order_assignment(&model, &[1.0, 2.0, 3.0, 4.0]);
        let tour = decode(&model, &a).expect("decodes");
        assert_eq!(tour.sequence(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_decode_inverts_positions() {
        let model = uniform_model(3);
        let a = order_assignment(&model, &[1.0, 3.0, 2.0]);
        let tour = decode(&model, &a).expect("decodes");
        assert_eq!(tour.sequence(), &[0, 2, 1]);
    }

    #[test]
    fn test_decode_rounds_within_tolerance() {
        let model = uniform_model(4);
        let a = order_assignment(&model, &[1.000_000_1, 2.0, 3.0, 3.999_999_8]);
        let tour = decode(&model, &a).expect("decodes");
        assert_eq!(tour.sequence(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_decode_rejects_fractional_value() {
        let model = uniform_model(3);
        let a = order_assignment(&model, &[1.0, 1.5, 3.0]);
        assert!(matches!(
            decode(&model, &a),
            Err(DecodeError::NonIntegral { index: 1, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_position_above_n() {
        let model = uniform_model(3);
        let a = order_assignment(&model, &[1.0, 2.0, 4.0]);
        assert_eq!(
            decode(&model, &a),
            Err(DecodeError::PositionOutOfRange {
                index: 2,
                position: 4,
                n: 3
            })
        );
    }

    #[test]
    fn test_decode_rejects_position_zero() {
        let model = uniform_model(3);
        let a = order_assignment(&model, &[1.0, 0.0, 2.0]);
        assert_eq!(
            decode(&model, &a),
            Err(DecodeError::PositionOutOfRange {
                index: 1,
                position: 0,
                n: 3
            })
        );
    }

    #[test]
    fn test_decode_rejects_duplicate_position() {
        let model = uniform_model(4);
        let a = order_assignment(&model, &[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(
            decode(&model, &a),
            Err(DecodeError::DuplicatePosition {
                first: 1,
                second: 2,
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_rejects_moved_depot() {
        let model = uniform_model(4);
        let a = order_assignment(&model, &[2.0, 1.0, 3.0, 4.0]);
        assert_eq!(
            decode(&model, &a),
            Err(DecodeError::DepotNotFirst { found: 1 })
        );
    }

    #[test]
    fn test_decode_rejects_short_assignment() {
        let model = uniform_model(3);
        // Room for the arcs only; every order value is absent.
        let a = Assignment::new(vec![0.0; 6]);
        assert_eq!(
            decode(&model, &a),
            Err(DecodeError::MissingValue { index: 0 })
        );
    }

    #[test]
    fn test_decode_single_location() {
        let model = uniform_model(1);
        let tour = decode(&model, &Assignment::new(vec![])).expect("decodes");
        assert_eq!(tour.sequence(), &[0]);
    }
}
