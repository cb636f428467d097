//! Decision variables and their handles.

/// Handle to a variable inside a [`MipModel`](crate::mip::MipModel).
///
/// Handles are dense indices in creation order; an [`Assignment`]
/// (crate::mip::Assignment) produced for a model is indexed by them, and
/// solver backends rely on the same ordering when translating the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub(crate) usize);

impl VarId {
    /// Position of this variable in the model's creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Takes the value 0 or 1.
    Binary,
    /// Takes any integer value within its bounds.
    Integer,
}

/// A named decision variable with its kind and inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    kind: VarKind,
    lower: f64,
    upper: f64,
}

impl Variable {
    /// Creates a binary variable with bounds `[0, 1]`.
    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Binary,
            lower: 0.0,
            upper: 1.0,
        }
    }

    /// Creates a bounded integer variable.
    pub fn integer(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            kind: VarKind::Integer,
            lower,
            upper,
        }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's domain kind.
    pub fn kind(&self) -> VarKind {
        self.kind
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Inclusive upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_bounds() {
        let v = Variable::binary("x_0_1");
        assert_eq!(v.name(), "x_0_1");
        assert_eq!(v.kind(), VarKind::Binary);
        assert_eq!(v.lower(), 0.0);
        assert_eq!(v.upper(), 1.0);
    }

    #[test]
    fn test_integer_bounds() {
        let v = Variable::integer("u_3", 0.0, 7.0);
        assert_eq!(v.kind(), VarKind::Integer);
        assert_eq!(v.lower(), 0.0);
        assert_eq!(v.upper(), 7.0);
    }

    #[test]
    fn test_var_id_ordering() {
        let a = VarId(2);
        let b = VarId(5);
        assert!(a < b);
        assert_eq!(a.index(), 2);
    }
}
