//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

/// A `ConstraintRelation` is a type of (in)equality.
///
/// These are read "from constraint to constraint value", so `Less` means `<a, x> <= b`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintRelation {
    Equal,
    Greater,
    Less,
}

impl ConstraintRelation {
    /// The relation after multiplying both sides with minus one.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ConstraintRelation::Equal => ConstraintRelation::Equal,
            ConstraintRelation::Greater => ConstraintRelation::Less,
            ConstraintRelation::Less => ConstraintRelation::Greater,
        }
    }
}

impl fmt::Display for ConstraintRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintRelation::Equal => "==",
            ConstraintRelation::Greater => ">=",
            ConstraintRelation::Less => "<=",
        })
    }
}

/// Direction of a bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, x >= b.
    Lower,
    /// In the case of a variable, x <= b.
    Upper,
}

impl Not for BoundDirection {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// A variable is either continuous or integer.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariableType {
    Continuous,
    Integer,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Whether `candidate` is strictly better than `reference` in this direction.
    pub fn improves<F: Ord>(self, candidate: &F, reference: &F) -> bool {
        match self {
            Objective::Maximize => candidate > reference,
            Objective::Minimize => candidate < reference,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BoundDirection, ConstraintRelation, Objective};

    #[test]
    fn flip() {
        assert_eq!(ConstraintRelation::Less.flipped(), ConstraintRelation::Greater);
        assert_eq!(ConstraintRelation::Equal.flipped(), ConstraintRelation::Equal);
        assert_eq!(!BoundDirection::Lower, BoundDirection::Upper);
    }

    #[test]
    fn improves() {
        assert!(Objective::Maximize.improves(&3, &2));
        assert!(!Objective::Maximize.improves(&2, &2));
        assert!(Objective::Minimize.improves(&1, &2));
    }
}
