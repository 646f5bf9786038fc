//! # Representation of feasible solutions
//!
//! Once a linear program is fully solved, a solution is derived. It holds a value for every
//! variable of the program, in the order in which the variables were added.

/// A solution to a linear program.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    pub objective_value: F,
    /// A value for each variable, indexed like the variables of the program.
    pub values: Vec<F>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: F, values: Vec<F>) -> Self {
        Self { objective_value, values }
    }
}
