//! # The Simplex algorithm
//!
//! Two phase primal simplex method on a dense tableau with exact arithmetic. The first phase finds
//! a basic feasible solution by minimizing the sum of artificial variables, the second phase
//! optimizes the objective of the program from there.
use std::marker::PhantomData;

use log::debug;
use num_traits::Zero;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::simplex::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::simplex::standard_form::StandardForm;
use crate::algorithm::simplex::tableau::{Tableau, Unbounded};
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

pub mod pivot_rule;
mod standard_form;
pub mod tableau;

/// Solves the relaxation of a linear program, ignoring integrality of variables.
///
/// The pivot rule is used in both phases.
#[derive(Copy, Clone, Debug, Default)]
pub struct Simplex<PR = FirstProfitable> {
    pivot_rule: PhantomData<PR>,
}

impl<PR> Simplex<PR> {
    /// Create a new solver.
    pub fn new() -> Self {
        Self { pivot_rule: PhantomData }
    }
}

impl<F, PR> SolveRelaxation<F> for Simplex<PR>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
    PR: PivotRule<F>,
{
    fn solve_relaxation(&self, program: &LinearProgram<F>) -> OptimizationResult<F> {
        let Some(form) = StandardForm::new(program) else {
            return OptimizationResult::Infeasible;
        };
        let mut tableau = Tableau::new(&form);

        tableau.set_artificial_cost();
        let nr_pivots = match primal::<_, PR>(&mut tableau) {
            Ok(nr_pivots) => nr_pivots,
            // The sum of the artificial variables is bounded below by zero
            Err(Unbounded) => return OptimizationResult::Infeasible,
        };
        debug!("Phase one of {:?} finished after {nr_pivots} pivots", program.name());
        if !tableau.objective_value().is_zero() {
            return OptimizationResult::Infeasible;
        }
        tableau.remove_artificial();

        tableau.set_cost(form.cost.clone());
        match primal::<_, PR>(&mut tableau) {
            Ok(nr_pivots) => {
                debug!("Phase two of {:?} finished after {nr_pivots} pivots", program.name());

                let values = form.to_original(&tableau.structural_values());
                let objective_value = program.objective_value(&values);
                OptimizationResult::FiniteOptimum(Solution::new(objective_value, values))
            },
            Err(Unbounded) => OptimizationResult::Unbounded,
        }
    }
}

/// Reduce the current cost function of a tableau to its minimum.
///
/// The tableau should be in a basic feasible solution state.
///
/// # Return value
///
/// The number of pivots, or `Unbounded` if the cost can decrease indefinitely.
fn primal<F, PR>(tableau: &mut Tableau<F>) -> Result<u64, Unbounded>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
    PR: PivotRule<F>,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0;

    while let Some(column) = rule.select_primal_pivot_column(tableau) {
        let row = tableau.select_primal_pivot_row(column)?;
        let was_degenerate = tableau.pivot(row, column);
        rule.after_basis_update(was_degenerate);
        nr_pivots += 1;
    }

    Ok(nr_pivots)
}

#[cfg(test)]
mod test {
    use num::rational::Rational64;

    use crate::algorithm::{OptimizationResult, SolveRelaxation};
    use crate::algorithm::simplex::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
    use crate::algorithm::simplex::Simplex;
    use crate::data::linear_program::elements::{ConstraintRelation, Objective};
    use crate::data::linear_program::{LinearProgram, Variable};
    use crate::data::linear_program::solution::Solution;

    type T = Rational64;

    fn r(value: i64) -> T {
        T::from_integer(value)
    }

    fn nonnegative(name: &str) -> Variable<T> {
        Variable::continuous(name).with_lower_bound(r(0))
    }

    fn solve(program: &LinearProgram<T>) -> OptimizationResult<T> {
        let first = Simplex::<FirstProfitable>::new().solve_relaxation(program);
        let steepest = Simplex::<SteepestDescentAlongVariable>::new().solve_relaxation(program);
        assert_eq!(first, steepest);
        first
    }

    #[test]
    fn intersection_of_two_rows() {
        let mut program = LinearProgram::new("intersection");
        let x = program.add_variable(nonnegative("x"));
        let y = program.add_variable(nonnegative("y"));
        program.add_constraint("first", vec![(x, r(1)), (y, r(2))], ConstraintRelation::Less, r(4));
        program.add_constraint("second", vec![(x, r(3)), (y, r(1))], ConstraintRelation::Less, r(6));
        program.set_objective(Objective::Maximize, vec![(x, r(1)), (y, r(1))]);

        assert_eq!(
            solve(&program),
            OptimizationResult::FiniteOptimum(Solution::new(T::new(14, 5), vec![T::new(8, 5), T::new(6, 5)])),
        );
    }

    #[test]
    fn infeasible() {
        let mut program = LinearProgram::new("infeasible");
        let x = program.add_variable(nonnegative("x"));
        program.add_constraint("negative", vec![(x, r(1))], ConstraintRelation::Less, r(-1));
        program.set_objective(Objective::Maximize, vec![(x, r(1))]);

        assert_eq!(solve(&program), OptimizationResult::Infeasible);
    }

    #[test]
    fn empty_domain() {
        let mut program = LinearProgram::new("empty");
        program.add_variable(nonnegative("x").with_upper_bound(r(-1)));

        assert_eq!(solve(&program), OptimizationResult::Infeasible);
    }

    #[test]
    fn unbounded() {
        let mut program = LinearProgram::new("unbounded");
        let x = program.add_variable(nonnegative("x"));
        let y = program.add_variable(nonnegative("y"));
        program.add_constraint("difference", vec![(x, r(1)), (y, r(-1))], ConstraintRelation::Less, r(1));
        program.set_objective(Objective::Maximize, vec![(x, r(1))]);

        assert_eq!(solve(&program), OptimizationResult::Unbounded);
    }

    #[test]
    fn free_and_upper_bounded_variables() {
        let mut program = LinearProgram::new("bounds");
        let x = program.add_variable(Variable::continuous("x"));
        let y = program.add_variable(nonnegative("y").with_upper_bound(r(5)));
        let z = program.add_variable(Variable::continuous("z").with_upper_bound(r(4)));
        program.add_constraint("sum", vec![(x, r(1)), (y, r(1))], ConstraintRelation::Equal, r(3));
        // min x - z
        program.set_objective(Objective::Minimize, vec![(x, r(1)), (z, r(-1))]);

        assert_eq!(
            solve(&program),
            OptimizationResult::FiniteOptimum(Solution::new(r(-6), vec![r(-2), r(5), r(4)])),
        );
    }

    #[test]
    fn redundant_rows() {
        let mut program = LinearProgram::new("redundant");
        let x = program.add_variable(nonnegative("x"));
        let y = program.add_variable(nonnegative("y"));
        program.add_constraint("once", vec![(x, r(1)), (y, r(1))], ConstraintRelation::Equal, r(2));
        program.add_constraint("twice", vec![(x, r(2)), (y, r(2))], ConstraintRelation::Equal, r(4));
        program.set_objective(Objective::Minimize, vec![(x, r(1))]);

        assert_eq!(
            solve(&program),
            OptimizationResult::FiniteOptimum(Solution::new(r(0), vec![r(0), r(2)])),
        );
    }

    #[test]
    fn greater_and_equal_rows() {
        let mut program = LinearProgram::new("mixed");
        let x = program.add_variable(nonnegative("x"));
        let y = program.add_variable(nonnegative("y"));
        program.add_constraint("at_least", vec![(x, r(1)), (y, r(1))], ConstraintRelation::Greater, r(2));
        program.add_constraint("same", vec![(x, r(1)), (y, r(-1))], ConstraintRelation::Equal, r(0));
        program.set_objective(Objective::Minimize, vec![(x, r(1)), (y, r(1))]);

        assert_eq!(
            solve(&program),
            OptimizationResult::FiniteOptimum(Solution::new(r(2), vec![r(1), r(1)])),
        );
    }

    #[test]
    fn no_constraints() {
        let mut program = LinearProgram::new("bounds only");
        let x = program.add_variable(nonnegative("x").with_upper_bound(r(3)));
        program.set_objective(Objective::Maximize, vec![(x, r(2))]);

        assert_eq!(
            solve(&program),
            OptimizationResult::FiniteOptimum(Solution::new(r(6), vec![r(3)])),
        );
    }
}
