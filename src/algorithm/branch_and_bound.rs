//! # Branch and bound
//!
//! Solves integer linear programs by solving relaxations. When the relaxation has an integer
//! variable with a fractional value, the domain of that variable is split in two at that value
//! and both halves are explored depth first. Subproblems whose relaxation is no better than the
//! best integer solution found so far are not explored further.
use log::{debug, trace};

use crate::algorithm::{LPSolver, OptimizationResult, SolveRelaxation};
use crate::data::linear_program::elements::{BoundDirection, VariableType};
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::{OrderedField, OrderedFieldRef};

/// Integer solver on top of a relaxation solver.
#[derive(Copy, Clone, Debug, Default)]
pub struct BranchAndBound<R> {
    relaxation: R,
}

impl<R> BranchAndBound<R> {
    /// Branch using the relaxations computed by `relaxation`.
    pub fn new(relaxation: R) -> Self {
        Self { relaxation }
    }
}

impl<F, R> LPSolver<F> for BranchAndBound<R>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
    R: SolveRelaxation<F>,
{
    fn solve(&self, program: &LinearProgram<F>) -> OptimizationResult<F> {
        let objective = program.objective();

        let mut incumbent: Option<Solution<F>> = None;
        let mut to_explore = vec![program.clone()];
        let mut nr_explored = 0_u64;

        while let Some(subproblem) = to_explore.pop() {
            nr_explored += 1;

            let solution = match self.relaxation.solve_relaxation(&subproblem) {
                OptimizationResult::FiniteOptimum(solution) => solution,
                OptimizationResult::Infeasible => continue,
                // Subproblems only shrink the feasible region, so this happens at the root
                OptimizationResult::Unbounded => return OptimizationResult::Unbounded,
            };

            let is_promising = incumbent.as_ref().is_none_or(|best| {
                objective.improves(&solution.objective_value, &best.objective_value)
            });
            if !is_promising {
                continue;
            }

            match fractional_variable(&subproblem, &solution) {
                None => {
                    trace!("New incumbent with objective value {}", solution.objective_value);
                    incumbent = Some(solution);
                },
                Some(variable) => {
                    let value = &solution.values[variable];

                    let mut up = subproblem.clone();
                    up.set_bound(variable, BoundDirection::Lower, value.ceil());
                    let mut down = subproblem;
                    down.set_bound(variable, BoundDirection::Upper, value.floor());

                    // Rounding down is explored first
                    to_explore.push(up);
                    to_explore.push(down);
                },
            }
        }

        debug!("Branch and bound explored {nr_explored} subproblems");

        incumbent.map_or(OptimizationResult::Infeasible, OptimizationResult::FiniteOptimum)
    }
}

/// Index of the first integer variable with a fractional value.
fn fractional_variable<F: OrderedField>(program: &LinearProgram<F>, solution: &Solution<F>) -> Option<usize>
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    program.variables().iter()
        .zip(&solution.values)
        .position(|(variable, value)| {
            variable.variable_type == VariableType::Integer && !value.is_integer()
        })
}
