//! # Algorithms
//!
//! Solvers behind the narrow interfaces the modeling code depends on. Each solver is used once
//! per problem and holds no state between problems, so fakes can stand in for them in tests.
use std::fmt;

use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::network::{FlowAssignment, NetworkInstance};

pub mod branch_and_bound;
pub mod max_flow;
pub mod simplex;

/// A maximum flow solver.
pub trait FlowSolver {
    /// Compute a maximum flow from the source to the sink of the network.
    fn solve(&self, network: &NetworkInstance) -> MaxFlowResult;
}

/// Outcome of a max flow computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MaxFlowResult {
    /// A maximum flow was found.
    Optimal(FlowAssignment),
    /// The flow can't be represented in the flow quantity type.
    IntegerOverflow,
    /// The network handed to the solver is not valid.
    BadInput,
    /// The solver computed something that is not a feasible flow.
    BadResult,
}

impl fmt::Display for MaxFlowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MaxFlowResult::Optimal(_) => "optimal",
            MaxFlowResult::IntegerOverflow => "integer overflow",
            MaxFlowResult::BadInput => "bad input",
            MaxFlowResult::BadResult => "bad result",
        })
    }
}

/// A problem formulation of which a relaxation can be solved.
pub trait SolveRelaxation<F> {
    /// Solve the relaxed version of this problem.
    ///
    /// In the case of linear programming, that means that integer constraints are ignored.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve_relaxation(&self, program: &LinearProgram<F>) -> OptimizationResult<F>;
}

/// A solver for linear programs that respects integrality of variables.
pub trait LPSolver<F> {
    /// Solve the program.
    fn solve(&self, program: &LinearProgram<F>) -> OptimizationResult<F>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm
#[allow(missing_docs)]
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Solution<F>),
    Unbounded,
}

impl<F> fmt::Display for OptimizationResult<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptimizationResult::Infeasible => "infeasible",
            OptimizationResult::FiniteOptimum(_) => "optimal",
            OptimizationResult::Unbounded => "unbounded",
        })
    }
}
