//! # Linear program formulation
//!
//! The maximum flow problem as an integer linear program. There is one variable `x_i` per arc
//! with domain the non-negative integers, bounded above only through its capacity row
//! `capacity_i: x_i <= c_i`. Every node `v` other than the source and the sink has a row
//! `conservation_v` equating the flow into `v` to the flow out of it. The objective maximizes the
//! flow over the arcs that leave the source.
//!
//! Flow over arcs into the source or out of the sink could only circulate, but circulation
//! through the source is counted by the objective. Those arcs, and self loops, are fixed to zero
//! with a `dead_arc_i` row, which makes the optimum equal to the maximum flow.
use log::{info, trace};

use crate::algorithm::{LPSolver, OptimizationResult};
use crate::data::linear_algebra::SparseTupleVec;
use crate::data::linear_program::elements::{ConstraintRelation, Objective};
use crate::data::linear_program::{LinearProgram, Variable};
use crate::data::network::normalize::NormalizedNetwork;
use crate::data::number_types::{OrderedField, OrderedFieldRef};
use crate::error::{Error, MalformedInputError, Pass, SolverFailure};
use crate::model::report::{ArcFlow, FlowReport};

/// Linear programming pass over a normalized network.
#[derive(Copy, Clone, Debug)]
pub struct LPFormulator<'a> {
    network: &'a NormalizedNetwork,
}

impl<'a> LPFormulator<'a> {
    #[allow(missing_docs)]
    pub fn new(network: &'a NormalizedNetwork) -> Self {
        Self { network }
    }

    /// Create the linear program.
    ///
    /// Variable `i` belongs to arc `i`.
    ///
    /// # Errors
    ///
    /// If a capacity can't be represented in the number type.
    pub fn formulate<F: OrderedField>(&self) -> Result<LinearProgram<F>, MalformedInputError>
    where
        for<'r> &'r F: OrderedFieldRef<F>,
    {
        let NormalizedNetwork { nr_nodes, source, sink, ref arcs, .. } = *self.network;

        let mut program = LinearProgram::new("max_flow");
        for i in 0..arcs.len() {
            program.add_variable(Variable::integer(format!("x_{i}")).with_lower_bound(F::zero()));
        }

        for (i, arc) in arcs.iter().enumerate() {
            let capacity = F::from_u64(arc.capacity).ok_or_else(|| MalformedInputError::new(format!(
                "capacity {} of arc {i} is not representable", arc.capacity,
            )))?;
            program.add_constraint(format!("capacity_{i}"), vec![(i, F::one())], ConstraintRelation::Less, capacity);
        }

        let mut balances: Vec<SparseTupleVec<F>> = vec![Vec::new(); nr_nodes];
        for (i, arc) in arcs.iter().enumerate() {
            balances[arc.head].push((i, F::one()));
            balances[arc.tail].push((i, -F::one()));
        }
        for (node, balance) in balances.into_iter().enumerate() {
            if node != source && node != sink {
                program.add_constraint(format!("conservation_{node}"), balance, ConstraintRelation::Equal, F::zero());
            }
        }

        for (i, arc) in arcs.iter().enumerate() {
            if arc.head == source || arc.tail == sink || arc.tail == arc.head {
                program.add_constraint(format!("dead_arc_{i}"), vec![(i, F::one())], ConstraintRelation::Equal, F::zero());
            }
        }

        let leaving_source = arcs.iter().enumerate()
            .filter(|(_, arc)| arc.tail == source)
            .map(|(i, _)| (i, F::one()))
            .collect();
        program.set_objective(Objective::Maximize, leaving_source);

        Ok(program)
    }

    /// Formulate the linear program and solve it.
    ///
    /// # Errors
    ///
    /// If the program can't be formulated, or the solver doesn't find an optimum.
    pub fn solve<F, S>(&self, solver: &S) -> Result<FlowReport<F>, Error>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
        S: LPSolver<F> + ?Sized,
    {
        let program = self.formulate::<F>()?;
        info!("Number of variables = {}", program.nr_variables());
        info!("Number of constraints = {}", program.nr_constraints());
        trace!("Formulated\n{program}");

        match solver.solve(&program) {
            OptimizationResult::FiniteOptimum(solution) => {
                let arcs = self.network.arcs.iter()
                    .zip(solution.values)
                    .map(|(arc, flow)| ArcFlow { tail: arc.tail, head: arc.head, flow, capacity: arc.capacity })
                    .collect();

                Ok(FlowReport { pass: Pass::LinearProgram, total: solution.objective_value, arcs })
            },
            other => Err(SolverFailure::new(Pass::LinearProgram, other.to_string()).into()),
        }
    }
}
