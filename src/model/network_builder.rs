//! # Network builder
//!
//! Turns a normalized network into a `NetworkInstance`, hands it to a max flow solver and
//! collects the flow per arc.
use log::info;

use crate::algorithm::{FlowSolver, MaxFlowResult};
use crate::data::network::{FlowQuantity, NetworkInstance};
use crate::data::network::normalize::NormalizedNetwork;
use crate::error::{Error, MalformedInputError, Pass, SolverFailure};
use crate::model::report::{ArcFlow, FlowReport};

/// Maximum flow pass over a normalized network.
#[derive(Copy, Clone, Debug)]
pub struct NetworkBuilder<'a> {
    network: &'a NormalizedNetwork,
}

impl<'a> NetworkBuilder<'a> {
    #[allow(missing_docs)]
    pub fn new(network: &'a NormalizedNetwork) -> Self {
        Self { network }
    }

    /// Create the flow network instance, with the source and the sink of the normalized network.
    ///
    /// # Errors
    ///
    /// If the normalized network does not satisfy the invariants of a `NetworkInstance`.
    pub fn build(&self) -> Result<NetworkInstance, MalformedInputError> {
        NetworkInstance::new(
            self.network.nr_nodes,
            self.network.arcs.clone(),
            self.network.source,
            self.network.sink,
        )
    }

    /// Build the instance and compute a maximum flow.
    ///
    /// # Errors
    ///
    /// If the instance can't be built, or the solver doesn't report an optimal flow.
    pub fn solve<S: FlowSolver + ?Sized>(&self, solver: &S) -> Result<FlowReport<FlowQuantity>, Error> {
        let network = self.build()?;
        info!("Solving max flow with: {} nodes, and {} arcs.", network.nr_nodes(), network.nr_arcs());

        match solver.solve(&network) {
            MaxFlowResult::Optimal(assignment) => {
                let arcs = network.arcs().iter()
                    .zip(assignment.arc_flows)
                    .map(|(arc, flow)| ArcFlow { tail: arc.tail, head: arc.head, flow, capacity: arc.capacity })
                    .collect();

                Ok(FlowReport { pass: Pass::MaxFlow, total: assignment.total, arcs })
            },
            other => Err(SolverFailure::new(Pass::MaxFlow, other.to_string()).into()),
        }
    }
}
