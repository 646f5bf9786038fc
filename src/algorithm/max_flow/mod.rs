//! # Maximum flow
//!
//! Two independent max flow algorithms over a shared residual graph. Both verify their own result
//! before reporting it as optimal.
use crate::algorithm::MaxFlowResult;
use crate::algorithm::max_flow::residual::ResidualGraph;
use crate::data::network::{FlowAssignment, FlowQuantity, NetworkInstance};

pub mod dinic;
pub mod push_relabel;
mod residual;

pub use dinic::Dinic;
pub use push_relabel::PushRelabel;

/// Build the residual graph, if the flow is guaranteed to fit in a `FlowQuantity`.
///
/// Every amount of flow any node holds during the algorithms is bounded by the capacity leaving
/// the source.
fn prepare(network: &NetworkInstance) -> Result<ResidualGraph, MaxFlowResult> {
    network.arcs().iter()
        .filter(|arc| arc.tail == network.source() && arc.head != network.source())
        .try_fold(0, |total: FlowQuantity, arc| total.checked_add(arc.capacity))
        .map(|_| ResidualGraph::new(network))
        .ok_or(MaxFlowResult::IntegerOverflow)
}

/// Read the flow from the residual graph and check it.
fn finish(network: &NetworkInstance, graph: &ResidualGraph) -> MaxFlowResult {
    match FlowAssignment::from_arc_flows(network, graph.arc_flows()) {
        Some(assignment) if assignment.verify(network) => MaxFlowResult::Optimal(assignment),
        _ => MaxFlowResult::BadResult,
    }
}
