//! # Push-relabel
//!
//! FIFO variant of the push-relabel algorithm of Goldberg and Tarjan. Heights start at zero,
//! except for the source, which starts at the number of nodes. Arcs leaving the source are
//! saturated, after which active nodes (nodes other than the source and the sink that hold flow)
//! are discharged in first-in, first-out order until none remain.
use fifo_set::FIFOSet;
use log::debug;

use crate::algorithm::{FlowSolver, MaxFlowResult};
use crate::algorithm::max_flow::{finish, prepare};
use crate::algorithm::max_flow::residual::ResidualGraph;
use crate::data::network::{FlowQuantity, NetworkInstance, NodeId};

/// FIFO push-relabel max flow solver.
#[derive(Copy, Clone, Debug, Default)]
pub struct PushRelabel;

impl FlowSolver for PushRelabel {
    fn solve(&self, network: &NetworkInstance) -> MaxFlowResult {
        let mut graph = match prepare(network) {
            Ok(graph) => graph,
            Err(result) => return result,
        };

        let mut state = State::new(&graph, network.source(), network.sink());
        state.saturate_source(&mut graph);

        let mut active = (0..graph.nr_nodes())
            .filter(|&node| state.is_active(node))
            .collect::<FIFOSet<_>>();
        while let Some(node) = active.pop() {
            state.discharge(&mut graph, node, &mut active);
        }

        debug!("Push-relabel finished after {} pushes and {} relabels", state.nr_pushes, state.nr_relabels);

        finish(network, &graph)
    }
}

struct State {
    source: NodeId,
    sink: NodeId,
    height: Vec<usize>,
    excess: Vec<FlowQuantity>,
    /// Position in the outgoing edges of each node from which to look for an admissible edge.
    current: Vec<usize>,

    nr_pushes: u64,
    nr_relabels: u64,
}

impl State {
    fn new(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> Self {
        let nr_nodes = graph.nr_nodes();

        let mut height = vec![0; nr_nodes];
        height[source] = nr_nodes;

        Self {
            source,
            sink,
            height,
            excess: vec![0; nr_nodes],
            current: vec![0; nr_nodes],

            nr_pushes: 0,
            nr_relabels: 0,
        }
    }

    fn is_active(&self, node: NodeId) -> bool {
        node != self.source && node != self.sink && self.excess[node] > 0
    }

    fn saturate_source(&mut self, graph: &mut ResidualGraph) {
        for edge in graph.outgoing(self.source).to_vec() {
            let head = graph.head(edge);
            let amount = graph.residual(edge);
            if head != self.source && amount > 0 {
                graph.push(edge, amount);
                self.excess[head] += amount;
                self.nr_pushes += 1;
            }
        }
    }

    /// Push all excess of `node` away, relabeling when no admissible edge is left.
    fn discharge(&mut self, graph: &mut ResidualGraph, node: NodeId, active: &mut FIFOSet<NodeId>) {
        while self.excess[node] > 0 {
            let outgoing = graph.outgoing(node);
            if self.current[node] == outgoing.len() {
                if !self.relabel(graph, node) {
                    break;
                }
                continue;
            }

            let edge = outgoing[self.current[node]];
            let head = graph.head(edge);
            let residual = graph.residual(edge);
            if residual > 0 && self.height[node] == self.height[head] + 1 {
                let amount = self.excess[node].min(residual);
                graph.push(edge, amount);
                self.excess[node] -= amount;
                self.excess[head] += amount;
                self.nr_pushes += 1;

                if self.is_active(head) {
                    active.push(head);
                }
            } else {
                self.current[node] += 1;
            }
        }
    }

    /// Lift `node` just above its lowest neighbor in the residual graph.
    ///
    /// # Return value
    ///
    /// Whether there is any edge with residual capacity leaving the node.
    fn relabel(&mut self, graph: &ResidualGraph, node: NodeId) -> bool {
        let lowest = graph.outgoing(node).iter()
            .filter(|&&edge| graph.residual(edge) > 0 && graph.head(edge) != node)
            .map(|&edge| self.height[graph.head(edge)])
            .min();

        match lowest {
            Some(height) => {
                self.height[node] = height + 1;
                self.current[node] = 0;
                self.nr_relabels += 1;
                true
            },
            None => false,
        }
    }
}
