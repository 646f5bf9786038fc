//! # Dinic
//!
//! Repeatedly computes the level graph of shortest residual paths by breadth first search, and
//! saturates it with a blocking flow. Paths are searched iteratively, with a pointer per node to
//! the first edge that has not been found useless yet.
use std::collections::VecDeque;

use log::trace;

use crate::algorithm::{FlowSolver, MaxFlowResult};
use crate::algorithm::max_flow::{finish, prepare};
use crate::algorithm::max_flow::residual::ResidualGraph;
use crate::data::network::{NetworkInstance, NodeId};

const UNREACHED: usize = usize::MAX;

/// Dinic's max flow solver.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dinic;

impl FlowSolver for Dinic {
    fn solve(&self, network: &NetworkInstance) -> MaxFlowResult {
        let mut graph = match prepare(network) {
            Ok(graph) => graph,
            Err(result) => return result,
        };
        let (source, sink) = (network.source(), network.sink());

        let mut nr_phases = 0;
        loop {
            let level = levels(&graph, source);
            if level[sink] == UNREACHED {
                break;
            }

            blocking_flow(&mut graph, &level, source, sink);
            nr_phases += 1;
        }
        trace!("Dinic finished after {nr_phases} phases");

        finish(network, &graph)
    }
}

/// Distance from the source in the residual graph, `UNREACHED` if there is no path.
fn levels(graph: &ResidualGraph, source: NodeId) -> Vec<usize> {
    let mut level = vec![UNREACHED; graph.nr_nodes()];
    level[source] = 0;

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        for &edge in graph.outgoing(node) {
            let head = graph.head(edge);
            if graph.residual(edge) > 0 && level[head] == UNREACHED {
                level[head] = level[node] + 1;
                queue.push_back(head);
            }
        }
    }

    level
}

fn blocking_flow(graph: &mut ResidualGraph, level: &[usize], source: NodeId, sink: NodeId) {
    let mut current = vec![0; graph.nr_nodes()];
    let mut path = Vec::new();
    let mut node = source;

    loop {
        if node == sink {
            let bottleneck = path.iter().map(|&edge| graph.residual(edge)).min().unwrap_or(0);
            for &edge in &path {
                graph.push(edge, bottleneck);
            }
            path.clear();
            node = source;
            continue;
        }

        match admissible_edge(graph, level, &mut current, node) {
            Some(edge) => {
                path.push(edge);
                node = graph.head(edge);
            },
            None => match path.pop() {
                // Dead end, never try this edge again during this phase.
                Some(edge) => {
                    node = graph.tail(edge);
                    current[node] += 1;
                },
                None => break,
            },
        }
    }
}

/// First edge from `node` that has residual capacity and goes one level deeper.
fn admissible_edge(
    graph: &ResidualGraph,
    level: &[usize],
    current: &mut [usize],
    node: NodeId,
) -> Option<usize> {
    let outgoing = graph.outgoing(node);
    while let Some(&edge) = outgoing.get(current[node]) {
        if graph.residual(edge) > 0 && level[graph.head(edge)] == level[node] + 1 {
            return Some(edge);
        }
        current[node] += 1;
    }

    None
}
