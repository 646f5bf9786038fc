//! # Residual graph
//!
//! Every arc `i` of the network becomes two residual edges: `2 * i` in the direction of the arc
//! and `2 * i + 1` against it. The residual capacities of the two always add up to the capacity
//! of the arc, and the flow over the arc is the residual capacity of the reverse edge.
use crate::data::network::{FlowQuantity, NetworkInstance, NodeId};

/// Residual edges in forward star order.
#[derive(Clone, Debug)]
pub(super) struct ResidualGraph {
    /// Residual capacity per edge.
    residual: Vec<FlowQuantity>,
    /// Node each edge points to.
    head: Vec<NodeId>,
    /// The edges leaving node `v` are `edges[first_out[v]..first_out[v + 1]]`.
    first_out: Vec<usize>,
    edges: Vec<usize>,
}

impl ResidualGraph {
    pub(super) fn new(network: &NetworkInstance) -> Self {
        let nr_nodes = network.nr_nodes();
        let nr_edges = 2 * network.nr_arcs();

        let mut residual = Vec::with_capacity(nr_edges);
        let mut head = Vec::with_capacity(nr_edges);
        let mut degree = vec![0; nr_nodes];
        for arc in network.arcs() {
            residual.extend([arc.capacity, 0]);
            head.extend([arc.head, arc.tail]);
            degree[arc.tail] += 1;
            degree[arc.head] += 1;
        }

        let mut first_out = Vec::with_capacity(nr_nodes + 1);
        first_out.push(0);
        for node in 0..nr_nodes {
            first_out.push(first_out[node] + degree[node]);
        }

        let mut next_free = first_out[..nr_nodes].to_vec();
        let mut edges = vec![0; nr_edges];
        for edge in 0..nr_edges {
            // The tail of an edge is the head of its partner.
            let tail = head[edge ^ 1];
            edges[next_free[tail]] = edge;
            next_free[tail] += 1;
        }

        Self { residual, head, first_out, edges }
    }

    pub(super) fn nr_nodes(&self) -> usize {
        self.first_out.len() - 1
    }

    /// Indices of the edges leaving `node`.
    pub(super) fn outgoing(&self, node: NodeId) -> &[usize] {
        &self.edges[self.first_out[node]..self.first_out[node + 1]]
    }

    pub(super) fn head(&self, edge: usize) -> NodeId {
        self.head[edge]
    }

    pub(super) fn tail(&self, edge: usize) -> NodeId {
        self.head[edge ^ 1]
    }

    pub(super) fn residual(&self, edge: usize) -> FlowQuantity {
        self.residual[edge]
    }

    /// Send `amount` along `edge`, which needs at least that much residual capacity.
    pub(super) fn push(&mut self, edge: usize, amount: FlowQuantity) {
        debug_assert!(amount <= self.residual[edge]);

        self.residual[edge] -= amount;
        self.residual[edge ^ 1] += amount;
    }

    /// Flow per arc of the network this graph was built from.
    pub(super) fn arc_flows(&self) -> Vec<FlowQuantity> {
        self.residual.iter().skip(1).step_by(2).copied().collect()
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::max_flow::residual::ResidualGraph;
    use crate::data::network::{Arc, NetworkInstance};

    #[test]
    fn forward_star() {
        let network = NetworkInstance::new(3, vec![
            Arc::new(0, 1, 4),
            Arc::new(1, 2, 3),
            Arc::new(0, 2, 1),
        ], 0, 2).unwrap();
        let mut graph = ResidualGraph::new(&network);

        assert_eq!(graph.nr_nodes(), 3);
        assert_eq!(graph.outgoing(0), &[0, 4]);
        assert_eq!(graph.outgoing(1), &[1, 2]);
        assert_eq!(graph.outgoing(2), &[3, 5]);
        assert_eq!((graph.tail(2), graph.head(2)), (1, 2));
        assert_eq!((graph.tail(3), graph.head(3)), (2, 1));

        graph.push(0, 3);
        graph.push(2, 3);
        graph.push(3, 1);
        assert_eq!(graph.residual(0), 1);
        assert_eq!(graph.arc_flows(), vec![3, 2, 0]);
    }
}
