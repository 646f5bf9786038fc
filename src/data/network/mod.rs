//! # Flow networks
//!
//! Directed capacitated arcs between dense, 0-based nodes, with one source and one sink. Raw
//! networks, as read from a file, use arbitrary node ids; see `normalize` for how those become
//! dense.
use crate::error::MalformedInputError;

pub mod normalize;

/// Dense, 0-based node index.
pub type NodeId = usize;

/// Integer amount of flow, also used for capacities.
pub type FlowQuantity = u64;

/// A directed arc with its capacity.
///
/// Identity is positional: two arcs between the same nodes with the same capacity are distinct.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Arc {
    /// Node the arc leaves from.
    pub tail: NodeId,
    /// Node the arc goes to.
    pub head: NodeId,
    /// Maximum flow over this arc.
    pub capacity: FlowQuantity,
}

impl Arc {
    /// Create a new arc.
    pub fn new(tail: NodeId, head: NodeId, capacity: FlowQuantity) -> Self {
        Self { tail, head, capacity }
    }
}

/// An arc using node ids as they appear in the input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawArc {
    #[allow(missing_docs)]
    pub tail: u64,
    #[allow(missing_docs)]
    pub head: u64,
    #[allow(missing_docs)]
    pub capacity: FlowQuantity,
}

/// A network as described by an input file, before its ids are normalized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawNetwork {
    /// Problem type from the problem line, normally `max`.
    pub problem_type: String,
    /// Number of nodes the problem line declares.
    pub nr_nodes: usize,
    /// Raw id of the source.
    pub source: u64,
    /// Raw id of the sink.
    pub sink: u64,
    /// In input order.
    pub arcs: Vec<RawArc>,
}

/// A flow network ready to be given to a max flow solver.
///
/// Every arc has its endpoints in `[0, nr_nodes)`, and the source differs from the sink.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkInstance {
    nr_nodes: usize,
    arcs: Vec<Arc>,
    source: NodeId,
    sink: NodeId,
}

impl NetworkInstance {
    /// Create a new instance, checking its invariants.
    ///
    /// # Errors
    ///
    /// If there are no nodes, the source equals the sink, or any node falls outside of the range.
    pub fn new(
        nr_nodes: usize,
        arcs: Vec<Arc>,
        source: NodeId,
        sink: NodeId,
    ) -> Result<Self, MalformedInputError> {
        if nr_nodes == 0 {
            return Err(MalformedInputError::new("a network needs at least one node"));
        }
        if source == sink {
            return Err(MalformedInputError::new(format!("source and sink are both node {source}")));
        }
        if source >= nr_nodes || sink >= nr_nodes {
            return Err(MalformedInputError::new(format!(
                "source {source} or sink {sink} is not among the {nr_nodes} nodes",
            )));
        }
        if let Some((index, arc)) = arcs.iter().enumerate()
            .find(|(_, arc)| arc.tail >= nr_nodes || arc.head >= nr_nodes) {
            return Err(MalformedInputError::new(format!(
                "arc {index} ({} -> {}) has an endpoint outside of the {nr_nodes} nodes",
                arc.tail, arc.head,
            )));
        }

        Ok(Self { nr_nodes, arcs, source, sink })
    }

    /// Number of nodes.
    pub fn nr_nodes(&self) -> usize {
        self.nr_nodes
    }

    /// Number of arcs.
    pub fn nr_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// All arcs, in input order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    #[allow(missing_docs)]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[allow(missing_docs)]
    pub fn sink(&self) -> NodeId {
        self.sink
    }
}

/// Flow found by a max flow solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlowAssignment {
    /// Net amount of flow arriving at the sink.
    pub total: FlowQuantity,
    /// Flow per arc, indexed like the arcs of the network.
    pub arc_flows: Vec<FlowQuantity>,
}

impl FlowAssignment {
    /// Compute the total from the arc flows.
    ///
    /// # Return value
    ///
    /// `None` if more flow leaves the sink than enters it, or the net inflow doesn't fit.
    pub fn from_arc_flows(network: &NetworkInstance, arc_flows: Vec<FlowQuantity>) -> Option<Self> {
        debug_assert_eq!(arc_flows.len(), network.nr_arcs());

        let total = net_inflows(network, &arc_flows)[network.sink()];
        FlowQuantity::try_from(total).ok().map(|total| Self { total, arc_flows })
    }

    /// Whether this is a feasible flow with the right total.
    ///
    /// Checks that every arc flow is within its capacity, that flow is conserved at every node
    /// except the source and the sink, and that the total is the net inflow of the sink.
    pub fn verify(&self, network: &NetworkInstance) -> bool {
        if self.arc_flows.len() != network.nr_arcs() {
            return false;
        }

        let within_capacity = network.arcs().iter().zip(&self.arc_flows)
            .all(|(arc, &flow)| flow <= arc.capacity);
        let inflows = net_inflows(network, &self.arc_flows);
        let conserved = inflows.iter().enumerate()
            .filter(|&(node, _)| node != network.source() && node != network.sink())
            .all(|(_, &inflow)| inflow == 0);
        let total = inflows[network.sink()] == i128::from(self.total);

        within_capacity && conserved && total
    }
}

/// Per node, flow entering it minus flow leaving it.
///
/// Sums of `u64` values over at most `usize::MAX` arcs can't overflow an `i128`.
fn net_inflows(network: &NetworkInstance, arc_flows: &[FlowQuantity]) -> Vec<i128> {
    let mut inflows = vec![0_i128; network.nr_nodes()];
    for (arc, &flow) in network.arcs().iter().zip(arc_flows) {
        inflows[arc.head] += i128::from(flow);
        inflows[arc.tail] -= i128::from(flow);
    }
    inflows
}
