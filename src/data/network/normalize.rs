//! # Index normalization
//!
//! Node ids in an input file may start at any integer and need not be contiguous. The solvers
//! need dense, 0-based ids with the source at 0. This module builds an explicit table between the
//! two, once, from all ids observed in the arcs, the source and the sink.
use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::data::network::{Arc, NodeId, RawNetwork};
use crate::error::MalformedInputError;

/// How raw node ids are turned into dense ones.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Normalization {
    /// Source becomes 0, sink becomes the last node, every other observed id is numbered in
    /// ascending order in between.
    #[default]
    Remap,
    /// Subtract the source id from every id.
    ///
    /// Requires all ids to lie in `[source, source + nr_nodes)`.
    Shift,
}

/// Bidirectional map between raw and dense node ids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IdMap {
    to_raw: Vec<u64>,
    to_dense: HashMap<u64, NodeId>,
}

impl IdMap {
    /// Create a map from the raw id of each dense id, in dense order.
    ///
    /// The raw ids should be distinct.
    pub fn new(to_raw: Vec<u64>) -> Self {
        debug_assert!(to_raw.iter().all_unique());

        let to_dense = to_raw.iter().enumerate().map(|(dense, &raw)| (raw, dense)).collect();
        Self { to_raw, to_dense }
    }

    /// Dense id of a raw id, if it is known.
    pub fn dense(&self, raw: u64) -> Option<NodeId> {
        self.to_dense.get(&raw).copied()
    }

    /// Raw id of a dense id, if it is in range.
    pub fn raw(&self, dense: NodeId) -> Option<u64> {
        self.to_raw.get(dense).copied()
    }

    /// Number of dense ids.
    pub fn len(&self) -> usize {
        self.to_raw.len()
    }

    /// Whether no ids are mapped.
    pub fn is_empty(&self) -> bool {
        self.to_raw.is_empty()
    }
}

/// The network with dense node ids, shared by both modeling passes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedNetwork {
    /// All dense ids are in `[0, nr_nodes)`.
    pub nr_nodes: usize,
    /// Always 0.
    pub source: NodeId,
    #[allow(missing_docs)]
    pub sink: NodeId,
    /// In input order.
    pub arcs: Vec<Arc>,
    /// How to translate back to the ids of the input.
    pub ids: IdMap,
}

/// Make the node ids of a raw network dense and 0-based.
///
/// # Errors
///
/// If the source equals the sink, if more distinct ids are used than nodes are declared, or, when
/// shifting, if an id falls outside of `[source, source + nr_nodes)`.
pub fn normalize(
    raw: &RawNetwork,
    policy: Normalization,
) -> Result<NormalizedNetwork, MalformedInputError> {
    if raw.source == raw.sink {
        return Err(MalformedInputError::new(format!("node {} is both source and sink", raw.source)));
    }

    let ids = match policy {
        Normalization::Remap => remap(raw)?,
        Normalization::Shift => shift(raw)?,
    };

    let dense = |raw_id: u64| {
        ids.dense(raw_id)
            .ok_or_else(|| MalformedInputError::new(format!("node id {raw_id} could not be normalized")))
    };
    let arcs = raw.arcs.iter()
        .map(|arc| Ok(Arc::new(dense(arc.tail)?, dense(arc.head)?, arc.capacity)))
        .collect::<Result<Vec<_>, MalformedInputError>>()?;
    let source = dense(raw.source)?;
    let sink = dense(raw.sink)?;
    debug_assert_eq!(source, 0);

    debug!("Normalized {} node ids ({:?}): source {} -> {}, sink {} -> {}",
        ids.len(), policy, raw.source, source, raw.sink, sink);
    trace!("Dense to raw node ids: {:?}", ids.to_raw);

    Ok(NormalizedNetwork {
        nr_nodes: ids.len(),
        source,
        sink,
        arcs,
        ids,
    })
}

fn remap(raw: &RawNetwork) -> Result<IdMap, MalformedInputError> {
    let observed = raw.arcs.iter()
        .flat_map(|arc| [arc.tail, arc.head])
        .chain([raw.source, raw.sink])
        .collect::<BTreeSet<_>>();

    if observed.len() > raw.nr_nodes {
        return Err(MalformedInputError::new(format!(
            "{} distinct node ids are used, but only {} nodes are declared",
            observed.len(), raw.nr_nodes,
        )));
    }
    if observed.len() < raw.nr_nodes {
        warn!("{} nodes are declared, but only {} appear; the others are isolated",
            raw.nr_nodes, observed.len());
    }

    let intermediate = observed.iter()
        .copied()
        .filter(|&id| id != raw.source && id != raw.sink);
    let to_raw = [raw.source].into_iter()
        .chain(intermediate)
        .chain([raw.sink])
        .collect();

    Ok(IdMap::new(to_raw))
}

fn shift(raw: &RawNetwork) -> Result<IdMap, MalformedInputError> {
    let end = u64::try_from(raw.nr_nodes).ok()
        .and_then(|nr_nodes| raw.source.checked_add(nr_nodes))
        .ok_or_else(|| MalformedInputError::new("node ids exceed the representable range"))?;

    let out_of_range = raw.arcs.iter()
        .flat_map(|arc| [arc.tail, arc.head])
        .chain([raw.sink])
        .find(|id| !(raw.source..end).contains(id));
    if let Some(id) = out_of_range {
        return Err(MalformedInputError::new(format!(
            "node id {id} can't be shifted by source id {} into [0, {})",
            raw.source, raw.nr_nodes,
        )));
    }

    Ok(IdMap::new((raw.source..end).collect()))
}
