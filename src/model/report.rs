//! # Flow reports
//!
//! The result of either pass: a total and, per arc in input order, the flow it carries.
use std::fmt;

use crate::data::network::{FlowQuantity, NodeId};
use crate::data::network::normalize::IdMap;
use crate::data::number_types::OrderedField;
use crate::error::{Error, Pass};

/// Flow over a single arc.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArcFlow<V> {
    /// Dense id of the node the arc leaves.
    pub tail: NodeId,
    /// Dense id of the node the arc enters.
    pub head: NodeId,
    /// Realized flow.
    pub flow: V,
    #[allow(missing_docs)]
    pub capacity: FlowQuantity,
}

/// Total flow and the flow over every arc, as found by one of the passes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlowReport<V> {
    /// Which computation produced this report.
    pub pass: Pass,
    /// Maximum flow, or the optimal objective value.
    pub total: V,
    /// In arc input order.
    pub arcs: Vec<ArcFlow<V>>,
}

impl<V: fmt::Display> FlowReport<V> {
    /// Display the report, with the node ids of the input when `labels` are given.
    pub fn display<'a>(&'a self, labels: Option<&'a IdMap>) -> ReportDisplay<'a, V> {
        ReportDisplay { report: self, labels }
    }
}

impl<V: fmt::Display> fmt::Display for FlowReport<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(None), f)
    }
}

/// See `FlowReport::display`.
pub struct ReportDisplay<'a, V> {
    report: &'a FlowReport<V>,
    labels: Option<&'a IdMap>,
}

impl<V> ReportDisplay<'_, V> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId) -> fmt::Result {
        match self.labels.and_then(|labels| labels.raw(node)) {
            Some(raw) => write!(f, "{raw}"),
            None => write!(f, "{node}"),
        }
    }
}

impl<V: fmt::Display> fmt::Display for ReportDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        match report.pass {
            Pass::MaxFlow => writeln!(f, "Maximum flow: {}", report.total)?,
            Pass::LinearProgram => writeln!(f, "Optimal objective value: {}", report.total)?,
        }
        writeln!(f)?;

        writeln!(f, " Arc  : Flow / Capacity")?;
        for arc in &report.arcs {
            self.write_node(f, arc.tail)?;
            f.write_str(" -> ")?;
            self.write_node(f, arc.head)?;
            writeln!(f, ": {} / {}", arc.flow, arc.capacity)?;
        }

        Ok(())
    }
}

/// Check that both passes found the same maximum flow.
///
/// # Errors
///
/// `Error::CrossCheck` with both values if they differ.
pub fn cross_check<F: OrderedField>(
    network: &FlowReport<FlowQuantity>,
    linear_program: &FlowReport<F>,
) -> Result<(), Error> {
    if F::from_u64(network.total).as_ref() == Some(&linear_program.total) {
        Ok(())
    } else {
        Err(Error::CrossCheck {
            network: network.total.to_string(),
            linear_program: linear_program.total.to_string(),
        })
    }
}
