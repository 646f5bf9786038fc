//! # Modeling the maximum flow problem
//!
//! The same normalized network is modeled twice: as a flow network for a dedicated max flow
//! solver, and as an integer linear program for a generic solver. Both passes own their instance
//! and can fail independently. For the same network, their totals should be equal.
pub mod lp_formulator;
pub mod network_builder;
pub mod report;

pub use lp_formulator::LPFormulator;
pub use network_builder::NetworkBuilder;
pub use report::{cross_check, ArcFlow, FlowReport};
