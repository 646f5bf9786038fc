//! # Maximum flow, computed twice
//!
//! A flow network read from a DIMACS file is solved in two independent ways: by a dedicated max
//! flow algorithm on the network itself, and as an integer linear program with exact arithmetic.
//! Both passes start from the same normalized network, in which node ids are dense and the source
//! is node 0, and their totals can be checked against each other.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;
pub mod model;

#[cfg(test)]
mod tests;
