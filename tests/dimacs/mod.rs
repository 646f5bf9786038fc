//! # DIMACS problem files
//!
//! Small maximum flow networks with known optima, and a few files that should be rejected.
use std::path::{Path, PathBuf};

use relp_flow::algorithm::branch_and_bound::BranchAndBound;
use relp_flow::algorithm::max_flow::{Dinic, PushRelabel};
use relp_flow::algorithm::simplex::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use relp_flow::algorithm::simplex::Simplex;
use relp_flow::data::network::FlowQuantity;
use relp_flow::data::network::normalize::{normalize, Normalization, NormalizedNetwork};
use relp_flow::data::number_types::Rational;
use relp_flow::io::import;
use relp_flow::model::{cross_check, FlowReport, LPFormulator, NetworkBuilder};

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("data")
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("max")
}

fn read(name: &str, policy: Normalization) -> NormalizedNetwork {
    let raw = import(&get_test_file_path(name)).unwrap();
    normalize(&raw, policy).unwrap()
}

/// Run both passes with every solver configuration, check that they agree with each other and
/// with the expected value.
///
/// # Return value
///
/// The reports of the last configuration.
fn solve_all_ways(
    network: &NormalizedNetwork,
    expected: FlowQuantity,
) -> (FlowReport<FlowQuantity>, FlowReport<Rational>) {
    let builder = NetworkBuilder::new(network);
    let push_relabel = builder.solve(&PushRelabel).unwrap();
    let dinic = builder.solve(&Dinic).unwrap();
    assert_eq!(push_relabel.total, expected);
    assert_eq!(dinic.total, expected);

    let formulator = LPFormulator::new(network);
    let first_profitable = formulator
        .solve::<Rational, _>(&BranchAndBound::new(Simplex::<FirstProfitable>::new()))
        .unwrap();
    let steepest_descent = formulator
        .solve::<Rational, _>(&BranchAndBound::new(Simplex::<SteepestDescentAlongVariable>::new()))
        .unwrap();
    assert_eq!(first_profitable.total, steepest_descent.total);

    cross_check(&push_relabel, &first_profitable).unwrap();
    cross_check(&dinic, &steepest_descent).unwrap();

    (dinic, steepest_descent)
}
