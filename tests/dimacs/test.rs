use num::{BigInt, One, Zero};

use relp_flow::data::network::Arc;
use relp_flow::data::network::normalize::{normalize, Normalization, NormalizedNetwork};
use relp_flow::data::number_types::Rational;
use relp_flow::error::Error;
use relp_flow::io::import;
use relp_flow::model::{FlowReport, LPFormulator, NetworkBuilder};
use relp_flow::algorithm::max_flow::PushRelabel;

use super::{get_test_file_path, read, solve_all_ways};

/// Integral, within capacity and conserved at every node other than the source and the sink.
fn assert_is_flow(report: &FlowReport<Rational>, network: &NormalizedNetwork) {
    let mut balance = vec![Rational::zero(); network.nr_nodes];
    for arc in &report.arcs {
        assert!(arc.flow.is_integer());
        assert!(arc.flow >= Rational::zero());
        assert!(arc.flow <= Rational::from_integer(BigInt::from(arc.capacity)));
        balance[arc.head] += &arc.flow;
        balance[arc.tail] -= &arc.flow;
    }
    for (node, value) in balance.into_iter().enumerate() {
        if node != network.source && node != network.sink {
            assert_eq!(value, Rational::zero());
        }
    }
}

#[test]
fn diamond() {
    let network = read("diamond", Normalization::Remap);
    let (_, linear_program) = solve_all_ways(&network, 15);
    assert_is_flow(&linear_program, &network);

    let shifted = read("diamond", Normalization::Shift);
    assert_eq!(shifted, network);
}

#[test]
fn offset_ids() {
    let network = read("offset_ids", Normalization::Shift);
    assert_eq!(network.source, 0);
    assert_eq!(network.ids.raw(0), Some(5));
    let (max_flow, _) = solve_all_ways(&network, 15);

    let text = max_flow.display(Some(&network.ids)).to_string();
    assert!(text.starts_with("Maximum flow: 15\n"));
    assert!(text.contains("6 -> 7: "));
    assert!(!text.contains("0 -> "));
}

#[test]
fn layered() {
    let network = read("layered", Normalization::Remap);
    let (_, linear_program) = solve_all_ways(&network, 23);
    assert_is_flow(&linear_program, &network);
}

#[test]
fn parallel_arcs() {
    let network = read("parallel_arcs", Normalization::Remap);
    let (max_flow, _) = solve_all_ways(&network, 6);
    assert_eq!(max_flow.arcs.len(), 4);
    assert_eq!(max_flow.arcs[2].flow + max_flow.arcs[3].flow, 6);
}

#[test]
fn zero_capacity() {
    let network = read("zero_capacity", Normalization::Remap);
    let (max_flow, linear_program) = solve_all_ways(&network, 2);
    assert_eq!(max_flow.arcs[0].flow, 0);
    assert_eq!(max_flow.arcs[4].flow, 0);
    assert!(linear_program.arcs[0].flow.is_zero());
}

#[test]
fn into_source() {
    let network = read("into_source", Normalization::Remap);
    let (max_flow, linear_program) = solve_all_ways(&network, 2);
    // Arcs into the source, out of the sink and the self loop
    for index in [1, 3, 4] {
        assert_eq!(max_flow.arcs[index].flow, 0);
        assert!(linear_program.arcs[index].flow.is_zero());
    }
    assert_is_flow(&linear_program, &network);
}

#[test]
fn disconnected() {
    let network = read("disconnected", Normalization::Remap);
    let (max_flow, linear_program) = solve_all_ways(&network, 0);
    assert!(max_flow.arcs.iter().all(|arc| arc.flow == 0));
    assert!(linear_program.total.is_zero());
}

#[test]
fn sparse_ids() {
    let network = read("sparse_ids", Normalization::Remap);
    assert_eq!(network.nr_nodes, 4);
    assert_eq!(network.sink, 3);
    assert_eq!(network.ids.raw(network.sink), Some(2));
    let (_, linear_program) = solve_all_ways(&network, 8);
    assert_is_flow(&linear_program, &network);

    let raw = import(&get_test_file_path("sparse_ids")).unwrap();
    assert!(normalize(&raw, Normalization::Shift).is_err());
}

#[test]
fn unit_capacities() {
    let network = read("layered", Normalization::Remap);
    let unit = NormalizedNetwork {
        arcs: network.arcs.iter()
            .map(|arc| Arc::new(arc.tail, arc.head, 1))
            .collect(),
        ..network
    };
    let (_, linear_program) = solve_all_ways(&unit, 2);
    assert_eq!(linear_program.total, Rational::one() + Rational::one());
}

#[test]
fn missing_file() {
    match import(&get_test_file_path("does_not_exist")) {
        Err(Error::Io { path, .. }) => assert!(path.ends_with("does_not_exist.max")),
        other => panic!("expected an io error, got {other:?}"),
    }
}

fn malformed_line(name: &str) -> Option<usize> {
    match import(&get_test_file_path(name)) {
        Err(Error::MalformedInput(error)) => error.location().map(|location| location.line_number),
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn malformed_files() {
    assert_eq!(malformed_line("missing_sink"), None);
    assert_eq!(malformed_line("negative_capacity"), Some(4));
    assert_eq!(malformed_line("arc_count"), Some(1));
}

#[test]
fn more_ids_than_nodes() {
    let raw = import(&get_test_file_path("too_many_ids")).unwrap();
    assert!(normalize(&raw, Normalization::Remap).is_err());
    assert!(normalize(&raw, Normalization::Shift).is_err());
}

#[test]
fn passes_run_on_the_same_normalization() {
    let network = read("diamond", Normalization::Remap);
    let max_flow = NetworkBuilder::new(&network).solve(&PushRelabel).unwrap();
    let program = LPFormulator::new(&network).formulate::<Rational>().unwrap();

    assert_eq!(program.nr_variables(), max_flow.arcs.len());
    for (arc, report) in network.arcs.iter().zip(&max_flow.arcs) {
        assert_eq!((arc.tail, arc.head, arc.capacity), (report.tail, report.head, report.capacity));
    }
}
