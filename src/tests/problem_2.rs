//! The diamond network of `problem_1`, with node ids starting at 5.
use num::rational::Rational64;

use crate::algorithm::branch_and_bound::BranchAndBound;
use crate::algorithm::max_flow::PushRelabel;
use crate::algorithm::simplex::pivot_rule::FirstProfitable;
use crate::algorithm::simplex::Simplex;
use crate::data::network::normalize::{normalize, IdMap, Normalization, NormalizedNetwork};
use crate::data::network::{RawArc, RawNetwork};
use crate::io::dimacs::parse;
use crate::model::{cross_check, LPFormulator, NetworkBuilder};
use crate::tests::problem_1;

type T = Rational64;

pub const DIMACS_STRING: &str = "p max 4 5
n 5 s
n 8 t
a 5 6 10
a 5 7 5
a 6 8 10
a 7 8 5
a 6 7 15
";

pub fn raw_form() -> RawNetwork {
    RawNetwork {
        problem_type: "max".to_string(),
        nr_nodes: 4,
        source: 5,
        sink: 8,
        arcs: vec![
            RawArc { tail: 5, head: 6, capacity: 10 },
            RawArc { tail: 5, head: 7, capacity: 5 },
            RawArc { tail: 6, head: 8, capacity: 10 },
            RawArc { tail: 7, head: 8, capacity: 5 },
            RawArc { tail: 6, head: 7, capacity: 15 },
        ],
    }
}

/// Same as `problem_1`, only the map back to the input ids differs.
pub fn normalized_form() -> NormalizedNetwork {
    NormalizedNetwork {
        ids: IdMap::new(vec![5, 6, 7, 8]),
        ..problem_1::normalized_form()
    }
}

#[test]
fn ids_are_rebased_at_the_source() {
    let raw = parse(DIMACS_STRING).unwrap();
    assert_eq!(raw, raw_form());

    for policy in [Normalization::Remap, Normalization::Shift] {
        let normalized = normalize(&raw, policy).unwrap();
        assert_eq!(normalized, normalized_form());
        assert_eq!(NetworkBuilder::new(&normalized).build(), Ok(problem_1::network_instance()));
        assert_eq!(LPFormulator::new(&normalized).formulate::<T>(), Ok(problem_1::linear_program()));
    }
}

#[test]
fn both_passes_agree() {
    let normalized = normalized_form();

    let network = NetworkBuilder::new(&normalized).solve(&PushRelabel).unwrap();
    let solver = BranchAndBound::new(Simplex::<FirstProfitable>::new());
    let linear_program = LPFormulator::new(&normalized).solve::<T, _>(&solver).unwrap();

    assert_eq!(network.total, 15);
    assert!(cross_check(&network, &linear_program).is_ok());

    let text = network.display(Some(&normalized.ids)).to_string();
    assert!(text.starts_with("Maximum flow: 15\n"));
    assert!(text.contains("\n6 -> 7: "));
}
