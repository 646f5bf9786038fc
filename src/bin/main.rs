use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use log::{error, info, LevelFilter};

use relp_flow::algorithm::FlowSolver;
use relp_flow::algorithm::branch_and_bound::BranchAndBound;
use relp_flow::algorithm::max_flow::{Dinic, PushRelabel};
use relp_flow::algorithm::simplex::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use relp_flow::algorithm::simplex::Simplex;
use relp_flow::data::network::normalize::{normalize, IdMap, Normalization};
use relp_flow::data::number_types::Rational;
use relp_flow::error::Error;
use relp_flow::io::import;
use relp_flow::model::{cross_check, FlowReport, LPFormulator, NetworkBuilder};

/// Compute the maximum flow of a network twice: with a max flow algorithm, and as an exact
/// integer linear program.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the network, in DIMACS maximum flow format
    problem_file: PathBuf,
    /// Directory the problem file is looked up in
    #[arg(long)]
    graphs_dir: Option<PathBuf>,
    /// Algorithm for the max flow pass
    #[arg(long, value_enum, default_value_t = FlowAlgorithm::PushRelabel)]
    flow_algorithm: FlowAlgorithm,
    /// Pivot rule of the simplex method in the linear program pass
    #[arg(long, value_enum, default_value_t = PivotRuleOption::FirstProfitable)]
    pivot_rule: PivotRuleOption,
    /// How node ids of the file are made dense and 0-based
    #[arg(long, value_enum, default_value_t = NormalizationOption::Remap)]
    normalization: NormalizationOption,
    /// Report arcs with the node ids of the file
    #[arg(long)]
    raw_ids: bool,
    /// Don't compare the results of the two passes
    #[arg(long)]
    skip_cross_check: bool,
    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FlowAlgorithm {
    PushRelabel,
    Dinic,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PivotRuleOption {
    FirstProfitable,
    SteepestDescent,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum NormalizationOption {
    Remap,
    Shift,
}

impl From<NormalizationOption> for Normalization {
    fn from(option: NormalizationOption) -> Self {
        match option {
            NormalizationOption::Remap => Normalization::Remap,
            NormalizationOption::Shift => Normalization::Shift,
        }
    }
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&opts) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        },
    }
}

/// Read the network and run both passes.
///
/// # Return value
///
/// Whether both passes succeeded.
fn run(opts: &Opts) -> Result<bool, Error> {
    let path = match &opts.graphs_dir {
        Some(directory) => directory.join(&opts.problem_file),
        None => opts.problem_file.clone(),
    };
    let raw = import(&path)?;
    let normalized = normalize(&raw, opts.normalization.into())?;
    let labels = opts.raw_ids.then_some(&normalized.ids);

    info!("Max flow pass using {:?}", opts.flow_algorithm);
    let flow_solver: Box<dyn FlowSolver> = match opts.flow_algorithm {
        FlowAlgorithm::PushRelabel => Box::new(PushRelabel),
        FlowAlgorithm::Dinic => Box::new(Dinic),
    };
    let network = print_report(NetworkBuilder::new(&normalized).solve(flow_solver.as_ref()), labels);

    println!();

    info!("Linear program pass using branch and bound, simplex pivot rule {:?}", opts.pivot_rule);
    let formulator = LPFormulator::new(&normalized);
    let result = match opts.pivot_rule {
        PivotRuleOption::FirstProfitable => {
            formulator.solve::<Rational, _>(&BranchAndBound::new(Simplex::<FirstProfitable>::new()))
        },
        PivotRuleOption::SteepestDescent => {
            formulator.solve::<Rational, _>(&BranchAndBound::new(Simplex::<SteepestDescentAlongVariable>::new()))
        },
    };
    let linear_program = print_report(result, labels);

    match (network, linear_program) {
        (Some(network), Some(linear_program)) => {
            if !opts.skip_cross_check {
                cross_check(&network, &linear_program)?;
                info!("Both passes found a maximum flow of {}", network.total);
            }
            Ok(true)
        },
        _ => Ok(false),
    }
}

fn print_report<V: Display>(
    result: Result<FlowReport<V>, Error>,
    labels: Option<&IdMap>,
) -> Option<FlowReport<V>> {
    match result {
        Ok(report) => {
            print!("{}", report.display(labels));
            Some(report)
        },
        Err(error) => {
            error!("{error}");
            None
        },
    }
}
