//! # Importing DIMACS files
//!
//! Reading of the line based DIMACS format for maximum flow problems. Every line starts with a
//! record type: a comment, the problem line, a node descriptor for the source or the sink, or an
//! arc descriptor.
//!
//! Only the syntax and the presence and uniqueness of records are checked here. Whether the node
//! ids form a valid network is decided during normalization.
use std::str::FromStr;

use log::{trace, warn};

use crate::data::network::{RawArc, RawNetwork};
use crate::error::{FileLocation, MalformedInputError};
use crate::io::dimacs::token::{ARC, COMMENT, MAX_FLOW, NODE, PROBLEM, SINK, SOURCE};

pub mod token;

/// Parse a DIMACS maximum flow problem in string form.
///
/// # Arguments
///
/// * `program` - The input in DIMACS format.
///
/// # Errors
///
/// If a line can't be parsed, a record is missing or repeated, or the number of arcs differs from
/// the number on the problem line.
pub fn parse(program: &str) -> Result<RawNetwork, MalformedInputError> {
    let mut problem: Option<(ProblemLine, FileLocation)> = None;
    let mut source = None;
    let mut sink = None;
    let mut arcs = Vec::new();

    for (index, line) in program.lines().enumerate() {
        let location = || FileLocation::new(index + 1, line);
        let error = |description: &str| MalformedInputError::with_file_location(description, location());

        let fields = line.split_whitespace().collect::<Vec<_>>();
        let Some((&record, fields)) = fields.split_first() else {
            continue;
        };

        match record {
            COMMENT => {},
            PROBLEM => {
                if problem.is_some() {
                    return Err(error("second problem line"));
                }
                problem = Some((parse_problem(fields, location)?, location()));
            },
            NODE => {
                if problem.is_none() {
                    return Err(error("node descriptor before the problem line"));
                }
                let [id, role] = exact_fields::<2>(fields, location)?;
                let id: u64 = parse_integer(id, location)?;
                let slot = match role {
                    SOURCE => &mut source,
                    SINK => &mut sink,
                    _ => return Err(error(&format!("unknown node role \"{role}\""))),
                };
                if slot.replace(id).is_some() {
                    return Err(error(&format!("second node with role \"{role}\"")));
                }
            },
            ARC => {
                if problem.is_none() {
                    return Err(error("arc descriptor before the problem line"));
                }
                let [tail, head, capacity] = exact_fields::<3>(fields, location)?;
                arcs.push(RawArc {
                    tail: parse_integer(tail, location)?,
                    head: parse_integer(head, location)?,
                    capacity: parse_integer(capacity, location)?,
                });
            },
            _ => return Err(error(&format!("unknown record type \"{record}\""))),
        }
    }

    let (problem, problem_location) = problem
        .ok_or_else(|| MalformedInputError::new("no problem line"))?;
    let source = source.ok_or_else(|| MalformedInputError::new("no source node"))?;
    let sink = sink.ok_or_else(|| MalformedInputError::new("no sink node"))?;
    if arcs.len() != problem.nr_arcs {
        return Err(MalformedInputError::with_file_location(
            format!("{} arcs are declared, but {} are read", problem.nr_arcs, arcs.len()),
            problem_location,
        ));
    }
    if problem.problem_type != MAX_FLOW {
        warn!("Problem type is \"{}\" instead of \"{MAX_FLOW}\", solving it as a maximum flow problem",
            problem.problem_type);
    }
    trace!("Read {} arcs, source {source}, sink {sink}", arcs.len());

    Ok(RawNetwork {
        problem_type: problem.problem_type,
        nr_nodes: problem.nr_nodes,
        source,
        sink,
        arcs,
    })
}

struct ProblemLine {
    problem_type: String,
    nr_nodes: usize,
    nr_arcs: usize,
}

fn parse_problem(
    fields: &[&str],
    location: impl Fn() -> FileLocation,
) -> Result<ProblemLine, MalformedInputError> {
    let [problem_type, nr_nodes, nr_arcs] = exact_fields::<3>(fields, &location)?;

    Ok(ProblemLine {
        problem_type: problem_type.to_string(),
        nr_nodes: parse_integer(nr_nodes, &location)?,
        nr_arcs: parse_integer(nr_arcs, &location)?,
    })
}

/// The fields after the record type, if there are exactly `N` of them.
fn exact_fields<'a, const N: usize>(
    fields: &[&'a str],
    location: impl Fn() -> FileLocation,
) -> Result<[&'a str; N], MalformedInputError> {
    <[&str; N]>::try_from(fields).map_err(|_| MalformedInputError::with_file_location(
        format!("expected {N} fields after the record type, found {}", fields.len()),
        location(),
    ))
}

fn parse_integer<T: FromStr>(
    field: &str,
    location: impl Fn() -> FileLocation,
) -> Result<T, MalformedInputError> {
    field.parse().map_err(|_| MalformedInputError::with_file_location(
        format!("\"{field}\" is not a non-negative integer"),
        location(),
    ))
}

#[cfg(test)]
mod test {
    use crate::data::network::{RawArc, RawNetwork};
    use crate::io::dimacs::parse;

    #[test]
    fn comments_and_empty_lines() {
        let program = "c A network\n\np max 3 2\nn 1 s\n  \nn 3 t\nc arcs follow\na 1 2 4\na 2 3 6\n";
        assert_eq!(parse(program), Ok(RawNetwork {
            problem_type: "max".to_string(),
            nr_nodes: 3,
            source: 1,
            sink: 3,
            arcs: vec![
                RawArc { tail: 1, head: 2, capacity: 4 },
                RawArc { tail: 2, head: 3, capacity: 6 },
            ],
        }));
    }

    #[test]
    fn other_problem_types() {
        let network = parse("p min 2 1\nn 0 s\nn 1 t\na 0 1 3").unwrap();
        assert_eq!(network.problem_type, "min");
    }

    fn line_number_of_error(program: &str) -> Option<usize> {
        parse(program).unwrap_err().location().map(|location| location.line_number)
    }

    #[test]
    fn malformed_lines() {
        // Negative capacity
        assert_eq!(line_number_of_error("p max 2 1\nn 0 s\nn 1 t\na 0 1 -3"), Some(4));
        // Unparsable id
        assert_eq!(line_number_of_error("p max 2 1\nn x s\nn 1 t\na 0 1 3"), Some(2));
        // Too many fields
        assert_eq!(line_number_of_error("p max 2 1 5\nn 0 s\nn 1 t\na 0 1 3"), Some(1));
        // Too few fields
        assert_eq!(line_number_of_error("p max 2 1\nn 0 s\nn 1 t\na 0 1"), Some(4));
        // Unknown record
        assert_eq!(line_number_of_error("p max 2 1\nn 0 s\nn 1 t\nx 0 1 3"), Some(4));
        // Unknown role
        assert_eq!(line_number_of_error("p max 2 1\nn 0 q\nn 1 t\na 0 1 3"), Some(2));
        // Second source
        assert_eq!(line_number_of_error("p max 2 1\nn 0 s\nn 1 s\na 0 1 3"), Some(3));
        // Second problem line
        assert_eq!(line_number_of_error("p max 2 1\np max 2 1\nn 0 s\nn 1 t\na 0 1 3"), Some(2));
        // Arc before the problem line
        assert_eq!(line_number_of_error("a 0 1 3\np max 2 1\nn 0 s\nn 1 t"), Some(1));
        // Arc count differs, reported at the problem line
        assert_eq!(line_number_of_error("c\np max 2 2\nn 0 s\nn 1 t\na 0 1 3"), Some(2));
    }

    #[test]
    fn missing_records() {
        assert_eq!(line_number_of_error("n 0 s\nn 1 t"), Some(1));
        assert!(parse("").is_err());
        assert!(parse("p max 2 0\nn 0 s").is_err());
        assert!(parse("p max 2 0\nn 1 t").is_err());
    }

    #[test]
    fn tabs_separate_fields() {
        let network = parse("p\tmax\t2\t1\nn\t0\ts\nn 1\tt\na\t0 1\t7").unwrap();
        assert_eq!(network.arcs, vec![RawArc { tail: 0, head: 1, capacity: 7 }]);
    }
}
