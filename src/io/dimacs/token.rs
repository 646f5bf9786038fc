//! # Tokens used in DIMACS maximum flow files

/// First field of a comment line.
pub const COMMENT: &str = "c";

/// First field of the problem line: `p <type> <nodes> <arcs>`.
pub const PROBLEM: &str = "p";

/// First field of a node descriptor: `n <id> <role>`.
pub const NODE: &str = "n";

/// First field of an arc descriptor: `a <tail> <head> <capacity>`.
pub const ARC: &str = "a";

/// Role of the source in a node descriptor.
pub const SOURCE: &str = "s";

/// Role of the sink in a node descriptor.
pub const SINK: &str = "t";

/// The problem type of maximum flow problems.
pub const MAX_FLOW: &str = "max";
