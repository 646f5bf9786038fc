//! # Error reporting
//!
//! Everything that can go wrong while reading a network and solving it twice. Every error is
//! terminal for the computation that produced it.
use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A line of the input, by its 1-based line number as read from the disk, and its contents.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileLocation {
    /// Counting from 1.
    pub line_number: usize,
    /// The line as it was read.
    pub line: String,
}

impl FileLocation {
    /// Reference a line.
    pub fn new(line_number: usize, line: &str) -> Self {
        Self { line_number, line: line.to_string() }
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: \"{}\"", self.line_number, self.line)
    }
}

fn caused_at(location: &Option<FileLocation>) -> String {
    location.as_ref().map_or_else(String::new, |location| format!(" (caused at {location})"))
}

/// The input does not describe a valid network.
///
/// Created for syntactically incorrect files and for networks whose node ids can't be turned into
/// the dense, 0-based ids the solvers work with.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("malformed input: {description}{}", caused_at(.location))]
pub struct MalformedInputError {
    description: String,
    location: Option<FileLocation>,
}

impl MalformedInputError {
    /// Create a new error with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new error pointing at the line that caused it.
    pub fn with_file_location(description: impl Into<String>, location: FileLocation) -> Self {
        Self { description: description.into(), location: Some(location) }
    }

    /// What is wrong.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The offending line, if the error was found while parsing.
    pub fn location(&self) -> Option<&FileLocation> {
        self.location.as_ref()
    }
}

/// The two independent ways in which the maximum flow is computed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pass {
    /// Dedicated maximum flow algorithm on the flow network.
    MaxFlow,
    /// Integer linear program solved by a generic optimizer.
    LinearProgram,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pass::MaxFlow => "max flow",
            Pass::LinearProgram => "linear program",
        })
    }
}

/// A solver did not reach an optimal solution.
///
/// These are not retried and there is no partial result.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("solving the {pass} is not optimal: {status}")]
pub struct SolverFailure {
    /// Which of the two computations failed.
    pub pass: Pass,
    /// The status the solver reported instead of an optimum.
    pub status: String,
}

impl SolverFailure {
    /// Describe a failed solve.
    pub fn new(pass: Pass, status: impl Into<String>) -> Self {
        Self { pass, status: status.into() }
    }
}

/// Highest error in the hierarchy.
#[derive(Debug, Error)]
pub enum Error {
    /// The problem file isn't found, or reading it couldn't start or was interrupted.
    #[error("unable to open file {path:?}: {source}")]
    Io {
        /// File that was attempted.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },
    /// See `MalformedInputError`.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),
    /// See `SolverFailure`.
    #[error(transparent)]
    SolverFailure(#[from] SolverFailure),
    /// Both passes solved the same problem, but disagree on the maximum flow.
    #[error("maximum flow {network} differs from the linear program optimum {linear_program}")]
    CrossCheck {
        /// Total flow found by the max flow pass.
        network: String,
        /// Objective value found by the linear program pass.
        linear_program: String,
    },
}
