//! # Reading of flow networks
//!
//! This module reads problem files describing a flow network into a `RawNetwork`, with node ids
//! still as they appear in the file.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::data::network::RawNetwork;
use crate::error::Error;

pub mod dimacs;

/// Import a network from a file in the DIMACS maximum flow format.
///
/// # Errors
///
/// When a file cannot be found or read, or when its contents don't describe a network.
pub fn import(file_path: &Path) -> Result<RawNetwork, Error> {
    info!("Reading {}", file_path.display());

    let io_error = |source| Error::Io { path: file_path.to_path_buf(), source };
    let mut program = String::new();
    File::open(file_path)
        .map_err(io_error)?
        .read_to_string(&mut program)
        .map_err(io_error)?;

    dimacs::parse(&program).map_err(Error::from)
}
