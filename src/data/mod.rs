//! # Data structures
//!
//! Networks, linear programs and the number types in which linear programs are solved.
pub mod linear_algebra;
pub mod linear_program;
pub mod network;
pub mod number_types;
