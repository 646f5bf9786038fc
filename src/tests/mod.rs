//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const DIMACS_STRING`
//! * `fn raw_form()`
//! * `fn normalized_form()`
//! * `fn network_instance()`
//! * `fn linear_program()`
pub mod problem_2;
