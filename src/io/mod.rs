//! The textual boundary: line-oriented ASCII interchange formats.
//!
//! - [dimacs] --- the DIMACS CNF format, written by the encoder and read back by the solver's
//!   input adapter.
//! - [graph] --- the plain graph description format.
//!
//! Both readers reject malformed input before any core logic runs.

pub mod dimacs;
pub mod graph;
