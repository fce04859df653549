//! The algorithms, factored into a collection of procedures.
//!
//! - [encode] --- a graph and a color count to a CNF formula.
//! - [solve] --- the exhaustive backtracking search.
//! - [chromatic] --- iteration over color counts, and decoding an assignment to a coloring.

pub mod chromatic;
pub mod encode;
pub mod solve;
