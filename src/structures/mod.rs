//! Structures, to instantiate the elements of a solve.
//!
//! Two families live here:
//! - The SAT domain: [atoms](atom), [literals](literal), [clauses](clause),
//!   [formulas](formula), [assignments](assignment), and the [decision tree](tree) built
//!   during a search.
//! - The graph domain: [graphs](graph) and [colorings](coloring).
//!
//! The sole bridge between the two domains is the atom mapping in
//! [procedures::encode](crate::procedures::encode).

pub mod assignment;
pub mod atom;
pub mod clause;
pub mod coloring;
pub mod formula;
pub mod graph;
pub mod literal;
pub mod tree;
