//! A library for finding the chromatic number of an undirected graph by reduction to SAT.
//!
//! chroma_sat decides "is this graph *k*-colorable?" by encoding the question as a boolean
//! formula in conjunctive normal form and handing the formula to an exhaustive backtracking
//! solver which records its exploration as a binary decision tree.
//! Trying *k* = 1, 2, 3, … in order, the first *k* for which the formula is satisfiable is the
//! chromatic number of the graph, and the satisfying assignment decodes to a witnessing
//! coloring.
//!
//! The solver is deliberately a textbook exhaustive search: no unit propagation, no clause
//! learning, no branch heuristics.
//! Atoms are assigned in lowest-index-first order, true before false, and a branch is abandoned
//! the moment some clause has every literal falsified.
//! The interesting guarantees are about discipline rather than speed:
//! - Assignments follow a strict LIFO trail --- an atom set on a branch is cleared when the
//!   branch is abandoned, and a successful solve leaves the witnessing assignment intact.
//! - Each [decision tree](structures::tree) node exclusively owns its children, and the subtree
//!   for a refuted branch is released the moment the branch fails, so live tree memory is
//!   bounded by the depth of the current path rather than the explored space.
//!
//! # Orientation
//!
//! - The [structures] module holds the abstract elements: [literals](structures::literal),
//!   [clauses](structures::clause), [formulas](structures::formula),
//!   [assignments](structures::assignment), [graphs](structures::graph), and the
//!   [decision tree](structures::tree).
//! - The [procedures] module holds the algorithms: the [encoder](procedures::encode), the
//!   [backtracking search](procedures::solve), and the
//!   [chromatic driver](procedures::chromatic).
//! - A [context](context) pairs a [configuration](config) with counters and hosts the solve
//!   and driver procedures.
//! - The [io] module holds the textual boundary: a DIMACS CNF reader/writer and a reader for
//!   the plain graph format.
//!
//! # Example
//!
//! A triangle requires three colors:
//!
//! ```rust
//! # use chroma_sat::config::Config;
//! # use chroma_sat::context::Context;
//! # use chroma_sat::structures::graph::Graph;
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 0).unwrap();
//!
//! let mut ctx = Context::from_config(Config::default());
//!
//! let coloring = ctx.find_chromatic_coloring(&graph).unwrap();
//! assert_eq!(coloring.color_count(), 3);
//! assert!(coloring.is_proper(&graph));
//! ```
//!
//! Or, a single *k* may be tested directly:
//!
//! ```rust
//! # use chroma_sat::config::Config;
//! # use chroma_sat::context::Context;
//! # use chroma_sat::structures::graph::Graph;
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 0).unwrap();
//!
//! let mut ctx = Context::from_config(Config::default());
//!
//! assert!(ctx.decide_coloring(&graph, 2).unwrap().is_none());
//! assert!(ctx.decide_coloring(&graph, 3).unwrap().is_some());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made at notable points, filtered by the targets listed in
//! [misc::log::targets].
//! No log implementation is provided by the library --- the bundled CLI uses
//! [env_logger](https://docs.rs/env_logger/latest/env_logger/), so, e.g., per-*k* progress of
//! the driver can be followed with `RUST_LOG=chromatic=info …`.

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod io;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

pub mod misc;
