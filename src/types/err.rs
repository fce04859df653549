//! Error types used in the library.
//!
//! Every error is fatal to the coloring attempt in progress and propagates up to the caller of
//! the [chromatic driver](crate::procedures::chromatic).
//! Notably, *unsatisfiable* is not an error --- the solver returns a
//! [report](crate::reports::Report), never an error, and an unsatisfiable *k* simply advances
//! the driver to *k* + 1.
//
//  Throughout the library err::{self} is used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, literal::CLiteral};

/// The general error type, wrapping the specific kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Resource exhaustion while building the structures for a solve.
    Allocation(AllocationError),

    /// A request the encoder cannot satisfy.
    Encode(EncodeError),

    /// A malformed formula, from a file or built directly.
    Formula(FormulaError),

    /// A malformed graph, from a file or built directly.
    Graph(GraphError),

    /// A search budget was exhausted before the driver reached a verdict.
    ///
    /// Distinct from unsatisfiability: nothing is known about the formula.
    Interrupted,

    /// A satisfying assignment failed to decode to a coloring, or no *k* ≤ *n* was
    /// satisfiable.
    ///
    /// Either is impossible for a well-formed encoding of a simple graph, so this is a loud
    /// signal of an internal defect rather than a report of "no coloring".
    ColoringInvariant,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocation(e) => write!(f, "allocation failed: {e}"),
            Self::Encode(e) => write!(f, "encoding failed: {e}"),
            Self::Formula(e) => write!(f, "malformed formula: {e}"),
            Self::Graph(e) => write!(f, "malformed graph: {e}"),
            Self::Interrupted => write!(f, "search budget exhausted"),
            Self::ColoringInvariant => write!(f, "coloring invariant violated"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Resource exhaustion, modeled as a recoverable failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllocationError {
    /// The atom count exceeds [ATOM_MAX](crate::structures::atom::ATOM_MAX).
    AtomsExhausted,

    /// The backing store of an assignment could not be reserved.
    Assignment,
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomsExhausted => write!(f, "no fresh atoms"),
            Self::Assignment => write!(f, "assignment store"),
        }
    }
}

impl From<AllocationError> for ErrorKind {
    fn from(e: AllocationError) -> Self {
        ErrorKind::Allocation(e)
    }
}

/// Noted errors while encoding a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// A coloring with zero colors was requested.
    NoColors,
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoColors => write!(f, "zero colors requested"),
        }
    }
}

impl From<EncodeError> for ErrorKind {
    fn from(e: EncodeError) -> Self {
        ErrorKind::Encode(e)
    }
}

/// Noted errors in the format of a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// Some issue reading the given line.
    Line(usize),

    /// A malformed `p cnf …` problem line.
    ProblemSpecification,

    /// A clause appeared before any problem line.
    MissingProblemLine,

    /// A literal whose atom is outside `[1, atom_count]`.
    ///
    /// The whole formula is rejected --- the literal is never clamped or dropped.
    LiteralOutOfRange {
        /// The offending literal.
        literal: CLiteral,

        /// The declared atom count.
        atom_count: Atom,
    },
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::ProblemSpecification => write!(f, "malformed problem line"),
            Self::MissingProblemLine => write!(f, "clause before problem line"),
            Self::LiteralOutOfRange {
                literal,
                atom_count,
            } => write!(f, "literal {literal} outside [1, {atom_count}]"),
        }
    }
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Noted errors in the description of a graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphError {
    /// Some issue reading the given line.
    Line(usize),

    /// A missing or malformed vertex count.
    VertexCount,

    /// A missing or malformed edge count.
    EdgeCount,

    /// A missing or malformed edge on the given (1-indexed) edge line.
    EdgeLine(usize),

    /// A vertex outside `[0, vertex_count)`.
    VertexOutOfBounds {
        /// The offending vertex.
        vertex: u32,

        /// The declared vertex count.
        vertex_count: u32,
    },

    /// An edge from a vertex to itself.
    SelfLoop(u32),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "failed to read line {line}"),
            Self::VertexCount => write!(f, "missing or malformed vertex count"),
            Self::EdgeCount => write!(f, "missing or malformed edge count"),
            Self::EdgeLine(edge) => write!(f, "missing or malformed edge {edge}"),
            Self::VertexOutOfBounds {
                vertex,
                vertex_count,
            } => write!(f, "vertex {vertex} outside [0, {vertex_count})"),
            Self::SelfLoop(vertex) => write!(f, "self-loop on vertex {vertex}"),
        }
    }
}

impl From<GraphError> for ErrorKind {
    fn from(e: GraphError) -> Self {
        ErrorKind::Graph(e)
    }
}
