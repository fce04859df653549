/*!
The chromatic driver: iteration over color counts, and decoding assignments to colorings.

The driver tries *k* = 1, 2, …, *n* in order, and for each *k* encodes afresh and solves with
a fresh assignment and tree --- nothing is shared between iterations.
Because *k* increases from 1, the first satisfiable *k* is the chromatic number by
construction, and its assignment decodes to a witnessing coloring through the same
[color_atom] bijection the encoder used.

For a simple graph *n* colors always suffice, so exhausting *k* = *n* without success is not
"no coloring possible" --- it signals a defect in the encoding or the graph, and is surfaced
loudly as [ErrorKind::ColoringInvariant] rather than folded into a quiet failure.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    procedures::encode::{color_atom, encode},
    reports::Report,
    structures::{
        assignment::Assignment, coloring::Coloring, graph::Graph, tree::DecisionNode,
    },
    types::err::ErrorKind,
};

/// Decodes a satisfying assignment of a *k*-coloring encoding back into a coloring.
///
/// For each vertex the colors `1..=color_count` are scanned for the one whose atom is
/// assigned true.
/// Coverage and exclusivity guarantee exactly one for a satisfying assignment, so a vertex
/// without one is a (loud) [ErrorKind::ColoringInvariant].
pub fn decode_coloring(
    vertex_count: u32,
    color_count: u32,
    assignment: &Assignment,
) -> Result<Coloring, ErrorKind> {
    let mut colors = Vec::with_capacity(vertex_count as usize);

    for vertex in 1..=vertex_count {
        let color = (1..=color_count)
            .find(|color| assignment.value_of(color_atom(vertex, *color, color_count)) == Some(true));

        match color {
            Some(color) => colors.push(color),
            None => {
                log::error!(target: targets::CHROMATIC,
                    "Vertex {vertex} has no color in a satisfying assignment");
                return Err(ErrorKind::ColoringInvariant);
            }
        }
    }

    Ok(Coloring::from_parts(color_count, colors))
}

/// Methods to find colorings of a graph.
impl Context {
    /// Decides whether `graph` can be colored with exactly `color_count` colors.
    ///
    /// Returns a witnessing coloring if so, `None` if the encoding is unsatisfiable, and an
    /// error if the encoding fails or a [budget](crate::config::Config) ran out
    /// ([ErrorKind::Interrupted]).
    pub fn decide_coloring(
        &mut self,
        graph: &Graph,
        color_count: u32,
    ) -> Result<Option<Coloring>, ErrorKind> {
        let formula = encode(graph, color_count)?;
        let mut assignment = Assignment::new(formula.atom_count())?;
        let mut root = DecisionNode::new();

        match self.solve(&formula, &mut assignment, &mut root) {
            Report::Satisfiable => {
                let coloring = decode_coloring(graph.vertex_count(), color_count, &assignment)?;
                Ok(Some(coloring))
            }

            Report::Unsatisfiable => Ok(None),

            Report::Unknown => Err(ErrorKind::Interrupted),
        }
    }

    /// Finds a coloring of `graph` using the fewest possible colors.
    ///
    /// Tries *k* = 1 up to the vertex count, each attempt with fresh state, and returns the
    /// first success --- by construction a coloring with chromatic-number many colors.
    ///
    /// The empty graph yields the empty coloring.
    /// Exhausting *k* without success is impossible for a simple graph and is reported as the
    /// invariant violation it is, distinct from every expected outcome.
    pub fn find_chromatic_coloring(&mut self, graph: &Graph) -> Result<Coloring, ErrorKind> {
        for color_count in 1..=graph.vertex_count() {
            log::info!(target: targets::CHROMATIC,
                "Trying {color_count} color(s) on {} vertices / {} edges",
                graph.vertex_count(),
                graph.edge_count()
            );

            match self.decide_coloring(graph, color_count)? {
                Some(coloring) => {
                    log::info!(target: targets::CHROMATIC,
                        "Chromatic number {color_count}");
                    return Ok(coloring);
                }

                None => log::info!(target: targets::CHROMATIC,
                    "Unsatisfiable with {color_count} color(s)"),
            }
        }

        if graph.vertex_count() == 0 {
            return Ok(Coloring::from_parts(0, Vec::new()));
        }

        // n colors satisfy any simple graph, so the loop cannot run out.
        log::error!(target: targets::CHROMATIC,
            "No k ≤ {} was satisfiable", graph.vertex_count());
        Err(ErrorKind::ColoringInvariant)
    }
}
