/*!
Encoding "is this graph *k*-colorable?" as a CNF formula.

For a graph over *n* vertices and a candidate color count *k* the encoding uses *n·k* atoms,
one per (vertex, color) pair, via the bijection [color_atom]: for 1-indexed vertex *v* and
color *c*, the atom is `(v - 1) * k + c`.
This mapping is the sole coupling between the graph domain and the SAT domain, and the
[decoder](crate::procedures::chromatic) inverts it literally.

Three clause families are emitted, and nothing else:

1. **Coverage** --- for each vertex, the *k* positive literals of its colors: "some color".
2. **Exclusivity** --- for each vertex and unordered pair of distinct colors, a binary negative
   clause: "not two colors". *n·k·(k - 1)/2* clauses.
3. **Adjacency** --- for each edge and color, a binary negative clause: "not the same color".
   *m·k* clauses.

Encoding is unconditional --- no deduplication, no simplification, no satisfiability pre-check.
A trivially unsatisfiable request (e.g. too few colors) is still encoded in full and left for
the solver to reject.
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        formula::Formula,
        graph::Graph,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The atom asserting that (1-indexed) vertex `vertex` has color `color`, of `color_count`.
///
/// The encoder and the decoder must agree on this bijection, so both call here.
pub fn color_atom(vertex: u32, color: u32, color_count: u32) -> Atom {
    (vertex - 1) * color_count + color
}

/// Encodes `graph` and the candidate color count `color_count` as a CNF formula.
///
/// The formula is over `n * k` atoms with exactly `n + n*k*(k-1)/2 + m*k` clauses.
///
/// Zero colors is an [EncodeError](err::EncodeError), and an encoding which would need more
/// than [ATOM_MAX] atoms fails with a (recoverable)
/// [AllocationError](err::AllocationError) before any clause is built.
pub fn encode(graph: &Graph, color_count: u32) -> Result<Formula, ErrorKind> {
    if color_count == 0 {
        return Err(ErrorKind::from(err::EncodeError::NoColors));
    }

    let vertex_count = graph.vertex_count();
    if (vertex_count as u64) * (color_count as u64) > ATOM_MAX as u64 {
        return Err(ErrorKind::from(err::AllocationError::AtomsExhausted));
    }

    let mut formula = Formula::new(vertex_count * color_count);

    // Coverage: each vertex has at least one color.
    for vertex in 1..=vertex_count {
        let clause = (1..=color_count)
            .map(|color| CLiteral::new(color_atom(vertex, color, color_count), true))
            .collect();
        formula.add_clause(clause)?;
    }

    // Exclusivity: no vertex holds two colors at once.
    for vertex in 1..=vertex_count {
        for color_a in 1..=color_count {
            for color_b in (color_a + 1)..=color_count {
                formula.add_clause(vec![
                    CLiteral::new(color_atom(vertex, color_a, color_count), false),
                    CLiteral::new(color_atom(vertex, color_b, color_count), false),
                ])?;
            }
        }
    }

    // Adjacency: no edge joins two vertices of the same color.
    // Graph vertices are 0-indexed, the mapping is 1-indexed.
    for (u, v) in graph.edges() {
        for color in 1..=color_count {
            formula.add_clause(vec![
                CLiteral::new(color_atom(u + 1, color, color_count), false),
                CLiteral::new(color_atom(v + 1, color, color_count), false),
            ])?;
        }
    }

    log::debug!(target: targets::ENCODE,
        "Encoded {vertex_count} vertices / {} edges at k = {color_count}: {} atoms, {} clauses",
        graph.edge_count(),
        formula.atom_count(),
        formula.clause_count()
    );

    Ok(formula)
}
