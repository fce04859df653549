/*!
A coloring: a mapping from vertices to colors.

The output of the [chromatic driver](crate::procedures::chromatic), derived from a satisfying
assignment --- never stored by the solver.
Vertices are reported 1-indexed and colors lie in `[1, color_count]`.
*/

use crate::structures::graph::Graph;

/// A total mapping from the vertices of some graph to colors in `[1, color_count]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    /// The number of colors used.
    color_count: u32,

    /// The color of (1-indexed) vertex *v*, at index *v* - 1.
    colors: Vec<u32>,
}

impl Coloring {
    /// A coloring from its parts.
    ///
    /// `colors[v - 1]` is the color of (1-indexed) vertex *v*.
    pub fn from_parts(color_count: u32, colors: Vec<u32>) -> Self {
        Coloring {
            color_count,
            colors,
        }
    }

    /// The number of colors used.
    pub fn color_count(&self) -> u32 {
        self.color_count
    }

    /// The number of vertices colored.
    pub fn vertex_count(&self) -> u32 {
        self.colors.len() as u32
    }

    /// The color of the given (1-indexed) vertex, if the vertex is in the coloring.
    pub fn color_of(&self, vertex: u32) -> Option<u32> {
        match vertex {
            0 => None,
            _ => self.colors.get(vertex as usize - 1).copied(),
        }
    }

    /// An iterator over `(vertex, color)` pairs, vertices 1-indexed and in order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, color)| (index as u32 + 1, *color))
    }

    /// Whether the coloring is proper for the given graph: no edge joins two vertices of the
    /// same color, and every vertex has a color in `[1, color_count]`.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        if self.vertex_count() != graph.vertex_count() {
            return false;
        }

        for color in &self.colors {
            if *color == 0 || *color > self.color_count {
                return false;
            }
        }

        // Graph edges are 0-indexed, the coloring is 1-indexed.
        for (u, v) in graph.edges() {
            if self.color_of(u + 1) == self.color_of(v + 1) {
                return false;
            }
        }

        true
    }
}
