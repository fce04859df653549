/*!
An undirected graph: a vertex count and an edge list.

Vertices are 0-indexed, matching the [graph input format](crate::io::graph), and the graph is
static input --- edges are added while building and the graph is never mutated by the core.

Endpoints are checked against the declared vertex count, and self-loops are rejected: a vertex
adjacent to itself can never be colored, which would break the guarantee that *n* colors
always suffice.
*/

use crate::types::err::{self, ErrorKind};

/// An undirected graph over vertices `0..vertex_count`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    /// The number of vertices.
    vertex_count: u32,

    /// The edges, as (0-indexed) vertex pairs.
    edges: Vec<(u32, u32)>,
}

impl Graph {
    /// A fresh graph over `vertex_count` vertices, with no edges.
    pub fn new(vertex_count: u32) -> Self {
        Graph {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// The number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// An iterator over the edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().copied()
    }

    /// Adds an edge between vertices `u` and `v`.
    ///
    /// Out-of-bounds endpoints and self-loops are rejected.
    /// Duplicate edges are accepted --- the only cost is redundant clauses in the encoding.
    pub fn add_edge(&mut self, u: u32, v: u32) -> Result<(), ErrorKind> {
        if u >= self.vertex_count {
            return Err(ErrorKind::from(err::GraphError::VertexOutOfBounds {
                vertex: u,
                vertex_count: self.vertex_count,
            }));
        }
        if v >= self.vertex_count {
            return Err(ErrorKind::from(err::GraphError::VertexOutOfBounds {
                vertex: v,
                vertex_count: self.vertex_count,
            }));
        }
        if u == v {
            return Err(ErrorKind::from(err::GraphError::SelfLoop(u)));
        }
        self.edges.push((u, v));
        Ok(())
    }
}
