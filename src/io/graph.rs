/*!
Reading a graph description.

The format, line by line:
1. The vertex count.
2. The edge count, *m*.
3. A separator line, ignored.
4. *m* lines, each `a b` for an edge between (0-indexed) vertices `a` and `b`.

Malformed counts, short files, and bad edge lines are fatal
[GraphError](crate::types::err::GraphError)s --- nothing of the core runs on a partial graph.

```rust
# use chroma_sat::io::graph::read_graph;
let description = "3
3
*
0 1
1 2
2 0
";

let graph = read_graph(description.as_bytes()).unwrap();
assert_eq!(graph.vertex_count(), 3);
assert_eq!(graph.edge_count(), 3);
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::graph::Graph,
    types::err::{self, ErrorKind},
};

/// Reads a graph description from `reader`.
pub fn read_graph(mut reader: impl BufRead) -> Result<Graph, ErrorKind> {
    let mut buffer = String::with_capacity(256);
    let mut line_counter = 0;

    let mut read_line = |buffer: &mut String| -> Result<usize, ErrorKind> {
        buffer.clear();
        match reader.read_line(buffer) {
            Ok(count) => {
                line_counter += 1;
                Ok(count)
            }
            Err(_) => Err(ErrorKind::from(err::GraphError::Line(line_counter + 1))),
        }
    };

    read_line(&mut buffer)?;
    let vertex_count: u32 = match buffer.split_whitespace().next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(ErrorKind::from(err::GraphError::VertexCount)),
    };

    read_line(&mut buffer)?;
    let edge_count: usize = match buffer.split_whitespace().next().map(str::parse) {
        Some(Ok(count)) => count,
        _ => return Err(ErrorKind::from(err::GraphError::EdgeCount)),
    };

    // The separator line, ignored. A missing separator shows up as a missing edge below.
    read_line(&mut buffer)?;

    let mut graph = Graph::new(vertex_count);

    for edge in 1..=edge_count {
        if read_line(&mut buffer)? == 0 {
            return Err(ErrorKind::from(err::GraphError::EdgeLine(edge)));
        }

        let mut endpoints = buffer.split_whitespace().map(str::parse::<u32>);

        let (a, b) = match (endpoints.next(), endpoints.next()) {
            (Some(Ok(a)), Some(Ok(b))) => (a, b),
            _ => return Err(ErrorKind::from(err::GraphError::EdgeLine(edge))),
        };

        graph.add_edge(a, b)?;
    }

    log::info!(target: targets::PARSER,
        "Read a graph with {vertex_count} vertices and {edge_count} edges");

    Ok(graph)
}
