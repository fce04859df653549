use chroma_sat::{
    io::{dimacs, graph::read_graph},
    procedures::encode::encode,
    structures::{formula::Formula, graph::Graph},
    types::err::{self, ErrorKind},
};

mod graph_format {
    use super::*;

    #[test]
    fn read_simple() {
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
        assert_eq!(graph.edges().next(), Some((0, 1)));
    }

    #[test]
    fn separator_content_irrelevant() {
        let description = "2\n1\nedges below\n0 1\n";
        assert!(read_graph(description.as_bytes()).is_ok());
    }

    #[test]
    fn malformed_vertex_count() {
        assert_eq!(
            read_graph("three\n0\n*\n".as_bytes()),
            Err(ErrorKind::from(err::GraphError::VertexCount))
        );
        assert_eq!(
            read_graph("".as_bytes()),
            Err(ErrorKind::from(err::GraphError::VertexCount))
        );
    }

    #[test]
    fn malformed_edge_count() {
        assert_eq!(
            read_graph("3\n\n*\n".as_bytes()),
            Err(ErrorKind::from(err::GraphError::EdgeCount))
        );
    }

    #[test]
    fn missing_edge_line() {
        let description = "3\n2\n*\n0 1\n";
        assert_eq!(
            read_graph(description.as_bytes()),
            Err(ErrorKind::from(err::GraphError::EdgeLine(2)))
        );
    }

    #[test]
    fn malformed_edge_line() {
        let description = "3\n1\n*\n0 x\n";
        assert_eq!(
            read_graph(description.as_bytes()),
            Err(ErrorKind::from(err::GraphError::EdgeLine(1)))
        );
    }

    #[test]
    fn vertex_out_of_bounds() {
        let description = "2\n1\n*\n0 2\n";
        assert_eq!(
            read_graph(description.as_bytes()),
            Err(ErrorKind::from(err::GraphError::VertexOutOfBounds {
                vertex: 2,
                vertex_count: 2,
            }))
        );
    }

    #[test]
    fn self_loop_rejected() {
        let description = "2\n1\n*\n1 1\n";
        assert_eq!(
            read_graph(description.as_bytes()),
            Err(ErrorKind::from(err::GraphError::SelfLoop(1)))
        );
    }
}

mod dimacs_format {
    use super::*;

    #[test]
    fn read_simple() {
        let dimacs = "c comment before the problem line
p cnf 3 2
1 2 3 0
-1 -2 0
";
        let formula = dimacs::read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.atom_count(), 3);
        assert_eq!(formula.clause_count(), 2);

        let clauses: Vec<_> = formula.clauses().collect();
        assert_eq!(*clauses[0], vec![1, 2, 3]);
        assert_eq!(*clauses[1], vec![-1, -2]);
    }

    #[test]
    fn comments_and_trailer_skipped() {
        let dimacs = "p cnf 1 1\nc mid-formula comment\n1 0\n%\nanything\n";
        let formula = dimacs::read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn literal_out_of_range_rejected() {
        let dimacs = "p cnf 2 1\n3 0\n";
        assert_eq!(
            dimacs::read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::from(err::FormulaError::LiteralOutOfRange {
                literal: 3,
                atom_count: 2,
            }))
        );

        // The same invariant holds for directly-built formulas.
        let mut formula = Formula::new(2);
        assert_eq!(
            formula.add_clause(vec![1, -3]),
            Err(ErrorKind::from(err::FormulaError::LiteralOutOfRange {
                literal: -3,
                atom_count: 2,
            }))
        );
    }

    #[test]
    fn missing_problem_line() {
        assert_eq!(
            dimacs::read_dimacs("1 2 0\n".as_bytes()),
            Err(ErrorKind::from(err::FormulaError::MissingProblemLine))
        );
    }

    #[test]
    fn malformed_problem_line() {
        assert_eq!(
            dimacs::read_dimacs("p cnf two 1\n".as_bytes()),
            Err(ErrorKind::from(err::FormulaError::ProblemSpecification))
        );
        assert_eq!(
            dimacs::read_dimacs("p sat 2 1\n".as_bytes()),
            Err(ErrorKind::from(err::FormulaError::ProblemSpecification))
        );
    }

    #[test]
    fn unterminated_clause_rejected() {
        let dimacs = "p cnf 2 1\n1 2\n";
        assert!(matches!(
            dimacs::read_dimacs(dimacs.as_bytes()),
            Err(ErrorKind::Formula(err::FormulaError::Line(_)))
        ));
    }

    #[test]
    fn clause_count_mismatch_tolerated() {
        // The declared count is advisory, as some producers only estimate it.
        let dimacs = "p cnf 2 3\n1 2 0\n";
        let formula = dimacs::read_dimacs(dimacs.as_bytes()).unwrap();
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn round_trip_encoding() {
        let mut triangle = Graph::new(3);
        triangle.add_edge(0, 1).unwrap();
        triangle.add_edge(1, 2).unwrap();
        triangle.add_edge(2, 0).unwrap();

        let encoded = encode(&triangle, 3).unwrap();

        let mut written = Vec::new();
        dimacs::write_dimacs(&encoded, &mut written).unwrap();

        let read_back = dimacs::read_dimacs(written.as_slice()).unwrap();
        assert_eq!(read_back, encoded);
    }
}
