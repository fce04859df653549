use chroma_sat::{
    procedures::encode::{color_atom, encode},
    structures::{clause::Clause, graph::Graph},
    types::err::{self, ErrorKind},
};

fn triangle() -> Graph {
    let mut graph = Graph::new(3);
    graph.add_edge(0, 1).unwrap();
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(2, 0).unwrap();
    graph
}

mod encode {
    use super::*;

    /// n + n*k*(k-1)/2 + m*k
    fn expected_clauses(n: usize, m: usize, k: usize) -> usize {
        n + n * k * (k - 1) / 2 + m * k
    }

    #[test]
    fn clause_counts() {
        let triangle = triangle();

        let mut path = Graph::new(4);
        path.add_edge(0, 1).unwrap();
        path.add_edge(1, 2).unwrap();
        path.add_edge(2, 3).unwrap();

        for k in 1..=5_u32 {
            let formula = encode(&triangle, k).unwrap();
            assert_eq!(formula.atom_count(), 3 * k);
            assert_eq!(formula.clause_count(), expected_clauses(3, 3, k as usize));

            let formula = encode(&path, k).unwrap();
            assert_eq!(formula.atom_count(), 4 * k);
            assert_eq!(formula.clause_count(), expected_clauses(4, 3, k as usize));
        }
    }

    #[test]
    fn atom_mapping() {
        assert_eq!(color_atom(1, 1, 3), 1);
        assert_eq!(color_atom(1, 3, 3), 3);
        assert_eq!(color_atom(2, 1, 3), 4);
        assert_eq!(color_atom(3, 3, 3), 9);

        // One color collapses the mapping to the vertex index.
        assert_eq!(color_atom(7, 1, 1), 7);
    }

    #[test]
    fn coverage_clauses_lead() {
        let formula = encode(&triangle(), 3).unwrap();

        // The first clause covers vertex 1: its three positive color literals.
        let first = formula.clauses().next().unwrap();
        assert_eq!(*first, vec![1, 2, 3]);

        // Every coverage clause is all-positive, every other clause a binary negative pair.
        for (index, clause) in formula.clauses().enumerate() {
            if index < 3 {
                assert!(clause.literals().all(|literal| *literal > 0));
            } else {
                assert_eq!(clause.size(), 2);
                assert!(clause.literals().all(|literal| *literal < 0));
            }
        }
    }

    #[test]
    fn encoding_is_unconditional() {
        // Too few colors for a triangle, still encoded in full.
        let formula = encode(&triangle(), 1).unwrap();
        assert_eq!(formula.clause_count(), 6);
        assert_eq!(formula.atom_count(), 3);
    }

    #[test]
    fn zero_colors_rejected() {
        assert_eq!(
            encode(&triangle(), 0),
            Err(ErrorKind::from(err::EncodeError::NoColors))
        );
    }

    #[test]
    fn atoms_exhausted() {
        // 2^20 vertices at 2^11 colors would need 2^31 atoms, one over the limit.
        let vast = Graph::new(1 << 20);
        assert_eq!(
            encode(&vast, 1 << 11),
            Err(ErrorKind::from(err::AllocationError::AtomsExhausted))
        );
    }
}
