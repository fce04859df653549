use chroma_sat::{
    config::Config, context::Context, reports::Report, structures::assignment::Assignment,
    structures::formula::Formula, structures::tree::DecisionNode,
};

mod basic {
    use super::*;

    fn fresh_parts(formula: &Formula) -> (Assignment, DecisionNode) {
        let assignment = Assignment::new(formula.atom_count()).unwrap();
        (assignment, DecisionNode::new())
    }

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(1);
        assert!(formula.add_clause(vec![1]).is_ok());

        let (mut assignment, mut root) = fresh_parts(&formula);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Satisfiable
        );
        assert_eq!(assignment.value_of(1), Some(true));
    }

    #[test]
    fn negative_unit() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(1);
        assert!(formula.add_clause(vec![-1]).is_ok());

        let (mut assignment, mut root) = fresh_parts(&formula);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Satisfiable
        );
        assert_eq!(assignment.value_of(1), Some(false));

        // The true branch was tried first, failed, and was released.
        assert_eq!(root.atom(), 1);
        assert_eq!(root.outcome(), Some(false));
        assert!(root.child(true).is_none());
        assert_eq!(root.accepted_path(), vec![-1]);
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(2);
        for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
            assert!(formula.add_clause(clause).is_ok());
        }

        let (mut assignment, mut root) = fresh_parts(&formula);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Unsatisfiable
        );

        // Failure restores the assignment and prunes the tree completely.
        assert_eq!(assignment.valued_count(), 0);
        assert!(root.is_leaf());
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());

        let formula = Formula::new(0);
        let (mut assignment, mut root) = fresh_parts(&formula);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Satisfiable
        );
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![1, 2]).is_ok());
        assert!(formula.add_clause(vec![]).is_ok());

        let (mut assignment, mut root) = fresh_parts(&formula);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Unsatisfiable
        );
        assert_eq!(assignment.valued_count(), 0);
    }

    #[test]
    fn partial_assignment_extended() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![1, 2]).is_ok());

        let (mut assignment, mut root) = fresh_parts(&formula);
        assignment.set(1, false);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Satisfiable
        );

        // The given value is respected, and the search only extends.
        assert_eq!(assignment.value_of(1), Some(false));
        assert_eq!(assignment.value_of(2), Some(true));
    }

    #[test]
    fn partial_assignment_restored_on_failure() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![1]).is_ok());
        assert!(formula.add_clause(vec![-1]).is_ok());

        let (mut assignment, mut root) = fresh_parts(&formula);
        assignment.set(2, true);

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Unsatisfiable
        );

        // Only atoms the search touched are cleared.
        assert_eq!(assignment.value_of(1), None);
        assert_eq!(assignment.value_of(2), Some(true));
    }
}

mod tree {
    use super::*;

    #[test]
    fn accepted_chain_survives() {
        let mut ctx = Context::from_config(Config::default());

        // Atom 1 must be false, atom 2 must be true.
        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![-1]).is_ok());
        assert!(formula.add_clause(vec![2]).is_ok());

        let mut assignment = Assignment::new(formula.atom_count()).unwrap();
        let mut root = DecisionNode::new();

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Satisfiable
        );

        assert_eq!(root.accepted_path(), vec![-1, 2]);

        // Exactly one chain from the root survives.
        let mut node = &root;
        while let Some(value) = node.outcome() {
            assert!(node.child(!value).is_none());
            match node.child(value) {
                Some(child) => node = child,
                None => break,
            }
        }
        assert!(node.is_leaf());
    }

    #[test]
    fn depth_matches_decisions_on_path() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(3);
        for atom in 1..=3 {
            assert!(formula.add_clause(vec![atom]).is_ok());
        }

        let mut assignment = Assignment::new(formula.atom_count()).unwrap();
        let mut root = DecisionNode::new();

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Satisfiable
        );

        // Three decisions, so three edges from the root to the satisfied leaf.
        assert_eq!(root.depth(), 3);
        assert_eq!(root.accepted_path(), vec![1, 2, 3]);
    }
}

mod budgets {
    use super::*;

    #[test]
    fn decision_limit_interrupts() {
        let config = Config {
            decision_limit: Some(0),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        let mut formula = Formula::new(2);
        assert!(formula.add_clause(vec![1, 2]).is_ok());

        let mut assignment = Assignment::new(formula.atom_count()).unwrap();
        let mut root = DecisionNode::new();

        assert_eq!(
            ctx.solve(&formula, &mut assignment, &mut root),
            Report::Unknown
        );

        // An interrupted search unwinds like failure.
        assert_eq!(assignment.valued_count(), 0);
        assert!(root.is_leaf());
    }

    #[test]
    fn counters_accumulate() {
        let mut ctx = Context::from_config(Config::default());

        let mut formula = Formula::new(2);
        for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
            assert!(formula.add_clause(clause).is_ok());
        }

        let mut assignment = Assignment::new(formula.atom_count()).unwrap();
        let mut root = DecisionNode::new();

        ctx.solve(&formula, &mut assignment, &mut root);

        assert_eq!(ctx.counters.total_solves, 1);
        assert!(ctx.counters.total_decisions > 0);
        assert!(ctx.counters.total_conflicts > 0);
    }
}
