/*!
Determines the satisfiability of a formula by exhaustive backtracking search.

# Overview

The search is depth-first over assignments, with no propagation and no learning:

1. **Satisfied check** --- if every clause has some satisfied literal, succeed.
2. **Conflict check** --- if some clause has every literal falsified, fail this branch.
3. **Branch selection** --- take the lowest-indexed unvalued atom. The order is fixed and
   deterministic, no heuristic.
4. **True branch** --- set the atom true and recurse into a fresh child node. On success the
   child is attached, the branch value recorded, and the assignment left intact.
5. **False branch** --- only after the true branch fails, with the refuted subtree dropped and
   the atom cleared first.
6. **Backtrack** --- both branches failed: drop the false subtree, clear the atom, fail.

Without learning, identical conflicts are rediscovered along independent branches.
This is an accepted cost of the exhaustive design, not a defect.

The recursion is as deep as the number of valued atoms on the current path, so stack use is
bounded by the atom count.
The [budgets](crate::config::Config), checked at each branch point, are the guard for callers
which cannot afford an unbounded search: exceeding one unwinds like failure --- every atom set
on the path cleared, every partial subtree dropped --- but yields
[Report::Unknown] rather than a verdict.

# Example

```rust
# use chroma_sat::config::Config;
# use chroma_sat::context::Context;
# use chroma_sat::reports::Report;
# use chroma_sat::structures::assignment::Assignment;
# use chroma_sat::structures::formula::Formula;
# use chroma_sat::structures::tree::DecisionNode;
let mut ctx = Context::from_config(Config::default());

let mut formula = Formula::new(2);
for clause in [vec![1, 2], vec![-1, 2], vec![1, -2], vec![-1, -2]] {
    formula.add_clause(clause).unwrap();
}

let mut assignment = Assignment::new(formula.atom_count()).unwrap();
let mut root = DecisionNode::new();

assert_eq!(ctx.solve(&formula, &mut assignment, &mut root), Report::Unsatisfiable);

// Failure restores the assignment and prunes the tree completely.
assert_eq!(assignment.valued_count(), 0);
assert!(root.is_leaf());
```
*/

use std::time::Instant;

use crate::{
    context::Context,
    misc::log::targets::{self},
    reports::Report,
    structures::{assignment::Assignment, formula::Formula, tree::DecisionNode},
};

/// The verdict of a search branch.
enum Verdict {
    /// The branch extends to a satisfying assignment.
    Satisfiable,

    /// Every extension of the branch falsifies some clause.
    Unsatisfiable,

    /// A budget was exhausted somewhere below the branch.
    Interrupted,
}

/// Methods to determine the satisfiability of a formula.
impl Context {
    /// Searches for an assignment extending `assignment` which satisfies `formula`, recording
    /// the exploration in the tree rooted at `node`.
    ///
    /// Intended to be called with a fresh all-unvalued assignment and a fresh empty node,
    /// though any partial assignment works --- the search only extends it.
    ///
    /// - On [Report::Satisfiable], `assignment` holds a satisfying assignment and the
    ///   accepted path survives in the tree.
    /// - On [Report::Unsatisfiable], every atom the search touched is cleared and the tree is
    ///   fully pruned.
    /// - On [Report::Unknown], a [budget](crate::config::Config) ran out: the assignment is
    ///   restored as for failure, though nothing is known about the formula.
    pub fn solve(
        &mut self,
        formula: &Formula,
        assignment: &mut Assignment,
        node: &mut DecisionNode,
    ) -> Report {
        self.counters.total_solves += 1;
        let start = Instant::now();
        let deadline = self.config.time_limit.map(|limit| start + limit);

        let verdict = self.search(formula, assignment, node, deadline);

        self.counters.time += start.elapsed();

        let report = match verdict {
            Verdict::Satisfiable => Report::Satisfiable,
            Verdict::Unsatisfiable => Report::Unsatisfiable,
            Verdict::Interrupted => Report::Unknown,
        };

        log::info!(target: targets::SEARCH,
            "Solve {}: {report} with {} decisions / {} conflicts so far",
            self.counters.total_solves,
            self.counters.total_decisions,
            self.counters.total_conflicts
        );

        report
    }

    /// One branch of the search, at the decision level of `node`.
    fn search(
        &mut self,
        formula: &Formula,
        assignment: &mut Assignment,
        node: &mut DecisionNode,
        deadline: Option<Instant>,
    ) -> Verdict {
        if formula.satisfied_on(assignment) {
            return Verdict::Satisfiable;
        }

        if formula.unsatisfiable_on(assignment) {
            self.counters.total_conflicts += 1;
            log::trace!(target: targets::SEARCH,
                "Conflict after {} decisions", self.counters.total_decisions);
            return Verdict::Unsatisfiable;
        }

        let Some(atom) = assignment.first_unvalued() else {
            // Unreachable: on a total assignment the terminal checks are exhaustive.
            return Verdict::Unsatisfiable;
        };

        if let Some(limit) = self.config.decision_limit {
            if self.counters.total_decisions >= limit {
                log::warn!(target: targets::SEARCH, "Decision limit {limit} exhausted");
                return Verdict::Interrupted;
            }
        }
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                log::warn!(target: targets::SEARCH, "Time limit exhausted");
                return Verdict::Interrupted;
            }
        }

        node.decide(atom);

        self.counters.total_decisions += 1;
        assignment.set(atom, true);
        let mut true_child = DecisionNode::new();
        match self.search(formula, assignment, &mut true_child, deadline) {
            Verdict::Satisfiable => {
                node.record(true, true_child);
                return Verdict::Satisfiable;
            }
            Verdict::Interrupted => {
                assignment.clear(atom);
                return Verdict::Interrupted;
            }
            // The refuted subtree is released before the other branch is tried.
            Verdict::Unsatisfiable => drop(true_child),
        }
        assignment.clear(atom);

        self.counters.total_decisions += 1;
        assignment.set(atom, false);
        let mut false_child = DecisionNode::new();
        match self.search(formula, assignment, &mut false_child, deadline) {
            Verdict::Satisfiable => {
                node.record(false, false_child);
                return Verdict::Satisfiable;
            }
            Verdict::Interrupted => {
                assignment.clear(atom);
                return Verdict::Interrupted;
            }
            Verdict::Unsatisfiable => drop(false_child),
        }
        assignment.clear(atom);

        Verdict::Unsatisfiable
    }
}
