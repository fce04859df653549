/*!
The context --- within which solves take place.

A context pairs a [configuration](crate::config) with [counters](Counters), and hosts the
procedures with cross-cutting state: the [backtracking search](crate::procedures::solve) and
the [chromatic driver](crate::procedures::chromatic).

The formula, assignment, and decision tree of a solve are *not* part of the context --- each is
exclusively owned by the caller and passed in per solve, matching the driver's discipline of
fresh state for every *k*.

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
formula.add_clause(vec![1, 2]).unwrap();
formula.add_clause(vec![-1]).unwrap();

let mut assignment = Assignment::new(formula.atom_count()).unwrap();
let mut root = DecisionNode::new();

assert_eq!(ctx.solve(&formula, &mut assignment, &mut root), Report::Satisfiable);
assert_eq!(assignment.value_of(1), Some(false));
assert_eq!(assignment.value_of(2), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use crate::config::Config;

/// The context: a configuration and counters.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counts for various things which count.
    pub counters: Counters,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
        }
    }
}
