/*!
Configuration of a context.

The core search is synchronous and recursive, and an unguarded search over a large formula may
take arbitrarily long.
The configuration carries two optional budgets, checked at each decision point:

- [decision_limit](Config::decision_limit), a bound on the total number of decisions made, and
- [time_limit](Config::time_limit), a wall-clock bound on a single solve.

Budgets belong to the context, so the decision budget spans every solve the context makes ---
in particular, all the *k* iterations of one
[chromatic search](crate::context::Context::find_chromatic_coloring).
Exceeding a budget unwinds the search like failure (assignment restored, tree pruned) but
reports [Unknown](crate::reports::Report::Unknown) rather than unsatisfiability.
*/

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// A bound on the total number of decisions made by the context, if given.
    pub decision_limit: Option<u64>,

    /// A wall-clock bound on a single solve, if given.
    pub time_limit: Option<Duration>,
}
