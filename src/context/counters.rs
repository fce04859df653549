use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of all decisions made.
    pub total_decisions: u64,

    /// A count of every conflict seen.
    pub total_conflicts: u64,

    /// A count of solves started.
    pub total_solves: u64,

    /// The time taken across all solves.
    pub time: Duration,
}
