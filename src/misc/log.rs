/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [chromatic driver](crate::procedures::chromatic).
    pub const CHROMATIC: &str = "chromatic";

    /// Logs related to the [encoder](crate::procedures::encode).
    pub const ENCODE: &str = "encode";

    /// Logs related to the [io](crate::io) readers.
    pub const PARSER: &str = "parser";

    /// Logs related to the [backtracking search](crate::procedures::solve).
    pub const SEARCH: &str = "search";
}
