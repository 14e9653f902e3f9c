/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to help see how a statement was read and why a row was, or was not, consistent.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [reading and evaluating](crate::expression) a statement.
    pub const EXPRESSION: &str = "expression";

    /// Logs related to the [rewriting](crate::expression::rewrite) of implications.
    pub const REWRITE: &str = "rewrite";

    /// Logs related to [truth tables](crate::procedures::truth_table).
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to [puzzles](crate::procedures::solve_puzzle) of many statements.
    pub const PUZZLE: &str = "puzzle";
}
