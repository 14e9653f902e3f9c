/*!
Procedures which enumerate the four ways the island could be.

Each procedure is a function of its inputs, and nothing is kept between calls.

- [truth_table] keeps every combination, marking those on which the speaker is consistent.
- [puzzle_report] takes many statements, and stops at the first combination on which every speaker is consistent.

The two differ in what is returned.
A truth table holds every consistent solution, while a puzzle report holds the first solution found, in the order of [Assignment::ALL](crate::structures::Assignment::ALL).

[solve] and [solve_puzzle] call these procedures with the default [config](Config).
*/

mod puzzle;
pub use puzzle::puzzle_report;

mod truth_table;
pub use truth_table::truth_table;

use crate::{
    config::Config,
    structures::{Actor, Claims, PuzzleReport, Row, Solution, Testimony},
};

/// The rows and consistent solutions of the truth table of `statement`, said by `speaker`, on the default config.
///
/// ```rust
/// # use knights_knaves::procedures::solve;
/// # use knights_knaves::structures::Actor;
/// // A says "B is a knave".
/// let (rows, solutions) = solve("q", Actor::A, "knight", "knave");
///
/// assert_eq!(rows.len(), 4);
/// assert_eq!(solutions.len(), 2);
/// assert!(solutions.iter().all(|solution| solution.a_identity != solution.b_identity));
/// ```
pub fn solve(
    statement: &str,
    speaker: Actor,
    identity_a: &str,
    identity_b: &str,
) -> (Vec<Row>, Vec<Solution>) {
    let config = Config::default();
    let claims = Claims::new(identity_a, identity_b);
    truth_table(&config, statement, speaker, &claims).into_parts()
}

/// The first solution to `testimony`, on the default config.
pub fn solve_puzzle(testimony: &[Testimony]) -> PuzzleReport {
    puzzle_report(&Config::default(), testimony)
}
