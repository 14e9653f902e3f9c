/*!
The results of a procedure.

Results hold labels rather than [roles](super::Role), as labels are fixed by a [config](crate::config::Config) and results are intended for display.
Each result may be serialized, e.g. to JSON.
*/

use serde::Serialize;

/// One combination of truthful/untruthful actors, and what follows from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    /// The label of A on the combination.
    pub a_identity: String,

    /// The label of B on the combination.
    pub b_identity: String,

    /// The value of `p`.
    pub p_value: bool,

    /// The value of `q`.
    pub q_value: bool,

    /// The value of the statement, given the values of `p` and `q`.
    pub statement_value: bool,

    /// Whether the speaker is truthful on the combination.
    pub speaker_truth: bool,

    /// Whether the statement value matches the truthfulness of the speaker.
    pub consistent: bool,
}

/// The labels of a consistent combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub a_identity: String,
    pub b_identity: String,
}

impl From<&Row> for Solution {
    fn from(row: &Row) -> Self {
        Solution {
            a_identity: row.a_identity.clone(),
            b_identity: row.b_identity.clone(),
        }
    }
}

/// Every row, in the order of [Assignment::ALL](super::Assignment::ALL), and the solutions drawn from the consistent rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub rows: Vec<Row>,
    pub consistent_solutions: Vec<Solution>,
}

impl TruthTable {
    /// The rows and solutions of the table, as a pair.
    pub fn into_parts(self) -> (Vec<Row>, Vec<Solution>) {
        (self.rows, self.consistent_solutions)
    }
}

/// The report of a puzzle, with at most one solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PuzzleReport {
    pub consistent: bool,
    pub solution: Option<Solution>,
}

impl PuzzleReport {
    pub fn inconsistent() -> Self {
        PuzzleReport {
            consistent: false,
            solution: None,
        }
    }

    pub fn solved(solution: Solution) -> Self {
        PuzzleReport {
            consistent: true,
            solution: Some(solution),
        }
    }
}
