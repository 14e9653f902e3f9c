use crate::{
    config::Config,
    expression::evaluate,
    misc::log::targets::{self},
    structures::{Actor, Assignment, Claims, Role, Row, Solution, TruthTable},
};

/// The truth table of `statement`, said by `speaker`, where `claims` fix what `p` and `q` assert.
///
/// For each [assignment](Assignment::ALL), in order:
/// - `p` is true when A is truthful and claimed a knight, or untruthful and claimed a knave, and likewise `q` for B.
/// - The statement is evaluated on the values of `p` and `q`, and is false if it cannot be read.
/// - The row is consistent when a truthful speaker makes a true statement, or an untruthful speaker a false statement.
///
/// The table always has four rows, and each consistent row contributes a solution.
pub fn truth_table(config: &Config, statement: &str, speaker: Actor, claims: &Claims) -> TruthTable {
    let mut rows = Vec::with_capacity(Assignment::ALL.len());
    let mut consistent_solutions = Vec::default();

    for assignment in Assignment::ALL {
        let propositions = Assignment::new(
            claims.proposition_value(config, Actor::A, assignment.a),
            claims.proposition_value(config, Actor::B, assignment.b),
        );

        let statement_value = evaluate(statement, propositions);
        let speaker_truth = assignment.value_of(speaker);

        let row = Row {
            a_identity: Role::of(assignment.a).label(config).to_string(),
            b_identity: Role::of(assignment.b).label(config).to_string(),
            p_value: propositions.a,
            q_value: propositions.b,
            statement_value,
            speaker_truth,
            consistent: speaker_truth == statement_value,
        };

        log::trace!(target: targets::TRUTH_TABLE, "{assignment}: {row:?}");

        if row.consistent {
            consistent_solutions.push(Solution::from(&row));
        }
        rows.push(row);
    }

    log::debug!(target: targets::TRUTH_TABLE, "'{statement}' said by {speaker}: {} consistent", consistent_solutions.len());

    TruthTable {
        rows,
        consistent_solutions,
    }
}
