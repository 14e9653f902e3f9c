use knights_knaves::{
    expression,
    structures::{Actor, PuzzleReport, TruthTable},
};

use crate::read::TableRequest;

fn symbol(value: bool) -> &'static str {
    match value {
        true => "T",
        false => "F",
    }
}

/// Writes `value` as JSON, or terminates the process if this fails.
pub(super) fn write_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            println!("c Failed to write JSON: {e}");
            std::process::exit(2);
        }
    }
}

pub(super) fn write_table(request: &TableRequest, table: &TruthTable) {
    println!(
        "c {} says '{}', where p is 'A is {}' and q is 'B is {}'",
        request.speaker,
        request.statement,
        request.claims.claim_of(Actor::A),
        request.claims.claim_of(Actor::B),
    );

    if let Err(e) = expression::check(&request.statement) {
        println!("c The statement could not be read ({e}) and is false on every row");
    }

    println!(
        "{:<8} {:<8} {:<3} {:<3} {:<9} {:<7} {}",
        "A", "B", "p", "q", "statement", "speaker", "consistent"
    );

    for row in &table.rows {
        println!(
            "{:<8} {:<8} {:<3} {:<3} {:<9} {:<7} {}",
            row.a_identity,
            row.b_identity,
            symbol(row.p_value),
            symbol(row.q_value),
            symbol(row.statement_value),
            symbol(row.speaker_truth),
            symbol(row.consistent),
        );
    }

    println!("s {} consistent", table.consistent_solutions.len());

    for solution in &table.consistent_solutions {
        println!("v A {} B {}", solution.a_identity, solution.b_identity);
    }
}

pub(super) fn write_puzzle(report: &PuzzleReport) {
    match &report.solution {
        Some(solution) => {
            println!("s Consistent");
            println!("v A {} B {}", solution.a_identity, solution.b_identity);
        }
        None => println!("s No consistent assignment"),
    }
}
