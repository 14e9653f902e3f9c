use crate::{
    config::Config,
    expression::evaluate,
    misc::log::targets::{self},
    structures::{Assignment, PuzzleReport, Role, Solution, Testimony},
};

/// The first assignment, in the order of [Assignment::ALL], on which every statement in `testimony` is consistent with its speaker.
///
/// Here, `p` is read as "A is truthful" and `q` as "B is truthful", and so statements are evaluated on the assignment directly.
///
/// An assignment is abandoned as soon as some statement is inconsistent, and the report holds at most one solution.
/// Empty testimony is consistent with the first assignment.
pub fn puzzle_report(config: &Config, testimony: &[Testimony]) -> PuzzleReport {
    'assignment_loop: for assignment in Assignment::ALL {
        for Testimony { speaker, statement } in testimony {
            let statement_value = evaluate(statement, assignment);

            if assignment.value_of(*speaker) != statement_value {
                log::trace!(target: targets::PUZZLE, "{assignment}: {speaker} is inconsistent saying '{statement}'");
                continue 'assignment_loop;
            }
        }

        log::debug!(target: targets::PUZZLE, "{assignment}: consistent");
        return PuzzleReport::solved(Solution {
            a_identity: Role::of(assignment.a).label(config).to_string(),
            b_identity: Role::of(assignment.b).label(config).to_string(),
        });
    }

    log::debug!(target: targets::PUZZLE, "No consistent assignment");
    PuzzleReport::inconsistent()
}
