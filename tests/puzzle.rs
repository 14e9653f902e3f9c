use knights_knaves::{
    config::Config,
    procedures::{puzzle_report, solve_puzzle, truth_table},
    structures::{Actor, Claims, PuzzleReport, Solution, Testimony},
};

fn solved(a: &str, b: &str) -> PuzzleReport {
    PuzzleReport::solved(Solution {
        a_identity: a.to_string(),
        b_identity: b.to_string(),
    })
}

mod basic {
    use super::*;

    #[test]
    fn first_match() {
        // Both TT and TF are consistent, and TT is found first.
        let testimony = vec![Testimony::new(Actor::A, "p")];
        assert_eq!(solve_puzzle(&testimony), solved("Knight", "Knight"));
    }

    #[test]
    fn contradiction() {
        let testimony = vec![Testimony::new(Actor::A, "¬p")];

        let report = solve_puzzle(&testimony);
        assert!(!report.consistent);
        assert_eq!(report.solution, None);
        assert_eq!(report, PuzzleReport::inconsistent());
    }

    #[test]
    fn contradiction_across_speakers() {
        // A says B is a knight, and B says A is a knave.
        // Either statement alone is consistent with some assignment.
        let testimony = vec![
            Testimony::new(Actor::A, "q"),
            Testimony::new(Actor::B, "¬p"),
        ];
        assert_eq!(solve_puzzle(&testimony), PuzzleReport::inconsistent());
    }

    #[test]
    fn we_are_both_knaves() {
        let testimony = vec![Testimony::new(Actor::A, "¬p ∧ ¬q")];
        assert_eq!(solve_puzzle(&testimony), solved("Knave", "Knight"));
    }

    #[test]
    fn two_speakers() {
        let testimony = vec![
            Testimony::new(Actor::A, "p → ¬q"),
            Testimony::new(Actor::B, "¬p"),
        ];
        assert_eq!(solve_puzzle(&testimony), solved("Knight", "Knave"));
    }

    #[test]
    fn same_type() {
        // B says "we are of the same type", and A says "B is a knave".
        let testimony = vec![
            Testimony::new(Actor::B, "p ↔ q"),
            Testimony::new(Actor::A, "¬q"),
        ];
        assert_eq!(solve_puzzle(&testimony), solved("Knight", "Knave"));
    }

    #[test]
    fn unreadable_statement() {
        // An unreadable statement is false, and so must be said by a knave.
        let testimony = vec![Testimony::new(Actor::A, "p ∧ (q")];
        assert_eq!(solve_puzzle(&testimony), solved("Knave", "Knight"));
    }

    #[test]
    fn no_testimony() {
        assert_eq!(solve_puzzle(&[]), solved("Knight", "Knight"));
    }
}

mod against_truth_table {
    use super::*;

    #[test]
    fn one_solution_of_many() {
        let config = Config::default();

        // A tautology from A: any assignment with A a knight.
        let statement = "q ∨ ¬q";

        let table = truth_table(&config, statement, Actor::A, &Claims::new("knight", "knight"));
        assert_eq!(table.consistent_solutions.len(), 2);

        let report = puzzle_report(&config, &[Testimony::new(Actor::A, statement)]);
        assert_eq!(report.solution.as_ref(), table.consistent_solutions.first());
    }

    #[test]
    fn labels_from_config() {
        let config = Config {
            knight_label: "K".to_string(),
            knave_label: "N".to_string(),
            ..Config::default()
        };

        let report = puzzle_report(&config, &[Testimony::new(Actor::B, "¬q ∨ ¬p")]);
        assert_eq!(report, solved("N", "K"));
    }
}
