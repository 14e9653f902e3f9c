//! A library for determining which identities of two islanders are consistent with what they say.
//!
//! On the island every inhabitant is either a knight, who only ever says true things, or a knave, who only ever says false things.
//! Two inhabitants, A and B, are met, and one of them makes a statement of propositional logic.
//! The statement is built from two propositions, `p` and `q`, where `p` is read as "A is …" and `q` as "B is …", together with the connectives ¬, ∧, ∨, →, and ↔.
//!
//! As there are two inhabitants there are exactly four ways the island could be, and the library checks each in turn.
//!
//! # Orientation
//!
//! - [expression] evaluates a statement on a given [assignment](structures::Assignment) of values to `p` and `q`.
//!   Statements are user supplied text, and so are read by a small recursive descent parser over a fixed set of tokens.
//!   A malformed statement is never an error to the caller of [evaluate](expression::evaluate): it is simply false.
//! - [procedures] enumerate the four combinations of truthful/untruthful inhabitants.
//!   + [truth_table](procedures::truth_table) keeps every row, and every row consistent with the speaker.
//!   + [solve_puzzle](procedures::solve_puzzle) takes a collection of statements and stops at the first combination on which all are consistent.
//! - [config] holds the strings used to name roles and label rows.
//!
//! # Examples
//!
//! + A says "I am a knight and so is B".
//!
//! ```rust
//! # use knights_knaves::config::Config;
//! # use knights_knaves::procedures::truth_table;
//! # use knights_knaves::structures::{Actor, Claims};
//! let config = Config::default();
//! let claims = Claims::new("knight", "knight");
//!
//! let table = truth_table(&config, "p ∧ q", Actor::A, &claims);
//! assert_eq!(table.rows.len(), 4);
//!
//! // A knight cannot say this unless it is true, and a knave cannot say it when it is true.
//! // So, the only ruled out combination is a knight A alongside a knave B.
//! assert_eq!(table.consistent_solutions.len(), 3);
//! assert!(!table.consistent_solutions.iter().any(|s| s.a_identity == "Knight" && s.b_identity == "Knave"));
//! ```
//!
//! + A says "if I am a knight then B is a knave", and B says "A is a knave".
//!
//! ```rust
//! # use knights_knaves::procedures::solve_puzzle;
//! # use knights_knaves::structures::{Actor, Testimony};
//! let testimony = vec![
//!     Testimony::new(Actor::A, "p → ¬q"),
//!     Testimony::new(Actor::B, "¬p"),
//! ];
//!
//! let report = solve_puzzle(&testimony);
//! assert!(report.consistent);
//!
//! let solution = report.solution.expect("a solution");
//! assert_eq!(solution.a_identity, "Knight");
//! assert_eq!(solution.b_identity, "Knave");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No logger is provided by the library.
//! The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so, for example:
//! - Rewrites of implications can be inspected with `RUST_LOG=rewrite …`
//! - Each row of a truth table can be found with `RUST_LOG=truth_table=trace …`

pub mod config;
pub mod expression;
pub mod procedures;
pub mod structures;
pub mod types;

pub mod misc;
