//! Key structures, such as actors, assignments, and the rows of a truth table.
//!
//! # Actors and roles
//!
//! There are two [actors](Actor), A and B.
//! Each actor has one of two [roles](Role): a knight always says true things and a knave always says false things.
//!
//! # Propositions
//!
//! A statement is made in a language of two propositions, `p` and `q`.
//! `p` is about A and `q` is about B, and which role each proposition asserts is fixed by some [claim](Claims).
//! For example, with a claim of 'knave' for A, `p` is read as "A is a knave".
//!
//! # Assignments
//!
//! An [assignment](Assignment) fixes whether each actor is truthful.
//! With two actors there are exactly four assignments, given in a fixed order by [Assignment::ALL].

mod actor;
pub use actor::Actor;

mod assignment;
pub use assignment::Assignment;

mod claims;
pub use claims::{Claims, Role};

mod results;
pub use results::{PuzzleReport, Row, Solution, TruthTable};

mod testimony;
pub use testimony::Testimony;
