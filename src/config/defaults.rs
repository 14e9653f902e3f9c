//! Default values of a [Config](crate::config::Config).

/// The claim naming the truth-telling role.
pub const TRUTH_TELLER_ROLE: &str = "knight";

/// The claim naming the lying role.
pub const LIAR_ROLE: &str = "knave";

pub const KNIGHT_LABEL: &str = "Knight";
pub const KNAVE_LABEL: &str = "Knave";

/// The claim of A, if none is given.
pub const DEFAULT_CLAIM_A: &str = TRUTH_TELLER_ROLE;

/// The claim of B, if none is given.
pub const DEFAULT_CLAIM_B: &str = LIAR_ROLE;
