/*!
Configuration of a procedure.

A config fixes the strings through which the library meets the outside world:
- The role strings, against which [claims](crate::structures::Claims) are compared.
- The labels given to actors in the rows of a [truth table](crate::structures::TruthTable).
- The claims used when none are given.

Comparison of claims with role strings is exact, and so "Knight" is not a claim of the truth-telling role on the default config.
*/

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The claim which asserts an actor is a knight.
    pub truth_teller_role: String,

    /// The claim which asserts an actor is a knave.
    pub liar_role: String,

    /// The label of a truthful actor.
    pub knight_label: String,

    /// The label of an untruthful actor.
    pub knave_label: String,

    /// The claim of A when a request has none.
    pub default_claim_a: String,

    /// The claim of B when a request has none.
    pub default_claim_b: String,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            truth_teller_role: TRUTH_TELLER_ROLE.to_string(),
            liar_role: LIAR_ROLE.to_string(),
            knight_label: KNIGHT_LABEL.to_string(),
            knave_label: KNAVE_LABEL.to_string(),
            default_claim_a: DEFAULT_CLAIM_A.to_string(),
            default_claim_b: DEFAULT_CLAIM_B.to_string(),
        }
    }
}
