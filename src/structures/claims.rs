use crate::config::Config;

use super::Actor;

/// The role of an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Role {
    /// A truth-teller.
    Knight,

    /// A liar.
    Knave,
}

impl Role {
    /// The role of an actor who is, or is not, truthful.
    pub fn of(truthful: bool) -> Self {
        match truthful {
            true => Self::Knight,
            false => Self::Knave,
        }
    }

    /// The display label of the role, as given by the config.
    pub fn label<'c>(&self, config: &'c Config) -> &'c str {
        match self {
            Self::Knight => &config.knight_label,
            Self::Knave => &config.knave_label,
        }
    }
}

/// The identity each proposition is claimed to assert.
///
/// Claims are free text and compared by exact equality with the role strings of some [Config].
/// A claim which names neither role results in a proposition which is false on every assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    a: String,
    b: String,
}

impl Claims {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Claims {
            a: a.into(),
            b: b.into(),
        }
    }

    /// The claims used when a request does not specify any, taken from the config.
    pub fn from_config(config: &Config) -> Self {
        Claims::new(
            config.default_claim_a.clone(),
            config.default_claim_b.clone(),
        )
    }

    /// The claim made of the given actor.
    pub fn claim_of(&self, actor: Actor) -> &str {
        match actor {
            Actor::A => &self.a,
            Actor::B => &self.b,
        }
    }

    /// The value of the proposition about `actor`, where the actor is (or is not) truthful.
    ///
    /// True exactly when a truthful actor is claimed to be a truth-teller, or an untruthful actor is claimed to be a liar.
    pub fn proposition_value(&self, config: &Config, actor: Actor, truthful: bool) -> bool {
        let claim = self.claim_of(actor);
        (truthful && claim == config.truth_teller_role) || (!truthful && claim == config.liar_role)
    }
}
