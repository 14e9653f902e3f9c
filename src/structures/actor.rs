use crate::types::err::{self};

/// One of the two inhabitants met.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Actor {
    /// The actor of whom `p` is a proposition.
    A,

    /// The actor of whom `q` is a proposition.
    B,
}

impl Actor {
    /// Both actors, A first.
    pub const BOTH: [Actor; 2] = [Actor::A, Actor::B];

    /// The variable symbol of the proposition about the actor.
    pub fn variable(&self) -> char {
        match self {
            Self::A => 'p',
            Self::B => 'q',
        }
    }
}

impl std::str::FromStr for Actor {
    type Err = err::ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            other => Err(err::ArgumentError::UnknownActor(other.to_string())),
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}
