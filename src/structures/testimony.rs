use super::Actor;

/// A statement, together with the actor who made it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimony {
    pub speaker: Actor,
    pub statement: String,
}

impl Testimony {
    pub fn new(speaker: Actor, statement: impl Into<String>) -> Self {
        Testimony {
            speaker,
            statement: statement.into(),
        }
    }
}
