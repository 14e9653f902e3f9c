use super::Actor;

/// Whether each actor is truthful.
///
/// The library only ever considers the four assignments in [Assignment::ALL], and in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Whether A is truthful.
    pub a: bool,

    /// Whether B is truthful.
    pub b: bool,
}

impl Assignment {
    /// Every assignment, in the order TT, TF, FT, FF (for A then B).
    pub const ALL: [Assignment; 4] = [
        Assignment::new(true, true),
        Assignment::new(true, false),
        Assignment::new(false, true),
        Assignment::new(false, false),
    ];

    pub const fn new(a: bool, b: bool) -> Self {
        Assignment { a, b }
    }

    /// The value of the given actor on the assignment.
    pub fn value_of(&self, actor: Actor) -> bool {
        match actor {
            Actor::A => self.a,
            Actor::B => self.b,
        }
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = |value: bool| if value { 'T' } else { 'F' };
        write!(f, "{}{}", symbol(self.a), symbol(self.b))
    }
}
