/// Where the shooter points the barrel.
///
/// Closed over exactly two targets, so a strategy cannot name a third.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Action {
    /// Aim at yourself. A blank may let you keep the turn.
    Myself,
    /// Aim at the other actor.
    Opponent,
}

impl Action {
    pub const fn all() -> [Self; 2] {
        [Self::Myself, Self::Opponent]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Myself => "shoot self",
                Self::Opponent => "shoot opponent",
            }
        )
    }
}
