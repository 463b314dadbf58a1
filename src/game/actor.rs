/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Actor {
    Player,
    Dealer,
}

impl Actor {
    pub const fn all() -> [Self; 2] {
        [Self::Player, Self::Dealer]
    }
    /// The other seat.
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Player => Self::Dealer,
            Self::Dealer => Self::Player,
        }
    }
}

impl From<Actor> for usize {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Player => 0,
            Actor::Dealer => 1,
        }
    }
}

/// bit isomorphism for turn schedules: 0 = Player, 1 = Dealer
impl From<bool> for Actor {
    fn from(bit: bool) -> Self {
        match bit {
            false => Self::Player,
            true => Self::Dealer,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Player => "player",
                Self::Dealer => "dealer",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_involution() {
        for actor in Actor::all() {
            assert!(actor.opponent() != actor);
            assert!(actor.opponent().opponent() == actor);
        }
    }

    #[test]
    fn distinct_indices() {
        assert!(usize::from(Actor::Player) == 0);
        assert!(usize::from(Actor::Dealer) == 1);
    }

    #[test]
    fn bit_isomorphism() {
        assert!(Actor::from(false) == Actor::Player);
        assert!(Actor::from(true) == Actor::Dealer);
    }
}
