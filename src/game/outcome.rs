use crate::*;

/// How a game ended.
///
/// `Draw` only happens against a fixed magazine that runs dry with both
/// actors still standing; reloading games always produce a winner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    PlayerWin,
    DealerWin,
    Draw,
}

impl Outcome {
    pub const fn all() -> [Self; 3] {
        [Self::PlayerWin, Self::DealerWin, Self::Draw]
    }
    pub fn winner(&self) -> Option<Actor> {
        match self {
            Self::PlayerWin => Some(Actor::Player),
            Self::DealerWin => Some(Actor::Dealer),
            Self::Draw => None,
        }
    }
}

impl From<Actor> for Outcome {
    fn from(winner: Actor) -> Self {
        match winner {
            Actor::Player => Self::PlayerWin,
            Actor::Dealer => Self::DealerWin,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerWin => write!(f, "player wins"),
            Self::DealerWin => write!(f, "dealer wins"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
