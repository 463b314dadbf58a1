use crate::*;
use rand::Rng;
use rand::rngs::SmallRng;

/// Who shoots next after a shot.
///
/// Two house rules exist for the same table and neither is canonical, so
/// the choice is explicit configuration.
///
/// - `Retain`: a shooter who aims at themselves and survives a blank keeps
///   the turn; every other shot passes it.
/// - `Pass`: the turn passes after every shot.
///
/// Every built-in persona pairing defaults to `Retain`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Retention {
    #[default]
    Retain,
    Pass,
}

impl Retention {
    /// Whether the shooter keeps the turn after this shot.
    pub fn keeps(&self, action: Action, charge: Charge) -> bool {
        match self {
            Self::Retain => action == Action::Myself && charge.is_blank(),
            Self::Pass => false,
        }
    }
}

impl TryFrom<&str> for Retention {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "pass" => Ok(Self::Pass),
            _ => Err(anyhow::anyhow!("unknown retention rule {:?}, expected retain or pass", s)),
        }
    }
}

impl std::fmt::Display for Retention {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Retain => write!(f, "retain"),
            Self::Pass => write!(f, "pass"),
        }
    }
}

/// Who takes the first shot of a game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Opener {
    #[default]
    Player,
    Dealer,
    /// Fair coin flip per game.
    Coin,
}

impl Opener {
    pub fn pick(&self, rng: &mut SmallRng) -> Actor {
        match self {
            Self::Player => Actor::Player,
            Self::Dealer => Actor::Dealer,
            Self::Coin => Actor::from(rng.random_bool(0.5)),
        }
    }
}

impl TryFrom<&str> for Opener {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "player" => Ok(Self::Player),
            "dealer" => Ok(Self::Dealer),
            "coin" => Ok(Self::Coin),
            _ => Err(anyhow::anyhow!("unknown opener {:?}, expected player, dealer or coin", s)),
        }
    }
}

impl std::fmt::Display for Opener {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Dealer => write!(f, "dealer"),
            Self::Coin => write!(f, "coin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_only_on_self_blank() {
        assert!(Retention::Retain.keeps(Action::Myself, Charge::Blank));
        assert!(!Retention::Retain.keeps(Action::Myself, Charge::Live));
        assert!(!Retention::Retain.keeps(Action::Opponent, Charge::Blank));
        assert!(!Retention::Retain.keeps(Action::Opponent, Charge::Live));
    }

    #[test]
    fn pass_never_keeps() {
        for action in Action::all() {
            for charge in [Charge::Live, Charge::Blank] {
                assert!(!Retention::Pass.keeps(action, charge));
            }
        }
    }
}
