use crate::*;
use rand::rngs::SmallRng;

/// Where the charges of a game come from.
///
/// - `Reload`: start empty and draw a freshly shuffled, clamped magazine
///   whenever the current one runs dry. Games always end with a winner.
/// - `Fixed`: a single predetermined magazine. Running dry with both actors
///   alive ends the game in a draw. Used by exhaustive enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Reload { loadout: Loadout, ceiling: usize },
    Fixed(Magazine),
}

impl Source {
    pub fn reload(loadout: Loadout, ceiling: usize) -> Self {
        Self::Reload { loadout, ceiling }
    }
    /// Magazine in the chamber when the game starts.
    pub fn initial(&self) -> Magazine {
        match self {
            Self::Reload { .. } => Magazine::default(),
            Self::Fixed(magazine) => magazine.clone(),
        }
    }
    /// Replacement for an exhausted magazine, if this source allows one.
    pub fn refill(&self, rng: &mut SmallRng) -> Option<Magazine> {
        match self {
            Self::Reload { loadout, ceiling } => Some(loadout.clamp(*ceiling).load(rng)),
            Self::Fixed(_) => None,
        }
    }
}

impl From<Magazine> for Source {
    fn from(magazine: Magazine) -> Self {
        Self::Fixed(magazine)
    }
}

/// A predetermined shooter for every draw position.
///
/// Overrides the retention rule: position `i` is fired by `schedule[i]`
/// regardless of who fired before.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule(Vec<Actor>);

impl Schedule {
    pub fn get(&self, turn: usize) -> Option<Actor> {
        self.0.get(turn).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Actor>> for Schedule {
    fn from(actors: Vec<Actor>) -> Self {
        Self(actors)
    }
}

/// Every assignment of {Player, Dealer} to `n` draw positions.
///
/// Bit `i` of a counter selects the shooter at position `i`, so the
/// iterator yields `2^n` schedules starting with all-player.
#[derive(Debug, Clone)]
pub struct Schedules {
    n: usize,
    mask: u64,
    end: u64,
}

impl Schedules {
    /// Longest schedule that can be enumerated.
    pub const MAX_LEN: usize = 63;

    pub fn new(n: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(
            n <= Self::MAX_LEN,
            "cannot enumerate turn schedules over {} positions (max {})",
            n,
            Self::MAX_LEN
        );
        Ok(Self {
            n,
            mask: 0,
            end: 1 << n,
        })
    }
    /// Number of schedules over `n` positions, saturating.
    pub fn count(n: usize) -> u128 {
        1u128.checked_shl(n as u32).unwrap_or(u128::MAX)
    }
}

impl Iterator for Schedules {
    type Item = Schedule;
    fn next(&mut self) -> Option<Self::Item> {
        if self.mask >= self.end {
            return None;
        }
        let mask = self.mask;
        self.mask += 1;
        Some(Schedule(
            (0..self.n)
                .map(|i| Actor::from((mask >> i) & 1 == 1))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn schedules_complete() {
        let schedules = Schedules::new(3).unwrap().collect::<Vec<_>>();
        assert!(schedules.len() == 8);
        assert!(schedules.iter().collect::<HashSet<_>>().len() == 8);
        assert!(schedules[0] == Schedule::from(vec![Actor::Player; 3]));
        assert!(schedules[7] == Schedule::from(vec![Actor::Dealer; 3]));
    }

    #[test]
    fn schedules_empty() {
        assert!(Schedules::new(0).unwrap().count() == 1);
        assert!(Schedules::count(0) == 1);
    }

    #[test]
    fn schedules_too_long() {
        assert!(Schedules::new(64).is_err());
        assert!(Schedules::count(200) == u128::MAX);
    }

    #[test]
    fn fixed_never_refills() {
        use rand::SeedableRng;
        let ref mut rng = SmallRng::seed_from_u64(0);
        let source = Source::from(Magazine::try_from("LB").unwrap());
        assert!(source.refill(rng).is_none());
        assert!(source.initial().len() == 2);
        let source = Source::reload(Loadout::new(2, 2), MAX_CHARGES);
        assert!(source.initial().is_empty());
        assert!(source.refill(rng).unwrap().loadout() == Loadout::new(2, 2));
    }
}
