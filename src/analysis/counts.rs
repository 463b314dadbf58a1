use crate::*;

/// Raw outcome counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Counts {
    pub player: usize,
    pub dealer: usize,
    pub draw: usize,
}

impl Counts {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player += 1,
            Outcome::DealerWin => self.dealer += 1,
            Outcome::Draw => self.draw += 1,
        }
    }
    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::PlayerWin => self.player,
            Outcome::DealerWin => self.dealer,
            Outcome::Draw => self.draw,
        }
    }
    pub fn total(&self) -> usize {
        self.player + self.dealer + self.draw
    }
    pub fn merge(self, other: Self) -> Self {
        Self {
            player: self.player + other.player,
            dealer: self.dealer + other.dealer,
            draw: self.draw + other.draw,
        }
    }
}

impl FromIterator<Outcome> for Counts {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut counts = Self::default();
        for outcome in iter {
            counts.add(outcome);
        }
        counts
    }
}

/// Outcome shares in percent of games played.
///
/// Each rate is `count / total × 100`, so the three sum to 100 up to
/// rounding whenever at least one game was played.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Rates {
    pub player: Probability,
    pub dealer: Probability,
    pub draw: Probability,
}

impl Rates {
    pub fn get(&self, outcome: Outcome) -> Probability {
        match outcome {
            Outcome::PlayerWin => self.player,
            Outcome::DealerWin => self.dealer,
            Outcome::Draw => self.draw,
        }
    }
    pub fn sum(&self) -> Probability {
        self.player + self.dealer + self.draw
    }
}

impl From<Counts> for Rates {
    fn from(counts: Counts) -> Self {
        let percent = |n: usize| match counts.total() {
            0 => 0.,
            total => n as Probability / total as Probability * 100.,
        };
        Self {
            player: percent(counts.player),
            dealer: percent(counts.dealer),
            draw: percent(counts.draw),
        }
    }
}

impl std::fmt::Display for Rates {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}",
            format!("player {:.2}%", self.player),
            format!("dealer {:.2}%", self.dealer),
            format!("draw {:.2}%", self.draw),
        )
    }
}
