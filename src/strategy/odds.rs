use crate::*;

/// Probability that the next charge is live or blank.
///
/// Computed from the charges remaining at and after the cursor. Sums to one
/// whenever a charge remains; an empty suffix yields `(0, 0)` by convention
/// rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Odds {
    live: Probability,
    blank: Probability,
}

impl Odds {
    pub const fn new(live: Probability, blank: Probability) -> Self {
        Self { live, blank }
    }
    pub fn live(&self) -> Probability {
        self.live
    }
    pub fn blank(&self) -> Probability {
        self.blank
    }
}

/// (live, blank) counts
impl From<(usize, usize)> for Odds {
    fn from((live, blank): (usize, usize)) -> Self {
        match live + blank {
            0 => Self::default(),
            n => Self::new(
                live as Probability / n as Probability,
                blank as Probability / n as Probability,
            ),
        }
    }
}

impl From<&Magazine> for Odds {
    fn from(magazine: &Magazine) -> Self {
        Self::from((magazine.live(), magazine.blank()))
    }
}

impl From<Odds> for (Probability, Probability) {
    fn from(odds: Odds) -> Self {
        (odds.live, odds.blank)
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3}/{:.3}", self.live, self.blank)
    }
}
