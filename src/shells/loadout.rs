use super::*;
use crate::*;
use rand::rngs::SmallRng;

/// How many live and blank charges go into a magazine.
///
/// A requested loadout is clamped before loading: the total lies in
/// `MIN_CHARGES..=ceiling` and at least one charge of each kind survives
/// whenever the total allows it (live is never below 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Loadout {
    live: usize,
    blank: usize,
}

impl Loadout {
    pub const fn new(live: usize, blank: usize) -> Self {
        Self { live, blank }
    }
    pub fn live(&self) -> usize {
        self.live
    }
    pub fn blank(&self) -> usize {
        self.blank
    }
    pub fn total(&self) -> usize {
        self.live + self.blank
    }
    /// Applies the reload validity clamps against a charge ceiling.
    ///
    /// `total = clamp(live + blank, MIN_CHARGES, ceiling)`,
    /// `live = clamp(live, 1, total - 1)`, `blank = total - live`.
    pub fn clamp(&self, ceiling: usize) -> Self {
        let ceiling = ceiling.max(MIN_CHARGES);
        let total = self.total().clamp(MIN_CHARGES, ceiling);
        let live = self.live.clamp(1, total - 1);
        Self::new(live, total - live)
    }
    /// Whether clamping against `ceiling` would change this loadout.
    pub fn diverges(&self, ceiling: usize) -> bool {
        self.clamp(ceiling) != *self
    }
    /// Uniformly shuffled magazine holding exactly these charges.
    ///
    /// No clamping happens here; see [`Magazine::reload`].
    pub fn load(&self, rng: &mut SmallRng) -> Magazine {
        use rand::seq::SliceRandom;
        let mut charges = self.sorted();
        charges.shuffle(rng);
        Magazine::from(charges)
    }
    /// Blanks first, then lives. The first arrangement in enumeration order.
    pub fn sorted(&self) -> Vec<Charge> {
        std::iter::repeat_n(Charge::Blank, self.blank)
            .chain(std::iter::repeat_n(Charge::Live, self.live))
            .collect()
    }
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new(LIVE_CHARGES, BLANK_CHARGES)
    }
}

impl From<(usize, usize)> for Loadout {
    fn from((live, blank): (usize, usize)) -> Self {
        Self::new(live, blank)
    }
}

impl std::fmt::Display for Loadout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}L/{}B", self.live, self.blank)
    }
}
