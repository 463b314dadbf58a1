use super::*;
use rand::rngs::SmallRng;

/// An ordered magazine with a cursor at the next charge to fire.
///
/// Charges are consumed left to right and never replayed. Everything at and
/// after the cursor is what the shooter still faces; strategies only ever see
/// the live and blank counts of that suffix, never its order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Magazine {
    charges: Vec<Charge>,
    cursor: usize,
}

impl Magazine {
    /// Fresh magazine from requested counts, clamped against `ceiling`.
    pub fn reload(live: usize, blank: usize, ceiling: usize, rng: &mut SmallRng) -> Self {
        Loadout::new(live, blank).clamp(ceiling).load(rng)
    }
    /// The charge under the hammer, without consuming it.
    pub fn peek(&self) -> Option<Charge> {
        self.charges.get(self.cursor).copied()
    }
    /// Consumes the charge under the hammer.
    pub fn advance(&mut self) -> Option<Charge> {
        let charge = self.peek()?;
        self.cursor += 1;
        Some(charge)
    }
    /// Charges at and after the cursor.
    pub fn remaining(&self) -> &[Charge] {
        &self.charges[self.cursor.min(self.charges.len())..]
    }
    /// Live charges at and after the cursor.
    pub fn live(&self) -> usize {
        self.remaining().iter().filter(|c| c.is_live()).count()
    }
    /// Blank charges at and after the cursor.
    pub fn blank(&self) -> usize {
        self.remaining().iter().filter(|c| c.is_blank()).count()
    }
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.charges.len()
    }
    /// Full length, including spent charges.
    pub fn len(&self) -> usize {
        self.charges.len()
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }
    /// Counts of the whole magazine, spent charges included.
    pub fn loadout(&self) -> Loadout {
        let live = self.charges.iter().filter(|c| c.is_live()).count();
        Loadout::new(live, self.charges.len() - live)
    }
}

impl From<Vec<Charge>> for Magazine {
    fn from(charges: Vec<Charge>) -> Self {
        Self { charges, cursor: 0 }
    }
}

/// str isomorphism, e.g. "LBB". Whitespace is ignored.
impl TryFrom<&str> for Magazine {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Charge::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl std::fmt::Display for Magazine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, charge) in self.charges.iter().enumerate() {
            match i == self.cursor {
                true => write!(f, "[{}]", charge)?,
                false => write!(f, "{}", charge)?,
            }
        }
        Ok(())
    }
}
