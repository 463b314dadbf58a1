use crate::*;

/// Running totals over a batch of games.
///
/// Tallies from disjoint batches merge into the tally of their union, which
/// is how parallel workers hand back partial results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    counts: Counts,
    lengths: Lengths,
    trend: Trend,
}

impl Tally {
    pub fn absorb(&mut self, played: &Played) {
        self.counts.add(played.outcome);
        self.lengths.add(played.turns);
        if let Some(ref trace) = played.trace {
            self.trend.absorb(&trace.odds());
        }
    }
    pub fn merge(self, other: Self) -> Self {
        Self {
            counts: self.counts.merge(other.counts),
            lengths: self.lengths.merge(other.lengths),
            trend: self.trend.merge(other.trend),
        }
    }
    pub fn counts(&self) -> Counts {
        self.counts
    }
    pub fn rates(&self) -> Rates {
        Rates::from(self.counts)
    }
    pub fn lengths(&self) -> &Lengths {
        &self.lengths
    }
    pub fn trend(&self) -> &Trend {
        &self.trend
    }
    pub fn games(&self) -> usize {
        self.counts.total()
    }
}

impl From<Tally> for (Counts, Lengths, Trend) {
    fn from(tally: Tally) -> Self {
        (tally.counts, tally.lengths, tally.trend)
    }
}
