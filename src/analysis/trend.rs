use crate::*;

/// Mean draw probabilities per turn index across many games.
///
/// Games end at different lengths, so index `t` averages only over the games
/// that reached turn `t`. Nothing is padded. Sums are kept streaming so that
/// traces need not outlive the games that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trend {
    sums: Vec<(Probability, Probability)>,
    counts: Vec<usize>,
}

impl Trend {
    /// Adds one game's per-turn odds.
    pub fn absorb(&mut self, odds: &[Odds]) {
        if odds.len() > self.counts.len() {
            self.sums.resize(odds.len(), (0., 0.));
            self.counts.resize(odds.len(), 0);
        }
        for (t, sample) in odds.iter().enumerate() {
            self.sums[t].0 += sample.live();
            self.sums[t].1 += sample.blank();
            self.counts[t] += 1;
        }
    }
    /// Combines two partial trends. `other` is summed after `self`.
    pub fn merge(mut self, other: Self) -> Self {
        if other.counts.len() > self.counts.len() {
            self.sums.resize(other.counts.len(), (0., 0.));
            self.counts.resize(other.counts.len(), 0);
        }
        for (t, (sum, count)) in other.sums.into_iter().zip(other.counts).enumerate() {
            self.sums[t].0 += sum.0;
            self.sums[t].1 += sum.1;
            self.counts[t] += count;
        }
        self
    }
    /// Length of the longest game absorbed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
    /// Games that reached turn `t`.
    pub fn support(&self, t: usize) -> usize {
        self.counts.get(t).copied().unwrap_or(0)
    }
    /// Mean odds at turn `t`, or `None` if no game reached it.
    pub fn get(&self, t: usize) -> Option<Odds> {
        match self.support(t) {
            0 => None,
            n => Some(Odds::new(
                self.sums[t].0 / n as Probability,
                self.sums[t].1 / n as Probability,
            )),
        }
    }
    pub fn points(&self) -> Vec<Option<Odds>> {
        (0..self.len()).map(|t| self.get(t)).collect()
    }
    /// One-shot average over a collection of traces.
    pub fn average<I, T>(traces: I) -> Vec<Option<Odds>>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[Odds]>,
    {
        traces.into_iter().collect::<Self>().points()
    }
}

impl<T> FromIterator<T> for Trend
where
    T: AsRef<[Odds]>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut trend = Self::default();
        for odds in iter {
            trend.absorb(odds.as_ref());
        }
        trend
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for t in 0..self.len() {
            match self.get(t) {
                Some(odds) => writeln!(f, "{:>4} {:<14}{:>8}", t, odds.to_string(), self.support(t))?,
                None => writeln!(f, "{:>4} {:<14}{:>8}", t, "undefined", 0)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unequal_lengths() {
        let short = vec![Odds::new(0.5, 0.5), Odds::new(1.0, 0.0)];
        let long = vec![Odds::new(0.25, 0.75), Odds::new(0.0, 1.0), Odds::new(0.4, 0.6)];
        let points = Trend::average([short, long]);
        assert!(points.len() == 3);
        assert!(points[0] == Some(Odds::new(0.375, 0.625)));
        assert!(points[1] == Some(Odds::new(0.5, 0.5)));
        assert!(points[2] == Some(Odds::new(0.4, 0.6)));
    }

    #[test]
    fn empty_is_empty() {
        let trend = Trend::from_iter(Vec::<Vec<Odds>>::new());
        assert!(trend.is_empty());
        assert!(trend.points().is_empty());
        assert!(trend.get(0).is_none());
    }

    #[test]
    fn undefined_beyond_longest() {
        let trend = Trend::from_iter([vec![Odds::new(1.0, 0.0)]]);
        assert!(trend.get(0).is_some());
        assert!(trend.get(1).is_none());
        assert!(trend.support(1) == 0);
    }

    #[test]
    fn merge_matches_absorb() {
        let a = vec![Odds::new(0.5, 0.5)];
        let b = vec![Odds::new(0.0, 1.0), Odds::new(1.0, 0.0)];
        let c = vec![Odds::new(0.75, 0.25), Odds::new(0.5, 0.5), Odds::new(0.0, 1.0)];
        let whole = Trend::from_iter([&a, &b, &c]);
        let split = Trend::from_iter([&a]).merge(Trend::from_iter([&b, &c]));
        assert!(whole == split);
        assert!(whole.support(0) == 3);
        assert!(whole.support(2) == 1);
    }
}
