use crate::*;
use std::collections::BTreeMap;

/// Distribution of game lengths in shots fired.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Lengths(BTreeMap<usize, usize>);

impl Lengths {
    pub fn add(&mut self, turns: usize) {
        *self.0.entry(turns).or_default() += 1;
    }
    pub fn merge(mut self, other: Self) -> Self {
        for (turns, n) in other.0 {
            *self.0.entry(turns).or_default() += n;
        }
        self
    }
    /// Games recorded.
    pub fn games(&self) -> usize {
        self.0.values().sum()
    }
    pub fn histogram(&self) -> &BTreeMap<usize, usize> {
        &self.0
    }
    pub fn min(&self) -> Option<usize> {
        self.0.keys().next().copied()
    }
    pub fn max(&self) -> Option<usize> {
        self.0.keys().next_back().copied()
    }
    pub fn mean(&self) -> Probability {
        match self.games() {
            0 => 0.,
            n => {
                self.0
                    .iter()
                    .map(|(turns, count)| (turns * count) as Probability)
                    .sum::<Probability>()
                    / n as Probability
            }
        }
    }
}

impl std::fmt::Display for Lengths {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let games = self.games().max(1) as Probability;
        for (turns, count) in self.0.iter() {
            let share = *count as Probability / games;
            let bar = "*".repeat((share * 40.).round() as usize);
            writeln!(f, "{:>4} {:>8} {:>7.2}% {}", turns, count, share * 100., bar)?;
        }
        Ok(())
    }
}
