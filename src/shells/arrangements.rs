use super::*;

/// Every distinct ordering of a live/blank multiset, in lexicographic order.
///
/// Identical charges are indistinguishable, so `n!` raw arrangements
/// collapse to `C(n, live)` distinct sequences. Iteration starts from the
/// sorted arrangement (blanks first) and steps with the classic
/// next-permutation algorithm, which never revisits a sequence.
#[derive(Debug, Clone)]
pub struct Arrangements {
    next: Option<Vec<Charge>>,
}

impl Arrangements {
    /// Number of distinct orderings, `C(live + blank, live)`.
    ///
    /// Saturates at `u128::MAX` rather than overflowing.
    pub fn count(loadout: Loadout) -> u128 {
        let n = loadout.total() as u128;
        let k = loadout.live().min(loadout.blank()) as u128;
        (0..k).try_fold(1u128, |acc, i| acc.checked_mul(n - i).map(|x| x / (i + 1)))
            .unwrap_or(u128::MAX)
    }

    /// Rearranges `charges` into the lexicographically next sequence.
    /// Returns false once `charges` is the last (descending) arrangement.
    fn step(charges: &mut [Charge]) -> bool {
        let n = charges.len();
        let Some(pivot) = (1..n).rev().find(|&i| charges[i - 1] < charges[i]) else {
            return false;
        };
        let pivot = pivot - 1;
        let swap = (pivot + 1..n)
            .rev()
            .find(|&j| charges[j] > charges[pivot])
            .expect("pivot has a greater successor");
        charges.swap(pivot, swap);
        charges[pivot + 1..].reverse();
        true
    }
}

impl From<Loadout> for Arrangements {
    fn from(loadout: Loadout) -> Self {
        Self {
            next: Some(loadout.sorted()),
        }
    }
}

impl Iterator for Arrangements {
    type Item = Magazine;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut successor = current.clone();
        if Self::step(&mut successor) {
            self.next = Some(successor);
        }
        Some(Magazine::from(current))
    }
}
