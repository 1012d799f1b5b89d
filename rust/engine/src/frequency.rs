use std::collections::BTreeMap;

use crate::dice::Hand;

/// Face value → number of occurrences in a hand.
///
/// Only faces present in the hand have an entry, so the number of entries is
/// the hand's distinct-key count and the counts always add up to the hand
/// length. Rebuilt for every evaluation.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FrequencyTable {
    counts: BTreeMap<u32, u32>,
}

impl FrequencyTable {
    pub fn from_hand(hand: &Hand) -> Self {
        let mut counts = BTreeMap::new();
        for &face in hand.values() {
            *counts.entry(face).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `face`, 0 when absent.
    pub fn count(&self, face: u32) -> u32 {
        self.counts.get(&face).copied().unwrap_or(0)
    }

    /// Number of distinct faces.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of dice counted.
    pub fn total(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    /// Sum of `face * count` over all entries.
    pub fn sum(&self) -> u32 {
        self.counts.iter().map(|(&face, &count)| face * count).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// True when the multiset of counts equals `expected` in some order.
    pub fn counts_match(&self, expected: &[u32]) -> bool {
        if self.counts.len() != expected.len() {
            return false;
        }
        let mut have: Vec<u32> = self.counts.values().copied().collect();
        let mut want = expected.to_vec();
        have.sort_unstable();
        want.sort_unstable();
        have == want
    }

    /// Adjacent pairs of sorted distinct faces that differ by more than one.
    pub fn gaps(&self) -> usize {
        let faces: Vec<u32> = self.counts.keys().copied().collect();
        faces.windows(2).filter(|w| w[1] - w[0] != 1).count()
    }

    /// Distinct faces in ascending order.
    pub fn faces(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&f, &c)| (f, c))
    }
}

/// Builds the frequency mapping for a hand.
pub fn build_frequency(hand: &Hand) -> FrequencyTable {
    FrequencyTable::from_hand(hand)
}
