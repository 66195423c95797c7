//! Uniform random selection over the collection.

use crate::domain::Quote;
use crate::storage::QuoteStore;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Draws quotes from a [`QuoteStore`] with uniform probability.
///
/// Every draw is independent: there is no memory of earlier picks and repeats are
/// allowed.
#[derive(Debug, Clone)]
pub struct Picker {
    rng: StdRng,
}

impl Picker {
    /// Picker seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker, for tests and reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly chosen quote, or `None` when the collection is empty.
    pub fn pick_random(&mut self, store: &QuoteStore) -> Option<Quote> {
        let picked = store.quotes().choose(&mut self.rng).cloned();
        tracing::trace!(
            collection = store.len(),
            picked = picked.is_some(),
            "random pick"
        );
        picked
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_quotes;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    fn store_with(quotes: Vec<Quote>) -> QuoteStore {
        let mut store = QuoteStore::new(Box::new(MemoryStore::new()));
        store.commit(quotes).unwrap();
        store
    }

    #[test]
    fn empty_collection_yields_none() {
        let store = store_with(vec![]);
        assert_eq!(Picker::seeded(7).pick_random(&store), None);
    }

    #[test]
    fn single_quote_is_always_picked() {
        let only = Quote::new("Alone", "Solo");
        let store = store_with(vec![only.clone()]);
        let mut picker = Picker::seeded(1);

        for _ in 0..20 {
            assert_eq!(picker.pick_random(&store), Some(only.clone()));
        }
    }

    #[test]
    fn picks_are_spread_over_every_quote() {
        let store = store_with(default_quotes());
        let mut picker = Picker::seeded(42);
        let mut counts: HashMap<String, usize> = HashMap::new();

        for _ in 0..8000 {
            let quote = picker.pick_random(&store).unwrap();
            *counts.entry(quote.category).or_default() += 1;
        }

        assert_eq!(counts.len(), 8);
        for (category, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "{category} picked {count} times out of 8000"
            );
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let store = store_with(default_quotes());
        let mut a = Picker::seeded(99);
        let mut b = Picker::seeded(99);

        let first: Vec<_> = (0..10).map(|_| a.pick_random(&store)).collect();
        let second: Vec<_> = (0..10).map(|_| b.pick_random(&store)).collect();

        assert_eq!(first, second);
    }
}
