use std::cmp::Ordering;
use std::collections::HashMap;

/// Keyed accumulator that remembers first-seen order.
#[derive(Debug)]
pub(crate) struct Tally<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<V> Tally<V> {
    pub(crate) fn entry(&mut self, key: &str, init: impl FnOnce() -> V) -> &mut V {
        let slot = match self.index.get(key) {
            Some(slot) => *slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.to_string(), slot);
                self.entries.push((key.to_string(), init()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consume into `T`s ranked by quantity, descending.
    pub(crate) fn into_ranked<T>(
        self,
        qty: impl Fn(&V) -> u64,
        mut build: impl FnMut(String, V) -> T,
    ) -> Vec<T> {
        let mut entries: Vec<(u64, String, V)> = self
            .entries
            .into_iter()
            .map(|(key, value)| (qty(&value), key, value))
            .collect();
        entries.sort_by(|a, b| rank_order(a.0, b.0));
        entries
            .into_iter()
            .map(|(_, key, value)| build(key, value))
            .collect()
    }
}

/// Quantity descending. Callers sort stably, so equal quantities keep
/// first-seen order.
#[inline]
pub fn rank_order(a: u64, b: u64) -> Ordering {
    b.cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accumulates_per_key() {
        let mut tally: Tally<u64> = Tally::default();
        *tally.entry("a", || 0) += 2;
        *tally.entry("b", || 0) += 1;
        *tally.entry("a", || 0) += 3;
        assert_eq!(tally.len(), 2);
        let ranked = tally.into_ranked(|v| *v, |k, v| (k, v));
        assert_eq!(ranked, vec![("a".to_string(), 5), ("b".to_string(), 1)]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut tally: Tally<u64> = Tally::default();
        for key in ["z", "m", "a"] {
            *tally.entry(key, || 0) += 4;
        }
        *tally.entry("big", || 0) += 9;
        let ranked: Vec<String> = tally.into_ranked(|v| *v, |k, _| k);
        assert_eq!(ranked, vec!["big", "z", "m", "a"]);
    }
}
