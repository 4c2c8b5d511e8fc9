//! Grouping by key.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::sequence::Sequence;

/// Result of [`Sequence::group_by`]: each key maps to a sequence of its values.
///
/// Keys are in order of first occurrence; values within a group keep source order.
pub type Groups<K, V> = IndexMap<K, Sequence<std::vec::IntoIter<V>>>;

impl<I: Iterator> Sequence<I> {
    /// Groups equal elements together, keyed by the element itself.
    pub fn group(self) -> Groups<I::Item, I::Item>
    where
        I::Item: Hash + Eq + Clone,
    {
        self.group_by(|item| item.clone())
    }

    /// Groups elements by the key computed by `key`.
    pub fn group_by<K, F>(self, key: F) -> Groups<K, I::Item>
    where
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
    {
        self.group_by_with(key, |item| item)
    }

    /// Groups `value(item)` under `key(item)`.
    ///
    /// # Example
    ///
    /// ```
    /// use standout_sequence::Sequence;
    ///
    /// let groups = Sequence::new(vec![1, 2, 3, 4, 5, 5]).group_by_with(
    ///     |x| if x % 2 == 0 { "even" } else { "odd" },
    ///     |x| format!("#{}", x),
    /// );
    /// assert_eq!(groups["even"], ["#2", "#4"]);
    /// assert_eq!(groups["odd"], ["#1", "#3", "#5", "#5"]);
    /// ```
    pub fn group_by_with<K, V, F, G>(self, mut key: F, mut value: G) -> Groups<K, V>
    where
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
        G: FnMut(I::Item) -> V,
    {
        let mut buckets: IndexMap<K, Vec<V>> = IndexMap::new();
        for item in self.source {
            let k = key(&item);
            buckets.entry(k).or_default().push(value(item));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(groups = buckets.len(), "sequence grouped");

        buckets
            .into_iter()
            .map(|(k, values)| (k, Sequence::new(values)))
            .collect()
    }
}
