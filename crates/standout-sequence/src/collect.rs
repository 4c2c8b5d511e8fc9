//! Materialization into lists and mappings.
//!
//! Mappings are [`IndexMap`]s, so keys come back in first-seen order.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

/// How [`Sequence::to_map_with`] treats a key that appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum KeyPolicy {
    /// A repeated key is an error.
    #[default]
    Unique,
    /// A repeated key overwrites the earlier value, keeping the key's position.
    LastWins,
}

impl KeyPolicy {
    /// Returns the display name of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyPolicy::Unique => "unique",
            KeyPolicy::LastWins => "last_wins",
        }
    }
}

impl std::fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<I: Iterator> Sequence<I> {
    /// Collects every element into a `Vec`, preserving order.
    pub fn to_vec(self) -> Vec<I::Item> {
        self.source.collect()
    }

    /// Maps each element to itself, requiring unique elements.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`] on the first repeated element.
    pub fn to_map(self) -> Result<IndexMap<I::Item, I::Item>>
    where
        I::Item: Hash + Eq + Clone + Debug,
    {
        self.to_map_with(|item| item.clone(), |item| item, KeyPolicy::Unique)
    }

    /// Maps each element under the key computed by `key`, requiring unique keys.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`] on the first repeated key.
    pub fn to_map_by<K, F>(self, key: F) -> Result<IndexMap<K, I::Item>>
    where
        K: Hash + Eq + Debug,
        F: FnMut(&I::Item) -> K,
    {
        self.to_map_with(key, |item| item, KeyPolicy::Unique)
    }

    /// Builds a mapping from `key(item)` to `value(item)`.
    ///
    /// With [`KeyPolicy::Unique`] the first repeated key fails the whole call.
    /// With [`KeyPolicy::LastWins`] later values silently replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::DuplicateKey`] naming the key (rendered with
    /// `Debug`) under [`KeyPolicy::Unique`].
    ///
    /// # Example
    ///
    /// ```
    /// use standout_sequence::{KeyPolicy, Sequence};
    ///
    /// let map = Sequence::new(vec![3, 2, 1, 3, 2, 1, 5])
    ///     .to_map_with(|x| *x, |x| x * 10, KeyPolicy::LastWins)
    ///     .unwrap();
    /// assert_eq!(map.len(), 4);
    /// assert_eq!(map[&5], 50);
    /// ```
    pub fn to_map_with<K, V, F, G>(
        self,
        mut key: F,
        mut value: G,
        policy: KeyPolicy,
    ) -> Result<IndexMap<K, V>>
    where
        K: Hash + Eq + Debug,
        F: FnMut(&I::Item) -> K,
        G: FnMut(I::Item) -> V,
    {
        let mut map = IndexMap::new();
        for item in self.source {
            let k = key(&item);
            match policy {
                KeyPolicy::Unique => match map.entry(k) {
                    Entry::Occupied(entry) => {
                        let key = format!("{:?}", entry.key());

                        #[cfg(feature = "tracing")]
                        tracing::trace!(key = %key, "duplicate key rejected");

                        return Err(SequenceError::DuplicateKey { key });
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(value(item));
                    }
                },
                KeyPolicy::LastWins => {
                    map.insert(k, value(item));
                }
            }
        }
        Ok(map)
    }
}
