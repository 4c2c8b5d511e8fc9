//! Ordering operators.
//!
//! Provides [`Dir`] for sort direction and the `order*` family of operators.
//! All of them materialize the source and sort it with a stable sort.
//!
//! When both are given, the key selector runs first, the comparer then
//! compares the projected keys, and [`Dir`] finally reverses the comparison.
//! Reversing the comparison rather than the sorted output keeps equal
//! elements in source order in both directions.

use std::cmp::Ordering;

use crate::sequence::Sequence;

/// Direction for the `order*` operators. Ascending unless stated.
///
/// Direction is applied to each comparison, not to the sorted output, so
/// reversing never reorders ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Dir {
    #[default]
    Asc,
    Desc,
}

impl Dir {
    /// Orients a comparison result: unchanged for `Asc`, flipped for `Desc`.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use standout_sequence::Dir;
    ///
    /// assert_eq!(Dir::Desc.apply(1.cmp(&2)), Ordering::Greater);
    /// ```
    pub fn apply(self, ordering: Ordering) -> Ordering {
        if self == Dir::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<I: Iterator> Sequence<I> {
    /// Sorts elements by their natural order.
    pub fn order(self, dir: Dir) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        self.order_with(Ord::cmp, dir)
    }

    /// Sorts elements ascending by their natural order.
    pub fn order_asc(self) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        self.order(Dir::Asc)
    }

    /// Sorts elements descending by their natural order.
    pub fn order_desc(self) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        self.order(Dir::Desc)
    }

    /// Sorts elements with a custom comparer.
    pub fn order_with<C>(self, mut comparer: C, dir: Dir) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        C: FnMut(&I::Item, &I::Item) -> Ordering,
    {
        let mut items: Vec<I::Item> = self.source.collect();
        items.sort_by(|a, b| dir.apply(comparer(a, b)));

        #[cfg(feature = "tracing")]
        tracing::trace!(len = items.len(), dir = %dir, "sequence ordered");

        Sequence::new(items)
    }

    /// Sorts elements by the key computed by `key`.
    ///
    /// The key is computed once per element.
    ///
    /// # Example
    ///
    /// ```
    /// use standout_sequence::{Dir, Sequence};
    ///
    /// let words = Sequence::new(vec!["ccc", "a", "bb", "dd"]).order_by(|w| w.len(), Dir::Desc);
    /// assert_eq!(words, ["ccc", "bb", "dd", "a"]);
    /// ```
    pub fn order_by<K, F>(self, key: F, dir: Dir) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.order_by_with(key, Ord::cmp, dir)
    }

    /// Sorts elements by `key`, comparing the projected keys with `comparer`.
    pub fn order_by_with<K, F, C>(
        self,
        mut key: F,
        mut comparer: C,
        dir: Dir,
    ) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        F: FnMut(&I::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        let mut keyed: Vec<(K, I::Item)> = self.source.map(|item| (key(&item), item)).collect();
        keyed.sort_by(|(a, _), (b, _)| dir.apply(comparer(a, b)));

        #[cfg(feature = "tracing")]
        tracing::trace!(len = keyed.len(), dir = %dir, "sequence ordered");

        Sequence::new(keyed.into_iter().map(|(_, item)| item).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn natural_order_both_directions() {
        let seq = Sequence::new(vec![3, 1, 2, 5, 5]);
        assert_eq!(seq.clone().order_asc(), [1, 2, 3, 5, 5]);
        assert_eq!(seq.order_desc(), [5, 5, 3, 2, 1]);
    }

    #[test]
    fn order_by_is_stable_ascending() {
        let pairs = Sequence::new(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        assert_eq!(
            pairs.order_by(|(k, _)| *k, Dir::Asc),
            [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn order_by_is_stable_descending() {
        let pairs = Sequence::new(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        assert_eq!(
            pairs.order_by(|(k, _)| *k, Dir::Desc),
            [(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]
        );
    }

    #[test]
    fn key_then_comparer_then_direction() {
        // Key: length. Comparer: odd lengths before even ones, then by length.
        let words = Sequence::new(vec!["aa", "b", "cccc", "ddd", "ee"]);
        let parity_first = |a: &usize, b: &usize| (a % 2 == 0).cmp(&(b % 2 == 0)).then(a.cmp(b));

        assert_eq!(
            words.clone().order_by_with(|w| w.len(), parity_first, Dir::Asc),
            ["b", "ddd", "aa", "ee", "cccc"]
        );
        assert_eq!(
            words.order_by_with(|w| w.len(), parity_first, Dir::Desc),
            ["cccc", "aa", "ee", "ddd", "b"]
        );
    }

    #[test]
    fn key_computed_once_per_element() {
        let mut calls = 0;
        let ordered = Sequence::new(vec![4, 2, 3, 1]).order_by(
            |x| {
                calls += 1;
                *x
            },
            Dir::Asc,
        );
        assert_eq!(ordered, [1, 2, 3, 4]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn order_with_comparer_only() {
        let ordered = Sequence::new(vec!["bb", "a", "ccc"])
            .order_with(|a, b| a.len().cmp(&b.len()), Dir::Desc);
        assert_eq!(ordered, ["ccc", "bb", "a"]);
    }

    #[test]
    fn ordering_empty() {
        assert!(Sequence::new(Vec::<i32>::new()).order_asc().is_empty());
    }
}
