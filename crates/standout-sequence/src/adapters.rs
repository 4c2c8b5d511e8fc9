//! Iterator adapters behind the lazy operators that std does not cover.

use std::collections::HashSet;
use std::hash::Hash;

/// Yields the first element for each distinct key.
///
/// Returned by [`Sequence::distinct`](crate::Sequence::distinct) and
/// [`Sequence::distinct_by`](crate::Sequence::distinct_by). The key function
/// runs exactly once per element pulled from the source.
#[derive(Clone)]
pub struct Distinct<I, K, F> {
    source: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> Distinct<I, K, F> {
    pub(crate) fn new(source: I, key: F) -> Self {
        Distinct {
            source,
            seen: HashSet::new(),
            key,
        }
    }
}

impl<I, K, F> Iterator for Distinct<I, K, F>
where
    I: Iterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for item in self.source.by_ref() {
            if self.seen.insert((self.key)(&item)) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

/// Keeps (or drops) source elements that are members of another collection.
///
/// Returned by [`Sequence::intersect`](crate::Sequence::intersect) and
/// [`Sequence::except_for`](crate::Sequence::except_for). Membership is a
/// linear `PartialEq` scan, so elements only need equality. The source itself
/// is never deduplicated.
#[derive(Clone)]
pub struct Membership<I, T> {
    source: I,
    other: Vec<T>,
    keep_members: bool,
}

impl<I, T> Membership<I, T> {
    pub(crate) fn new(source: I, other: Vec<T>, keep_members: bool) -> Self {
        Membership {
            source,
            other,
            keep_members,
        }
    }
}

impl<I, T> Iterator for Membership<I, T>
where
    I: Iterator<Item = T>,
    T: PartialEq,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let other = &self.other;
        let keep_members = self.keep_members;
        self.source
            .by_ref()
            .find(|item| other.contains(item) == keep_members)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}
