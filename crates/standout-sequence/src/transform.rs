//! Lazy transformation operators.
//!
//! Each operator wraps the source in an iterator adapter and returns a new
//! [`Sequence`]; no element is pulled until the result is consumed.
//! [`Sequence::foreach`] is the exception: it walks the source immediately.

use std::hash::Hash;
use std::iter::{Chain, Cloned, Copied, Filter, FlatMap, Map, Once, Skip, Take};

use crate::adapters::{Distinct, Membership};
use crate::sequence::Sequence;

impl<I: Iterator> Sequence<I> {
    // ========================================================================
    // Filtering
    // ========================================================================

    /// Keeps the elements matching `predicate`, in source order.
    pub fn filter<P>(self, predicate: P) -> Sequence<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Sequence::new(self.source.filter(predicate))
    }

    /// Keeps the first occurrence of each distinct element.
    #[allow(clippy::type_complexity)]
    pub fn distinct(self) -> Sequence<Distinct<I, I::Item, fn(&I::Item) -> I::Item>>
    where
        I::Item: Hash + Eq + Clone,
    {
        self.distinct_by(<I::Item as Clone>::clone as fn(&I::Item) -> I::Item)
    }

    /// Keeps the first element for each distinct key.
    ///
    /// Later elements mapping to an already-seen key are dropped.
    pub fn distinct_by<K, F>(self, key: F) -> Sequence<Distinct<I, K, F>>
    where
        K: Hash + Eq,
        F: FnMut(&I::Item) -> K,
    {
        Sequence::new(Distinct::new(self.source, key))
    }

    /// Keeps the elements that are members of `other`.
    ///
    /// `other` is collected once, at call time.
    pub fn intersect<J>(self, other: J) -> Sequence<Membership<I, I::Item>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: PartialEq,
    {
        Sequence::new(Membership::new(self.source, other.into_iter().collect(), true))
    }

    /// Drops the elements that are members of `other`.
    ///
    /// `other` is collected once, at call time. Duplicates in the source that
    /// are not in `other` are all kept.
    pub fn except_for<J>(self, other: J) -> Sequence<Membership<I, I::Item>>
    where
        J: IntoIterator<Item = I::Item>,
        I::Item: PartialEq,
    {
        Sequence::new(Membership::new(
            self.source,
            other.into_iter().collect(),
            false,
        ))
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Projects each element through `selector`, one output per input.
    pub fn select<U, F>(self, selector: F) -> Sequence<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Sequence::new(self.source.map(selector))
    }

    /// Alias for [`select`](Self::select).
    pub fn map<U, F>(self, selector: F) -> Sequence<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        self.select(selector)
    }

    /// Projects each element to an iterable and flattens the results one level.
    ///
    /// ```
    /// use standout_sequence::Sequence;
    ///
    /// let hobbies = Sequence::new(vec![vec!["skating", "reading"], vec!["dancing"]])
    ///     .select_many(|h| h);
    /// assert_eq!(hobbies, ["skating", "reading", "dancing"]);
    /// ```
    pub fn select_many<U, F>(self, selector: F) -> Sequence<FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Sequence::new(self.source.flat_map(selector))
    }

    // ========================================================================
    // Slicing and concatenation
    // ========================================================================

    /// Yields at most `n` elements, never pulling past the `n`th.
    pub fn take(self, n: usize) -> Sequence<Take<I>> {
        Sequence::new(self.source.take(n))
    }

    /// Discards the first `n` elements, then yields the rest.
    pub fn skip(self, n: usize) -> Sequence<Skip<I>> {
        Sequence::new(self.source.skip(n))
    }

    /// Appends the elements of `other` after this sequence is exhausted.
    pub fn concat<J>(self, other: J) -> Sequence<Chain<I, J::IntoIter>>
    where
        J: IntoIterator<Item = I::Item>,
    {
        Sequence::new(self.source.chain(other))
    }

    /// Appends a single element.
    pub fn concat_item(self, item: I::Item) -> Sequence<Chain<I, Once<I::Item>>> {
        Sequence::new(self.source.chain(std::iter::once(item)))
    }

    // ========================================================================
    // Side effects
    // ========================================================================

    /// Calls `action` once per element, in order, for every element.
    ///
    /// The source is walked immediately and exactly once. The returned
    /// sequence yields the same elements without touching the source again,
    /// so chaining works for single-pass sources too.
    pub fn foreach<F>(self, mut action: F) -> Sequence<std::vec::IntoIter<I::Item>>
    where
        F: FnMut(&I::Item),
    {
        let visited: Vec<I::Item> = self.source.inspect(|item| action(item)).collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(visited = visited.len(), "foreach completed");

        Sequence::new(visited)
    }
}

impl<'a, I, T> Sequence<I>
where
    I: Iterator<Item = &'a T>,
    T: 'a,
{
    /// Clones borrowed elements into owned ones.
    pub fn cloned(self) -> Sequence<Cloned<I>>
    where
        T: Clone,
    {
        Sequence::new(self.source.cloned())
    }

    /// Copies borrowed elements into owned ones.
    pub fn copied(self) -> Sequence<Copied<I>>
    where
        T: Copy,
    {
        Sequence::new(self.source.copied())
    }
}
