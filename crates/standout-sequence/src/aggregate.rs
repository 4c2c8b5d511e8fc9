//! Left folds with element index.

use crate::sequence::Sequence;

impl<I: Iterator> Sequence<I> {
    /// Folds the sequence left to right.
    ///
    /// `func` receives the accumulator, the element and the element's 0-based
    /// index. An empty sequence returns `seed` unchanged.
    ///
    /// ```
    /// use standout_sequence::Sequence;
    ///
    /// let sum = Sequence::new(vec![1, 2, 3]).aggregate(0, |acc, x, _| acc + x);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn aggregate<A, F>(self, seed: A, mut func: F) -> A
    where
        F: FnMut(A, I::Item, usize) -> A,
    {
        self.source
            .enumerate()
            .fold(seed, |acc, (index, item)| func(acc, item, index))
    }

    /// Alias for [`aggregate`](Self::aggregate).
    pub fn reduce<A, F>(self, seed: A, func: F) -> A
    where
        F: FnMut(A, I::Item, usize) -> A,
    {
        self.aggregate(seed, func)
    }

    /// Like [`aggregate`](Self::aggregate), seeded with `A::default()`.
    pub fn aggregate_default<A, F>(self, func: F) -> A
    where
        A: Default,
        F: FnMut(A, I::Item, usize) -> A,
    {
        self.aggregate(A::default(), func)
    }
}
