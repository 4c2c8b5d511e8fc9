//! The [`Sequence`] wrapper: construction, iteration, indexed access and equality.
//!
//! A `Sequence<I>` owns exactly one source iterator `I`. Lazy operators wrap
//! that iterator in a new adapter and return a new `Sequence`; terminal
//! operators consume the wrapper and return a plain value.
//!
//! Terminal operators take `self` by value. Walking a sequence twice means
//! cloning it first, which is only possible when the source iterator is
//! `Clone`. A single-pass source can therefore never be observed exhausted by
//! a second terminal call. Nothing is cached between calls.

use std::fmt;

use crate::error::{Result, SequenceError};

/// A chainable query wrapper over any iterable source.
///
/// # Example
///
/// ```
/// use standout_sequence::Sequence;
///
/// let evens = Sequence::new(vec![1, 2, 3, 4, 5, 5]).filter(|x| x % 2 == 0);
/// assert_eq!(evens, [2, 4]);
/// ```
#[derive(Clone)]
pub struct Sequence<I> {
    pub(crate) source: I,
}

impl<I: Iterator> Sequence<I> {
    /// Wraps any iterable source.
    ///
    /// Because `Sequence<I>` is itself `IntoIterator<IntoIter = I>`, wrapping
    /// a sequence yields a `Sequence<I>` again rather than a nested wrapper.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Sequence {
            source: source.into_iter(),
        }
    }

    /// Wraps an optional source, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySource`] for `None`.
    pub fn from_option<S>(source: Option<S>) -> Result<Self>
    where
        S: IntoIterator<IntoIter = I>,
    {
        source.map(Sequence::new).ok_or(SequenceError::EmptySource)
    }

    /// Returns the element at `index` (0-based), walking from the front.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] with the number of elements
    /// actually seen if the sequence ends first.
    pub fn get(self, index: usize) -> Result<I::Item> {
        let mut count = 0;
        for item in self.source {
            if count == index {
                return Ok(item);
            }
            count += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(index, count, "index out of range");

        Err(SequenceError::IndexOutOfRange { index, count })
    }

    /// Counts the elements by walking the whole sequence.
    pub fn count(self) -> usize {
        self.source.count()
    }
}

impl<I> Sequence<I>
where
    I: Iterator + Clone,
{
    /// Number of elements, counted on a clone of the source.
    pub fn len(&self) -> usize {
        self.source.clone().count()
    }

    /// Returns `true` if the source yields no elements.
    pub fn is_empty(&self) -> bool {
        self.source.clone().next().is_none()
    }
}

impl<I: Iterator> IntoIterator for Sequence<I> {
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.source
    }
}

impl<T> FromIterator<T> for Sequence<std::vec::IntoIter<T>> {
    fn from_iter<S: IntoIterator<Item = T>>(iter: S) -> Self {
        Sequence::new(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<I> fmt::Debug for Sequence<I>
where
    I: Iterator + Clone,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.source.clone()).finish()
    }
}

// ============================================================================
// Equality
// ============================================================================

/// Element-wise comparison of an iterator against a slice.
fn eq_slice<I, U>(source: I, other: &[U]) -> bool
where
    I: Iterator,
    I::Item: PartialEq<U>,
{
    let mut expected = other.iter();
    for item in source {
        match expected.next() {
            Some(value) if item == *value => {}
            _ => return false,
        }
    }
    expected.next().is_none()
}

impl<I, J> PartialEq<Sequence<J>> for Sequence<I>
where
    I: Iterator + Clone,
    J: Iterator + Clone,
    I::Item: PartialEq<J::Item>,
{
    fn eq(&self, other: &Sequence<J>) -> bool {
        self.source.clone().eq(other.source.clone())
    }
}

impl<I, U> PartialEq<Vec<U>> for Sequence<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        eq_slice(self.source.clone(), other)
    }
}

impl<I, U, const N: usize> PartialEq<[U; N]> for Sequence<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        eq_slice(self.source.clone(), other)
    }
}

impl<I, U> PartialEq<&[U]> for Sequence<I>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        eq_slice(self.source.clone(), other)
    }
}

impl<I, U> PartialEq<Sequence<I>> for Vec<U>
where
    I: Iterator + Clone,
    I::Item: PartialEq<U>,
{
    fn eq(&self, other: &Sequence<I>) -> bool {
        eq_slice(other.source.clone(), self)
    }
}

#[cfg(feature = "serde")]
impl<I> serde::Serialize for Sequence<I>
where
    I: Iterator + Clone,
    I::Item: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.source.clone())
    }
}
