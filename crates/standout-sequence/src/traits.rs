//! Extension trait for entering the query surface from any iterable.

use crate::sequence::Sequence;

/// Wraps any [`IntoIterator`] in a [`Sequence`].
///
/// Implemented for every iterable, including [`Sequence`] itself, where it
/// hands back the same source instead of nesting.
///
/// # Example
///
/// ```
/// use standout_sequence::IntoSequence;
///
/// let firsts = vec!["RED", "ORANGE", "YELLOW"]
///     .into_sequence()
///     .select(|w| &w[..1])
///     .to_vec();
/// assert_eq!(firsts, vec!["R", "O", "Y"]);
/// ```
pub trait IntoSequence: IntoIterator + Sized {
    /// Wraps this iterable in a [`Sequence`].
    fn into_sequence(self) -> Sequence<Self::IntoIter> {
        Sequence::new(self)
    }
}

impl<S: IntoIterator> IntoSequence for S {}
