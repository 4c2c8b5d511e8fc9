//! Quantifiers and single-element selection.
//!
//! `any*` and `first*` stop at the first qualifying element. `last*` always
//! scan the whole source, since a source is not assumed to iterate backwards.

use crate::error::{Result, SequenceError};
use crate::sequence::Sequence;

impl<I: Iterator> Sequence<I> {
    // ========================================================================
    // Quantifiers
    // ========================================================================

    /// Returns `true` if the sequence has at least one element.
    pub fn any(mut self) -> bool {
        self.source.next().is_some()
    }

    /// Returns `true` on the first element matching `predicate`.
    ///
    /// An empty sequence yields `false`.
    pub fn any_where<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source.any(|item| predicate(&item))
    }

    /// Returns `false` on the first element failing `predicate`.
    ///
    /// An empty sequence yields `true`.
    pub fn all<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source.all(|item| predicate(&item))
    }

    // ========================================================================
    // First
    // ========================================================================

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoMatch`] if the sequence is empty.
    pub fn first(mut self) -> Result<I::Item> {
        self.source.next().ok_or(SequenceError::NoMatch { operator: "first" })
    }

    /// Returns the first element matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoMatch`] if no element matches.
    pub fn first_where<P>(mut self, predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.source
            .find(predicate)
            .ok_or(SequenceError::NoMatch { operator: "first" })
    }

    /// Like [`first`](Self::first), but returns `None` instead of failing.
    pub fn first_or_none(self) -> Option<I::Item> {
        self.first().ok()
    }

    /// Like [`first_where`](Self::first_where), but returns `None` instead of failing.
    pub fn first_where_or_none<P>(self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.first_where(predicate).ok()
    }

    // ========================================================================
    // Last
    // ========================================================================

    /// Returns the last element, walking the whole sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoMatch`] if the sequence is empty.
    pub fn last(self) -> Result<I::Item> {
        self.source
            .last()
            .ok_or(SequenceError::NoMatch { operator: "last" })
    }

    /// Returns the last element matching `predicate`, walking the whole sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NoMatch`] if no element matches.
    pub fn last_where<P>(self, mut predicate: P) -> Result<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut found = None;
        for item in self.source {
            if predicate(&item) {
                found = Some(item);
            }
        }
        found.ok_or(SequenceError::NoMatch { operator: "last" })
    }

    /// Like [`last`](Self::last), but returns `None` instead of failing.
    pub fn last_or_none(self) -> Option<I::Item> {
        self.last().ok()
    }

    /// Like [`last_where`](Self::last_where), but returns `None` instead of failing.
    pub fn last_where_or_none<P>(self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        self.last_where(predicate).ok()
    }
}
