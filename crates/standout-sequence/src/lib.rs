//! Sequence - Fluent query operators over in-memory sequences.
//!
//! Sequence wraps any iterable in a [`Sequence`] and exposes a chainable set
//! of query operators in the style of language-integrated query libraries:
//!
//! - Filtering: `filter`, `distinct`, `intersect`, `except_for`
//! - Projection: `select` / `map`, `select_many`
//! - Slicing and joining: `take`, `skip`, `concat`, `concat_item`
//! - Grouping and ordering: `group_by`, `order_by` and friends
//! - Terminal operators: `first`, `last`, `any`, `all`, `count`, `get`,
//!   `to_vec`, `to_map`, `aggregate`
//!
//! # Quick Start
//!
//! ```rust
//! use standout_sequence::{Dir, Sequence};
//!
//! let labels = Sequence::new(vec![1, 2, 3, 4, 5, 5])
//!     .filter(|x| *x > 1)
//!     .distinct()
//!     .order(Dir::Desc)
//!     .select(|x| format!("#{}", x));
//!
//! assert_eq!(labels, ["#5", "#4", "#3", "#2"]);
//! ```
//!
//! # Evaluation
//!
//! | Kind | Operators |
//! |------|-----------|
//! | Lazy | `filter`, `distinct`, `distinct_by`, `intersect`, `except_for`, `select`, `map`, `select_many`, `take`, `skip`, `concat`, `concat_item`, `cloned`, `copied` |
//! | Eager, returns a sequence | `order*`, `foreach` |
//! | Terminal | everything else |
//!
//! Lazy operators never pull more from the source than their consumer asks
//! for, so `take` is safe on infinite or side-effecting sources.
//!
//! # Re-iteration
//!
//! Terminal operators consume the sequence. To run several of them, clone
//! the sequence first; this is possible whenever the source iterator is
//! `Clone` (vectors, slices, ranges, and every lazy operator built on them).
//!
//! # Errors
//!
//! Failing operators return [`Result`] with a [`SequenceError`]. The
//! `*_or_none` variants of `first` and `last` return `None` instead of
//! [`SequenceError::NoMatch`].
//!
//! # Features
//!
//! - `tracing`: emit `tracing` trace events from terminal operators
//! - `serde`: serialize sequences as lists, plus [`Dir`] and [`KeyPolicy`]

mod adapters;
mod aggregate;
mod collect;
mod element;
mod error;
mod grouping;
mod ordering;
mod sequence;
mod traits;
mod transform;

// Re-export public API
pub use adapters::{Distinct, Membership};
pub use collect::KeyPolicy;
pub use error::{Result, SequenceError};
pub use grouping::Groups;
pub use ordering::Dir;
pub use sequence::Sequence;
pub use traits::IntoSequence;
