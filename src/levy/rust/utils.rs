//! General purpose utility functions.

use pyo3::prelude::*;

/// Polymorphic support for a single value or a vector of values.
#[derive(Debug, FromPyObject, IntoPyObject)]
pub enum MaybeVec<T> {
    /// A single value of type T.
    Single(T),

    /// A vector of values of type T.
    Multiple(Vec<T>),
}

impl<T> MaybeVec<T> {
    /// Number of values held.
    #[allow(
        clippy::len_without_is_empty,
        reason = "Only used to match up argument lengths."
    )]
    pub fn len(&self) -> usize {
        match self {
            MaybeVec::Single(_) => 1,
            MaybeVec::Multiple(vec) => vec.len(),
        }
    }
}

impl<T: Clone> MaybeVec<T> {
    /// Expand into a vector of length `n`, repeating a single value as needed.
    ///
    /// A vector of length one is treated the same as a single value.
    pub fn broadcast(self, n: usize) -> Vec<T> {
        match self {
            MaybeVec::Single(value) => vec![value; n],
            MaybeVec::Multiple(vec) if vec.len() == 1 => vec![vec[0].clone(); n],
            MaybeVec::Multiple(vec) => vec,
        }
    }
}
