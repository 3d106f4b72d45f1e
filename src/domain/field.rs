//! Generic field wrapper shared by the record value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value attached to a record, rendered through its `Display`.
///
/// `Field` carries no invariants of its own. The validated value objects
/// ([`Name`](super::Name), [`Phone`](super::Phone),
/// [`Birthday`](super::Birthday)) wrap a `Field` and only hand out mutable
/// access after their own checks pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field<T>(T);

impl<T> Field<T> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value.
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Replace the wrapped value, returning the previous one.
    pub(crate) fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.0, value)
    }

    /// Convert into the wrapped value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
