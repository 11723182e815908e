//! ArrayList: an ordered, index-addressable container on top of [`ArrayStore`].
//!
//! - `push` appends in amortized O(1), growing the buffer by half when full.
//! - `get` is O(1).
//! - `remove` is O(n): later elements shift left to close the gap.
//!
//! Traversal comes in two flavours. [`ArrayList::iter`] hands out read-only
//! iterators, any number of which may coexist. [`ArrayList::cursor`] borrows
//! the list exclusively and can remove the element it just yielded.

use core::fmt;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::options::StoreOptions;
use crate::stats::CapacityStats;
use crate::store::{ArrayStore, IntoIter, Iter};

/// Growable list with indexed access and cursor-based removal.
#[derive(Clone)]
pub struct ArrayList<T> {
    store: ArrayStore<T>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity.
    pub fn new() -> Self {
        Self {
            store: ArrayStore::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// Fails with [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) if
    /// `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_options(StoreOptions::with_capacity(capacity))
    }

    pub fn with_options(options: StoreOptions) -> Result<Self> {
        Ok(Self {
            store: ArrayStore::with_options(options)?,
        })
    }

    pub fn push(&mut self, value: T) {
        self.store.push(value);
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.store.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.store.get_mut(index)
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Elements after `index` move one position to the left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.store.remove(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn stats(&self) -> CapacityStats {
        self.store.stats()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }

    /// Starts a removal-capable traversal from the first element.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor::new(&mut self.store)
    }

    pub(crate) fn clear(&mut self) {
        self.store.clear();
    }

    /// Index of the first element equal to `value`. Linear scan.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.store.position(value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(value).is_some()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.store, f)
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}

/// Writes `[a, b, c]`.
pub(crate) fn write_bracketed<'a, T>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a T>,
) -> fmt::Result
where
    T: fmt::Display + 'a,
{
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;
