//! ArraySet: an [`ArrayList`] that refuses duplicates.
//!
//! Membership is decided by `PartialEq` with a linear scan, so `insert`,
//! `remove` and `contains` are all O(n). Elements keep insertion order.
//!
//! There is no null in Rust. An `ArraySet<Option<T>>` gives the same
//! behaviour: a `None` probe matches only a stored `None`.

use core::fmt;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::list::{ArrayList, write_bracketed};
use crate::options::StoreOptions;
use crate::stats::CapacityStats;
use crate::store::Iter;

/// Insertion-ordered set backed by a growable array.
///
/// Two sets are equal when they hold the same elements, in any order.
#[derive(Clone)]
pub struct ArraySet<T> {
    items: ArrayList<T>,
}

impl<T: PartialEq> ArraySet<T> {
    pub fn new() -> Self {
        Self {
            items: ArrayList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_options(StoreOptions::with_capacity(capacity))
    }

    pub fn with_options(options: StoreOptions) -> Result<Self> {
        Ok(Self {
            items: ArrayList::with_options(options)?,
        })
    }

    /// Adds `value` unless an equal element is already present.
    ///
    /// Returns `true` if the value was added.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes the element equal to `value`, if any.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.position(value) {
            Some(index) => self.items.remove(index).is_ok(),
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Element at `index` in insertion order.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index)
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copies the current elements into a new, independent `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn stats(&self) -> CapacityStats {
        self.items.stats()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Removal-capable traversal. Removing cannot introduce duplicates, so the
    /// set stays valid.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        self.items.cursor()
    }
}

impl<T: PartialEq> Default for ArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for ArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Eq> Eq for ArraySet<T> {}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArraySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.items.iter())
    }
}

impl<T: PartialEq> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "set_test.rs"]
mod set_test;
