//! Growable slot buffer backing every container in this crate.
//!
//! `ArrayStore` keeps a boxed slice of slots and a logical length:
//!
//! ```text
//! slots:  [ Some(a) | Some(b) | Some(c) | None | None ]
//!           └──────── 0..len ────────┘  └─ len..capacity ─┘
//! ```
//!
//! Slots below `len` always hold an element, slots at or above it are always
//! `None`. Removing or clearing an element empties its slot, so the store
//! never keeps a dropped-from-the-container value alive.
//!
//! Capacity only grows, and only when an insert needs the room. It is never
//! shrunk.

use core::{fmt, iter, slice};
use std::vec;

use crate::error::{Error, Result};
use crate::options::{GrowthPolicy, StoreOptions};
use crate::stats::CapacityStats;

/// Contiguous, growable storage with shift-on-remove.
pub struct ArrayStore<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    growth: GrowthPolicy,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayStore<T> {
    /// Creates a store with the default capacity and growth policy.
    pub fn new() -> Self {
        let options = StoreOptions::default();
        Self {
            slots: empty_slots(options.initial_capacity),
            len: 0,
            growth: options.growth,
        }
    }

    /// Creates a store from explicit options.
    ///
    /// Fails with [`Error::InvalidCapacity`] if `initial_capacity` is zero.
    pub fn with_options(options: StoreOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            slots: empty_slots(options.initial_capacity),
            len: 0,
            growth: options.growth,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    pub fn stats(&self) -> CapacityStats {
        CapacityStats {
            len: self.len,
            capacity: self.capacity(),
        }
    }

    /// Makes sure at least `min` slots exist, growing per the policy if not.
    pub fn ensure_capacity(&mut self, min: usize) {
        if self.capacity() >= min {
            return;
        }
        self.grow(self.growth.next_capacity(self.capacity(), min));
    }

    #[cold]
    fn grow(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        tracing::trace!(from = self.capacity(), to = new_capacity, "growing array store");

        let mut grown = empty_slots(new_capacity);
        for (dst, src) in grown.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }
        self.slots = grown;
    }

    /// Appends `value` at index `len`.
    pub fn push(&mut self, value: T) {
        self.ensure_capacity(self.len + 1);
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::OutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::OutOfRange { index, len })
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let live = &mut self.slots[..len];
        let Some(removed) = live.get_mut(index).and_then(Option::take) else {
            return Err(Error::OutOfRange { index, len });
        };

        // The emptied slot travels to `len - 1`, which becomes the first
        // unused slot.
        live[index..].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Drops every element and resets the length. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots[..self.len].iter(),
        }
    }
}

impl<T> IntoIterator for ArrayStore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.len);
        IntoIter {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Default for ArrayStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayStore<T> {
    fn clone(&self) -> Self {
        // Keep the same capacity so the clone grows at the same points.
        let mut slots = empty_slots(self.capacity());
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter()) {
            dst.clone_from(src);
        }
        Self {
            slots,
            len: self.len,
            growth: self.growth,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Read-only traversal over the live elements of a store.
///
/// Any number of these may exist at once; each keeps its own position.
#[derive(Clone)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning traversal, front to back.
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.slots.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
