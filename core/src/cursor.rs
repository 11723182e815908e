//! Stateful traversal that can remove the element it last yielded.
//!
//! A [`Cursor`] walks a container front to back:
//!
//! ```text
//!            position
//!               │
//! [ A | B | C | D ]     next() -> C, position = 3, removable
//!           ▲           remove() -> C, position = 2, not removable
//!       last yielded
//! ```
//!
//! `remove()` deletes the element returned by the most recent `next()` and
//! steps the position back by one, so the element that slid into its place is
//! yielded next. Removal is allowed once per successful `next()`.
//!
//! The cursor borrows its container mutably for its whole lifetime, so no
//! other traversal can observe or cause a structural change while it lives.
//! There is no modification counter.

use crate::error::{Error, Result};
use crate::store::ArrayStore;

/// Observable state of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Elements remain and nothing is eligible for removal: the cursor was
    /// just created or the last yielded element was already removed.
    Fresh,
    /// The element returned by the last `next()` can be removed.
    Advanced,
    /// No elements remain.
    Exhausted,
}

/// Removal-capable cursor over an [`ArrayList`](crate::ArrayList) or
/// [`ArraySet`](crate::ArraySet).
pub struct Cursor<'a, T> {
    store: &'a mut ArrayStore<T>,
    position: usize,
    removable: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(store: &'a mut ArrayStore<T>) -> Self {
        Self {
            store,
            position: 0,
            removable: false,
        }
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.position < self.store.len()
    }

    /// Returns the element at the current position and advances.
    ///
    /// Fails with [`Error::Exhausted`] once every element has been yielded.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        let index = self.position;
        self.position += 1;
        self.removable = true;
        self.store.get(index)
    }

    /// Removes the element returned by the last `next()` and returns it.
    ///
    /// Fails with [`Error::IllegalState`] if `next()` has not succeeded since
    /// the cursor was created or since the previous `remove()`.
    pub fn remove(&mut self) -> Result<T> {
        if !self.removable {
            return Err(Error::IllegalState);
        }
        let index = self.position - 1;
        let removed = self.store.remove(index)?;
        self.position = index;
        self.removable = false;
        tracing::debug!(index, remaining = self.store.len(), "cursor removed element");
        Ok(removed)
    }

    /// Whether `remove()` would succeed.
    pub fn can_remove(&self) -> bool {
        self.removable
    }

    /// Index of the element the next `next()` call yields.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn state(&self) -> CursorState {
        if !self.has_next() {
            CursorState::Exhausted
        } else if self.removable {
            CursorState::Advanced
        } else {
            CursorState::Fresh
        }
    }
}
