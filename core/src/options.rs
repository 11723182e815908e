//! Construction options for array-backed containers.

use crate::error::{Error, Result};

/// Capacity used when none is specified.
pub const DEFAULT_CAPACITY: usize = 10;

/// How the backing buffer grows once it is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Grow by half of the current capacity.
    #[default]
    OneAndHalf,
    /// Double the current capacity.
    Double,
}

impl GrowthPolicy {
    /// Capacity to grow to from `current` so that at least `min` slots exist.
    ///
    /// Returns `max(grown, min)`, where `grown` is `current + current / 2` or
    /// `current * 2` depending on the policy.
    pub fn next_capacity(self, current: usize, min: usize) -> usize {
        let grown = match self {
            GrowthPolicy::OneAndHalf => current.saturating_add(current / 2),
            GrowthPolicy::Double => current.saturating_mul(2),
        };
        grown.max(min)
    }
}

/// Options for constructing an [`ArrayStore`](crate::store::ArrayStore) and the
/// containers built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Number of slots allocated up front. Must be greater than zero.
    pub initial_capacity: usize,
    /// Growth applied when an insert would exceed the capacity.
    pub growth: GrowthPolicy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth: GrowthPolicy::default(),
        }
    }
}

impl StoreOptions {
    /// Default options with a different initial capacity.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Checks that the options describe a constructible store.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(())
    }
}
