//! Capacity usage snapshots.

use core::fmt;

/// Point-in-time view of how much of a container's buffer is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityStats {
    pub len: usize,
    pub capacity: usize,
}

impl CapacityStats {
    /// Slots allocated but not holding an element.
    pub fn unused(&self) -> usize {
        self.capacity.saturating_sub(self.len)
    }

    /// Percentage of slots in use.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.len as f64 / self.capacity as f64 * 100.0
    }
}

impl fmt::Display for CapacityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "len={} capacity={} unused={} utilization={:.1}%",
            self.len,
            self.capacity,
            self.unused(),
            self.utilization()
        )
    }
}
