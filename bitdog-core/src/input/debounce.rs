//! Time-based button debouncing
//!
//! A press is accepted only if at least `min_interval_ms` have passed since
//! the last accepted press. Timestamps are milliseconds since boot and may
//! wrap.

/// Per-button debouncer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    min_interval_ms: u32,
    /// Time of the last accepted press. Starts at boot (0), so presses in
    /// the first interval after boot are rejected.
    last_ms: u32,
}

impl Debouncer {
    /// Create a debouncer with the given minimum interval
    pub const fn new(min_interval_ms: u32) -> Self {
        Self {
            min_interval_ms,
            last_ms: 0,
        }
    }

    /// Register an edge at `now_ms`
    ///
    /// Returns true if the edge counts as a new press.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) < self.min_interval_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }

    /// Time of the last accepted press
    pub fn last_ms(&self) -> u32 {
        self.last_ms
    }
}
