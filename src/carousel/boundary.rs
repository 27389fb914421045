use std::time::Duration;

/// A deferred jump from a sentinel slot back onto the real item it clones.
///
/// It is owned by the controller, so dropping the controller cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryCorrection {
    /// The sentinel slot the strip landed on.
    pub from: usize,
    /// The real slot showing the same item.
    pub to: usize,
    remaining: Duration,
}

impl BoundaryCorrection {
    /// Returns the correction needed when `active_index` is the given slot of
    /// a wrapped sequence of `wrapped_len` slots, if any.
    ///
    /// Slot `0` clones the last real item, and the last slot clones the first.
    pub fn for_slot(active_index: usize, wrapped_len: usize, delay: Duration) -> Option<Self> {
        // Two real items plus two sentinels is the smallest wrapped sequence.
        if wrapped_len < 4 {
            return None;
        }

        let to = if active_index == 0 {
            wrapped_len - 2
        } else if active_index == wrapped_len - 1 {
            1
        } else {
            return None;
        };

        Some(Self {
            from: active_index,
            to,
            remaining: delay,
        })
    }

    /// Time left before the correction fires.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Counts down by `elapsed`. Returns whether the correction is now due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.remaining.is_zero()
    }
}
