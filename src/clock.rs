//! clock — monotonic snapshot id allocation.
//!
//! The clock is owned by one map instance (a plain field, not a global).
//! `pending()` is the id that the *next* `advance()` will return; writes are
//! tagged with it prospectively, so advancing the clock closes them off
//! without touching any per-key state.

/// Identifier of one closed-off snapshot. Issued densely starting at 0.
pub type SnapshotId = u64;

/// Monotonic counter behind `take_snapshot`.
#[derive(Debug, Default, Clone)]
pub struct VersionClock {
    next: SnapshotId,
}

impl VersionClock {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Id that the next call to [`advance`](Self::advance) will issue.
    /// Entries written now are tagged with this value.
    #[inline]
    pub fn pending(&self) -> SnapshotId {
        self.next
    }

    /// Close off the pending snapshot. Returns the pre-increment value.
    #[inline]
    pub fn advance(&mut self) -> SnapshotId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// True iff `id` has been issued by a previous [`advance`](Self::advance).
    #[inline]
    pub fn is_issued(&self, id: SnapshotId) -> bool {
        id < self.next
    }
}
