//! history — per-key timeline of (snapshot, slot) entries.
//!
//! Что внутри:
//! - Slot: tagged value-or-tombstone (never a bare Option conflated with
//!   "absent from the map");
//! - HistoryEntry: one immutable record once its snapshot id is closed off;
//! - Timeline: growable ordered arena per key — append with coalescing,
//!   O(1) latest, O(log H) rightmost-`<=` binary search.
//!
//! Invariant: snapshot ids inside one timeline are strictly increasing and
//! unique. `record` preserves it by overwriting in place while the tail
//! entry still carries the pending (not yet issued) id.

use log::trace;

use crate::clock::SnapshotId;

/// Recorded state of a key at one snapshot: a value or a deletion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Present(i64),
    Tombstone,
}

impl Slot {
    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    #[inline]
    pub fn value(&self) -> Option<i64> {
        match self {
            Slot::Present(v) => Some(*v),
            Slot::Tombstone => None,
        }
    }
}

/// One record in a key's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub snapshot: SnapshotId,
    pub slot: Slot,
}

/// Ordered, append-only history of one key.
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    entries: Vec<HistoryEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Last recorded slot (the live state of the key), if any.
    #[inline]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Record `slot` under the pending snapshot id.
    ///
    /// Coalescing: while the tail entry still carries `pending`, the write
    /// overwrites it in place; history length is bounded by the number of
    /// snapshots, not the number of writes. Returns true when coalesced.
    pub fn record(&mut self, pending: SnapshotId, slot: Slot) -> bool {
        if let Some(last) = self.entries.last_mut() {
            if last.snapshot == pending {
                trace!(
                    "coalesce write under pending snapshot {} ({:?} -> {:?})",
                    pending,
                    last.slot,
                    slot
                );
                last.slot = slot;
                return true;
            }
            debug_assert!(last.snapshot < pending, "timeline ids must increase");
        }
        self.entries.push(HistoryEntry {
            snapshot: pending,
            slot,
        });
        false
    }

    /// Rightmost entry with `snapshot <= id`, or None when the whole
    /// timeline is newer than `id`. Two-pointer binary search, O(log H).
    pub fn seek_at(&self, id: SnapshotId) -> Option<&HistoryEntry> {
        let mut lo = 0isize;
        let mut hi = self.entries.len() as isize - 1;
        let mut best: isize = -1;

        while lo <= hi {
            let mid = (lo + hi) / 2;
            if self.entries[mid as usize].snapshot <= id {
                best = mid;
                lo = mid + 1;
            } else {
                hi = mid - 1;
            }
        }

        if best < 0 {
            None
        } else {
            Some(&self.entries[best as usize])
        }
    }

    /// Linear-scan oracle for [`seek_at`](Self::seek_at). Test/debug only.
    pub fn seek_at_linear(&self, id: SnapshotId) -> Option<&HistoryEntry> {
        self.entries.iter().rev().find(|e| e.snapshot <= id)
    }
}
