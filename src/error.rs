//! error — typed error surface of the map.
//!
//! Three distinguishable kinds:
//! - SnapshotOutOfRange — historical read against an id that was never issued;
//! - KeyNotFound        — key has no history, or its live value is a tombstone;
//! - DeletedAtSnapshot  — key resolved to a tombstone at the queried snapshot.
//!
//! None of these leave the map in a degraded state; every operation is atomic
//! and in-memory, so callers may retry or ignore freely.

use crate::clock::SnapshotId;

/// Errors returned by [`SnapMap`](crate::SnapMap) read operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// Requested snapshot id outside `[0, next)`. `next == 0` means no
    /// snapshot has been taken yet.
    #[error("invalid snapshot id {requested}: {}", valid_range_hint(.next))]
    SnapshotOutOfRange {
        requested: SnapshotId,
        next: SnapshotId,
    },

    /// Key has no recorded history, or its current value is a tombstone.
    #[error("key '{key}' not found (it may have been deleted)")]
    KeyNotFound { key: String },

    /// Key existed but was tombstoned at or before the queried snapshot.
    #[error("key '{key}' did not exist in snapshot {snapshot} (it was deleted)")]
    DeletedAtSnapshot { key: String, snapshot: SnapshotId },
}

pub type MapResult<T> = Result<T, MapError>;

fn valid_range_hint(next: &SnapshotId) -> String {
    if *next == 0 {
        "no snapshots taken yet".to_string()
    } else {
        format!("valid range is 0 to {}", next - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_range_hint() {
        let e = MapError::SnapshotOutOfRange {
            requested: 7,
            next: 0,
        };
        assert!(e.to_string().contains("no snapshots taken yet"));

        let e = MapError::SnapshotOutOfRange {
            requested: 7,
            next: 3,
        };
        assert!(e.to_string().contains("0 to 2"));
    }
}
