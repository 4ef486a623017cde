//! map/read — текущее чтение и исторический поиск.
//!
//! Что внутри:
//! - get: O(1), последний слот timeline; tombstone => KeyNotFound;
//! - get_at_snapshot: проверка диапазона, затем O(log H) бинарный поиск
//!   последней записи с snapshot <= id.
//!
//! Политика "absent": ключ, который карта вообще не видела — ошибка
//! KeyNotFound; ключ, известный карте, но записанный позже запрошенного
//! снапшота — типизированный Ok(SnapshotRead::Absent). Третий случай,
//! tombstone на найденной позиции — ошибка DeletedAtSnapshot.

use log::debug;

use crate::clock::SnapshotId;
use crate::error::{MapError, MapResult};
use crate::history::Slot;
use crate::metrics::{record_snapshot_absent, record_snapshot_lookup};

use super::core::SnapMap;

/// Successful outcome of a historical lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotRead {
    /// Key held this value at the queried snapshot.
    Value(i64),
    /// Key was not yet written at the queried snapshot.
    Absent,
}

impl SnapshotRead {
    /// Value, or None for `Absent`.
    #[inline]
    pub fn value(&self) -> Option<i64> {
        match self {
            SnapshotRead::Value(v) => Some(*v),
            SnapshotRead::Absent => None,
        }
    }
}

impl SnapMap {
    /// Current value of `key`. O(1).
    pub fn get(&self, key: &str) -> MapResult<i64> {
        let timeline = self.store.get(key).ok_or_else(|| MapError::KeyNotFound {
            key: key.to_string(),
        })?;
        match timeline.latest().map(|e| e.slot) {
            Some(Slot::Present(v)) => Ok(v),
            // Live tombstone reads the same as no history (original `get`
            // contract); the two stay distinguishable in historical reads.
            Some(Slot::Tombstone) | None => Err(MapError::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// True when `key` currently resolves to a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store
            .get(key)
            .and_then(|t| t.latest())
            .map(|e| !e.slot.is_tombstone())
            .unwrap_or(false)
    }

    /// Value of `key` as of closed-off snapshot `id`. O(log H).
    ///
    /// Errors: `SnapshotOutOfRange` when `id` was never issued (including
    /// the no-snapshot-yet case), `KeyNotFound` when the map has never seen
    /// the key, `DeletedAtSnapshot` when the key resolves to a tombstone.
    /// A key the map knows that was first written *after* `id` is not an
    /// error: `Ok(SnapshotRead::Absent)`.
    pub fn get_at_snapshot(&self, key: &str, id: SnapshotId) -> MapResult<SnapshotRead> {
        record_snapshot_lookup();

        if !self.clock.is_issued(id) {
            return Err(MapError::SnapshotOutOfRange {
                requested: id,
                next: self.clock.pending(),
            });
        }

        let timeline = self.store.get(key).ok_or_else(|| MapError::KeyNotFound {
            key: key.to_string(),
        })?;

        match timeline.seek_at(id) {
            None => {
                debug!("key '{}' did not exist yet in snapshot {}", key, id);
                record_snapshot_absent();
                Ok(SnapshotRead::Absent)
            }
            Some(entry) => match entry.slot {
                Slot::Present(v) => Ok(SnapshotRead::Value(v)),
                Slot::Tombstone => Err(MapError::DeletedAtSnapshot {
                    key: key.to_string(),
                    snapshot: id,
                }),
            },
        }
    }
}
