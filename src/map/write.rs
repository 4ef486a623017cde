//! map/write — одиночные операции put/delete.
//!
//! Что внутри:
//! - put: тег pending-снапшотом, коалесинг внутри одного окна;
//! - delete: tombstone; для никогда не виденного ключа — тихий no-op
//!   (идемпотентность удаления, часть публичного контракта).
//!
//! Записи никогда не падают и не трогают ничего, кроме timeline ключа.

use log::debug;

use crate::history::{Slot, Timeline};
use crate::metrics::{record_delete, record_put};

use super::core::SnapMap;

impl SnapMap {
    /// Associate `value` with `key` as of the pending snapshot.
    ///
    /// All puts to one key between two `take_snapshot` calls collapse into a
    /// single history entry; only the last value is observable afterwards.
    pub fn put(&mut self, key: &str, value: i64) {
        let pending = self.clock.pending();
        let cap = self.cfg.history_capacity;
        let timeline = self
            .store
            .entry(key.to_string())
            .or_insert_with(|| Timeline::with_capacity(cap));
        let coalesced = timeline.record(pending, Slot::Present(value));
        record_put(coalesced);
    }

    /// Record the deletion of `key` as of the pending snapshot.
    ///
    /// Deleting a key that was never written is a no-op (idempotence
    /// guarantee); history is never removed, only a tombstone is recorded.
    /// Returns true when the key had any history.
    pub fn delete(&mut self, key: &str) -> bool {
        let pending = self.clock.pending();
        match self.store.get_mut(key) {
            Some(timeline) => {
                timeline.record(pending, Slot::Tombstone);
                record_delete(false);
                true
            }
            None => {
                debug!("delete of unseen key '{}' is a no-op", key);
                record_delete(true);
                false
            }
        }
    }
}
