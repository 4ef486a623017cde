//! map/core — ядро: структура SnapMap, конструкторы, clock и registry.
//!
//! SnapMap не синхронизирована внутренне: у всех операций нет I/O и
//! блокировок, конкурентный доступ сериализуется снаружи.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashMap;

use crate::clock::{SnapshotId, VersionClock};
use crate::config::{MapBuilder, SnapConfig};
use crate::history::Timeline;
use crate::metrics::record_snapshot_taken;
use crate::util::now_secs;

/// One line of the in-memory snapshot registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotRecord {
    pub id: SnapshotId,
    pub taken_at_unix: u64,
}

/// Versioned key-value map with O(1) snapshots and O(log H) historical reads.
///
/// Writes are tagged prospectively with the clock's pending id and coalesce
/// until the next [`take_snapshot`](Self::take_snapshot); history therefore
/// grows with the number of snapshots, not the number of writes. Timelines
/// are created lazily on first write and never removed — `delete` appends a
/// tombstone instead of dropping history.
#[derive(Debug, Default)]
pub struct SnapMap {
    pub(crate) store: HashMap<String, Timeline>,
    pub(crate) clock: VersionClock,
    registry: Vec<SnapshotRecord>,
    pub(crate) cfg: SnapConfig,
}

impl SnapMap {
    /// Map with default configuration.
    pub fn new() -> Self {
        Self::with_config(SnapConfig::default())
    }

    /// Map with an explicit configuration (see [`SnapMap::builder`]).
    pub fn with_config(cfg: SnapConfig) -> Self {
        Self {
            store: HashMap::with_capacity(cfg.map_capacity),
            clock: VersionClock::new(),
            registry: Vec::new(),
            cfg,
        }
    }

    /// Fluent configuration entry point.
    pub fn builder() -> MapBuilder {
        MapBuilder::new()
    }

    /// Close off the pending snapshot and return its id. O(1): a counter
    /// bump plus one registry append, no per-key work.
    pub fn take_snapshot(&mut self) -> SnapshotId {
        let id = self.clock.advance();
        let taken_at_unix = if self.cfg.registry_times {
            now_secs()
        } else {
            0
        };
        self.registry.push(SnapshotRecord { id, taken_at_unix });
        record_snapshot_taken();
        id
    }

    // ----------------- аксессоры -----------------

    /// Id the next `take_snapshot` will return; also the tag carried by
    /// writes made now.
    #[inline]
    pub fn next_snapshot_id(&self) -> SnapshotId {
        self.clock.pending()
    }

    /// Number of snapshots taken so far.
    #[inline]
    pub fn snapshot_count(&self) -> u64 {
        self.clock.pending()
    }

    /// Keys with any recorded history (tombstoned keys included). O(1).
    #[inline]
    pub fn key_count(&self) -> usize {
        self.store.len()
    }

    /// Keys whose live state is a value (not a tombstone). O(K).
    pub fn len(&self) -> usize {
        self.store
            .values()
            .filter(|t| t.latest().map(|e| !e.slot.is_tombstone()).unwrap_or(false))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registry of all snapshots taken on this instance.
    #[inline]
    pub fn snapshots(&self) -> &[SnapshotRecord] {
        &self.registry
    }

    /// Registry as pretty JSON.
    pub fn export_registry_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.registry).context("serialize snapshot registry")
    }
}
