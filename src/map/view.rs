//! map/view — SnapshotView: read-only срез "as of snapshot".
//!
//! Id валидируется один раз при создании; дальше get/contains работают
//! против зафиксированного снапшота, заимствуя карту по shared-ссылке.

use crate::clock::SnapshotId;
use crate::error::{MapError, MapResult};

use super::core::SnapMap;
use super::read::SnapshotRead;

/// Read-only view of the map at one closed-off snapshot.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotView<'a> {
    map: &'a SnapMap,
    id: SnapshotId,
}

impl<'a> SnapshotView<'a> {
    pub(crate) fn new(map: &'a SnapMap, id: SnapshotId) -> Self {
        Self { map, id }
    }

    /// Snapshot this view is pinned to.
    #[inline]
    pub fn id(&self) -> SnapshotId {
        self.id
    }

    /// Value of `key` at this snapshot (same contract as
    /// [`SnapMap::get_at_snapshot`]).
    pub fn get(&self, key: &str) -> MapResult<SnapshotRead> {
        self.map.get_at_snapshot(key, self.id)
    }

    /// True when `key` resolved to a value at this snapshot.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(SnapshotRead::Value(_)))
    }
}

impl SnapMap {
    /// View pinned to snapshot `id`; fails with `SnapshotOutOfRange` when
    /// `id` was never issued.
    pub fn snapshot_view(&self, id: SnapshotId) -> MapResult<SnapshotView<'_>> {
        if !self.clock.is_issued(id) {
            return Err(MapError::SnapshotOutOfRange {
                requested: id,
                next: self.clock.pending(),
            });
        }
        Ok(SnapshotView::new(self, id))
    }
}
