//! map/stats — сводный отчёт о состоянии карты.
//!
//! MapStats сериализуется в JSON (одна структура, serde) — удобно для
//! логов и внешней диагностики.

use anyhow::{Context, Result};
use serde::Serialize;

use super::core::SnapMap;

/// Point-in-time summary of one map instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapStats {
    /// Keys with any recorded history (tombstoned included).
    pub keys_total: usize,
    /// Keys whose live state is a value.
    pub keys_live: usize,
    /// Sum of all timeline lengths.
    pub history_entries: usize,
    /// Snapshots taken on this instance.
    pub snapshots_taken: u64,
}

impl MapStats {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize map stats")
    }
}

impl SnapMap {
    /// Collect [`MapStats`]. O(K).
    pub fn stats(&self) -> MapStats {
        MapStats {
            keys_total: self.key_count(),
            keys_live: self.len(),
            history_entries: self.store.values().map(|t| t.len()).sum(),
            snapshots_taken: self.snapshot_count(),
        }
    }
}
