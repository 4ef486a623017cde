//! Lightweight global metrics for SnapMapDB.
//!
//! Потокобезопасные атомарные счётчики для подсистем:
//! - Write path (puts / coalescing / deletes)
//! - Version clock (snapshots taken)
//! - Historical reads (lookups / absent results)

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Write path -----
static PUTS_TOTAL: AtomicU64 = AtomicU64::new(0);
static PUTS_COALESCED: AtomicU64 = AtomicU64::new(0);
static DELETES_TOTAL: AtomicU64 = AtomicU64::new(0);
static DELETES_NOOP: AtomicU64 = AtomicU64::new(0);

// ----- Version clock -----
static SNAPSHOTS_TAKEN: AtomicU64 = AtomicU64::new(0);

// ----- Historical reads -----
static SNAPSHOT_LOOKUPS: AtomicU64 = AtomicU64::new(0);
static SNAPSHOT_ABSENT: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    // Write path
    pub puts_total: u64,
    pub puts_coalesced: u64,
    pub deletes_total: u64,
    pub deletes_noop: u64,

    // Version clock
    pub snapshots_taken: u64,

    // Historical reads
    pub snapshot_lookups: u64,
    pub snapshot_absent: u64,
}

impl MetricsSnapshot {
    /// Share of writes that landed on an already-pending entry.
    pub fn coalesce_ratio(&self) -> f64 {
        if self.puts_total == 0 {
            0.0
        } else {
            self.puts_coalesced as f64 / self.puts_total as f64
        }
    }
}

// ----- Recorders (write path) -----
pub fn record_put(coalesced: bool) {
    PUTS_TOTAL.fetch_add(1, Ordering::Relaxed);
    if coalesced {
        PUTS_COALESCED.fetch_add(1, Ordering::Relaxed);
    }
}

pub fn record_delete(noop: bool) {
    DELETES_TOTAL.fetch_add(1, Ordering::Relaxed);
    if noop {
        DELETES_NOOP.fetch_add(1, Ordering::Relaxed);
    }
}

// ----- Recorders (version clock) -----
pub fn record_snapshot_taken() {
    SNAPSHOTS_TAKEN.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (historical reads) -----
pub fn record_snapshot_lookup() {
    SNAPSHOT_LOOKUPS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_snapshot_absent() {
    SNAPSHOT_ABSENT.fetch_add(1, Ordering::Relaxed);
}

/// Consistent-enough point-in-time copy of all counters.
pub fn metrics_snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        puts_total: PUTS_TOTAL.load(Ordering::Relaxed),
        puts_coalesced: PUTS_COALESCED.load(Ordering::Relaxed),
        deletes_total: DELETES_TOTAL.load(Ordering::Relaxed),
        deletes_noop: DELETES_NOOP.load(Ordering::Relaxed),
        snapshots_taken: SNAPSHOTS_TAKEN.load(Ordering::Relaxed),
        snapshot_lookups: SNAPSHOT_LOOKUPS.load(Ordering::Relaxed),
        snapshot_absent: SNAPSHOT_ABSENT.load(Ordering::Relaxed),
    }
}

/// Reset all counters to zero (tests/benchmarks).
pub fn reset_metrics() {
    PUTS_TOTAL.store(0, Ordering::Relaxed);
    PUTS_COALESCED.store(0, Ordering::Relaxed);
    DELETES_TOTAL.store(0, Ordering::Relaxed);
    DELETES_NOOP.store(0, Ordering::Relaxed);
    SNAPSHOTS_TAKEN.store(0, Ordering::Relaxed);
    SNAPSHOT_LOOKUPS.store(0, Ordering::Relaxed);
    SNAPSHOT_ABSENT.store(0, Ordering::Relaxed);
}
