// tests/metrics.rs
//
// Счётчики глобальные на процесс, поэтому этот бинарь держит ровно один
// тест: соседние тесты того же бинаря бежали бы параллельно и портили бы
// показания.

use anyhow::Result;

use SnapMapDB::metrics::{metrics_snapshot, reset_metrics};
use SnapMapDB::SnapMap;

#[test]
fn metrics_counters_track_operations() -> Result<()> {
    reset_metrics();
    let mut map = SnapMap::new();

    map.put("k", 1);
    map.put("k", 2); // coalesced
    map.put("x", 5);
    map.delete("k");
    map.delete("ghost"); // no-op
    map.take_snapshot();
    let _ = map.get_at_snapshot("x", 0)?;
    let _ = map.get_at_snapshot("k", 0); // DeletedAtSnapshot, still a lookup
    let _ = map.get_at_snapshot("late", 0); // unseen key, still a lookup

    map.put("late", 9);
    map.take_snapshot();
    let _ = map.get_at_snapshot("late", 0); // known key, absent at 0

    let m = metrics_snapshot();
    assert_eq!(m.puts_total, 4);
    assert_eq!(m.puts_coalesced, 1);
    assert_eq!(m.deletes_total, 2);
    assert_eq!(m.deletes_noop, 1);
    assert_eq!(m.snapshots_taken, 2);
    assert_eq!(m.snapshot_lookups, 4);
    assert_eq!(m.snapshot_absent, 1);
    assert!((m.coalesce_ratio() - 0.25).abs() < 1e-9);
    Ok(())
}
