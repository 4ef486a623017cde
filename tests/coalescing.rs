// tests/coalescing.rs
//
// Коалесинг записей: между двумя снапшотами любая серия put/delete по
// одному ключу наблюдаемо эквивалентна одной последней операции, а длина
// истории ограничена числом снапшотов, а не числом записей.

use anyhow::Result;

use SnapMapDB::{MapError, SnapMap, SnapshotRead};

#[test]
fn many_puts_one_window_one_entry() -> Result<()> {
    let mut map = SnapMap::new();

    for v in 0..1000i64 {
        map.put("k", v);
    }
    let s0 = map.take_snapshot();

    // Intermediate values are unobservable.
    assert_eq!(map.get_at_snapshot("k", s0)?, SnapshotRead::Value(999));
    assert_eq!(map.get("k")?, 999);

    // One window of 1000 writes => one history entry.
    assert_eq!(map.stats().history_entries, 1);
    Ok(())
}

#[test]
fn put_delete_put_within_window_keeps_last() -> Result<()> {
    let mut map = SnapMap::new();

    map.put("k", 1);
    map.delete("k");
    map.put("k", 3);
    let s0 = map.take_snapshot();
    assert_eq!(map.get_at_snapshot("k", s0)?, SnapshotRead::Value(3));
    assert_eq!(map.stats().history_entries, 1);

    // Window ending on a tombstone coalesces down to a tombstone.
    map.put("k", 4);
    map.delete("k");
    let s1 = map.take_snapshot();
    assert!(matches!(
        map.get_at_snapshot("k", s1),
        Err(MapError::DeletedAtSnapshot { .. })
    ));
    // Earlier snapshot is untouched by later coalescing.
    assert_eq!(map.get_at_snapshot("k", s0)?, SnapshotRead::Value(3));
    assert_eq!(map.stats().history_entries, 2);
    Ok(())
}

#[test]
fn history_grows_with_snapshots_not_writes() -> Result<()> {
    let mut map = SnapMap::new();

    for round in 0..10u64 {
        for v in 0..100i64 {
            map.put("k", round as i64 * 1000 + v);
        }
        map.take_snapshot();
    }
    // 1000 writes, 10 windows => 10 entries.
    assert_eq!(map.stats().history_entries, 10);

    for id in 0..10u64 {
        assert_eq!(
            map.get_at_snapshot("k", id)?,
            SnapshotRead::Value(id as i64 * 1000 + 99)
        );
    }
    Ok(())
}

#[test]
fn untouched_window_adds_no_entry() -> Result<()> {
    let mut map = SnapMap::new();

    map.put("k", 1);
    map.take_snapshot(); // 0
    map.take_snapshot(); // 1, key untouched
    map.take_snapshot(); // 2, key untouched
    map.put("k", 2);
    map.take_snapshot(); // 3

    assert_eq!(map.stats().history_entries, 2);
    // Sparse timeline still resolves through the gap.
    assert_eq!(map.get_at_snapshot("k", 1)?, SnapshotRead::Value(1));
    assert_eq!(map.get_at_snapshot("k", 2)?, SnapshotRead::Value(1));
    assert_eq!(map.get_at_snapshot("k", 3)?, SnapshotRead::Value(2));
    Ok(())
}
