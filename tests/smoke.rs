use anyhow::Result;

use SnapMapDB::{MapError, SnapMap};

#[test]
fn smoke_put_get_del_snapshot() -> Result<()> {
    let mut map = SnapMap::new();

    // 1) fresh map: nothing to read, no snapshots
    assert_eq!(map.next_snapshot_id(), 0);
    assert_eq!(map.key_count(), 0);
    assert!(map.is_empty());
    assert!(matches!(map.get("alpha"), Err(MapError::KeyNotFound { .. })));

    // 2) writes are visible immediately via get
    map.put("alpha", 1);
    map.put("beta", 2);
    assert_eq!(map.get("alpha")?, 1);
    assert_eq!(map.get("beta")?, 2);
    assert!(map.contains_key("alpha"));
    assert_eq!(map.len(), 2);

    // 3) snapshot is a pure counter bump
    let s0 = map.take_snapshot();
    assert_eq!(s0, 0);
    assert_eq!(map.next_snapshot_id(), 1);
    assert_eq!(map.snapshot_count(), 1);

    // 4) delete writes a tombstone, get turns into not-found
    assert!(map.delete("alpha"));
    assert!(matches!(map.get("alpha"), Err(MapError::KeyNotFound { .. })));
    assert!(!map.contains_key("alpha"));
    assert_eq!(map.len(), 1);
    // history is kept, the key still counts as seen
    assert_eq!(map.key_count(), 2);

    // 5) delete of an unseen key is a silent no-op
    assert!(!map.delete("ghost"));
    assert_eq!(map.key_count(), 2);

    // 6) overwrite resurrects a tombstoned key
    map.put("alpha", 7);
    assert_eq!(map.get("alpha")?, 7);

    Ok(())
}

#[test]
fn builder_and_config() -> Result<()> {
    let cfg = SnapMap::builder()
        .map_capacity(64)
        .history_capacity(8)
        .registry_times(false)
        .build();
    assert_eq!(cfg.map_capacity, 64);
    assert_eq!(cfg.history_capacity, 8);
    assert!(!cfg.registry_times);

    let mut map = SnapMap::with_config(cfg.clone());
    map.put("k", 1);
    let s0 = map.take_snapshot();
    assert_eq!(s0, 0);
    // registry_times=false freezes timestamps to 0
    assert_eq!(map.snapshots()[0].taken_at_unix, 0);

    // Display report mentions every knob
    let shown = format!("{cfg}");
    assert!(shown.contains("map_capacity: 64"));
    assert!(shown.contains("history_capacity: 8"));
    assert!(shown.contains("registry_times: false"));
    Ok(())
}
