//! map — high-level API слоя snapshottable-карты.
//!
//! Разделение по подмодулям:
//! - core.rs  — структура SnapMap, конструкторы, clock/registry, аксессоры
//! - write.rs — put/delete (коалесинг записей до следующего снапшота)
//! - read.rs  — get/get_at_snapshot, SnapshotRead
//! - view.rs  — SnapshotView: read-only срез "as of snapshot"
//! - stats.rs — MapStats, JSON-отчёт

pub mod core;
pub mod read;
pub mod stats;
pub mod view;
pub mod write;

pub use core::{SnapMap, SnapshotRecord};
pub use read::SnapshotRead;
pub use stats::MapStats;
pub use view::SnapshotView;
