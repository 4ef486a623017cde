#![allow(non_snake_case)]

// Базовые модули
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod metrics;

// Структура карты (папка с mod.rs)
pub mod map; // src/map/{mod,core,write,read,view,stats}.rs

// Утилиты (now_secs)
pub mod util; // src/util/mod.rs

// Удобные реэкспорты
pub use clock::{SnapshotId, VersionClock};
pub use config::{MapBuilder, SnapConfig};
pub use error::{MapError, MapResult};
pub use history::{HistoryEntry, Slot, Timeline};
pub use map::{MapStats, SnapMap, SnapshotRead, SnapshotRecord, SnapshotView};
