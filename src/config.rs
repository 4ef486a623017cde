//! Centralized configuration and builder for SnapMapDB.
//!
//! Goals:
//! - Single place for tunables instead of scattered env lookups.
//! - SnapConfig::from_env() reads the SM_* env vars; MapBuilder overrides
//!   specific fields fluently and SnapMap consumes the result.
//!
//! Knobs:
//! - map_capacity      — initial key capacity of the backing HashMap.
//! - history_capacity  — initial per-key timeline capacity.
//! - registry_times    — record wall-clock time per snapshot in the registry
//!   (off => taken_at_unix = 0, useful for deterministic output in tests).

use std::fmt;

/// Top-level configuration for a [`SnapMap`](crate::SnapMap) instance.
#[derive(Clone, Debug)]
pub struct SnapConfig {
    /// Initial key capacity of the map.
    /// Env: SM_MAP_CAPACITY (default 0)
    pub map_capacity: usize,

    /// Initial capacity reserved for each new key's timeline.
    /// Env: SM_HISTORY_CAPACITY (default 4)
    pub history_capacity: usize,

    /// Whether `take_snapshot` records a unix timestamp in the registry.
    /// Env: SM_REGISTRY_TIMES (default true; "1|true|on|yes" => true)
    pub registry_times: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            map_capacity: 0,
            history_capacity: 4,
            registry_times: true,
        }
    }
}

impl SnapConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("SM_MAP_CAPACITY") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.map_capacity = n;
            }
        }

        if let Ok(v) = std::env::var("SM_HISTORY_CAPACITY") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.history_capacity = n;
            }
        }

        if let Ok(v) = std::env::var("SM_REGISTRY_TIMES") {
            let s = v.trim().to_ascii_lowercase();
            cfg.registry_times = s == "1" || s == "true" || s == "on" || s == "yes";
        }

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_map_capacity(mut self, cap: usize) -> Self {
        self.map_capacity = cap;
        self
    }

    pub fn with_history_capacity(mut self, cap: usize) -> Self {
        self.history_capacity = cap;
        self
    }

    pub fn with_registry_times(mut self, on: bool) -> Self {
        self.registry_times = on;
        self
    }
}

impl fmt::Display for SnapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SnapConfig {{ map_capacity: {}, history_capacity: {}, registry_times: {} }}",
            self.map_capacity, self.history_capacity, self.registry_times,
        )
    }
}

/// Lightweight builder that produces a SnapConfig.
/// SnapMap exposes `SnapMap::builder()` returning this builder.
#[derive(Clone, Debug)]
pub struct MapBuilder {
    cfg: SnapConfig,
}

impl Default for MapBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: SnapConfig::from_env(),
        }
    }
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: SnapConfig::default(),
        }
    }

    pub fn map_capacity(mut self, cap: usize) -> Self {
        self.cfg.map_capacity = cap;
        self
    }

    pub fn history_capacity(mut self, cap: usize) -> Self {
        self.cfg.history_capacity = cap;
        self
    }

    pub fn registry_times(mut self, on: bool) -> Self {
        self.cfg.registry_times = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> SnapConfig {
        self.cfg
    }
}
