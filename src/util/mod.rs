//! util — мелкие общие хелперы.
//!
//! - now_secs(): текущее Unix-время в секундах (u64, saturating).

/// Текущее Unix-время в секундах.
#[inline]
pub fn now_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_secs_nonzero() {
        assert!(now_secs() > 1_600_000_000);
    }
}
