//! Time helpers shared across host contracts and widgets.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Milliseconds elapsed between `start_ms` and `now_ms`, saturating at zero when the clock
/// moved backwards.
pub fn elapsed_ms(start_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(start_ms)
}
