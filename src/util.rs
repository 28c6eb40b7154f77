// Small helpers shared by components and state.

use wasm_bindgen::JsValue;

/// "{m}m {s}s", seconds rounded up so a fresh interval never reads one second short.
pub fn format_countdown(remaining_ms: u64) -> String {
    let secs = remaining_ms.div_ceil(1000);
    format!("{}m {}s", secs / 60, secs % 60)
}

/// Like `format_countdown` but with an hours field once an hour or more remains.
pub fn format_long_countdown(remaining_ms: u64) -> String {
    let secs = remaining_ms.div_ceil(1000);
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else {
        format!("{}m {}s", m, s)
    }
}

/// Wall clock in milliseconds since the epoch.
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Debug console log; silent in release builds and off-wasm.
pub fn clog(msg: &str) {
    if cfg!(all(target_arch = "wasm32", debug_assertions)) {
        web_sys::console::log_1(&JsValue::from_str(msg));
    }
}

pub fn cwarn(msg: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::warn_1(&JsValue::from_str(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_rounds_partial_seconds_up() {
        assert_eq!(format_countdown(60_000), "1m 0s");
        assert_eq!(format_countdown(59_001), "1m 0s");
        assert_eq!(format_countdown(59_000), "0m 59s");
        assert_eq!(format_countdown(0), "0m 0s");
    }

    #[test]
    fn long_countdown_shows_hours_only_when_needed() {
        assert_eq!(format_long_countdown(3_600_000), "1h 0m 0s");
        assert_eq!(format_long_countdown(3_599_000), "59m 59s");
        assert_eq!(format_long_countdown(90_061_000), "25h 1m 1s");
    }
}
