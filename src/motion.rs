//! Frame-sampled counters and typewriter text.
//!
//! Both effects are pure functions of elapsed time, so a section only needs a
//! start timestamp and an animation-frame callback; there is no interval to
//! clear.

/// Counter value after `elapsed_ms` of a linear `duration_ms` ramp to `target`.
pub fn progress(elapsed_ms: f64, duration_ms: f64, target: u32) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    if elapsed_ms <= 0.0 || elapsed_ms.is_nan() {
        return 0;
    }
    let value = (target as f64 * elapsed_ms / duration_ms).floor() as u32;
    value.min(target)
}

/// First `elapsed_ms / interval_ms` characters of `text`.
pub fn typed_prefix(text: &str, elapsed_ms: f64, interval_ms: f64) -> &str {
    if interval_ms <= 0.0 {
        return text;
    }
    if elapsed_ms <= 0.0 || elapsed_ms.is_nan() {
        return "";
    }
    let chars = (elapsed_ms / interval_ms).floor() as usize;
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Time after which `typed_prefix` returns the whole string.
pub fn typing_duration(text: &str, interval_ms: f64) -> f64 {
    text.chars().count() as f64 * interval_ms
}

/// Tracks when an effect started so it can be sampled per frame and restarted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timeline {
    started_at: Option<f64>,
}

impl Timeline {
    pub fn start(&mut self, now_ms: f64) {
        self.started_at = Some(now_ms);
    }

    pub fn reset(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Milliseconds since `start`, zero if not started.
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        self.started_at
            .map(|start| (now_ms - start).max(0.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress(0.0, 2000.0, 100), 0);
        assert_eq!(progress(2000.0, 2000.0, 100), 100);
        assert_eq!(progress(5000.0, 2000.0, 100), 100);
        assert_eq!(progress(-5.0, 2000.0, 100), 0);
        assert_eq!(progress(10.0, 0.0, 7), 7);
    }

    #[test]
    fn test_progress_floors_and_is_monotonic() {
        assert_eq!(progress(1000.0, 2000.0, 5), 2);
        let mut last = 0;
        for ms in (0..=2000).step_by(16) {
            let v = progress(ms as f64, 2000.0, 3);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(progress(2000.0, 2000.0, 3), 3);
    }

    #[test]
    fn test_typed_prefix() {
        let text = "Hi, I'm ";
        assert_eq!(typed_prefix(text, 0.0, 100.0), "");
        assert_eq!(typed_prefix(text, 250.0, 100.0), "Hi");
        assert_eq!(typed_prefix(text, 10_000.0, 100.0), text);
        assert_eq!(typing_duration(text, 100.0), 800.0);
    }

    #[test]
    fn test_typed_prefix_multibyte() {
        assert_eq!(typed_prefix("héllo", 200.0, 100.0), "hé");
        assert_eq!(typed_prefix("🦀🦀", 100.0, 100.0), "🦀");
    }

    #[test]
    fn test_timeline() {
        let mut t = Timeline::default();
        assert_eq!(t.elapsed(500.0), 0.0);
        t.start(100.0);
        assert!(t.is_running());
        assert_eq!(t.elapsed(350.0), 250.0);
        t.reset();
        assert!(!t.is_running());
    }
}
