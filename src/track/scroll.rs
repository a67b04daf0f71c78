use serde::{Deserialize, Serialize};

pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollSnapshot {
    pub offset_y: f64,
    pub scrolled_past_threshold: bool,
}

impl ScrollSnapshot {
    pub fn at(offset_y: f64, threshold: f64) -> Self {
        Self {
            offset_y,
            scrolled_past_threshold: offset_y > threshold,
        }
    }
}

/// Coalesces raw scroll events into at most one snapshot per animation frame.
///
/// The caller schedules a frame when [`on_scroll`](Self::on_scroll) says so and
/// reports the scroll position from inside that frame via
/// [`on_frame`](Self::on_frame). Events arriving while a frame is pending are
/// dropped; the frame reads the latest position anyway.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    ticking: bool,
    snapshot: ScrollSnapshot,
    commits: u64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ticking: false,
            snapshot: ScrollSnapshot::at(0.0, threshold),
            commits: 0,
        }
    }

    /// Seeds the snapshot without counting as a frame update.
    pub fn with_initial_offset(mut self, offset_y: f64) -> Self {
        self.snapshot = ScrollSnapshot::at(offset_y, self.threshold);
        self
    }

    /// Returns true when the caller must request an animation frame.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Commits the frame's reading. `None` if no frame was pending.
    pub fn on_frame(&mut self, offset_y: f64) -> Option<ScrollSnapshot> {
        if !self.ticking {
            return None;
        }
        self.snapshot = ScrollSnapshot::at(offset_y, self.threshold);
        self.commits += 1;
        self.ticking = false;
        Some(self.snapshot)
    }

    /// Drops a pending frame, e.g. when the listener is detached mid-frame.
    pub fn cancel_frame(&mut self) {
        self.ticking = false;
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of snapshots committed so far.
    pub fn commits(&self) -> u64 {
        self.commits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let t = ScrollTracker::default();
        assert_eq!(
            t.snapshot(),
            ScrollSnapshot {
                offset_y: 0.0,
                scrolled_past_threshold: false
            }
        );
        assert_eq!(t.commits(), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!ScrollSnapshot::at(50.0, 50.0).scrolled_past_threshold);
        assert!(ScrollSnapshot::at(50.5, 50.0).scrolled_past_threshold);
        assert!(!ScrollSnapshot::at(0.0, 50.0).scrolled_past_threshold);
    }

    #[test]
    fn test_burst_coalesces_to_one_update() {
        let mut t = ScrollTracker::default();
        let scheduled = (0..10).filter(|_| t.on_scroll()).count();
        assert_eq!(scheduled, 1);

        let snap = t.on_frame(120.0);
        assert_eq!(
            snap,
            Some(ScrollSnapshot {
                offset_y: 120.0,
                scrolled_past_threshold: true
            })
        );
        assert_eq!(t.commits(), 1);
        // a stray frame with nothing pending commits nothing
        assert_eq!(t.on_frame(300.0), None);
        assert_eq!(t.snapshot().offset_y, 120.0);
    }

    #[test]
    fn test_teardown_mid_frame_commits_nothing() {
        let mut t = ScrollTracker::new(50.0).with_initial_offset(400.0);
        assert!(t.on_scroll());
        t.cancel_frame();
        assert_eq!(t.on_frame(900.0), None);
        assert_eq!(t.commits(), 0);
        assert_eq!(t.snapshot().offset_y, 400.0);
    }

    #[test]
    fn test_next_burst_schedules_again() {
        let mut t = ScrollTracker::default();
        assert!(t.on_scroll());
        t.on_frame(10.0);
        assert!(t.on_scroll());
        assert!(!t.on_scroll());
        t.cancel_frame();
        assert!(!t.is_ticking());
        assert!(t.on_scroll());
    }
}
