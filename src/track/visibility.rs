use serde::{Deserialize, Serialize};

use super::geometry::{sample_for, IntersectionSample, Rect};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN_PX: f64 = 50.0;

/// What happens to the visible flag once an element leaves the viewport again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityPolicy {
    /// Follow every crossing, so entrance animations replay on re-entry.
    #[default]
    Toggle,
    /// Stay visible after the first entrance.
    Latch,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    Idle,
    /// Requested before the element was attached to the document.
    Pending { threshold: f64 },
    Observing { threshold: f64 },
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserveOutcome {
    /// A new observation was registered (or queued until attach).
    Registered,
    /// Same configuration is already registered; nothing changed.
    Unchanged,
    /// The previous registration was dropped for a new threshold.
    Replaced,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    threshold: f64,
    root_margin: f64,
    policy: VisibilityPolicy,
    visible: bool,
    observation: Observation,
}

impl Default for VisibilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, VisibilityPolicy::default())
    }
}

impl VisibilityTracker {
    /// `threshold` is clamped to `[0, 1]`.
    pub fn new(threshold: f64, policy: VisibilityPolicy) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            root_margin: ROOT_MARGIN_PX,
            policy,
            visible: false,
            observation: Observation::Idle,
        }
    }

    pub fn with_root_margin(mut self, root_margin: f64) -> Self {
        self.root_margin = root_margin.max(0.0);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> f64 {
        self.root_margin
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    pub fn observation(&self) -> Observation {
        self.observation
    }

    /// CSS form of the root margin, as handed to the browser observer.
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin)
    }

    /// Asks for an observation. If the element is not attached yet the request
    /// waits in `Pending` until [`attach`](Self::attach).
    pub fn request(&mut self, element_attached: bool) -> ObserveOutcome {
        self.request_with_threshold(self.threshold, element_attached)
    }

    pub fn request_with_threshold(
        &mut self,
        threshold: f64,
        element_attached: bool,
    ) -> ObserveOutcome {
        let threshold = clamp_threshold(threshold);
        let outcome = match self.observation {
            Observation::Pending { threshold: t } | Observation::Observing { threshold: t }
                if t == threshold =>
            {
                if element_attached {
                    self.observation = Observation::Observing { threshold };
                }
                return ObserveOutcome::Unchanged;
            }
            Observation::Pending { .. } | Observation::Observing { .. } => {
                ObserveOutcome::Replaced
            }
            Observation::Idle | Observation::Disconnected => ObserveOutcome::Registered,
        };
        self.threshold = threshold;
        self.observation = if element_attached {
            Observation::Observing { threshold }
        } else {
            Observation::Pending { threshold }
        };
        outcome
    }

    /// The element reached the document. Returns true when a pending request
    /// became an active observation.
    pub fn attach(&mut self) -> bool {
        match self.observation {
            Observation::Pending { threshold } => {
                self.observation = Observation::Observing { threshold };
                true
            }
            _ => false,
        }
    }

    /// Feeds a reading delivered by the browser observer. The observer only
    /// reports once it is watching a node in the document, so a pending request
    /// is promoted first. A disconnected tracker stays silent.
    pub fn on_entry(&mut self, sample: IntersectionSample) -> Option<bool> {
        if self.attach() {
            log::debug!("observing element at threshold {}", self.threshold);
        }
        self.apply(sample)
    }

    /// Tears the observation down. Safe to call any number of times.
    pub fn disconnect(&mut self) {
        self.observation = Observation::Disconnected;
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.observation, Observation::Observing { .. })
    }

    /// Feeds one observer reading. Returns the new flag only when it changed.
    pub fn apply(&mut self, sample: IntersectionSample) -> Option<bool> {
        if !self.is_observing() {
            return None;
        }
        let in_view = sample.is_intersecting && sample.ratio >= self.threshold;
        let next = match self.policy {
            VisibilityPolicy::Toggle => in_view,
            VisibilityPolicy::Latch => self.visible || in_view,
        };
        if next == self.visible {
            return None;
        }
        self.visible = next;
        Some(next)
    }

    /// Computes the reading from layout boxes, then applies it.
    pub fn apply_layout(&mut self, element: &Rect, viewport: &Rect) -> Option<bool> {
        let sample = sample_for(element, viewport, self.root_margin);
        self.apply(sample)
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observing(policy: VisibilityPolicy) -> VisibilityTracker {
        let mut t = VisibilityTracker::new(DEFAULT_THRESHOLD, policy);
        t.request(true);
        t
    }

    #[test]
    fn test_never_in_view_stays_hidden() {
        let mut t = observing(VisibilityPolicy::Toggle);
        let viewport = Rect::band(0.0, 700.0, 1200.0);
        let element = Rect::band(3000.0, 300.0, 1200.0);
        for scroll in (0..2000).step_by(100) {
            let vp = Rect::band(scroll as f64, viewport.height, viewport.width);
            assert_eq!(t.apply_layout(&element, &vp), None);
        }
        assert!(!t.is_visible());
    }

    #[test]
    fn test_section_becomes_visible_at_ten_percent() {
        // element [800, 1100), viewport height 700, margin 50
        let mut t = observing(VisibilityPolicy::Toggle);
        let element = Rect::band(800.0, 300.0, 1200.0);

        // root bottom = 0 + 700 + 50 = 750, no overlap
        let vp = Rect::band(0.0, 700.0, 1200.0);
        assert_eq!(t.apply_layout(&element, &vp), None);

        // root bottom = 820 → 20px overlap, ratio 0.0667
        let vp = Rect::band(70.0, 700.0, 1200.0);
        assert_eq!(t.apply_layout(&element, &vp), None);

        // root bottom = 830 → 30px overlap, ratio exactly 0.1
        let vp = Rect::band(80.0, 700.0, 1200.0);
        assert_eq!(t.apply_layout(&element, &vp), Some(true));
        assert!(t.is_visible());
    }

    #[test]
    fn test_toggle_and_latch_on_exit() {
        let exit = IntersectionSample::new(false, 0.0);
        let enter = IntersectionSample::new(true, 0.5);

        let mut toggle = observing(VisibilityPolicy::Toggle);
        assert_eq!(toggle.apply(enter), Some(true));
        assert_eq!(toggle.apply(exit), Some(false));
        assert_eq!(toggle.apply(enter), Some(true));

        let mut latch = observing(VisibilityPolicy::Latch);
        assert_eq!(latch.apply(enter), Some(true));
        assert_eq!(latch.apply(exit), None);
        assert!(latch.is_visible());
    }

    #[test]
    fn test_intersecting_below_threshold_is_hidden() {
        let mut t = observing(VisibilityPolicy::Toggle);
        assert_eq!(t.apply(IntersectionSample::new(true, 0.05)), None);
        assert!(!t.is_visible());
    }

    #[test]
    fn test_pending_until_attached() {
        let mut t = VisibilityTracker::default();
        assert_eq!(t.request(false), ObserveOutcome::Registered);
        assert!(matches!(t.observation(), Observation::Pending { .. }));
        assert_eq!(t.apply(IntersectionSample::new(true, 1.0)), None);
        assert!(!t.is_visible());

        assert!(t.attach());
        assert!(!t.attach());
        assert_eq!(t.apply(IntersectionSample::new(true, 1.0)), Some(true));
    }

    #[test]
    fn test_first_entry_attaches_pending_request() {
        let mut t = VisibilityTracker::default();
        t.request(false);
        assert_eq!(t.on_entry(IntersectionSample::new(true, 0.5)), Some(true));
        assert!(t.is_observing());

        t.disconnect();
        assert_eq!(t.on_entry(IntersectionSample::new(false, 0.0)), None);
        assert_eq!(t.observation(), Observation::Disconnected);
        assert!(t.is_visible());
    }

    #[test]
    fn test_no_duplicate_registration() {
        let mut t = VisibilityTracker::default();
        assert_eq!(t.request(true), ObserveOutcome::Registered);
        assert_eq!(t.request(true), ObserveOutcome::Unchanged);
        assert_eq!(t.request_with_threshold(0.5, true), ObserveOutcome::Replaced);
        assert_eq!(t.threshold(), 0.5);
    }

    #[test]
    fn test_disconnect_idempotent_and_silences_updates() {
        let mut t = observing(VisibilityPolicy::Toggle);
        t.disconnect();
        t.disconnect();
        assert_eq!(t.observation(), Observation::Disconnected);
        assert_eq!(t.apply(IntersectionSample::new(true, 1.0)), None);
        assert!(!t.is_visible());
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(VisibilityTracker::new(2.0, VisibilityPolicy::Latch).threshold(), 1.0);
        assert_eq!(VisibilityTracker::new(-1.0, VisibilityPolicy::Latch).threshold(), 0.0);
        assert_eq!(VisibilityTracker::default().root_margin_css(), "50px");
    }
}
