use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::track::{
    scroll::DEFAULT_SCROLL_THRESHOLD,
    sections::DEFAULT_NAV_BIAS,
    visibility::{DEFAULT_THRESHOLD, ROOT_MARGIN_PX},
    ActiveSectionResolver, ScrollTracker, VisibilityPolicy, VisibilityTracker,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("visibility threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Tuning for the scroll and visibility trackers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub visibility_threshold: f64,
    pub root_margin_px: f64,
    pub scroll_threshold_px: f64,
    /// Height of the fixed navigation bar.
    pub nav_bias_px: f64,
    pub visibility_policy: VisibilityPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_THRESHOLD,
            root_margin_px: ROOT_MARGIN_PX,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD,
            nav_bias_px: DEFAULT_NAV_BIAS,
            visibility_policy: VisibilityPolicy::default(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.visibility_threshold));
        }
        for (field, value) in [
            ("root_margin_px", self.root_margin_px),
            ("scroll_threshold_px", self.scroll_threshold_px),
            ("nav_bias_px", self.nav_bias_px),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    pub fn visibility_tracker(&self) -> VisibilityTracker {
        VisibilityTracker::new(self.visibility_threshold, self.visibility_policy)
            .with_root_margin(self.root_margin_px)
    }

    pub fn scroll_tracker(&self) -> ScrollTracker {
        ScrollTracker::new(self.scroll_threshold_px)
    }

    pub fn section_resolver(&self) -> ActiveSectionResolver {
        ActiveSectionResolver::new(self.nav_bias_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let c = TrackerConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.visibility_threshold, 0.1);
        assert_eq!(c.root_margin_px, 50.0);
        assert_eq!(c.scroll_threshold_px, 50.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let c: TrackerConfig =
            serde_json::from_str(r#"{ "nav_bias_px": 80, "visibility_policy": "latch" }"#)
                .unwrap();
        assert_eq!(c.nav_bias_px, 80.0);
        assert_eq!(c.visibility_policy, VisibilityPolicy::Latch);
        assert_eq!(c.visibility_threshold, 0.1);
    }

    #[test]
    fn test_validate_rejects() {
        let c = TrackerConfig {
            visibility_threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ThresholdOutOfRange(1.5)));

        let c = TrackerConfig {
            nav_bias_px: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Negative {
                field: "nav_bias_px",
                ..
            })
        ));
    }

    #[test]
    fn test_builds_trackers() {
        let c = TrackerConfig {
            scroll_threshold_px: 10.0,
            ..Default::default()
        };
        assert_eq!(c.scroll_tracker().threshold(), 10.0);
        assert_eq!(c.section_resolver().bias(), 100.0);
        assert_eq!(c.visibility_tracker().root_margin(), 50.0);
    }
}
