use serde::{Deserialize, Serialize};

pub const DEFAULT_NAV_BIAS: f64 = 100.0;

/// Vertical extent of one page section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Picks the section the navigation bar highlights.
///
/// A section is active when `offset + bias` lands inside it; the first match in
/// document order wins and a miss keeps the previous answer.
#[derive(Debug, Clone)]
pub struct ActiveSectionResolver {
    bias: f64,
    active: usize,
}

impl Default for ActiveSectionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_BIAS)
    }
}

impl ActiveSectionResolver {
    pub fn new(bias: f64) -> Self {
        Self { bias, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn resolve(&mut self, offset_y: f64, sections: &[SectionBounds]) -> usize {
        let line = offset_y + self.bias;
        if let Some(i) = sections.iter().position(|s| s.contains(line)) {
            self.active = i;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(0.0, 500.0),
            SectionBounds::new(500.0, 700.0),
            SectionBounds::new(1200.0, 800.0),
        ]
    }

    #[test]
    fn test_starts_at_home() {
        assert_eq!(ActiveSectionResolver::default().active(), 0);
    }

    #[test]
    fn test_bias_moves_into_next_section() {
        let mut r = ActiveSectionResolver::new(100.0);
        assert_eq!(r.resolve(450.0, &layout()), 1);
        assert_eq!(r.resolve(399.0, &layout()), 0);
        assert_eq!(r.resolve(400.0, &layout()), 1);
    }

    #[test]
    fn test_gap_retains_previous() {
        let sections = vec![SectionBounds::new(0.0, 500.0), SectionBounds::new(800.0, 400.0)];
        let mut r = ActiveSectionResolver::new(100.0);
        assert_eq!(r.resolve(300.0, &sections), 0);
        // 550 falls in the gap
        assert_eq!(r.resolve(450.0, &sections), 0);
        assert_eq!(r.resolve(750.0, &sections), 1);
        // past the end of the page
        assert_eq!(r.resolve(5000.0, &sections), 1);
    }

    #[test]
    fn test_monotonic_scroll_never_regresses() {
        let sections = layout();
        let mut r = ActiveSectionResolver::new(100.0);
        let mut last = r.active();
        let mut y = 0.0;
        while y < 2500.0 {
            let now = r.resolve(y, &sections);
            assert!(now >= last, "regressed at {y}: {last} -> {now}");
            last = now;
            y += 7.5;
        }
        assert_eq!(last, 2);
    }

    #[test]
    fn test_empty_layout() {
        let mut r = ActiveSectionResolver::default();
        assert_eq!(r.resolve(1000.0, &[]), 0);
    }
}
