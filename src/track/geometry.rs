use serde::{Deserialize, Serialize};

/// Axis-aligned box in page or viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Vertical band spanning the full width, handy for section layouts.
    pub fn band(top: f64, height: f64, width: f64) -> Self {
        Self::new(0.0, top, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grows the box by `margin` on every side, like a CSS `rootMargin`.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    /// Overlap of two boxes, `None` when they do not touch.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// One intersection reading for a tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn new(is_intersecting: bool, ratio: f64) -> Self {
        Self {
            is_intersecting,
            ratio: ratio.clamp(0.0, 1.0),
        }
    }
}

/// Fraction of `element` inside `viewport` after growing the viewport by
/// `root_margin`. Zero-area elements count as fully inside when they touch the
/// root, matching the browser.
pub fn intersection_ratio(element: &Rect, viewport: &Rect, root_margin: f64) -> f64 {
    let root = viewport.expand(root_margin);
    let Some(overlap) = element.intersection(&root) else {
        return 0.0;
    };
    let area = element.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// Builds the sample an intersection observer would report for this layout.
pub fn sample_for(element: &Rect, viewport: &Rect, root_margin: f64) -> IntersectionSample {
    let root = viewport.expand(root_margin);
    let is_intersecting = element.intersection(&root).is_some();
    IntersectionSample::new(
        is_intersecting,
        intersection_ratio(element, viewport, root_margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 5.0, 5.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_ratio_partial_with_margin() {
        // viewport covers [0, 700), margin pushes the root to [-50, 750)
        let viewport = Rect::band(0.0, 700.0, 1200.0);
        let element = Rect::band(700.0, 300.0, 1200.0);
        let ratio = intersection_ratio(&element, &viewport, 50.0);
        assert!((ratio - 50.0 / 300.0).abs() < 1e-9);

        let ratio = intersection_ratio(&element, &viewport, 0.0);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_ratio_fully_inside() {
        let viewport = Rect::band(0.0, 800.0, 1000.0);
        let element = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(intersection_ratio(&element, &viewport, 50.0), 1.0);
    }

    #[test]
    fn test_zero_area_element() {
        let viewport = Rect::band(0.0, 800.0, 1000.0);
        let inside = Rect::new(10.0, 10.0, 0.0, 0.0);
        let outside = Rect::new(10.0, 2000.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&inside, &viewport, 0.0), 1.0);
        assert_eq!(intersection_ratio(&outside, &viewport, 0.0), 0.0);
        assert!(!sample_for(&outside, &viewport, 0.0).is_intersecting);
    }
}
