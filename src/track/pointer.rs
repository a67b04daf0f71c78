use serde::{Deserialize, Serialize};

/// Viewport-relative pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerSnapshot {
    pub x: f64,
    pub y: f64,
}

impl PointerSnapshot {
    /// Radial-gradient background that follows the pointer.
    pub fn glow_css(&self, rgba: &str, radius_px: u32) -> String {
        format!(
            "background: radial-gradient({radius_px}px circle at {:.0}px {:.0}px, {rgba}, transparent 80%);",
            self.x, self.y
        )
    }
}

/// Latest pointer position. No throttling: every move is kept.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    snapshot: PointerSnapshot,
    moves: u64,
}

impl PointerTracker {
    pub fn on_move(&mut self, x: f64, y: f64) -> PointerSnapshot {
        self.snapshot = PointerSnapshot { x, y };
        self.moves += 1;
        self.snapshot
    }

    pub fn snapshot(&self) -> PointerSnapshot {
        self.snapshot
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }
}
