//! Scroll, visibility and pointer instrumentation.
//!
//! Everything here is plain state with no DOM access, so the browser bindings in
//! `app::hooks` stay thin and the behaviour is testable natively.

pub mod geometry;
pub mod hub;
pub mod pointer;
pub mod scroll;
pub mod sections;
pub mod visibility;

pub use geometry::{IntersectionSample, Rect};
pub use hub::{Hub, Publisher, Subscription};
pub use pointer::{PointerSnapshot, PointerTracker};
pub use scroll::{ScrollSnapshot, ScrollTracker};
pub use sections::{ActiveSectionResolver, SectionBounds};
pub use visibility::{VisibilityPolicy, VisibilityTracker};
