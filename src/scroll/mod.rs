//! Smooth scrolling and section snapping.
//!
//! The math lives in pure modules (`easing`, `motion`, `snap`) that take
//! explicit millisecond timestamps, so the heuristics are unit-testable
//! without a browser. `controller` is the thin web layer that wires them to
//! scroll events and `requestAnimationFrame`.

pub mod controller;
pub mod easing;
pub mod motion;
pub mod snap;

pub use controller::ScrollController;
pub use snap::SnapConfig;
