//! Custom cursor state
//!
//! The tracker folds pointer events into a position + hover flag; the
//! spring followers smooth the two visual indicators toward it. The
//! shell owns the DOM listeners and the frame loop.

mod spring;
mod tracker;

pub use spring::{Follower, Spring};
pub use tracker::{CursorState, CursorTracker};

/// Shared spring stiffness for both indicators
pub const SPRING_STIFFNESS: f32 = 200.0;
/// Shared spring mass for both indicators
pub const SPRING_MASS: f32 = 0.5;
/// Dot damping; critically damped, tracks tight
pub const DOT_DAMPING: f32 = 20.0;
/// Ring damping; underdamped, trails looser than the dot
pub const RING_DAMPING: f32 = 15.0;
