//! View transition state machines
//!
//! A view change is sequenced as an exit fade followed by an enter
//! fade; the controller guarantees at most one view exiting and one
//! entering at any time.

mod controller;
mod easing;
mod fade;

pub use controller::{Phase, TransitionController};
pub use easing::ease_in_out;
pub use fade::{Fade, FadeDirection};

/// Duration of a single view fade (enter or exit), in milliseconds
pub const FADE_DURATION_MS: u32 = 500;
