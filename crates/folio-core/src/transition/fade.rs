//! Timed opacity fade for a single view

use super::{ease_in_out, FADE_DURATION_MS};
use crate::view::ViewId;

/// Direction of a fade
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    /// View is entering (opacity 0 -> 1)
    In,
    /// View is exiting (opacity 1 -> 0)
    Out,
}

/// A running fade keyed by view identity
#[derive(Clone, Copy, Debug)]
pub struct Fade {
    /// Start time (ms timestamp)
    pub start_ms: f64,
    /// Direction of the fade
    pub direction: FadeDirection,
    /// The view being faded
    pub view: ViewId,
}

impl Fade {
    /// Start an enter fade for `view`
    pub fn fade_in(view: ViewId, start_ms: f64) -> Self {
        Self { start_ms, direction: FadeDirection::In, view }
    }

    /// Start an exit fade for `view`
    pub fn fade_out(view: ViewId, start_ms: f64) -> Self {
        Self { start_ms, direction: FadeDirection::Out, view }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / FADE_DURATION_MS as f32).clamp(0.0, 1.0)
    }

    /// Check if the fade is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Current eased opacity of the view
    pub fn opacity(&self, now_ms: f64) -> f32 {
        let t = ease_in_out(self.progress(now_ms));
        match self.direction {
            FadeDirection::In => t,
            FadeDirection::Out => 1.0 - t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_opacity() {
        let fade = Fade::fade_in(ViewId::Home, 0.0);

        assert!(fade.opacity(0.0) < 0.1);
        assert!(fade.opacity(FADE_DURATION_MS as f64) > 0.9);
    }

    #[test]
    fn test_fade_out_opacity() {
        let fade = Fade::fade_out(ViewId::Home, 0.0);

        assert!(fade.opacity(0.0) > 0.9);
        assert!(fade.opacity(FADE_DURATION_MS as f64) < 0.1);
    }

    #[test]
    fn test_fade_progress_clamps() {
        let fade = Fade::fade_in(ViewId::Projects, 100.0);

        // Before start
        assert!((fade.progress(0.0) - 0.0).abs() < 0.001);
        // Well past the end
        assert!(fade.progress(10_000.0) >= 1.0);
        assert!(fade.is_complete(10_000.0));
    }
}
