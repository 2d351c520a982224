//! Transition controller sequencing exit-before-enter view changes

use super::{Fade, FadeDirection};
use crate::view::ViewId;

/// Controller phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Exiting,
    Entering,
}

/// Sequences view changes as an exit fade followed by an enter fade
///
/// A request arriving mid-transition never aborts the in-flight exit;
/// it overwrites the queued target (last writer wins) and is mounted
/// when the exit completes. An intermediate target superseded before
/// its enter began is skipped entirely.
pub struct TransitionController {
    /// View currently mounted, if any
    mounted: Option<ViewId>,
    /// Fade in flight, if any
    fade: Option<Fade>,
    /// Queued target recorded while a fade is in flight
    pending: Option<Option<ViewId>>,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionController {
    /// Create an idle controller with nothing mounted
    pub fn new() -> Self {
        Self {
            mounted: None,
            fade: None,
            pending: None,
        }
    }

    /// Current phase, derived from the fade in flight
    pub fn phase(&self) -> Phase {
        match &self.fade {
            None => Phase::Idle,
            Some(fade) => match fade.direction {
                FadeDirection::Out => Phase::Exiting,
                FadeDirection::In => Phase::Entering,
            },
        }
    }

    /// The view currently mounted (entering, settled, or none)
    #[inline]
    pub fn mounted(&self) -> Option<ViewId> {
        self.mounted
    }

    /// The view whose enter fade is in flight, if any
    pub fn entering(&self) -> Option<ViewId> {
        match &self.fade {
            Some(fade) if fade.direction == FadeDirection::In => Some(fade.view),
            _ => None,
        }
    }

    /// The view whose exit fade is in flight, if any
    pub fn exiting(&self) -> Option<ViewId> {
        match &self.fade {
            Some(fade) if fade.direction == FadeDirection::Out => Some(fade.view),
            _ => None,
        }
    }

    /// The queued target, if a request arrived mid-transition
    #[inline]
    pub fn pending(&self) -> Option<Option<ViewId>> {
        self.pending
    }

    /// Check if a fade is in flight
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.fade.is_some()
    }

    /// Opacity of the mounted (or exiting) view
    pub fn opacity(&self, now_ms: f64) -> f32 {
        match &self.fade {
            Some(fade) => fade.opacity(now_ms),
            None => {
                if self.mounted.is_some() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    /// Request a change to `target` (`None` unmounts without replacement)
    pub fn request(&mut self, target: Option<ViewId>, now_ms: f64) {
        if self.is_transitioning() {
            // Last writer wins; the in-flight fade is never aborted.
            self.pending = Some(target);
            return;
        }

        if target == self.mounted {
            return;
        }

        match self.mounted {
            Some(view) => {
                self.fade = Some(Fade::fade_out(view, now_ms));
                self.pending = Some(target);
            }
            None => {
                // Nothing to exit; mount and enter directly.
                self.mounted = target;
                self.fade = target.map(|view| Fade::fade_in(view, now_ms));
            }
        }
    }

    /// Advance the in-flight fade; returns true if a fade completed
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let fade = match &self.fade {
            Some(fade) => *fade,
            None => return false,
        };
        if !fade.is_complete(now_ms) {
            return false;
        }

        match fade.direction {
            FadeDirection::Out => {
                // Exit done: mount the queued target and start its enter.
                let target = self.pending.take().unwrap_or(None);
                self.mounted = target;
                self.fade = target.map(|view| Fade::fade_in(view, now_ms));
            }
            FadeDirection::In => {
                self.fade = None;
                // A request recorded mid-enter starts its exit now.
                if let Some(target) = self.pending.take() {
                    if target != self.mounted {
                        self.request(target, now_ms);
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::FADE_DURATION_MS;

    const STEP: f64 = FADE_DURATION_MS as f64 + 10.0;

    fn settle(controller: &mut TransitionController, mut now: f64) -> f64 {
        while controller.is_transitioning() {
            now += STEP;
            controller.tick(now);
        }
        now
    }

    #[test]
    fn test_first_mount_skips_exit() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);

        assert_eq!(controller.phase(), Phase::Entering);
        assert_eq!(controller.mounted(), Some(ViewId::Home));
        assert_eq!(controller.entering(), Some(ViewId::Home));
        assert_eq!(controller.exiting(), None);
    }

    #[test]
    fn test_exit_before_enter_ordering() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);
        let now = settle(&mut controller, 0.0);

        controller.request(Some(ViewId::Projects), now);
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(controller.exiting(), Some(ViewId::Home));
        // The new view is not mounted until the exit completes.
        assert_eq!(controller.mounted(), Some(ViewId::Home));

        let now = now + STEP;
        controller.tick(now);
        assert_eq!(controller.phase(), Phase::Entering);
        assert_eq!(controller.mounted(), Some(ViewId::Projects));

        controller.tick(now + STEP);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_request_to_current_view_is_a_noop() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);
        let now = settle(&mut controller, 0.0);

        controller.request(Some(ViewId::Home), now);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_rapid_navigation_last_writer_wins() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);
        let now = settle(&mut controller, 0.0);

        // A -> B, then B -> C before the exit completes.
        controller.request(Some(ViewId::Projects), now);
        controller.request(Some(ViewId::Contact), now + 10.0);
        assert_eq!(controller.exiting(), Some(ViewId::Home));

        let now = now + STEP;
        controller.tick(now);
        // The intermediate target is skipped; its enter never started.
        assert_eq!(controller.entering(), Some(ViewId::Contact));

        let now = settle(&mut controller, now);
        let _ = now;
        assert_eq!(controller.mounted(), Some(ViewId::Contact));
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_request_mid_enter_queues_new_exit() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);
        let now = settle(&mut controller, 0.0);

        controller.request(Some(ViewId::Projects), now);
        let now = now + STEP;
        controller.tick(now);
        assert_eq!(controller.phase(), Phase::Entering);

        // New request while the enter fade is still running.
        controller.request(Some(ViewId::Contact), now + 10.0);
        assert_eq!(controller.entering(), Some(ViewId::Projects));

        let now = now + STEP;
        controller.tick(now);
        // Enter completed, queued target starts its exit.
        assert_eq!(controller.phase(), Phase::Exiting);
        assert_eq!(controller.exiting(), Some(ViewId::Projects));

        let now = settle(&mut controller, now);
        let _ = now;
        assert_eq!(controller.mounted(), Some(ViewId::Contact));
    }

    #[test]
    fn test_unmount_without_replacement() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);
        let now = settle(&mut controller, 0.0);

        controller.request(None, now);
        assert_eq!(controller.phase(), Phase::Exiting);

        let now = now + STEP;
        controller.tick(now);
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.mounted(), None);
        assert!(controller.opacity(now) < 0.001);
    }

    #[test]
    fn test_opacity_during_fades() {
        let mut controller = TransitionController::new();
        controller.request(Some(ViewId::Home), 0.0);

        // Entering: opacity climbs from zero.
        assert!(controller.opacity(0.0) < 0.1);
        let now = settle(&mut controller, 0.0);
        assert!((controller.opacity(now) - 1.0).abs() < 0.001);

        // Exiting: opacity falls back toward zero.
        controller.request(Some(ViewId::Contact), now);
        assert!(controller.opacity(now) > 0.9);
        assert!(controller.opacity(now + FADE_DURATION_MS as f64) < 0.1);
    }

    #[test]
    fn test_phase_is_always_one_of_three() {
        let mut controller = TransitionController::new();
        let mut now = 0.0;

        controller.request(Some(ViewId::Home), now);
        for _ in 0..20 {
            now += 137.0;
            controller.tick(now);
            let phase = controller.phase();
            // Entering and exiting are mutually exclusive.
            assert!(!(controller.entering().is_some() && controller.exiting().is_some()));
            match phase {
                Phase::Idle => assert!(!controller.is_transitioning()),
                Phase::Exiting => assert!(controller.exiting().is_some()),
                Phase::Entering => assert!(controller.entering().is_some()),
            }
            if now > 1000.0 && now < 1500.0 {
                controller.request(Some(ViewId::Projects), now);
            }
        }
    }
}
