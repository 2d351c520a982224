//! Pointer position and hover tracking

/// Pointer position and hover-over-interactive flag
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
    pub hovering: bool,
}

/// Folds pointer events into a [`CursorState`]
///
/// The `interactive` arguments are ancestor-aware: the caller reports
/// whether the event target *or any of its ancestors* is an anchor, a
/// button, or an element flagged hoverable. Hover is a plain boolean,
/// not a counter; re-entering a nested hoverable while already hovering
/// is a no-op.
#[derive(Debug, Default)]
pub struct CursorTracker {
    state: CursorState,
}

impl CursorTracker {
    /// Create a tracker at the origin, not hovering
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Pointer moved to viewport coordinates (x, y)
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.state.x = x;
        self.state.y = y;
    }

    /// Pointer entered an element; `interactive` is the hover test result
    pub fn pointer_over(&mut self, interactive: bool) {
        if interactive {
            self.state.hovering = true;
        }
    }

    /// Pointer left an element toward a destination
    ///
    /// `destination_interactive` is the hover test on the element the
    /// pointer moved to. Leaving one interactive element directly for
    /// another therefore never produces an intermediate non-hovering
    /// frame.
    pub fn pointer_out(&mut self, destination_interactive: bool) {
        self.state.hovering = destination_interactive;
    }
}
