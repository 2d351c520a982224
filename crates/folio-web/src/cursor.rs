//! Custom cursor indicators
//!
//! Owns the global pointer listeners and the two indicator elements.
//! The tracker state lives in `folio-core`; this module feeds it events
//! and eases the indicators toward it each frame. If the pointer APIs
//! are unavailable the mount fails and the app simply runs without a
//! custom cursor.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{CursorTracker, Follower};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::dom::{self, EventBinding};

/// Hover scale applied to both indicators
const HOVER_SCALE: f32 = 1.5;
/// Indicator half-sizes, for centering on the pointer
const DOT_OFFSET: f32 = 4.0;
const RING_OFFSET: f32 = 16.0;
/// Upper bound on a frame delta, so a background tab does not fling
/// the springs on resume
const MAX_FRAME_DT: f32 = 0.1;

/// Cursor DOM: two indicator elements plus the pointer listeners
pub struct CursorDom {
    dot: Element,
    ring: Element,
    tracker: Rc<RefCell<CursorTracker>>,
    dot_follower: RefCell<Follower>,
    ring_follower: RefCell<Follower>,
    last_frame_ms: Cell<f64>,
    // Dropping the bindings deregisters the global listeners.
    _bindings: Vec<EventBinding>,
}

impl CursorDom {
    /// Create the indicators and register the pointer listeners
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let dot = dom::el(document, "div", "cursor-dot")?;
        let ring = dom::el(document, "div", "cursor-ring")?;
        body.append_child(&dot)?;
        body.append_child(&ring)?;

        let tracker = Rc::new(RefCell::new(CursorTracker::new()));

        let mut bindings = Vec::new();

        let sink = tracker.clone();
        bindings.push(EventBinding::new(&window, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                sink.borrow_mut()
                    .pointer_move(event.client_x() as f32, event.client_y() as f32);
            }
        })?);

        let sink = tracker.clone();
        bindings.push(EventBinding::new(&document, "mouseover", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                sink.borrow_mut()
                    .pointer_over(dom::is_interactive(event.target()));
            }
        })?);

        let sink = tracker.clone();
        bindings.push(EventBinding::new(&document, "mouseout", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                sink.borrow_mut()
                    .pointer_out(dom::is_interactive(event.related_target()));
            }
        })?);

        Ok(Self {
            dot,
            ring,
            tracker,
            dot_follower: RefCell::new(Follower::dot()),
            ring_follower: RefCell::new(Follower::ring()),
            last_frame_ms: Cell::new(0.0),
            _bindings: bindings,
        })
    }

    /// Step the springs toward the tracked position and restyle the
    /// indicators
    pub fn tick(&self, now_ms: f64) {
        let last = self.last_frame_ms.replace(now_ms);
        if last == 0.0 {
            // First frame: snap instead of animating across the screen.
            let state = self.tracker.borrow().state();
            self.dot_follower.borrow_mut().snap_to(state.x, state.y);
            self.ring_follower.borrow_mut().snap_to(state.x, state.y);
            return;
        }
        let dt = (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT);

        let state = self.tracker.borrow().state();
        let scale = if state.hovering { HOVER_SCALE } else { 1.0 };

        let mut dot = self.dot_follower.borrow_mut();
        dot.step(state.x, state.y, dt);
        let (x, y) = dot.position();
        apply_transform(&self.dot, x - DOT_OFFSET, y - DOT_OFFSET, scale);

        let mut ring = self.ring_follower.borrow_mut();
        ring.step(state.x, state.y, dt);
        let (x, y) = ring.position();
        apply_transform(&self.ring, x - RING_OFFSET, y - RING_OFFSET, scale);
    }
}

impl Drop for CursorDom {
    fn drop(&mut self) {
        self.dot.remove();
        self.ring.remove();
    }
}

fn apply_transform(element: &Element, x: f32, y: f32, scale: f32) {
    dom::set_style(
        element,
        "transform",
        &format!("translate3d({x}px, {y}px, 0) scale({scale})"),
    );
}
