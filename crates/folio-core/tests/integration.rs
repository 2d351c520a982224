//! Integration tests across the core state machines
//!
//! These tests verify the full navigation workflow including:
//! - Route resolution before and after unrelated navigations
//! - Redirect handling for aliases and unknown paths
//! - Exit-before-enter transition ordering under rapid navigation
//! - Mobile menu / scroll-lock consistency across link activation
//! - Cursor hover continuity between interactive elements
//! - Contact form submit flow

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    ContactForm, CursorTracker, FormOutcome, HandoffError, MailHandoff, NavBar, Phase, Router,
    RouteTable, ScrollLock, TransitionController, ViewId, FADE_DURATION_MS,
};

const STEP: f64 = FADE_DURATION_MS as f64 + 10.0;

// =============================================================================
// Routing
// =============================================================================

#[test]
fn test_known_routes_stable_across_navigation() {
    let mut router = Router::new(RouteTable::fragment_mode());
    let expected = [
        ("/", ViewId::Home),
        ("/projects", ViewId::Projects),
        ("/contact", ViewId::Contact),
    ];

    for (path, view) in expected {
        assert_eq!(router.resolve(path).view(), Some(view));
    }

    // An intervening navigation must not leak state into resolution.
    router.navigate("/contact");
    for (path, view) in expected {
        assert_eq!(router.resolve(path).view(), Some(view));
    }
}

#[test]
fn test_unknown_and_alias_paths_redirect_to_root() {
    let mut router = Router::new(RouteTable::fragment_mode());

    for path in ["/home", "/blog", "/projects/42", "/home/"] {
        router.navigate(path);
        assert_eq!(router.current_path(), "/", "path {path} should commit root");
        assert_eq!(router.active_view(), Some(ViewId::Home));
    }
}

// =============================================================================
// Router + TransitionController
// =============================================================================

/// Wire a controller to the router the way the shell does: every commit
/// requests a transition to the resolved view.
fn wired(now: Rc<RefCell<f64>>) -> (Router, Rc<RefCell<TransitionController>>) {
    let mut router = Router::new(RouteTable::fragment_mode());
    let controller = Rc::new(RefCell::new(TransitionController::new()));

    let sink = controller.clone();
    router.subscribe(move |state| {
        sink.borrow_mut().request(state.active_view, *now.borrow());
    });
    (router, controller)
}

#[test]
fn test_navigation_drives_exit_then_enter() {
    let now = Rc::new(RefCell::new(0.0));
    let (mut router, controller) = wired(now.clone());

    router.navigate("/");
    controller.borrow_mut().tick(STEP);
    *now.borrow_mut() = STEP;

    router.navigate("/projects");
    assert_eq!(controller.borrow().phase(), Phase::Exiting);
    assert_eq!(controller.borrow().exiting(), Some(ViewId::Home));

    controller.borrow_mut().tick(STEP * 2.0);
    assert_eq!(controller.borrow().phase(), Phase::Entering);
    assert_eq!(controller.borrow().mounted(), Some(ViewId::Projects));

    controller.borrow_mut().tick(STEP * 3.0);
    assert_eq!(controller.borrow().phase(), Phase::Idle);
}

#[test]
fn test_rapid_double_navigation_supersedes_middle_target() {
    let now = Rc::new(RefCell::new(0.0));
    let (mut router, controller) = wired(now.clone());

    router.navigate("/");
    controller.borrow_mut().tick(STEP);
    *now.borrow_mut() = STEP;

    // A -> B -> C before B's exit phase completes.
    router.navigate("/projects");
    *now.borrow_mut() = STEP + 20.0;
    router.navigate("/contact");

    let mut entered = Vec::new();
    let mut clock = STEP;
    for _ in 0..6 {
        clock += STEP;
        controller.borrow_mut().tick(clock);
        if let Some(view) = controller.borrow().entering() {
            entered.push(view);
        }
    }

    // The middle target's enter never started, let alone completed.
    assert!(!entered.contains(&ViewId::Projects));
    assert_eq!(controller.borrow().mounted(), Some(ViewId::Contact));
    assert_eq!(controller.borrow().phase(), Phase::Idle);
    assert_eq!(router.active_view(), Some(ViewId::Contact));
}

// =============================================================================
// Browser history round trip
// =============================================================================

/// Minimal address-bar stand-in: commits push entries, back pops one
/// and syncs the router, as the shell's popstate handler does.
struct FakeHistory {
    entries: Vec<String>,
}

impl FakeHistory {
    fn new() -> Self {
        Self { entries: vec!["/".to_string()] }
    }

    fn push(&mut self, path: &str) {
        if self.entries.last().map(String::as_str) != Some(path) {
            self.entries.push(path.to_string());
        }
    }

    fn back(&mut self) -> Option<String> {
        if self.entries.len() > 1 {
            self.entries.pop();
        }
        self.entries.last().cloned()
    }
}

#[test]
fn test_browser_back_restores_previous_view() {
    let mut router = Router::new(RouteTable::fragment_mode());
    let history = Rc::new(RefCell::new(FakeHistory::new()));

    let sink = history.clone();
    router.subscribe(move |state| sink.borrow_mut().push(&state.current_path));

    router.navigate("/projects");
    router.navigate("/contact");
    assert_eq!(router.active_view(), Some(ViewId::Contact));

    let restored = history.borrow_mut().back().unwrap();
    router.sync(&restored);

    assert_eq!(router.current_path(), "/projects");
    assert_eq!(router.active_view(), Some(ViewId::Projects));
}

// =============================================================================
// Mobile menu + scroll lock
// =============================================================================

#[test]
fn test_menu_navigation_leaves_no_stale_lock() {
    let mut router = Router::new(RouteTable::fragment_mode());
    let mut bar = NavBar::new();
    let mut lock = ScrollLock::new();

    bar.toggle_menu(&mut lock);
    assert!(lock.is_locked());

    // Close-before-navigate ordering.
    bar.menu_link_activated(&mut lock);
    router.navigate("/projects");
    assert!(!bar.menu().is_open());
    assert!(!lock.is_locked());

    // Navigate-before-close ordering must end in the same state.
    bar.toggle_menu(&mut lock);
    router.navigate("/contact");
    bar.menu_link_activated(&mut lock);
    assert!(!bar.menu().is_open());
    assert!(!lock.is_locked());
    assert_eq!(router.active_view(), Some(ViewId::Contact));
}

// =============================================================================
// Cursor
// =============================================================================

#[test]
fn test_hover_continuity_between_interactive_elements() {
    let mut tracker = CursorTracker::new();

    tracker.pointer_move(10.0, 10.0);
    tracker.pointer_over(true);
    assert!(tracker.state().hovering);

    // Anchor -> button with the usual out/over event pair.
    tracker.pointer_out(true);
    assert!(tracker.state().hovering, "no intermediate non-hover frame");
    tracker.pointer_over(true);
    assert!(tracker.state().hovering);

    // Button -> plain text.
    tracker.pointer_out(false);
    tracker.pointer_over(false);
    assert!(!tracker.state().hovering);
}

#[test]
fn test_navigation_works_without_cursor_events() {
    // A tracker nobody feeds (pointer APIs unavailable) must not
    // affect routing or the form.
    let tracker = CursorTracker::new();
    let mut router = Router::new(RouteTable::fragment_mode());

    router.navigate("/contact");
    assert_eq!(router.active_view(), Some(ViewId::Contact));
    assert!(!tracker.state().hovering);

    let mut form = ContactForm::new();
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("Hi");
    let mut handoff = CountingHandoff::default();
    assert!(form.submit(&mut handoff));
    assert_eq!(handoff.count, 1);
}

// =============================================================================
// Contact form
// =============================================================================

#[derive(Default)]
struct CountingHandoff {
    count: usize,
}

impl MailHandoff for CountingHandoff {
    fn open(&mut self, _url: &str) -> Result<(), HandoffError> {
        self.count += 1;
        Ok(())
    }
}

#[test]
fn test_contact_submit_full_flow() {
    let mut form = ContactForm::new();
    let mut handoff = CountingHandoff::default();

    // Empty submits never leave editing.
    assert!(!form.submit(&mut handoff));
    assert_eq!(handoff.count, 0);

    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("Let's build something.");
    assert!(form.submit(&mut handoff));

    assert_eq!(handoff.count, 1);
    assert_eq!(form.outcome(), FormOutcome::Success);
    assert!(form.name().is_empty() && form.email().is_empty() && form.message().is_empty());
}
