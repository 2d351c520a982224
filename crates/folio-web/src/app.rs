//! App wiring: routing, transitions, and the frame loop
//!
//! Control flow per the architecture: an address change (link click or
//! browser back/forward) commits through the router; router
//! subscribers request the view transition and mirror the committed
//! path into the address bar; the frame loop drives fades, mounts the
//! resolved view when its turn comes, and re-derives navigation-bar
//! styling.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{NavBar, Router, RouteTable, ScrollLock, TransitionController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::address::Address;
use crate::cursor::CursorDom;
use crate::dom::{self, EventBinding};
use crate::navbar::NavbarDom;
use crate::views::ViewDom;
use crate::{console_log, now_ms};

/// The mounted application
pub struct App {
    router: Rc<RefCell<Router>>,
    transitions: Rc<RefCell<TransitionController>>,
    navbar: Rc<RefCell<NavBar>>,
    view_root: Element,
    view: RefCell<Option<ViewDom>>,
    navbar_dom: NavbarDom,
    cursor: Option<CursorDom>,
    _address_binding: EventBinding,
}

impl App {
    /// Mount the app into the document body
    pub fn mount(address: Address) -> Result<Rc<Self>, JsValue> {
        let document = dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let container = dom::el(&document, "div", "app-container")?;
        body.append_child(&container)?;

        let transitions = Rc::new(RefCell::new(TransitionController::new()));
        let navbar = Rc::new(RefCell::new(NavBar::new()));
        let scroll_lock = Rc::new(RefCell::new(ScrollLock::new()));
        let address = Rc::new(address);

        let table = match address.as_ref() {
            Address::Fragment => RouteTable::fragment_mode(),
            Address::Path { .. } => RouteTable::path_mode(),
        };

        let mut router = Router::with_initial_path(table, &address.read());
        {
            // Subscribers fire in this order: start the transition,
            // then mirror the committed path into the address bar.
            let transitions = transitions.clone();
            router.subscribe(move |state| {
                transitions.borrow_mut().request(state.active_view, now_ms());
            });
            let address = address.clone();
            router.subscribe(move |state| address.write(&state.current_path));
        }
        let router = Rc::new(RefCell::new(router));

        let navbar_dom = NavbarDom::build(
            &document,
            &container,
            router.clone(),
            navbar.clone(),
            scroll_lock.clone(),
        )?;

        let view_root = dom::el(&document, "main", "view-root")?;
        container.append_child(&view_root)?;

        // A cursor that cannot mount (no pointer APIs) is dropped
        // silently; navigation and the form do not depend on it.
        let cursor = match CursorDom::mount(&document) {
            Ok(cursor) => Some(cursor),
            Err(_) => {
                console_log("cursor unavailable, continuing without it");
                None
            }
        };

        // Browser-initiated address changes re-enter through sync.
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let address_binding = {
            let router = router.clone();
            let address = address.clone();
            EventBinding::new(&window, address.change_event(), move |_| {
                let path = address.read();
                router.borrow_mut().sync(&path);
            })?
        };

        // Initial view: the load-time address was resolved above;
        // request its enter and commit any redirect back to the bar.
        {
            let router = router.borrow();
            transitions
                .borrow_mut()
                .request(router.active_view(), now_ms());
            address.write(router.current_path());
        }

        Ok(Rc::new(Self {
            router,
            transitions,
            navbar,
            view_root,
            view: RefCell::new(None),
            navbar_dom,
            cursor,
            _address_binding: address_binding,
        }))
    }

    /// Programmatic navigation (same path as a link click)
    pub fn navigate(&self, path: &str) {
        self.router.borrow_mut().navigate(path);
    }

    /// The committed path
    pub fn current_path(&self) -> String {
        self.router.borrow().current_path().to_string()
    }

    /// Committed navigation state as JSON
    pub fn navigation_json(&self) -> String {
        serde_json::to_string(self.router.borrow().state()).unwrap_or_else(|_| "{}".to_string())
    }

    /// One animation frame: advance fades, sync the mounted view,
    /// restyle the bar, and ease the cursor
    pub fn tick(&self, now_ms: f64) {
        let (mounted, opacity) = {
            let mut transitions = self.transitions.borrow_mut();
            transitions.tick(now_ms);
            (transitions.mounted(), transitions.opacity(now_ms))
        };

        let rendered = self.view.borrow().as_ref().map(|view| view.id());
        if rendered != mounted {
            // Dropping the old view removes its DOM, listeners, and
            // any local form state.
            *self.view.borrow_mut() = None;
            if let Some(id) = mounted {
                let built = dom::document()
                    .and_then(|document| ViewDom::build(id, &document, &self.view_root, now_ms));
                match built {
                    Ok(view) => *self.view.borrow_mut() = Some(view),
                    Err(err) => console_log(&format!("view mount failed: {err:?}")),
                }
            }
        }

        if let Some(view) = self.view.borrow().as_ref() {
            view.set_opacity(opacity);
            view.tick(now_ms);
        }

        {
            let router = self.router.borrow();
            let menu_open = self.navbar.borrow().menu().is_open();
            self.navbar_dom.update(router.current_path(), menu_open);
        }

        if let Some(cursor) = &self.cursor {
            cursor.tick(now_ms);
        }
    }
}

/// Drive [`App::tick`] from `requestAnimationFrame`
pub fn run_frame_loop(app: Rc<App>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let starter = holder.clone();

    *starter.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        app.tick(now_ms());
        if let Some(closure) = holder.borrow().as_ref() {
            request_frame(closure);
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(closure) = starter.borrow().as_ref() {
        request_frame(closure);
    };
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
