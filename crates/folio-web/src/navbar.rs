//! Navigation bar DOM
//!
//! Renders the fixed bar, the desktop link row, and the mobile menu
//! overlay; derives per-link active styling from the committed path.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{NavBar, Router, ScrollLock, SOCIAL_LINKS};
use folio_core::content::LOGO_TEXT;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{self, EventBinding};

/// Navigation bar elements plus their click bindings
pub struct NavbarDom {
    links: Vec<(Element, &'static str)>,
    mobile_links: Vec<(Element, &'static str)>,
    menu_button: Element,
    overlay: Element,
    menu: Element,
    _bindings: Vec<EventBinding>,
}

/// Mirror the scroll-lock flag onto the page body
///
/// Called synchronously from every menu event so no stale lock can
/// outlive the event that changed the menu.
pub fn apply_scroll_lock(lock: &ScrollLock) {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let value = if lock.is_locked() { "hidden" } else { "unset" };
        let _ = body.style().set_property("overflow", value);
    }
}

impl NavbarDom {
    /// Build the bar and wire link/menu handlers
    pub fn build(
        document: &Document,
        parent: &Element,
        router: Rc<RefCell<Router>>,
        navbar: Rc<RefCell<NavBar>>,
        scroll_lock: Rc<RefCell<ScrollLock>>,
    ) -> Result<Self, JsValue> {
        let mut bindings = Vec::new();

        let nav = dom::el(document, "nav", "navbar")?;
        let container = dom::el(document, "div", "nav-container")?;
        nav.append_child(&container)?;

        // Logo: navigates home and closes the menu if it was open.
        let logo = dom::el_text(document, "a", "logo", LOGO_TEXT)?;
        logo.set_attribute("href", "#/")?;
        logo.set_attribute("data-hoverable", "")?;
        container.append_child(&logo)?;
        bindings.push(Self::menu_link_binding(
            &logo,
            "/",
            router.clone(),
            navbar.clone(),
            scroll_lock.clone(),
        )?);

        // Desktop link row.
        let link_row = dom::el(document, "div", "nav-links")?;
        container.append_child(&link_row)?;

        let mut links = Vec::new();
        {
            let navbar_ref = navbar.borrow();
            for link in navbar_ref.links() {
                let anchor = dom::el_text(document, "a", "nav-link", link.label)?;
                anchor.set_attribute("href", &format!("#{}", link.path))?;
                anchor.set_attribute("data-hoverable", "")?;
                link_row.append_child(&anchor)?;

                let path = link.path;
                let router = router.clone();
                bindings.push(EventBinding::new(&anchor, "click", move |event| {
                    event.prevent_default();
                    router.borrow_mut().navigate(path);
                })?);
                links.push((anchor, path));
            }
        }
        link_row.append_child(&Self::social_row(document)?.into())?;

        // Mobile menu button.
        let menu_button = dom::el_text(document, "button", "menu-button", "\u{2630}")?;
        menu_button.set_attribute("aria-label", "Toggle menu")?;
        container.append_child(&menu_button)?;
        {
            let navbar = navbar.clone();
            let scroll_lock = scroll_lock.clone();
            bindings.push(EventBinding::new(&menu_button, "click", move |_| {
                let mut lock = scroll_lock.borrow_mut();
                navbar.borrow_mut().toggle_menu(&mut lock);
                apply_scroll_lock(&lock);
            })?);
        }

        // Mobile overlay and menu.
        let overlay = dom::el(document, "div", "menu-overlay")?;
        let menu = dom::el(document, "div", "mobile-menu")?;

        let mut mobile_links = Vec::new();
        {
            let navbar_ref = navbar.borrow();
            for link in navbar_ref.links() {
                let anchor = dom::el_text(document, "a", "mobile-link", link.label)?;
                anchor.set_attribute("href", &format!("#{}", link.path))?;
                menu.append_child(&anchor)?;

                bindings.push(Self::menu_link_binding(
                    &anchor,
                    link.path,
                    router.clone(),
                    navbar.clone(),
                    scroll_lock.clone(),
                )?);
                mobile_links.push((anchor, link.path));
            }
        }
        menu.append_child(&Self::social_row(document)?.into())?;

        parent.append_child(&nav)?;
        parent.append_child(&overlay)?;
        parent.append_child(&menu)?;

        Ok(Self {
            links,
            mobile_links,
            menu_button,
            overlay,
            menu,
            _bindings: bindings,
        })
    }

    /// Click handler for a link that must also close the mobile menu
    /// and release the scroll lock within the same event
    fn menu_link_binding(
        anchor: &Element,
        path: &'static str,
        router: Rc<RefCell<Router>>,
        navbar: Rc<RefCell<NavBar>>,
        scroll_lock: Rc<RefCell<ScrollLock>>,
    ) -> Result<EventBinding, JsValue> {
        EventBinding::new(anchor, "click", move |event| {
            event.prevent_default();
            router.borrow_mut().navigate(path);
            let mut lock = scroll_lock.borrow_mut();
            navbar.borrow_mut().menu_link_activated(&mut lock);
            apply_scroll_lock(&lock);
        })
    }

    /// External profile links, opened in a new browsing context
    fn social_row(document: &Document) -> Result<Element, JsValue> {
        let row = dom::el(document, "div", "social-links")?;
        for social in SOCIAL_LINKS {
            let anchor = dom::el_text(document, "a", "social-link", social.label)?;
            anchor.set_attribute("href", social.url)?;
            anchor.set_attribute("target", "_blank")?;
            anchor.set_attribute("rel", "noopener noreferrer")?;
            anchor.set_attribute("data-hoverable", "")?;
            row.append_child(&anchor)?;
        }
        Ok(row)
    }

    /// Re-derive active-link styling and menu visibility
    pub fn update(&self, current_path: &str, menu_open: bool) {
        for (anchor, path) in self.links.iter().chain(&self.mobile_links) {
            let _ = anchor.class_list().toggle_with_force("active", *path == current_path);
        }
        let _ = self.overlay.class_list().toggle_with_force("open", menu_open);
        let _ = self.menu.class_list().toggle_with_force("open", menu_open);
        self.menu_button
            .set_text_content(Some(if menu_open { "\u{00d7}" } else { "\u{2630}" }));
    }
}
