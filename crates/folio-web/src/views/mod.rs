//! View content builders
//!
//! Each view builds its DOM subtree on mount and tears it down (with
//! its listeners and local state) when dropped. Which view is mounted
//! is the transition controller's decision, not the views'.

mod contact;
mod home;
mod projects;

use folio_core::ViewId;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

pub use contact::ContactDom;
pub use home::HomeDom;
pub use projects::ProjectsDom;

/// The mounted view's DOM and per-view state
pub enum ViewDom {
    Home(HomeDom),
    Projects(ProjectsDom),
    Contact(ContactDom),
}

impl ViewDom {
    /// Build the view for `id` inside `parent`
    pub fn build(
        id: ViewId,
        document: &Document,
        parent: &Element,
        now_ms: f64,
    ) -> Result<Self, JsValue> {
        match id {
            ViewId::Home => Ok(ViewDom::Home(HomeDom::build(document, parent, now_ms)?)),
            ViewId::Projects => Ok(ViewDom::Projects(ProjectsDom::build(document, parent)?)),
            ViewId::Contact => Ok(ViewDom::Contact(ContactDom::build(document, parent)?)),
        }
    }

    /// Which view this DOM renders
    pub fn id(&self) -> ViewId {
        match self {
            ViewDom::Home(_) => ViewId::Home,
            ViewDom::Projects(_) => ViewId::Projects,
            ViewDom::Contact(_) => ViewId::Contact,
        }
    }

    /// The view's root element
    pub fn root(&self) -> &Element {
        match self {
            ViewDom::Home(home) => home.root(),
            ViewDom::Projects(projects) => projects.root(),
            ViewDom::Contact(contact) => contact.root(),
        }
    }

    /// Apply the transition opacity
    pub fn set_opacity(&self, opacity: f32) {
        dom::set_style(self.root(), "opacity", &format!("{opacity}"));
    }

    /// Per-frame view work (only Home animates on its own)
    pub fn tick(&self, now_ms: f64) {
        if let ViewDom::Home(home) = self {
            home.tick(now_ms);
        }
    }
}
