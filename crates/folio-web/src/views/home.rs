//! Home / hero view

use std::cell::RefCell;

use folio_core::content::{HERO_DESCRIPTION, HERO_NAME};
use folio_core::Rotation;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom;

/// Hero content plus the rotating subtitle state
pub struct HomeDom {
    root: Element,
    subtitle: Element,
    rotation: RefCell<Rotation>,
}

impl HomeDom {
    /// Build the hero content inside `parent`
    pub fn build(document: &Document, parent: &Element, now_ms: f64) -> Result<Self, JsValue> {
        let root = dom::el(document, "div", "view home")?;

        let title = dom::el(document, "h1", "hero-title")?;
        title.set_text_content(Some("Hi, I'm "));
        let name = dom::el_text(document, "span", "glitch", HERO_NAME)?;
        name.set_attribute("data-text", HERO_NAME)?;
        title.append_child(&name)?;
        root.append_child(&title)?;

        let rotation = Rotation::new(now_ms);
        let subtitle = dom::el(document, "div", "hero-subtitle")?;
        subtitle.set_text_content(Some(rotation.current()));
        root.append_child(&subtitle)?;

        root.append_child(&dom::el(document, "div", "glow-line")?.into())?;

        let description = dom::el_text(document, "p", "view-description", HERO_DESCRIPTION)?;
        root.append_child(&description)?;

        parent.append_child(&root)?;
        Ok(Self {
            root,
            subtitle,
            rotation: RefCell::new(rotation),
        })
    }

    /// Root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Advance the subtitle rotation
    pub fn tick(&self, now_ms: f64) {
        let mut rotation = self.rotation.borrow_mut();
        if rotation.tick(now_ms) {
            self.subtitle.set_text_content(Some(rotation.current()));
        }
    }
}

impl Drop for HomeDom {
    fn drop(&mut self) {
        self.root.remove();
    }
}
