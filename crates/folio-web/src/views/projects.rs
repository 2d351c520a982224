//! Projects gallery view

use folio_core::PROJECTS;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{self, EventBinding};

/// Gallery markup plus per-card hover bindings
pub struct ProjectsDom {
    root: Element,
    _bindings: Vec<EventBinding>,
}

impl ProjectsDom {
    /// Build the gallery inside `parent`
    pub fn build(document: &Document, parent: &Element) -> Result<Self, JsValue> {
        let root = dom::el(document, "div", "view projects")?;

        let title = dom::el(document, "h2", "")?;
        title.set_text_content(Some("Featured "));
        title.append_child(&dom::el_text(document, "span", "", "Projects")?.into())?;
        root.append_child(&title)?;

        let grid = dom::el(document, "div", "projects-grid")?;
        root.append_child(&grid)?;

        let mut bindings = Vec::new();
        for project in PROJECTS {
            let card = dom::el(document, "article", "project-card")?;
            card.set_attribute("data-hoverable", "")?;

            card.append_child(&dom::el_text(document, "h3", "", project.title)?.into())?;
            card.append_child(&dom::el_text(document, "p", "", project.description)?.into())?;

            let stack = dom::el(document, "div", "tech-stack")?;
            for tech in project.tech_stack {
                stack.append_child(&dom::el_text(document, "span", "tech-tag", tech)?.into())?;
            }
            card.append_child(&stack)?;

            let links = dom::el(document, "div", "project-links")?;
            links.append_child(&external_link(document, "Code", project.github_url)?.into())?;
            links.append_child(&external_link(document, "Live", project.live_url)?.into())?;
            card.append_child(&links)?;

            // Hover flag drives the lift styling on the card.
            let enter_card = card.clone();
            bindings.push(EventBinding::new(&card, "mouseenter", move |_| {
                let _ = enter_card.class_list().add_1("hovered");
            })?);
            let leave_card = card.clone();
            bindings.push(EventBinding::new(&card, "mouseleave", move |_| {
                let _ = leave_card.class_list().remove_1("hovered");
            })?);

            grid.append_child(&card)?;
        }

        parent.append_child(&root)?;
        Ok(Self {
            root,
            _bindings: bindings,
        })
    }

    /// Root element
    pub fn root(&self) -> &Element {
        &self.root
    }
}

impl Drop for ProjectsDom {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn external_link(document: &Document, label: &str, url: &str) -> Result<Element, JsValue> {
    let anchor = dom::el_text(document, "a", "", label)?;
    anchor.set_attribute("href", url)?;
    anchor.set_attribute("target", "_blank")?;
    anchor.set_attribute("rel", "noopener noreferrer")?;
    anchor.set_attribute("data-hoverable", "")?;
    Ok(anchor)
}
