//! Small DOM helpers shared by the shell modules

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Get the document, failing loudly at mount time
pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Create an element with a class
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create an element with a class and text content
pub fn el_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Cast an element to `HtmlElement` for style access
pub fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Set an inline style property, ignoring failures
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = html(element) {
        let _ = element.style().set_property(property, value);
    }
}

/// Hover test for the cursor: the event target or any ancestor is an
/// anchor, a button, or flagged `data-hoverable`
pub fn is_interactive(target: Option<EventTarget>) -> bool {
    let target = match target {
        Some(target) => target,
        None => return false,
    };
    let element: &Element = match target.dyn_ref() {
        Some(element) => element,
        None => return false,
    };
    matches!(element.closest("a, button, [data-hoverable]"), Ok(Some(_)))
}

/// An event listener bound to a target, removed again on drop
///
/// Holding the binding is what keeps the closure alive; dropping it is
/// the guaranteed-release half of the listener lifecycle.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    /// Register `handler` for `event` on `target`
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_el_applies_tag_and_class() {
        let document = document().unwrap();
        let element = el(&document, "div", "view home").unwrap();
        assert_eq!(element.tag_name(), "DIV");
        assert_eq!(element.class_name(), "view home");
    }

    #[wasm_bindgen_test]
    fn test_is_interactive_walks_ancestors() {
        let document = document().unwrap();
        let card = el(&document, "div", "project-card").unwrap();
        card.set_attribute("data-hoverable", "").unwrap();
        let inner = el_text(&document, "span", "", "Code").unwrap();
        card.append_child(&inner).unwrap();

        // The span itself is plain; its ancestor carries the flag.
        assert!(is_interactive(Some(inner.into())));

        let plain = el(&document, "p", "").unwrap();
        assert!(!is_interactive(Some(plain.into())));
        assert!(!is_interactive(None));
    }

    #[wasm_bindgen_test]
    fn test_event_binding_released_on_drop() {
        let document = document().unwrap();
        let button = el(&document, "button", "").unwrap();
        let count = Rc::new(Cell::new(0u32));

        let sink = count.clone();
        let binding = EventBinding::new(&button, "click", move |_| {
            sink.set(sink.get() + 1);
        })
        .unwrap();

        let click = Event::new("click").unwrap();
        assert!(button.dispatch_event(&click).unwrap());
        assert_eq!(count.get(), 1);

        // Dropping the binding removes the listener.
        drop(binding);
        assert!(button.dispatch_event(&click).unwrap());
        assert_eq!(count.get(), 1);
    }
}
